use clap::Args;

use headless_monitor_core::config::Config;
use headless_monitor_core::{Request, Screen, dpi, force, log_error};

use super::{banner, console};

// Target values for the primary monitor. Each value falls back to the
// `[display]` section of `config.toml`.
#[derive(Args)]
pub struct ApplyArgs {
    /// The new headless resolution pixel width
    #[arg(short, long)]
    pub width: Option<u32>,
    /// The new headless resolution pixel height
    #[arg(short = 'h', long)]
    pub height: Option<u32>,
    /// The new headless resolution DPI in percent
    #[arg(short, long)]
    pub dpi: Option<u32>,
    /// Exit on errors and after finishing without waiting for Enter
    #[arg(short, long)]
    pub close: bool,
}

/// Forces the requested resolution and scaling onto the primary monitor.
///
/// Returns the process exit code: 0 when the monitor ends up in the
/// requested state, 1 otherwise.
pub fn execute(screen: &impl Screen, args: &ApplyArgs, config: &Config) -> i32 {
    let close = args.close || config.close;
    banner::print_logo();

    console::section("Arguments");
    let request = match Request::resolve(args.width, args.height, args.dpi, &config.display) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{e} See \"headless-monitor --help\"");
            console::pause(close);
            return 1;
        }
    };
    println!("Forcing new headless primary screen resolution with following settings:");
    println!("  Width:  {} pixels", request.width);
    println!("  Height: {} pixels", request.height);
    println!("  DPI:    {}%", request.dpi_percent);

    console::section("Actions");
    let report = match force(screen, &request) {
        Ok(report) => report,
        Err(e) => {
            log_error!(
                "forcing {}x{} {}% failed: {e}",
                request.width,
                request.height,
                request.dpi_percent
            );
            eprintln!("Error: {e}");
            console::pause(close);
            return 1;
        }
    };

    if report.already_set {
        println!("Actual screen values are already set to the desired values!");
        console::pause(close);
        return 0;
    }

    println!("SetPrimaryResolution: {}", console::outcome(report.resolution_ok));
    println!("SetPrimaryDPI:        {}", console::outcome(report.dpi_ok));

    console::section("Finished");
    let requested = headless_monitor_core::ScreenMetrics {
        width: request.width,
        height: request.height,
        dpi_percent: request.dpi_percent,
        raw_dpi: dpi::percent_to_raw(request.dpi_percent),
    };
    let table = console::metrics_table(&[
        ("Requested", requested),
        ("Before", report.before),
        ("Actual", report.after),
    ]);
    println!("{table}");
    println!();

    if report.reached(&request) {
        println!("Actual screen values have been set to the desired values.");
    } else {
        println!("Actual screen values have not been set to the desired values!");
    }

    console::pause(close);
    if report.succeeded(&request) { 0 } else { 1 }
}
