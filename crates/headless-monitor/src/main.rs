// Monitor commands are only dispatched on Windows.
#![cfg_attr(not(windows), allow(dead_code))]

mod commands;

use clap::{ArgAction, Parser, Subcommand};

use commands::apply::ApplyArgs;
use headless_monitor_core::config::{self, Config};

#[derive(Parser)]
#[command(
    name = "headless-monitor",
    version,
    about = "Forces resolution and DPI scaling on a headless Windows machine",
    long_about = None,
    after_help = "Example: headless-monitor --width 1920 --height 1080 --dpi 125",
    disable_help_flag = true,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(flatten)]
    apply: ApplyArgs,
    /// Print help (-h is taken by --height)
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the primary monitor's current resolution and scaling
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create the default configuration file
    Init,
}

fn main() {
    let cli = Cli::parse();
    let config = config::load();
    headless_monitor_core::log::init(&config.logging);

    let code = match cli.command {
        Some(Commands::Init) => commands::init::execute(),
        command => run_on_primary(command, &cli.apply, &config),
    };
    std::process::exit(code);
}

/// Runs a command that talks to the primary monitor.
#[cfg(windows)]
fn run_on_primary(command: Option<Commands>, args: &ApplyArgs, config: &Config) -> i32 {
    headless_monitor_windows::dpi::enable_dpi_awareness();
    let screen = headless_monitor_windows::Win32Screen::new();

    match command {
        Some(Commands::Status { json }) => commands::status::execute(&screen, json),
        _ => commands::apply::execute(&screen, args, config),
    }
}

#[cfg(not(windows))]
fn run_on_primary(_command: Option<Commands>, args: &ApplyArgs, config: &Config) -> i32 {
    commands::unsupported::execute(args.close || config.close)
}
