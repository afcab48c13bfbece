use headless_monitor_core::{Screen, query};

use super::console;

pub fn execute(screen: &impl Screen, json: bool) -> i32 {
    let metrics = match query::metrics(screen) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: could not query the primary monitor: {e}");
            return 1;
        }
    };

    if json {
        return match metrics.to_json() {
            Ok(json) => {
                println!("{json}");
                0
            }
            Err(e) => {
                eprintln!("Error: could not serialize monitor state: {e}");
                1
            }
        };
    }

    println!("{}", console::metrics_table(&[("Primary", metrics)]));
    println!("\nRaw DPI: {}", metrics.raw_dpi);
    0
}
