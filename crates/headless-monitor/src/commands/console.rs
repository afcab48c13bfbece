use std::io::{self, BufRead, Write};

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use headless_monitor_core::ScreenMetrics;

/// ANSI escape helpers for console output.
pub const OK: &str = "\x1b[32msucceeded\x1b[0m";
pub const FAIL: &str = "\x1b[31mfailed\x1b[0m";

/// Prints a green section header such as `── Actions ──`.
pub fn section(title: &str) {
    println!();
    println!("\x1b[32m── {title} ──\x1b[0m");
    println!();
}

/// Returns the coloured outcome label for a setter result.
pub fn outcome(ok: bool) -> &'static str {
    if ok { OK } else { FAIL }
}

/// Waits for Enter so a console opened by double-click stays visible.
///
/// Skipped when `close` is set. Returns at once if stdin is closed.
pub fn pause(close: bool) {
    if close {
        return;
    }
    println!();
    print!("\x1b[33mPress Enter to exit\x1b[0m");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}

/// Builds a table with one row per labelled snapshot.
pub fn metrics_table(rows: &[(&str, ScreenMetrics)]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new(""),
            Cell::new("Width").set_alignment(CellAlignment::Right),
            Cell::new("Height").set_alignment(CellAlignment::Right),
            Cell::new("DPI").set_alignment(CellAlignment::Right),
        ]);

    for (label, m) in rows {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format!("{} px", m.width)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{} px", m.height)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{}%", m.dpi_percent)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
