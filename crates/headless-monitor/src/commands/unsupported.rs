use super::console;

/// Reports that display commands only work on Windows.
pub fn execute(close: bool) -> i32 {
    console::section("Unsupported OS Platform");
    eprintln!("Unsupported OS platform: this tool is only intended for Windows OS!");
    console::pause(close);
    1
}
