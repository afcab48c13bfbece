use headless_monitor_core::config;

/// Creates the default configuration file at `~/.config/headless-monitor/`.
///
/// An existing `config.toml` is never overwritten.
pub fn execute() -> i32 {
    let Some(dir) = config::config_dir() else {
        eprintln!("Error: could not determine home directory.");
        return 1;
    };

    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Error: could not create {}: {e}", dir.display());
        return 1;
    }

    let path = dir.join("config.toml");
    if path.exists() {
        println!("Already exists: {}", path.display());
        return 0;
    }

    match std::fs::write(&path, config::template::generate_config()) {
        Ok(()) => {
            println!("Created {}", path.display());
            println!("\nSet [display] width, height and dpi to run without arguments.");
            0
        }
        Err(e) => {
            eprintln!("Error: could not write {}: {e}", path.display());
            1
        }
    }
}
