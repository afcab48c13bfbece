/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `headless-monitor init` to create a starter config file
/// that users can immediately edit.
pub fn generate_config() -> String {
    format!(
        r##"# headless-monitor configuration
# Location: ~/.config/headless-monitor/config.toml

# Exit right away after finishing or on errors instead of waiting for Enter.
# Same as passing --close on the command line.
close = false

# Target values used when the command line leaves them out.
# Width and height must be given together.
[display]
# width = 1920
# height = 1080
# dpi = {dpi}

[logging]
# Enable file logging to ~/.config/headless-monitor/logs/headless-monitor.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Log size in MB above which it is moved to headless-monitor.log.1
# at startup (1 to 100).
max_file_mb = 10
"##,
        dpi = crate::mutate::DEFAULT_DPI_PERCENT
    )
}
