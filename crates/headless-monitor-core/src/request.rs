use crate::config::DisplayDefaults;

/// A fully specified target state for the primary monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub width: u32,
    pub height: u32,
    pub dpi_percent: u32,
}

impl Request {
    /// Merges command-line values with configured defaults.
    ///
    /// Command-line values win field by field. Width and height must be
    /// given together, and a DPI value is always required.
    pub fn resolve(
        width: Option<u32>,
        height: Option<u32>,
        dpi: Option<u32>,
        defaults: &DisplayDefaults,
    ) -> Result<Self, String> {
        let width = width.or(defaults.width);
        let height = height.or(defaults.height);
        let dpi = dpi.or(defaults.dpi);

        match (width, height, dpi) {
            (None, None, None) => Err("No arguments given!".into()),
            (None, Some(_), _) => Err("Width argument missing!".into()),
            (Some(_), None, _) => Err("Height argument missing!".into()),
            (_, _, None) => Err("DPI argument missing!".into()),
            (None, None, Some(_)) => Err("Width and height arguments missing!".into()),
            (Some(width), Some(height), Some(dpi_percent)) => Ok(Self {
                width,
                height,
                dpi_percent,
            }),
        }
    }
}
