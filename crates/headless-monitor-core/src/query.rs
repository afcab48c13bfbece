//! Read-only queries against the primary monitor.

use serde::Serialize;

use crate::dpi;
use crate::screen::{Screen, ScreenResult};

/// A snapshot of the primary monitor's resolution and scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScreenMetrics {
    pub width: u32,
    pub height: u32,
    pub dpi_percent: u32,
    /// Averaged raw DPI the percentage was derived from.
    pub raw_dpi: u32,
}

impl ScreenMetrics {
    /// Returns `true` if the snapshot equals the given target values.
    ///
    /// `raw_dpi` is not compared; several raw values map to one percentage.
    pub fn matches(&self, width: u32, height: u32, dpi_percent: u32) -> bool {
        self.width == width && self.height == height && self.dpi_percent == dpi_percent
    }

    /// Serializes the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Width of the primary monitor in pixels.
pub fn primary_width(screen: &impl Screen) -> ScreenResult<u32> {
    Ok(screen.primary_rect()?.pixel_width())
}

/// Height of the primary monitor in pixels.
pub fn primary_height(screen: &impl Screen) -> ScreenResult<u32> {
    Ok(screen.primary_rect()?.pixel_height())
}

/// DPI of the primary monitor, as a scaling percentage or raw DPI.
///
/// The X and Y axis values are averaged before conversion.
pub fn primary_dpi(screen: &impl Screen, as_percent: bool) -> ScreenResult<u32> {
    let (x, y) = screen.primary_dpi()?;
    let raw = dpi::average_axes(x, y);
    Ok(if as_percent {
        dpi::raw_to_percent(raw)
    } else {
        raw
    })
}

/// Reads width, height, and DPI in one go.
///
/// The DPI is queried once, so the percentage and raw value always agree.
pub fn metrics(screen: &impl Screen) -> ScreenResult<ScreenMetrics> {
    let rect = screen.primary_rect()?;
    let raw = primary_dpi(screen, false)?;
    Ok(ScreenMetrics {
        width: rect.pixel_width(),
        height: rect.pixel_height(),
        dpi_percent: dpi::raw_to_percent(raw),
        raw_dpi: raw,
    })
}
