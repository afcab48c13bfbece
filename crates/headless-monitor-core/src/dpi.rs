//! Conversions between the three DPI representations Windows uses.
//!
//! - *raw*: dots per inch as reported by `GetDpiForMonitor` (96, 120, ...)
//! - *percent*: scaling relative to 96 DPI (100, 125, ...)
//! - *index*: the step number of the OS scaling ladder (0 = 100%)
//!
//! The five standard steps are table lookups so they never drift. Every
//! other value goes through integer fallbacks that round half up and
//! agree with the table at the standard points.

/// Raw DPI that Windows treats as 100% scaling.
pub const BASE_DPI: u32 = 96;

/// Raw DPI distance between two adjacent scaling steps.
const DPI_PER_STEP: u32 = 24;

/// Standard `(raw, percent)` pairs, ordered by scaling index.
pub const STANDARD_STEPS: [(u32, u32); 5] = [
    (96, 100),
    (120, 125),
    (144, 150),
    (168, 175),
    (192, 200),
];

/// Converts a raw DPI value into a scaling percentage.
pub fn raw_to_percent(raw: u32) -> u32 {
    match raw {
        96 => 100,
        120 => 125,
        144 => 150,
        168 => 175,
        192 => 200,
        _ => div_round(u64::from(raw) * 100, u64::from(BASE_DPI)),
    }
}

/// Converts a scaling percentage into a raw DPI value.
pub fn percent_to_raw(percent: u32) -> u32 {
    match percent {
        100 => 96,
        125 => 120,
        150 => 144,
        175 => 168,
        200 => 192,
        _ => div_round(u64::from(percent) * u64::from(BASE_DPI), 100),
    }
}

/// Converts a raw DPI value into its scaling index.
///
/// Values below 96 DPI saturate at index 0.
pub fn raw_to_index(raw: u32) -> u32 {
    match raw {
        96 => 0,
        120 => 1,
        144 => 2,
        168 => 3,
        192 => 4,
        _ => div_round(
            u64::from(raw.saturating_sub(BASE_DPI)),
            u64::from(DPI_PER_STEP),
        ),
    }
}

/// Converts a scaling percentage into its scaling index.
pub fn percent_to_index(percent: u32) -> u32 {
    match percent {
        100 => 0,
        125 => 1,
        150 => 2,
        175 => 3,
        200 => 4,
        _ => raw_to_index(percent_to_raw(percent)),
    }
}

/// Averages the two axis DPI values, rounding half up.
pub fn average_axes(dpi_x: u32, dpi_y: u32) -> u32 {
    div_round(u64::from(dpi_x) + u64::from(dpi_y), 2)
}

/// Integer division rounding half up, saturating at `u32::MAX`.
fn div_round(numerator: u64, denominator: u64) -> u32 {
    let q = (numerator + denominator / 2) / denominator;
    u32::try_from(q).unwrap_or(u32::MAX)
}
