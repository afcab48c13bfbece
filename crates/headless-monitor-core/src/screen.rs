use std::fmt;

use crate::Rect;

/// A boxed error type for display operations.
///
/// Any error type that implements the `Error` trait can be boxed into this,
/// which lets the platform crate surface `windows::core::Error` values and
/// plain message strings through the same channel.
pub type ScreenResult<T> = Result<T, Box<dyn std::error::Error>>;

/// A display mode read from a device, editable before being applied back.
pub trait DisplayMode {
    /// Horizontal resolution in pixels.
    fn width(&self) -> u32;

    /// Vertical resolution in pixels.
    fn height(&self) -> u32;

    /// Overwrites the resolution, leaving every other field untouched.
    fn set_size(&mut self, width: u32, height: u32);
}

/// Platform-agnostic access to the primary monitor.
///
/// Each platform crate (e.g. `headless-monitor-windows`) provides its own
/// implementation. Query and mutation logic in this crate only ever talks
/// to the OS through this trait.
pub trait Screen {
    /// The device mode type returned by [`Screen::current_mode`].
    type Mode: DisplayMode;

    /// Returns the display rectangle of the primary monitor.
    fn primary_rect(&self) -> ScreenResult<Rect>;

    /// Returns the effective `(x, y)` DPI of the primary monitor.
    fn primary_dpi(&self) -> ScreenResult<(u32, u32)>;

    /// Returns the device name of the primary display adapter output.
    fn primary_device(&self) -> ScreenResult<String>;

    /// Reads the current mode of the given display device.
    fn current_mode(&self, device: &str) -> ScreenResult<Self::Mode>;

    /// Applies a mode to the given device and persists it.
    fn apply_mode(&self, device: &str, mode: &Self::Mode) -> ChangeStatus;

    /// Applies one step of the OS scaling ladder.
    ///
    /// `index` is relative to the system's recommended scaling, in the
    /// range `-4..=4`. Returns whether the OS accepted the call.
    fn apply_scaling_step(&self, index: i32) -> bool;
}

/// Result of a display mode change, mirroring the `DISP_CHANGE_*` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStatus {
    Successful,
    Restart,
    Failed,
    BadMode,
    NotUpdated,
    BadFlags,
    BadParam,
    BadDualView,
    Unknown(i32),
}

impl ChangeStatus {
    /// Maps a raw `DISP_CHANGE_*` value to a status.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Successful,
            1 => Self::Restart,
            -1 => Self::Failed,
            -2 => Self::BadMode,
            -3 => Self::NotUpdated,
            -4 => Self::BadFlags,
            -5 => Self::BadParam,
            -6 => Self::BadDualView,
            other => Self::Unknown(other),
        }
    }

    /// Only an immediate, fully applied change counts as success.
    pub fn is_successful(self) -> bool {
        self == Self::Successful
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Successful => f.write_str("successful"),
            Self::Restart => f.write_str("restart required"),
            Self::Failed => f.write_str("driver failed the mode"),
            Self::BadMode => f.write_str("mode not supported"),
            Self::NotUpdated => f.write_str("registry not updated"),
            Self::BadFlags => f.write_str("invalid flags"),
            Self::BadParam => f.write_str("invalid parameter"),
            Self::BadDualView => f.write_str("dual view conflict"),
            Self::Unknown(code) => write!(f, "unknown status {code}"),
        }
    }
}
