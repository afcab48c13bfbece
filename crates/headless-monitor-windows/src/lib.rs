#![cfg(windows)]

/// Process DPI awareness.
pub mod dpi;

/// `Screen` implementation over Win32 display APIs.
pub mod screen;

pub use screen::Win32Screen;
