use std::mem;

use headless_monitor_core::{ChangeStatus, DisplayMode, Rect, Screen, ScreenResult};
use windows::Win32::Graphics::Gdi::{
    CDS_UPDATEREGISTRY, ChangeDisplaySettingsExW, DEVMODEW, DISPLAY_DEVICE_PRIMARY_DEVICE,
    DISPLAY_DEVICEW, DM_PELSHEIGHT, DM_PELSWIDTH, ENUM_CURRENT_SETTINGS, EnumDisplayDevicesW,
    EnumDisplaySettingsW, GetMonitorInfoW, HMONITOR, MONITOR_DEFAULTTOPRIMARY, MONITORINFO,
    MonitorFromWindow,
};
use windows::Win32::UI::HiDpi::{GetDpiForMonitor, MDT_EFFECTIVE_DPI};
use windows::Win32::UI::WindowsAndMessaging::{
    GetShellWindow, SPIF_UPDATEINIFILE, SYSTEM_PARAMETERS_INFO_ACTION, SystemParametersInfoW,
};
use windows::core::PCWSTR;

/// Undocumented action behind the Settings app's "Scale" drop-down.
///
/// `uiParam` is a signed step relative to the recommended scaling for the
/// monitor, passed through as its two's-complement `u32` value.
const SPI_SETLOGICALDPIOVERRIDE: SYSTEM_PARAMETERS_INFO_ACTION =
    SYSTEM_PARAMETERS_INFO_ACTION(0x009F);

/// The primary monitor, accessed through Win32.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Screen;

impl Win32Screen {
    pub fn new() -> Self {
        Self
    }
}

/// A `DEVMODEW` read from a display device.
#[derive(Clone, Copy)]
pub struct Win32Mode(DEVMODEW);

impl DisplayMode for Win32Mode {
    fn width(&self) -> u32 {
        self.0.dmPelsWidth
    }

    fn height(&self) -> u32 {
        self.0.dmPelsHeight
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.0.dmPelsWidth = width;
        self.0.dmPelsHeight = height;
        self.0.dmFields |= DM_PELSWIDTH | DM_PELSHEIGHT;
    }
}

impl Screen for Win32Screen {
    type Mode = Win32Mode;

    fn primary_rect(&self) -> ScreenResult<Rect> {
        let mut info = MONITORINFO {
            cbSize: mem::size_of::<MONITORINFO>() as u32,
            ..Default::default()
        };

        // SAFETY: GetMonitorInfoW fills the MONITORINFO struct with
        // monitor dimensions. We set cbSize as required by the API.
        let success = unsafe { GetMonitorInfoW(primary_monitor(), &mut info) };

        if !success.as_bool() {
            return Err("Failed to get primary monitor info".into());
        }

        let rc = info.rcMonitor;
        Ok(Rect::from_edges(rc.left, rc.top, rc.right, rc.bottom))
    }

    fn primary_dpi(&self) -> ScreenResult<(u32, u32)> {
        let mut dpi_x = 0;
        let mut dpi_y = 0;
        // SAFETY: both out-pointers refer to live locals.
        unsafe { GetDpiForMonitor(primary_monitor(), MDT_EFFECTIVE_DPI, &mut dpi_x, &mut dpi_y)? };
        Ok((dpi_x, dpi_y))
    }

    fn primary_device(&self) -> ScreenResult<String> {
        let mut first = None;
        for index in 0.. {
            let Some(device) = display_device(index) else {
                break;
            };
            let name = wide_to_string(&device.DeviceName);
            if device.StateFlags & DISPLAY_DEVICE_PRIMARY_DEVICE != 0 {
                return Ok(name);
            }
            first.get_or_insert(name);
        }
        // Some virtual adapters never set the primary flag.
        first.ok_or_else(|| "No display device found".into())
    }

    fn current_mode(&self, device: &str) -> ScreenResult<Win32Mode> {
        let name = to_wide(device);
        let mut mode = DEVMODEW {
            dmSize: mem::size_of::<DEVMODEW>() as u16,
            ..Default::default()
        };

        // SAFETY: `name` is NUL-terminated and outlives the call; dmSize
        // is set as required.
        let ok =
            unsafe { EnumDisplaySettingsW(PCWSTR(name.as_ptr()), ENUM_CURRENT_SETTINGS, &mut mode) };

        if !ok.as_bool() {
            return Err(format!("Failed to read display mode of {device}").into());
        }
        Ok(Win32Mode(mode))
    }

    fn apply_mode(&self, device: &str, mode: &Win32Mode) -> ChangeStatus {
        let name = to_wide(device);
        // SAFETY: `name` and `mode` outlive the call. CDS_UPDATEREGISTRY
        // applies the mode now and stores it in the user profile.
        let result = unsafe {
            ChangeDisplaySettingsExW(
                PCWSTR(name.as_ptr()),
                Some(&mode.0),
                None,
                CDS_UPDATEREGISTRY,
                None,
            )
        };
        ChangeStatus::from_code(result.0)
    }

    fn apply_scaling_step(&self, index: i32) -> bool {
        // SAFETY: this action takes no pointer argument.
        unsafe {
            SystemParametersInfoW(
                SPI_SETLOGICALDPIOVERRIDE,
                index as u32,
                None,
                SPIF_UPDATEINIFILE,
            )
        }
        .is_ok()
    }
}

/// Resolves the monitor hosting the shell's desktop window.
///
/// Falls back to the primary monitor when there is no shell window, which
/// is the usual case on Server Core and in service sessions.
fn primary_monitor() -> HMONITOR {
    // SAFETY: both calls accept a null window handle.
    unsafe { MonitorFromWindow(GetShellWindow(), MONITOR_DEFAULTTOPRIMARY) }
}

/// Returns the display device at `index`, or `None` past the last one.
fn display_device(index: u32) -> Option<DISPLAY_DEVICEW> {
    let mut device = DISPLAY_DEVICEW {
        cb: mem::size_of::<DISPLAY_DEVICEW>() as u32,
        ..Default::default()
    };
    // SAFETY: cb is set as required; a null device name enumerates adapters.
    let ok = unsafe { EnumDisplayDevicesW(PCWSTR::null(), index, &mut device, 0) };
    ok.as_bool().then_some(device)
}

fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

fn wide_to_string(buf: &[u16]) -> String {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_strings_round_trip() {
        let wide = to_wide(r"\\.\DISPLAY1");

        assert_eq!(wide.last(), Some(&0));
        assert_eq!(wide_to_string(&wide), r"\\.\DISPLAY1");
    }

    #[test]
    fn fixed_buffer_stops_at_first_nul() {
        let mut buf = [0u16; 32];
        for (slot, c) in buf.iter_mut().zip("DISPLAY2".encode_utf16()) {
            *slot = c;
        }

        assert_eq!(wide_to_string(&buf), "DISPLAY2");
    }

    #[test]
    fn set_size_marks_resolution_fields() {
        let mut mode = Win32Mode(DEVMODEW::default());

        mode.set_size(1920, 1080);

        assert_eq!(mode.width(), 1920);
        assert_eq!(mode.height(), 1080);
        assert!((mode.0.dmFields & DM_PELSWIDTH) == DM_PELSWIDTH);
        assert!((mode.0.dmFields & DM_PELSHEIGHT) == DM_PELSHEIGHT);
    }
}
