use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
    SetProcessDpiAwarenessContext,
};

/// Declares this process as per-monitor DPI aware.
///
/// Without this, Windows virtualises monitor rectangles for us based on
/// the system DPI, so a 1920x1080 monitor at 150% would read back as
/// 1280x720. With per-monitor awareness, `GetMonitorInfoW` and
/// `GetDpiForMonitor` report physical values.
///
/// Must be called once at process startup, before any display query.
pub fn enable_dpi_awareness() {
    // SAFETY: SetProcessDpiAwarenessContext is safe to call once at startup.
    // V2 needs Windows 10 1703; older builds only accept V1. If both fail
    // (e.g. already set via manifest), we ignore the error.
    unsafe {
        if SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2).is_err() {
            let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE);
        }
    }
}
