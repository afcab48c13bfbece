//! Setters that change the primary monitor's resolution and scaling.
//!
//! Both setters are no-ops when the requested state already holds. They
//! return `Ok(false)` when the OS rejects a change and `Err` only when the
//! monitor could not be queried in the first place.

use crate::query;
use crate::screen::{DisplayMode, Screen, ScreenResult};
use crate::{log_debug, log_info, log_warn};

/// Scaling target used when none is configured.
pub const DEFAULT_DPI_PERCENT: u32 = 125;

/// Scaling ladder indices tried by [`set_dpi`], lowest first.
pub const SCALING_STEPS: std::ops::RangeInclusive<i32> = -4..=4;

/// Changes the primary monitor's resolution and persists it to the registry.
///
/// Succeeds only if the OS reports the change as applied immediately; a
/// change that needs a restart counts as a failure. Never retries.
pub fn set_resolution(screen: &impl Screen, width: u32, height: u32) -> ScreenResult<bool> {
    let current_w = query::primary_width(screen)?;
    let current_h = query::primary_height(screen)?;
    if current_w == width && current_h == height {
        log_debug!("resolution already {width}x{height}");
        return Ok(true);
    }

    let device = screen.primary_device()?;
    let mut mode = screen.current_mode(&device)?;
    log_info!(
        "changing {device} from {}x{} to {width}x{height}",
        mode.width(),
        mode.height()
    );
    mode.set_size(width, height);

    let status = screen.apply_mode(&device, &mode);
    if !status.is_successful() {
        log_warn!("resolution change on {device} rejected: {status}");
    }
    Ok(status.is_successful())
}

/// Walks the OS scaling ladder until the primary monitor reports
/// `target_percent`.
///
/// Each index in [`SCALING_STEPS`] is applied in turn and the DPI is
/// re-read after every call. The return value is what the *last* scaling
/// call reported, not whether the target was reached, so callers must
/// re-query the DPI to confirm the outcome.
pub fn set_dpi(screen: &impl Screen, target_percent: u32) -> ScreenResult<bool> {
    if query::primary_dpi(screen, true)? == target_percent {
        log_debug!("scaling already {target_percent}%");
        return Ok(true);
    }

    let mut accepted = false;
    for index in SCALING_STEPS {
        accepted = screen.apply_scaling_step(index);
        let current = query::primary_dpi(screen, true)?;
        log_debug!("scaling step {index}: accepted={accepted}, now {current}%");
        if current == target_percent {
            log_info!("scaling reached {target_percent}% at step {index}");
            return Ok(accepted);
        }
    }

    log_warn!("scaling sweep finished without reaching {target_percent}%");
    Ok(accepted)
}

#[cfg(test)]
#[path = "mutate_tests.rs"]
mod tests;
