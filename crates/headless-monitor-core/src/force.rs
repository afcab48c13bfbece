//! Brings the primary monitor to a requested state and reports the outcome.

use crate::query::{self, ScreenMetrics};
use crate::screen::{Screen, ScreenResult};
use crate::{Request, log_error, log_info, log_warn, mutate};

/// Outcome of a [`force`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForceReport {
    /// Monitor state before anything was changed.
    pub before: ScreenMetrics,
    /// Monitor state after the setters ran.
    pub after: ScreenMetrics,
    /// What [`mutate::set_resolution`] returned.
    pub resolution_ok: bool,
    /// What [`mutate::set_dpi`] returned.
    pub dpi_ok: bool,
    /// The monitor already matched the request; no setter was called.
    pub already_set: bool,
}

impl ForceReport {
    /// Returns `true` if the monitor now matches the request.
    pub fn reached(&self, request: &Request) -> bool {
        self.after
            .matches(request.width, request.height, request.dpi_percent)
    }

    /// Returns `true` if both setters reported success and a fresh query
    /// confirms the requested state.
    pub fn succeeded(&self, request: &Request) -> bool {
        self.resolution_ok && self.dpi_ok && self.reached(request)
    }
}

/// Applies `request` to the primary monitor.
///
/// Resolution is changed before scaling. A successful resolution change is
/// kept even if the scaling change fails afterwards. If a query fails after
/// the mode was changed, the returned error says which resolution is now
/// active.
pub fn force(screen: &impl Screen, request: &Request) -> ScreenResult<ForceReport> {
    let before = query::metrics(screen)
        .map_err(|e| format!("could not query the primary monitor: {e}"))?;
    if before.matches(request.width, request.height, request.dpi_percent) {
        log_info!(
            "primary monitor already at {}x{} {}%",
            before.width,
            before.height,
            before.dpi_percent
        );
        return Ok(ForceReport {
            before,
            after: before,
            resolution_ok: true,
            dpi_ok: true,
            already_set: true,
        });
    }

    let resolution_ok = mutate::set_resolution(screen, request.width, request.height)?;
    let resolution_changed = resolution_ok
        && (before.width, before.height) != (request.width, request.height);

    let (dpi_ok, after) = match apply_scaling(screen, request) {
        Ok(outcome) => outcome,
        Err(e) if resolution_changed => {
            log_error!(
                "resolution changed from {}x{} to {}x{}, then scaling failed: {e}",
                before.width,
                before.height,
                request.width,
                request.height
            );
            return Err(format!(
                "resolution was already changed to {}x{} (was {}x{}), but scaling \
                 could not be applied: {e}",
                request.width, request.height, before.width, before.height
            )
            .into());
        }
        Err(e) => return Err(e),
    };

    let report = ForceReport {
        before,
        after,
        resolution_ok,
        dpi_ok,
        already_set: false,
    };
    if !report.reached(request) {
        log_warn!(
            "requested {}x{} {}% but monitor reports {}x{} {}%",
            request.width,
            request.height,
            request.dpi_percent,
            after.width,
            after.height,
            after.dpi_percent
        );
    }
    Ok(report)
}

/// Sweeps scaling towards the request and takes the final snapshot.
fn apply_scaling(
    screen: &impl Screen,
    request: &Request,
) -> ScreenResult<(bool, ScreenMetrics)> {
    let dpi_ok = mutate::set_dpi(screen, request.dpi_percent)?;
    Ok((dpi_ok, query::metrics(screen)?))
}
