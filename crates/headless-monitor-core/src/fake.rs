//! In-memory [`Screen`] used by unit tests in place of real display hardware.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::screen::{ChangeStatus, DisplayMode, Screen, ScreenResult};
use crate::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct FakeMode {
    pub width: u32,
    pub height: u32,
    pub frequency: u32,
}

impl DisplayMode for FakeMode {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

/// A single primary monitor whose state changes when setters succeed.
pub struct FakeScreen {
    pub width: Cell<u32>,
    pub height: Cell<u32>,
    pub dpi: Cell<(u32, u32)>,
    /// Status returned by `apply_mode`.
    pub mode_status: ChangeStatus,
    /// Raw DPI the monitor switches to for each accepted scaling index.
    pub ladder: HashMap<i32, u32>,
    /// Decides what `apply_scaling_step` reports for a given index.
    pub step_result: fn(i32) -> bool,
    pub fail_queries: bool,
    /// Makes only `primary_dpi` fail; can be flipped mid-run.
    pub dpi_fails: Cell<bool>,
    /// Sets `dpi_fails` once a mode change has been applied.
    pub fail_dpi_after_mode_change: bool,
    pub applied_modes: RefCell<Vec<FakeMode>>,
    pub scaling_calls: RefCell<Vec<i32>>,
}

impl FakeScreen {
    /// Builds a monitor whose scaling ladder runs from 100% at index -4
    /// to 300% at index 4, one 24 DPI step per index.
    pub fn new(width: u32, height: u32, raw_dpi: u32) -> Self {
        let ladder = (-4..=4).map(|i| (i, 96 + 24 * (i + 4) as u32)).collect();
        Self {
            width: Cell::new(width),
            height: Cell::new(height),
            dpi: Cell::new((raw_dpi, raw_dpi)),
            mode_status: ChangeStatus::Successful,
            ladder,
            step_result: |_| true,
            fail_queries: false,
            dpi_fails: Cell::new(false),
            fail_dpi_after_mode_change: false,
            applied_modes: RefCell::new(Vec::new()),
            scaling_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn mode_changes(&self) -> usize {
        self.applied_modes.borrow().len()
    }

    pub fn scaling_call_count(&self) -> usize {
        self.scaling_calls.borrow().len()
    }

    fn check_queries(&self) -> ScreenResult<()> {
        if self.fail_queries {
            return Err("no monitor attached".into());
        }
        Ok(())
    }
}

impl Screen for FakeScreen {
    type Mode = FakeMode;

    fn primary_rect(&self) -> ScreenResult<Rect> {
        self.check_queries()?;
        Ok(Rect::new(
            0,
            0,
            self.width.get() as i32,
            self.height.get() as i32,
        ))
    }

    fn primary_dpi(&self) -> ScreenResult<(u32, u32)> {
        self.check_queries()?;
        if self.dpi_fails.get() {
            return Err("GetDpiForMonitor failed".into());
        }
        Ok(self.dpi.get())
    }

    fn primary_device(&self) -> ScreenResult<String> {
        self.check_queries()?;
        Ok(r"\\.\DISPLAY1".into())
    }

    fn current_mode(&self, device: &str) -> ScreenResult<FakeMode> {
        if device != r"\\.\DISPLAY1" {
            return Err(format!("unknown device {device}").into());
        }
        Ok(FakeMode {
            width: self.width.get(),
            height: self.height.get(),
            frequency: 60,
        })
    }

    fn apply_mode(&self, _device: &str, mode: &FakeMode) -> ChangeStatus {
        self.applied_modes.borrow_mut().push(mode.clone());
        if self.mode_status.is_successful() {
            self.width.set(mode.width);
            self.height.set(mode.height);
        }
        if self.fail_dpi_after_mode_change {
            self.dpi_fails.set(true);
        }
        self.mode_status
    }

    fn apply_scaling_step(&self, index: i32) -> bool {
        self.scaling_calls.borrow_mut().push(index);
        let accepted = (self.step_result)(index);
        if accepted && let Some(&raw) = self.ladder.get(&index) {
            self.dpi.set((raw, raw));
        }
        accepted
    }
}
