pub mod config;
pub mod dpi;
pub mod force;
pub mod log;
pub mod mutate;
pub mod query;
pub mod rect;
pub mod request;
pub mod screen;

#[cfg(test)]
mod fake;

pub use force::{ForceReport, force};
pub use query::ScreenMetrics;
pub use rect::Rect;
pub use request::Request;
pub use screen::{ChangeStatus, DisplayMode, Screen, ScreenResult};
