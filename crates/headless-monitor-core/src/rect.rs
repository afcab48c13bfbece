/// A rectangle representing a monitor's position and size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from Win32-style edge coordinates.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Width in pixels, clamped to zero for inverted rectangles.
    pub fn pixel_width(&self) -> u32 {
        u32::try_from(self.width).unwrap_or(0)
    }

    /// Height in pixels, clamped to zero for inverted rectangles.
    pub fn pixel_height(&self) -> u32 {
        u32::try_from(self.height).unwrap_or(0)
    }
}
