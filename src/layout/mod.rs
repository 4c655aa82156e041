//! Basic geometry types shared by the scroll area.

use crate::widgets::scroll::ScrollbarAxis;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Extent along the given axis (width for horizontal, height for vertical)
    pub fn extent(&self, axis: ScrollbarAxis) -> f32 {
        match axis {
            ScrollbarAxis::Vertical => self.height,
            ScrollbarAxis::Horizontal => self.width,
        }
    }

    /// Replace negative or non-finite dimensions with zero.
    ///
    /// Observers may report garbage while an element is detached; sizes are
    /// clamped instead of rejected.
    pub fn sanitized(self) -> Self {
        Self {
            width: sanitize_extent(self.width),
            height: sanitize_extent(self.height),
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::zero()
    }
}

fn sanitize_extent(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// A displacement in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component along the given axis
    pub fn along(&self, axis: ScrollbarAxis) -> f32 {
        match axis {
            ScrollbarAxis::Vertical => self.y,
            ScrollbarAxis::Horizontal => self.x,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Length of the rect along the given axis
    pub fn length(&self, axis: ScrollbarAxis) -> f32 {
        match axis {
            ScrollbarAxis::Vertical => self.height,
            ScrollbarAxis::Horizontal => self.width,
        }
    }

    /// Offset of a point from the rect origin along the given axis
    pub fn offset_of(&self, axis: ScrollbarAxis, x: f32, y: f32) -> f32 {
        match axis {
            ScrollbarAxis::Vertical => y - self.y,
            ScrollbarAxis::Horizontal => x - self.x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_clamps_bad_dimensions() {
        let size = Size::new(-10.0, f32::NAN).sanitized();
        assert_eq!(size, Size::zero());

        let size = Size::new(120.0, f32::INFINITY).sanitized();
        assert_eq!(size, Size::new(120.0, 0.0));
    }

    #[test]
    fn test_axis_accessors() {
        let size = Size::new(300.0, 200.0);
        assert_eq!(size.extent(ScrollbarAxis::Horizontal), 300.0);
        assert_eq!(size.extent(ScrollbarAxis::Vertical), 200.0);

        let rect = Rect::new(10.0, 20.0, 8.0, 200.0);
        assert_eq!(rect.length(ScrollbarAxis::Vertical), 200.0);
        assert_eq!(rect.offset_of(ScrollbarAxis::Vertical, 12.0, 120.0), 100.0);
        assert_eq!(rect.offset_of(ScrollbarAxis::Horizontal, 12.0, 120.0), 2.0);
    }
}
