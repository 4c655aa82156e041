//! Scroll configuration types for overlay scroll areas.

use std::time::Duration;

/// Axis for scrollbar calculations (vertical or horizontal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollbarAxis {
    #[default]
    Vertical,
    Horizontal,
}

impl ScrollbarAxis {
    /// Pan direction that moves content forward along this axis
    pub fn forward(&self) -> PanDirection {
        match self {
            ScrollbarAxis::Vertical => PanDirection::Down,
            ScrollbarAxis::Horizontal => PanDirection::Right,
        }
    }
}

/// Dominant direction reported by the gesture source for a pan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Kind of input device the host platform is driven by.
///
/// Touch platforms may report scroll offsets differently from the observer
/// stream, so reads go straight to the viewport there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Desktop,
    Touch,
}

/// Configuration for an overlay scroll area
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAreaConfig {
    /// Axis the scroll area scrolls along
    pub axis: ScrollbarAxis,
    /// Minimum size of the thumb (to ensure it's always grabbable)
    pub min_thumb_size: f32,
    /// How long the thumb stays visible after the last scroll or resize
    pub hide_delay: Duration,
    /// `Some(true)` pins the thumb visible, `Some(false)` ignores hover,
    /// `None` shows the thumb while hovered
    pub forced_visible: Option<bool>,
    /// Input mode of the host platform
    pub input_mode: InputMode,
}

impl ScrollAreaConfig {
    pub const DEFAULT_MIN_THUMB_SIZE: f32 = 50.0;
    pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(1000);
}

impl Default for ScrollAreaConfig {
    fn default() -> Self {
        Self {
            axis: ScrollbarAxis::Vertical,
            min_thumb_size: Self::DEFAULT_MIN_THUMB_SIZE,
            hide_delay: Self::DEFAULT_HIDE_DELAY,
            forced_visible: None,
            input_mode: InputMode::Desktop,
        }
    }
}

/// Builder for customizing scroll area behavior
#[derive(Default)]
pub struct ScrollAreaBuilder {
    config: ScrollAreaConfig,
}

impl ScrollAreaBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scroll axis
    pub fn axis(mut self, axis: ScrollbarAxis) -> Self {
        self.config.axis = axis;
        self
    }

    /// Scroll horizontally instead of vertically
    pub fn horizontal(mut self) -> Self {
        self.config.axis = ScrollbarAxis::Horizontal;
        self
    }

    /// Set the minimum thumb size
    pub fn min_thumb_size(mut self, size: f32) -> Self {
        self.config.min_thumb_size = size;
        self
    }

    /// Set how long the thumb lingers after activity
    pub fn hide_delay(mut self, delay: Duration) -> Self {
        self.config.hide_delay = delay;
        self
    }

    /// Set the hide delay in milliseconds
    pub fn hide_delay_ms(mut self, millis: u64) -> Self {
        self.config.hide_delay = Duration::from_millis(millis);
        self
    }

    /// Override hover-based visibility
    pub fn forced_visible(mut self, visible: Option<bool>) -> Self {
        self.config.forced_visible = visible;
        self
    }

    /// Keep the thumb visible whenever content overflows
    pub fn always_visible(mut self) -> Self {
        self.config.forced_visible = Some(true);
        self
    }

    /// Set the input mode of the host platform
    pub fn input_mode(mut self, mode: InputMode) -> Self {
        self.config.input_mode = mode;
        self
    }

    /// Build the scroll area configuration
    pub fn build(self) -> ScrollAreaConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScrollAreaConfig::default();
        assert_eq!(config.axis, ScrollbarAxis::Vertical);
        assert_eq!(config.min_thumb_size, 50.0);
        assert_eq!(config.hide_delay, Duration::from_millis(1000));
        assert_eq!(config.forced_visible, None);
        assert_eq!(config.input_mode, InputMode::Desktop);
    }

    #[test]
    fn test_builder() {
        let config = ScrollAreaBuilder::new()
            .horizontal()
            .min_thumb_size(24.0)
            .hide_delay_ms(250)
            .always_visible()
            .input_mode(InputMode::Touch)
            .build();

        assert_eq!(config.axis, ScrollbarAxis::Horizontal);
        assert_eq!(config.min_thumb_size, 24.0);
        assert_eq!(config.hide_delay, Duration::from_millis(250));
        assert_eq!(config.forced_visible, Some(true));
        assert_eq!(config.input_mode, InputMode::Touch);
    }

    #[test]
    fn test_forward_direction() {
        assert_eq!(ScrollbarAxis::Vertical.forward(), PanDirection::Down);
        assert_eq!(ScrollbarAxis::Horizontal.forward(), PanDirection::Right);
    }
}
