//! Measured sizes and scroll offset of a scroll area.

use bitflags::bitflags;

use crate::layout::Size;
use crate::widgets::scroll::ScrollbarAxis;

bitflags! {
    /// Flags indicating which measurements changed in an update
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct MetricsChange: u8 {
        /// Outer container was resized
        const CONTAINER = 0b001;
        /// Scrollable content was resized along the active axis
        const CONTENT   = 0b010;
        /// Scroll offset moved
        const POSITION  = 0b100;
    }
}

/// Current measurements fed by the resize and scroll observers.
///
/// Updates only report a change when a value actually differs, so observers
/// re-reporting identical dimensions don't count as activity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metrics {
    axis: ScrollbarAxis,
    container: Size,
    content: Size,
    position: f32,
}

impl Metrics {
    pub fn new(axis: ScrollbarAxis) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    pub fn axis(&self) -> ScrollbarAxis {
        self.axis
    }

    /// Visible extent along the active axis
    pub fn container_size(&self) -> f32 {
        self.container.extent(self.axis)
    }

    /// Total scrollable extent along the active axis
    pub fn scroll_size(&self) -> f32 {
        self.content.extent(self.axis)
    }

    /// Last observed scroll offset along the active axis
    pub fn scroll_position(&self) -> f32 {
        self.position
    }

    pub fn container(&self) -> Size {
        self.container
    }

    pub fn content(&self) -> Size {
        self.content
    }

    /// Maximum scroll offset, zero when content fits
    pub fn max_scroll(&self) -> f32 {
        (self.scroll_size() - self.container_size()).max(0.0)
    }

    /// Check if content overflows the container along the active axis
    pub fn overflows(&self) -> bool {
        self.scroll_size() > self.container_size()
    }

    /// Record a new outer container size. Either dimension changing counts.
    pub fn update_container(&mut self, size: Size) -> MetricsChange {
        let size = size.sanitized();
        if self.container == size {
            return MetricsChange::empty();
        }
        self.container = size;
        MetricsChange::CONTAINER
    }

    /// Record a new content size.
    ///
    /// Both dimensions are stored, but only the active-axis extent is
    /// reported as a change.
    pub fn update_content(&mut self, size: Size) -> MetricsChange {
        let size = size.sanitized();
        let changed = self.content.extent(self.axis) != size.extent(self.axis);
        self.content = size;
        if changed {
            MetricsChange::CONTENT
        } else {
            MetricsChange::empty()
        }
    }

    /// Record a new scroll offset. Non-finite offsets are treated as zero.
    pub fn update_position(&mut self, position: f32) -> MetricsChange {
        let position = if position.is_finite() { position } else { 0.0 };
        if self.position == position {
            return MetricsChange::empty();
        }
        self.position = position;
        MetricsChange::POSITION
    }
}
