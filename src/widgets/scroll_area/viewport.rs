//! Access to the native scroll container.

use std::time::{Duration, Instant};

use crate::animation::{ScrollAnimation, TimingFunction};
use crate::layout::Size;
use crate::widgets::scroll::{InputMode, ScrollbarAxis};

use super::metrics::Metrics;

/// The scrollable element whose native scrolling the scroll area drives.
///
/// Implementations own bounds checking: writes outside the scrollable range
/// are clamped by the viewport, and every offset change is reported back
/// through the scroll observer.
pub trait Viewport {
    /// Current native scroll offset along `axis`
    fn scroll_offset(&self, axis: ScrollbarAxis) -> f32;

    /// Move the native scroll offset, animating over `duration` when given
    fn set_scroll_offset(
        &mut self,
        axis: ScrollbarAxis,
        offset: f32,
        duration: Option<Duration>,
    );
}

/// Reads and writes the viewport offset along the configured axis.
///
/// Never touches [`Metrics`]: writes come back through the scroll observer.
#[derive(Debug)]
pub struct ViewportDriver<V> {
    viewport: V,
    axis: ScrollbarAxis,
    input_mode: InputMode,
}

impl<V: Viewport> ViewportDriver<V> {
    pub fn new(viewport: V, axis: ScrollbarAxis, input_mode: InputMode) -> Self {
        Self {
            viewport,
            axis,
            input_mode,
        }
    }

    /// Current offset. Desktop uses the observed value, touch platforms read
    /// the viewport directly.
    pub fn offset(&self, metrics: &Metrics) -> f32 {
        match self.input_mode {
            InputMode::Desktop => metrics.scroll_position(),
            InputMode::Touch => self.viewport.scroll_offset(self.axis),
        }
    }

    /// Write a new offset. Non-finite values are dropped.
    pub fn set_offset(&mut self, offset: f32, duration: Option<Duration>) {
        if !offset.is_finite() {
            log::warn!("Ignoring non-finite scroll offset {}", offset);
            return;
        }
        self.viewport.set_scroll_offset(self.axis, offset, duration);
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

}

/// In-memory viewport that behaves like a native scroll container.
///
/// Clamps offsets to the scrollable range, animates timed writes via
/// [`MemoryViewport::advance`] and reports offset changes the way a scroll
/// observer would through [`MemoryViewport::take_scroll_change`].
///
/// Timed writes start at the viewport's clock, the last instant passed to
/// [`MemoryViewport::sync_clock`] or [`MemoryViewport::advance`]. Until either
/// is called the wall clock is used.
#[derive(Debug, Clone)]
pub struct MemoryViewport {
    container: Size,
    content: Size,
    offset_x: f32,
    offset_y: f32,
    animation: Option<(ScrollbarAxis, ScrollAnimation)>,
    timing: TimingFunction,
    clock: Option<Instant>,
    observed_x: f32,
    observed_y: f32,
}

impl MemoryViewport {
    pub fn new(container: Size, content: Size) -> Self {
        Self {
            container: container.sanitized(),
            content: content.sanitized(),
            offset_x: 0.0,
            offset_y: 0.0,
            animation: None,
            timing: TimingFunction::Linear,
            clock: None,
            observed_x: 0.0,
            observed_y: 0.0,
        }
    }

    /// Set the timing function used for timed writes
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    pub fn container(&self) -> Size {
        self.container
    }

    pub fn content(&self) -> Size {
        self.content
    }

    pub fn set_container(&mut self, size: Size) {
        self.container = size.sanitized();
        self.clamp_offsets();
    }

    pub fn set_content(&mut self, size: Size) {
        self.content = size.sanitized();
        self.clamp_offsets();
    }

    /// Maximum offset along `axis`
    pub fn max_scroll(&self, axis: ScrollbarAxis) -> f32 {
        (self.content.extent(axis) - self.container.extent(axis)).max(0.0)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Set the instant that timed writes start from
    pub fn sync_clock(&mut self, now: Instant) {
        self.clock = Some(now);
    }

    /// Step a running animation. Returns true while still animating.
    pub fn advance(&mut self, now: Instant) -> bool {
        self.clock = Some(now);
        let Some((axis, animation)) = self.animation.take() else {
            return false;
        };
        let value = animation.sample(now);
        self.write(axis, value);
        if animation.is_finished(now) {
            false
        } else {
            self.animation = Some((axis, animation));
            true
        }
    }

    /// Offset along `axis` if it moved since the last call
    pub fn take_scroll_change(&mut self, axis: ScrollbarAxis) -> Option<f32> {
        let (current, observed) = match axis {
            ScrollbarAxis::Vertical => (self.offset_y, &mut self.observed_y),
            ScrollbarAxis::Horizontal => (self.offset_x, &mut self.observed_x),
        };
        if current == *observed {
            return None;
        }
        *observed = current;
        Some(current)
    }

    fn write(&mut self, axis: ScrollbarAxis, offset: f32) {
        let clamped = offset.clamp(0.0, self.max_scroll(axis));
        match axis {
            ScrollbarAxis::Vertical => self.offset_y = clamped,
            ScrollbarAxis::Horizontal => self.offset_x = clamped,
        }
    }

    fn clamp_offsets(&mut self) {
        let max_x = self.max_scroll(ScrollbarAxis::Horizontal);
        let max_y = self.max_scroll(ScrollbarAxis::Vertical);
        self.offset_x = self.offset_x.clamp(0.0, max_x);
        self.offset_y = self.offset_y.clamp(0.0, max_y);
    }
}

impl Viewport for MemoryViewport {
    fn scroll_offset(&self, axis: ScrollbarAxis) -> f32 {
        match axis {
            ScrollbarAxis::Vertical => self.offset_y,
            ScrollbarAxis::Horizontal => self.offset_x,
        }
    }

    fn set_scroll_offset(
        &mut self,
        axis: ScrollbarAxis,
        offset: f32,
        duration: Option<Duration>,
    ) {
        match duration {
            Some(duration) if !duration.is_zero() => {
                let from = self.scroll_offset(axis);
                let to = offset.clamp(0.0, self.max_scroll(axis));
                let start = self.clock.unwrap_or_else(Instant::now);
                let animation =
                    ScrollAnimation::new(from, to, start, duration).timing(self.timing.clone());
                self.animation = Some((axis, animation));
            }
            _ => {
                self.animation = None;
                self.write(axis, offset);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> MemoryViewport {
        MemoryViewport::new(Size::new(200.0, 200.0), Size::new(600.0, 1000.0))
    }

    #[test]
    fn test_writes_are_clamped() {
        let mut vp = viewport();
        vp.set_scroll_offset(ScrollbarAxis::Vertical, 5000.0, None);
        assert_eq!(vp.scroll_offset(ScrollbarAxis::Vertical), 800.0);

        vp.set_scroll_offset(ScrollbarAxis::Horizontal, -20.0, None);
        assert_eq!(vp.scroll_offset(ScrollbarAxis::Horizontal), 0.0);
    }

    #[test]
    fn test_scroll_change_reported_once() {
        let mut vp = viewport();
        assert_eq!(vp.take_scroll_change(ScrollbarAxis::Vertical), None);
        vp.set_scroll_offset(ScrollbarAxis::Vertical, 120.0, None);
        assert_eq!(vp.take_scroll_change(ScrollbarAxis::Vertical), Some(120.0));
        assert_eq!(vp.take_scroll_change(ScrollbarAxis::Vertical), None);
    }

    #[test]
    fn test_timed_write_animates() {
        let t0 = Instant::now();
        let mut vp = viewport();
        vp.sync_clock(t0);
        let duration = Some(Duration::from_millis(300));
        vp.set_scroll_offset(ScrollbarAxis::Vertical, 400.0, duration);
        assert!(vp.is_animating());
        assert_eq!(vp.scroll_offset(ScrollbarAxis::Vertical), 0.0);

        assert!(vp.advance(t0 + Duration::from_millis(150)));
        assert!((vp.scroll_offset(ScrollbarAxis::Vertical) - 200.0).abs() < 1e-3);

        assert!(!vp.advance(t0 + Duration::from_millis(300)));
        assert!(!vp.is_animating());
        assert_eq!(vp.scroll_offset(ScrollbarAxis::Vertical), 400.0);
    }

    #[test]
    fn test_timed_write_starts_at_last_advance() {
        let t0 = Instant::now();
        let mut vp = viewport();
        vp.advance(t0 + Duration::from_secs(10));
        let duration = Some(Duration::from_millis(100));
        vp.set_scroll_offset(ScrollbarAxis::Vertical, 100.0, duration);

        assert!(vp.advance(t0 + Duration::from_millis(10_050)));
        assert!((vp.scroll_offset(ScrollbarAxis::Vertical) - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_shrinking_content_clamps_offset() {
        let mut vp = viewport();
        vp.set_scroll_offset(ScrollbarAxis::Vertical, 700.0, None);
        vp.set_content(Size::new(600.0, 500.0));
        assert_eq!(vp.scroll_offset(ScrollbarAxis::Vertical), 300.0);
    }

    #[test]
    fn test_driver_reads_by_input_mode() {
        let mut vp = viewport();
        vp.set_scroll_offset(ScrollbarAxis::Vertical, 90.0, None);

        let mut metrics = Metrics::new(ScrollbarAxis::Vertical);
        metrics.update_position(30.0);

        let desktop =
            ViewportDriver::new(vp.clone(), ScrollbarAxis::Vertical, InputMode::Desktop);
        assert_eq!(desktop.offset(&metrics), 30.0);

        let touch = ViewportDriver::new(vp, ScrollbarAxis::Vertical, InputMode::Touch);
        assert_eq!(touch.offset(&metrics), 90.0);
    }

    #[test]
    fn test_driver_drops_non_finite_writes() {
        let mut driver =
            ViewportDriver::new(viewport(), ScrollbarAxis::Vertical, InputMode::Desktop);
        driver.set_offset(f32::NAN, None);
        driver.set_offset(f32::INFINITY, None);
        assert_eq!(driver.viewport().scroll_offset(ScrollbarAxis::Vertical), 0.0);
        driver.set_offset(50.0, None);
        assert_eq!(driver.viewport().scroll_offset(ScrollbarAxis::Vertical), 50.0);
    }
}
