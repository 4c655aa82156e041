//! Thumb geometry derived from metrics, configuration and visibility.

use crate::layout::Rect;
use crate::widgets::scroll::{ScrollAreaConfig, ScrollbarAxis};

use super::metrics::Metrics;
use super::visibility::VisibilityFlags;

/// Derived thumb layout. Always recomputed, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbGeometry {
    /// Axis the thumb moves along
    pub axis: ScrollbarAxis,
    /// Thumb length along the axis
    pub size: f32,
    /// Thumb offset from the start of the track
    pub offset: f32,
    /// Scroll progress in `[0, 1]`, rounded to four decimals
    pub percentage: f32,
    /// Whether the thumb (and track) should be hidden
    pub hidden: bool,
}

impl ThumbGeometry {
    pub fn compute(
        metrics: &Metrics,
        config: &ScrollAreaConfig,
        flags: VisibilityFlags,
        forced_visible: Option<bool>,
    ) -> Self {
        let container = metrics.container_size();
        let content = metrics.scroll_size();

        let size = thumb_size(container, content, config.min_thumb_size);
        let percentage = scroll_percentage(metrics.scroll_position(), container, content);
        let hidden = content <= container || !flags.wants_thumb(forced_visible);

        Self {
            axis: metrics.axis(),
            size,
            offset: percentage * (container - size),
            percentage,
            hidden,
        }
    }

    /// Position the thumb inside a track rectangle
    pub fn thumb_rect(&self, track: Rect) -> Rect {
        match self.axis {
            ScrollbarAxis::Vertical => {
                Rect::new(track.x, track.y + self.offset, track.width, self.size)
            }
            ScrollbarAxis::Horizontal => {
                Rect::new(track.x + self.offset, track.y, self.size, track.height)
            }
        }
    }
}

/// `round(clamp(container² / content, min, container))`.
///
/// The upper bound wins when `min > container`, so the thumb never outgrows
/// its track.
pub fn thumb_size(container: f32, content: f32, min_thumb_size: f32) -> f32 {
    if container <= 0.0 {
        return 0.0;
    }
    if content <= 0.0 {
        return container.round();
    }
    let proportional = container * container / content;
    proportional.max(min_thumb_size).min(container).round()
}

/// Scroll progress in `[0, 1]`, zero when there is nothing to scroll
pub fn scroll_percentage(position: f32, container: f32, content: f32) -> f32 {
    let range = content - container;
    if range <= 0.0 || !position.is_finite() {
        return 0.0;
    }
    let ratio = (position / range).clamp(0.0, 1.0);
    (ratio * 10000.0).round() / 10000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Size;

    fn metrics(container: f32, content: f32, position: f32) -> Metrics {
        let mut metrics = Metrics::new(ScrollbarAxis::Vertical);
        metrics.update_container(Size::new(100.0, container));
        metrics.update_content(Size::new(100.0, content));
        metrics.update_position(position);
        metrics
    }

    fn shown() -> VisibilityFlags {
        VisibilityFlags::TEMP_SHOWING
    }

    #[test]
    fn test_thumb_size_proportional() {
        // 200² / 1000 = 40, clamped up to the minimum
        assert_eq!(thumb_size(200.0, 1000.0, 50.0), 50.0);
        // 400² / 1000 = 160
        assert_eq!(thumb_size(400.0, 1000.0, 50.0), 160.0);
    }

    #[test]
    fn test_thumb_size_bounds() {
        for &(container, content) in &[
            (10.0, 1000.0),
            (30.0, 31.0),
            (200.0, 200.0),
            (200.0, 50.0),
            (500.0, 100000.0),
            (999.0, 1000.0),
        ] {
            let size = thumb_size(container, content, 50.0);
            assert!(
                size >= f32::min(50.0, container) && size <= container,
                "thumb {} out of bounds for container {} content {}",
                size,
                container,
                content
            );
        }
    }

    #[test]
    fn test_min_thumb_larger_than_container() {
        assert_eq!(thumb_size(30.0, 1000.0, 50.0), 30.0);
    }

    #[test]
    fn test_percentage_clamps() {
        assert_eq!(scroll_percentage(-50.0, 200.0, 1000.0), 0.0);
        assert_eq!(scroll_percentage(5000.0, 200.0, 1000.0), 1.0);
        assert_eq!(scroll_percentage(400.0, 200.0, 1000.0), 0.5);
        assert_eq!(scroll_percentage(1.0, 200.0, 3200.0), 0.0003);
    }

    #[test]
    fn test_percentage_degenerate_range() {
        assert_eq!(scroll_percentage(10.0, 200.0, 200.0), 0.0);
        assert_eq!(scroll_percentage(10.0, 200.0, 100.0), 0.0);
    }

    #[test]
    fn test_offset_follows_percentage() {
        let config = ScrollAreaConfig::default();
        let metrics = metrics(200.0, 1000.0, 400.0);
        let geometry = ThumbGeometry::compute(&metrics, &config, shown(), None);
        assert_eq!(geometry.size, 50.0);
        assert_eq!(geometry.percentage, 0.5);
        assert_eq!(geometry.offset, 75.0);
        assert!(!geometry.hidden);
    }

    #[test]
    fn test_hidden_without_overflow() {
        let config = ScrollAreaConfig::default();
        let all = VisibilityFlags::all();

        let equal = ThumbGeometry::compute(&metrics(200.0, 200.0, 0.0), &config, all, Some(true));
        assert!(equal.hidden);
        assert_eq!(equal.size, 200.0);

        let smaller = ThumbGeometry::compute(&metrics(200.0, 120.0, 0.0), &config, all, Some(true));
        assert!(smaller.hidden);
        assert!(smaller.offset.is_finite());
        assert!(smaller.percentage.is_finite());
    }

    #[test]
    fn test_hidden_without_reason_to_show() {
        let config = ScrollAreaConfig::default();
        let geometry = ThumbGeometry::compute(
            &metrics(200.0, 1000.0, 0.0),
            &config,
            VisibilityFlags::HOVERING,
            Some(false),
        );
        assert!(geometry.hidden);
    }

    #[test]
    fn test_compute_is_pure() {
        let config = ScrollAreaConfig::default();
        let m = metrics(300.0, 1700.0, 333.0);
        let first = ThumbGeometry::compute(&m, &config, shown(), None);
        let second = ThumbGeometry::compute(&m, &config, shown(), None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_thumb_rect_along_axis() {
        let track = Rect::new(190.0, 0.0, 10.0, 200.0);
        let geometry = ThumbGeometry {
            axis: ScrollbarAxis::Vertical,
            size: 50.0,
            offset: 75.0,
            percentage: 0.5,
            hidden: false,
        };
        assert_eq!(geometry.thumb_rect(track), Rect::new(190.0, 75.0, 10.0, 50.0));

        let track = Rect::new(0.0, 190.0, 200.0, 10.0);
        let geometry = ThumbGeometry {
            axis: ScrollbarAxis::Horizontal,
            ..geometry
        };
        assert_eq!(geometry.thumb_rect(track), Rect::new(75.0, 190.0, 50.0, 10.0));
    }
}
