//! Overlay scroll area: a native viewport with a custom auto-hiding thumb.
//!
//! The [`ScrollArea`] owns the measurements reported by resize and scroll
//! observers, derives the thumb layout on demand, turns thumb drags and track
//! presses into viewport writes, and decides when the thumb is shown.
//!
//! ```ignore
//! let viewport = MemoryViewport::new(Size::new(300.0, 200.0), Size::new(300.0, 1000.0));
//! let mut area = ScrollArea::new(viewport, ScrollAreaConfig::default());
//!
//! let now = Instant::now();
//! area.on_container_resize(Size::new(300.0, 200.0), now);
//! area.on_content_resize(Size::new(300.0, 1000.0), now);
//!
//! let thumb = area.geometry();
//! ```

mod geometry;
mod gesture;
mod metrics;
mod track;
mod viewport;
mod visibility;

pub use geometry::{scroll_percentage, thumb_size, ThumbGeometry};
pub use gesture::{drag_multiplier, GestureTranslator, PanEvent, PanSession};
pub use metrics::{Metrics, MetricsChange};
pub use track::track_jump_target;
pub use viewport::{MemoryViewport, Viewport, ViewportDriver};
pub use visibility::{HideTimer, VisibilityController, VisibilityFlags};

use std::time::{Duration, Instant};

use crate::layout::{Rect, Size};
use crate::widgets::scroll::ScrollAreaConfig;

/// Distance from the hand-off target still read as the same position
const HANDOFF_TOLERANCE: f32 = 0.5;

/// Input delivered to a scroll area by its observers and gesture source
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollAreaEvent {
    /// Outer container was measured
    ContainerResized(Size),
    /// Scrollable content was measured
    ContentResized(Size),
    /// Native scroll offset changed
    Scrolled { position: f32 },
    /// Pointer entered the scroll area
    PointerEnter,
    /// Pointer left the scroll area
    PointerLeave,
    /// Drag on the thumb
    Pan(PanEvent),
    /// Press on the track, offset from the track origin along the axis
    TrackPress { offset: f32 },
    /// Pointer released without the gesture source finishing a drag
    PointerRelease,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

/// Scroll area core driving an overlay scrollbar for one axis
#[derive(Debug)]
pub struct ScrollArea<V: Viewport> {
    config: ScrollAreaConfig,
    metrics: Metrics,
    visibility: VisibilityController,
    gesture: GestureTranslator,
    driver: ViewportDriver<V>,
    disposed: bool,
}

impl<V: Viewport> ScrollArea<V> {
    pub fn new(viewport: V, config: ScrollAreaConfig) -> Self {
        Self {
            metrics: Metrics::new(config.axis),
            visibility: VisibilityController::new(config.hide_delay, config.forced_visible),
            gesture: GestureTranslator::new(),
            driver: ViewportDriver::new(viewport, config.axis, config.input_mode),
            config,
            disposed: false,
        }
    }

    pub fn config(&self) -> &ScrollAreaConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn visibility(&self) -> &VisibilityController {
        &self.visibility
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Dispatch an event. Returns [`EventResponse::Ignored`] when the event
    /// had no effect.
    pub fn event(&mut self, event: &ScrollAreaEvent, now: Instant) -> EventResponse {
        if self.disposed {
            return EventResponse::Ignored;
        }

        let handled = match event {
            ScrollAreaEvent::ContainerResized(size) => self.on_container_resize(*size, now),
            ScrollAreaEvent::ContentResized(size) => self.on_content_resize(*size, now),
            ScrollAreaEvent::Scrolled { position } => self.on_scroll(*position, now),
            ScrollAreaEvent::PointerEnter => self.set_hovered(true),
            ScrollAreaEvent::PointerLeave => self.set_hovered(false),
            ScrollAreaEvent::Pan(pan) => self.pan(pan),
            ScrollAreaEvent::TrackPress { offset } => self.track_press(*offset),
            ScrollAreaEvent::PointerRelease => self.release(),
        };

        if handled {
            EventResponse::Handled
        } else {
            EventResponse::Ignored
        }
    }

    /// Resize observer callback for the outer container
    pub fn on_container_resize(&mut self, size: Size, now: Instant) -> bool {
        if self.disposed {
            return false;
        }
        let change = self.metrics.update_container(size);
        self.apply_change(change, now)
    }

    /// Resize observer callback for the content wrapper
    pub fn on_content_resize(&mut self, size: Size, now: Instant) -> bool {
        if self.disposed {
            return false;
        }
        let change = self.metrics.update_content(size);
        self.apply_change(change, now)
    }

    /// Scroll observer callback
    pub fn on_scroll(&mut self, position: f32, now: Instant) -> bool {
        if self.disposed {
            return false;
        }
        let change = self.metrics.update_position(position);
        if let Some(handoff) = self.gesture.pending_handoff() {
            // Tolerate sub-pixel rounding by the viewport
            if (self.metrics.scroll_position() - handoff).abs() > HANDOFF_TOLERANCE {
                log::debug!("Scrolled away from hand-off at {}", handoff);
                self.gesture.clear_handoff();
            }
        }
        self.apply_change(change, now)
    }

    fn apply_change(&mut self, change: MetricsChange, now: Instant) -> bool {
        if change.is_empty() {
            return false;
        }
        log::trace!("Metrics changed: {:?}", change);
        self.visibility.notify_activity(now);
        true
    }

    /// Pointer entered (`true`) or left (`false`) the scroll area
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        if self.disposed || self.visibility.is_hovering() == hovered {
            return false;
        }
        self.visibility.set_hovering(hovered);
        if !hovered {
            self.gesture.clear_handoff();
        }
        true
    }

    /// Change the forced visibility override
    pub fn set_forced_visible(&mut self, forced_visible: Option<bool>) {
        self.config.forced_visible = forced_visible;
        self.visibility.set_forced_visible(forced_visible);
    }

    /// Feed a drag event from the thumb's gesture source
    pub fn pan(&mut self, event: &PanEvent) -> bool {
        if self.disposed {
            return false;
        }
        let geometry = self.geometry();
        let target = self.gesture.translate(event, &self.metrics, &geometry);
        let was_panning = self.visibility.is_panning();
        let panning = self.gesture.is_panning();
        self.visibility.set_panning(panning);

        if let Some(target) = target {
            self.driver.set_offset(target, None);
        }
        target.is_some() || was_panning || panning
    }

    /// Press on the track: move the thumb under the pointer so that a drag
    /// starting next continues from the jump target.
    pub fn track_press(&mut self, pointer_offset: f32) -> bool {
        if self.disposed {
            return false;
        }
        let geometry = self.geometry();
        if geometry.hidden {
            return false;
        }
        let Some(target) = track_jump_target(
            pointer_offset,
            geometry.size,
            self.metrics.container_size(),
            self.metrics.scroll_size(),
        ) else {
            return false;
        };

        log::debug!("Track press at {} jumps to {}", pointer_offset, target);
        self.driver.set_offset(target, None);
        // The viewport will clamp the write; the next drag starts where it lands
        self.gesture.hand_off(target.clamp(0.0, self.metrics.max_scroll()));
        true
    }

    /// Pointer released outside a drag the gesture source reported
    pub fn release(&mut self) -> bool {
        let had_handoff = self.gesture.pending_handoff().is_some();
        let ended = self.gesture.cancel();
        if ended {
            log::debug!("Pan session released");
            self.visibility.set_panning(false);
        }
        ended || had_handoff
    }

    /// Advance the hide timer. Returns true if visibility changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.disposed {
            return false;
        }
        let expired = self.visibility.tick(now);
        if expired && self.gesture.clear_handoff() {
            log::debug!("Hand-off dropped after idle timeout");
        }
        expired
    }

    /// When the pending hide timer fires, if any
    pub fn hide_deadline(&self) -> Option<Instant> {
        if self.disposed {
            return None;
        }
        self.visibility.hide_deadline()
    }

    /// Current thumb layout
    pub fn geometry(&self) -> ThumbGeometry {
        ThumbGeometry::compute(
            &self.metrics,
            &self.config,
            self.visibility.flags(),
            self.visibility.forced_visible(),
        )
    }

    pub fn thumb_hidden(&self) -> bool {
        self.geometry().hidden
    }

    /// Thumb rectangle inside the given track
    pub fn thumb_rect(&self, track: Rect) -> Rect {
        self.geometry().thumb_rect(track)
    }

    /// Whether the content should use its active style (thumb shown)
    pub fn content_active(&self) -> bool {
        !self.thumb_hidden()
    }

    pub fn is_panning(&self) -> bool {
        self.gesture.is_panning()
    }

    /// Current scroll offset along the configured axis
    pub fn scroll_position(&self) -> f32 {
        self.driver.offset(&self.metrics)
    }

    /// Scroll programmatically, animating over `duration` when given
    pub fn set_scroll_position(&mut self, offset: f32, duration: Option<Duration>) {
        if self.disposed {
            return;
        }
        self.driver.set_offset(offset, duration);
    }

    pub fn viewport(&self) -> &V {
        self.driver.viewport()
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        self.driver.viewport_mut()
    }

    /// Tear down: cancel the hide timer, drop any drag and ignore further
    /// events.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        log::debug!("Disposing scroll area");
        self.visibility.cancel_timer();
        self.gesture.cancel();
        self.visibility.set_panning(false);
        self.disposed = true;
    }
}
