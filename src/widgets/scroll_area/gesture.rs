//! Translation of thumb drags into scroll offsets.

use crate::layout::Vector;
use crate::widgets::scroll::PanDirection;

use super::geometry::ThumbGeometry;
use super::metrics::Metrics;

/// One step of a drag delivered by the gesture source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanEvent {
    /// First event of the drag
    pub is_first: bool,
    /// Last event of the drag (pointer released)
    pub is_final: bool,
    /// Dominant direction of the drag relative to where it started
    pub direction: PanDirection,
    /// Distance travelled since the drag started, as magnitudes per axis
    pub distance: Vector,
}

impl PanEvent {
    pub fn start(direction: PanDirection, distance: Vector) -> Self {
        Self {
            is_first: true,
            is_final: false,
            direction,
            distance,
        }
    }

    pub fn moved(direction: PanDirection, distance: Vector) -> Self {
        Self {
            is_first: false,
            is_final: false,
            direction,
            distance,
        }
    }

    pub fn end(direction: PanDirection, distance: Vector) -> Self {
        Self {
            is_first: false,
            is_final: true,
            direction,
            distance,
        }
    }
}

/// State of an active drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSession {
    /// Scroll offset when the drag started; deltas accumulate from here
    pub reference_position: f32,
}

/// Converts thumb drags into absolute scroll offsets.
///
/// Owns at most one [`PanSession`]; the gesture source is single-pointer so
/// sessions never overlap. A track press leaves a pending hand-off reference
/// that the next drag start picks up instead of the observed position.
#[derive(Debug, Clone, Default)]
pub struct GestureTranslator {
    session: Option<PanSession>,
    handoff: Option<f32>,
}

impl GestureTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_panning(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<PanSession> {
        self.session
    }

    /// Reference waiting for the next drag start, if any
    pub fn pending_handoff(&self) -> Option<f32> {
        self.handoff
    }

    /// Let the next drag start from `reference_position`, e.g. after a track
    /// press relocated the thumb under the pointer.
    ///
    /// No session is opened: a press that never turns into a drag leaves
    /// nothing running.
    pub fn hand_off(&mut self, reference_position: f32) {
        log::debug!("Pan reference handed off at {}", reference_position);
        self.handoff = Some(reference_position);
    }

    /// Forget a pending hand-off. Returns true if one was pending.
    pub fn clear_handoff(&mut self) -> bool {
        self.handoff.take().is_some()
    }

    /// Drop the current session and any pending hand-off
    pub fn cancel(&mut self) -> bool {
        self.handoff = None;
        self.session.take().is_some()
    }

    /// Feed one drag event. Returns the offset to write, if any.
    ///
    /// A first event on a hidden thumb is ignored along with the rest of its
    /// gesture. A first event consumes a pending hand-off reference in place
    /// of the observed scroll position.
    pub fn translate(
        &mut self,
        event: &PanEvent,
        metrics: &Metrics,
        geometry: &ThumbGeometry,
    ) -> Option<f32> {
        if event.is_first && self.session.is_none() {
            let handoff = self.handoff.take();
            if geometry.hidden {
                return None;
            }
            let reference_position = handoff.unwrap_or_else(|| metrics.scroll_position());
            log::debug!("Pan session started at {}", reference_position);
            self.session = Some(PanSession { reference_position });
        }

        let session = self.session?;

        if event.is_final {
            log::debug!("Pan session ended");
            self.session = None;
        }

        let multiplier = drag_multiplier(
            metrics.container_size(),
            metrics.scroll_size(),
            geometry.size,
        )?;
        let axis = metrics.axis();
        let sign = if event.direction == axis.forward() {
            1.0
        } else {
            -1.0
        };
        let distance = event.distance.along(axis).abs();

        Some(session.reference_position + sign * distance * multiplier)
    }
}

/// Ratio between content-space and thumb-space movement.
///
/// `None` when the thumb cannot travel or there is nothing to scroll.
pub fn drag_multiplier(container: f32, content: f32, thumb_size: f32) -> Option<f32> {
    let range = content - container;
    let travel = container - thumb_size;
    if range <= 0.0 || travel <= 0.0 {
        return None;
    }
    let multiplier = range / travel;
    multiplier.is_finite().then_some(multiplier)
}
