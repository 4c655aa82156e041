//! Thumb visibility state machine and its auto-hide timer.

use std::time::{Duration, Instant};

use bitflags::bitflags;

bitflags! {
    /// Independent reasons for the thumb to be shown
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct VisibilityFlags: u8 {
        /// Pointer is over the scroll area
        const HOVERING     = 0b001;
        /// Recent scroll or resize activity, cleared by the hide timer
        const TEMP_SHOWING = 0b010;
        /// Thumb is being dragged
        const PANNING      = 0b100;
    }
}

impl VisibilityFlags {
    /// Whether these flags ask for the thumb to be shown.
    ///
    /// A forced value replaces the hover flag: `Some(true)` always shows,
    /// `Some(false)` ignores hover entirely.
    pub fn wants_thumb(&self, forced_visible: Option<bool>) -> bool {
        let pinned = match forced_visible {
            Some(forced) => forced,
            None => self.contains(VisibilityFlags::HOVERING),
        };
        pinned || self.intersects(VisibilityFlags::TEMP_SHOWING | VisibilityFlags::PANNING)
    }
}

/// Cancellable single-shot timer expressed as a deadline.
///
/// Starting the timer replaces any pending deadline, so at most one firing
/// is ever scheduled.
#[derive(Debug, Clone, Default)]
pub struct HideTimer {
    deadline: Option<Instant>,
}

impl HideTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the timer to fire `delay` after `now`
    pub fn start(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once when `now` has reached the deadline
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Tracks why the thumb is visible and expires activity-driven visibility
#[derive(Debug, Clone)]
pub struct VisibilityController {
    flags: VisibilityFlags,
    forced_visible: Option<bool>,
    hide_delay: Duration,
    timer: HideTimer,
}

impl VisibilityController {
    pub fn new(hide_delay: Duration, forced_visible: Option<bool>) -> Self {
        Self {
            flags: VisibilityFlags::empty(),
            forced_visible,
            hide_delay,
            timer: HideTimer::new(),
        }
    }

    pub fn flags(&self) -> VisibilityFlags {
        self.flags
    }

    pub fn forced_visible(&self) -> Option<bool> {
        self.forced_visible
    }

    pub fn set_forced_visible(&mut self, forced_visible: Option<bool>) {
        self.forced_visible = forced_visible;
    }

    pub fn is_hovering(&self) -> bool {
        self.flags.contains(VisibilityFlags::HOVERING)
    }

    pub fn is_temp_showing(&self) -> bool {
        self.flags.contains(VisibilityFlags::TEMP_SHOWING)
    }

    pub fn is_panning(&self) -> bool {
        self.flags.contains(VisibilityFlags::PANNING)
    }

    /// Whether the flags ask for the thumb, ignoring overflow
    pub fn wants_thumb(&self) -> bool {
        self.flags.wants_thumb(self.forced_visible)
    }

    /// Record scroll or resize activity at `now`.
    ///
    /// Shows the thumb temporarily and (re)starts the hide countdown.
    pub fn notify_activity(&mut self, now: Instant) {
        if !self.is_temp_showing() {
            log::trace!("Showing thumb for {:?}", self.hide_delay);
            self.flags.insert(VisibilityFlags::TEMP_SHOWING);
        }
        self.timer.start(now, self.hide_delay);
    }

    /// Advance the hide timer. Returns true if visibility changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.timer.fire_if_due(now) {
            return false;
        }
        log::trace!("Hide timer expired");
        let was_showing = self.is_temp_showing();
        self.flags.remove(VisibilityFlags::TEMP_SHOWING);
        was_showing
    }

    /// Pointer entered or left the scroll area. Does not touch the timer.
    pub fn set_hovering(&mut self, hovering: bool) {
        self.flags.set(VisibilityFlags::HOVERING, hovering);
    }

    pub fn set_panning(&mut self, panning: bool) {
        self.flags.set(VisibilityFlags::PANNING, panning);
    }

    /// Deadline of the pending hide timer, if any
    pub fn hide_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Cancel the pending hide timer
    pub fn cancel_timer(&mut self) {
        self.timer.cancel();
    }
}
