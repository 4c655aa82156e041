//! Hosting a scroll area on a calloop event loop.
//!
//! Observer, gesture and timer callbacks all run on the loop thread, one at a
//! time. The hide timer is a single `calloop` timer source that is re-armed
//! whenever the scroll area's deadline moves and removed on teardown.

use std::time::{Duration, Instant};

use calloop::timer::{TimeoutAction, Timer};
use calloop::{EventLoop, RegistrationToken};

use crate::error::Result;
use crate::widgets::scroll_area::{EventResponse, ScrollArea, ScrollAreaEvent, Viewport};

struct ArmedTimer {
    token: RegistrationToken,
    deadline: Instant,
}

/// Event loop that owns a [`ScrollArea`] and fires its hide timer
pub struct ScrollAreaLoop<V: Viewport + 'static> {
    event_loop: EventLoop<'static, ScrollArea<V>>,
    area: ScrollArea<V>,
    armed: Option<ArmedTimer>,
}

impl<V: Viewport + 'static> ScrollAreaLoop<V> {
    pub fn new(area: ScrollArea<V>) -> Result<Self> {
        let event_loop = EventLoop::try_new()?;
        let mut host = Self {
            event_loop,
            area,
            armed: None,
        };
        host.sync_hide_timer()?;
        Ok(host)
    }

    pub fn area(&self) -> &ScrollArea<V> {
        &self.area
    }

    /// Handle to register further sources (observers, gesture input) that
    /// receive the scroll area as callback data
    pub fn handle(&self) -> calloop::LoopHandle<'static, ScrollArea<V>> {
        self.event_loop.handle()
    }

    /// Dispatch an event to the scroll area and re-arm the hide timer
    pub fn handle_event(&mut self, event: &ScrollAreaEvent) -> Result<EventResponse> {
        let response = self.area.event(event, Instant::now());
        self.sync_hide_timer()?;
        Ok(response)
    }

    /// Mutate the scroll area directly, then re-arm the hide timer
    pub fn with_area<R>(&mut self, f: impl FnOnce(&mut ScrollArea<V>) -> R) -> Result<R> {
        let result = f(&mut self.area);
        self.sync_hide_timer()?;
        Ok(result)
    }

    /// Wait up to `timeout` for sources to become ready and run their
    /// callbacks
    pub fn dispatch(&mut self, timeout: Option<Duration>) -> Result<()> {
        self.event_loop.dispatch(timeout, &mut self.area)?;
        self.sync_hide_timer()
    }

    /// Tear down the scroll area and remove the hide timer source
    pub fn dispose(&mut self) {
        self.area.dispose();
        self.disarm();
    }

    /// Keep exactly one timer source registered for the current deadline
    fn sync_hide_timer(&mut self) -> Result<()> {
        let deadline = self.area.hide_deadline();
        if self.armed.as_ref().map(|armed| armed.deadline) == deadline {
            return Ok(());
        }

        self.disarm();

        if let Some(deadline) = deadline {
            let token = self.event_loop.handle().insert_source(
                Timer::from_deadline(deadline),
                |fired_at, _, area: &mut ScrollArea<V>| {
                    if area.tick(fired_at) {
                        log::trace!("Thumb hidden after inactivity");
                    }
                    TimeoutAction::Drop
                },
            )?;
            log::trace!("Hide timer armed");
            self.armed = Some(ArmedTimer { token, deadline });
        }

        Ok(())
    }

    fn disarm(&mut self) {
        if let Some(armed) = self.armed.take() {
            // Already-fired timers were dropped by the loop; removing a stale
            // token is a no-op
            self.event_loop.handle().remove(armed.token);
        }
    }
}

impl<V: Viewport + 'static> Drop for ScrollAreaLoop<V> {
    fn drop(&mut self) {
        self.dispose();
    }
}
