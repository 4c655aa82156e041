//! Overlay scrollbar core for custom scroll areas.
//!
//! Tracks container size, content size and scroll offset, derives the thumb
//! layout from them, turns thumb drags and track presses into viewport writes,
//! and auto-hides the thumb when nothing is happening.

pub mod animation;
pub mod error;
pub mod layout;
pub mod widgets;

// Event loop hosting, for applications driven by calloop
pub mod platform;

pub use error::{Result, ScrollAreaError};

pub mod prelude {
    pub use crate::animation::{ScrollAnimation, TimingFunction};
    pub use crate::layout::{Rect, Size, Vector};
    pub use crate::platform::ScrollAreaLoop;
    pub use crate::widgets::scroll::{
        InputMode, PanDirection, ScrollAreaBuilder, ScrollAreaConfig, ScrollbarAxis,
    };
    pub use crate::widgets::scroll_area::{
        EventResponse, MemoryViewport, PanEvent, ScrollArea, ScrollAreaEvent, ThumbGeometry,
        Viewport,
    };
    pub use crate::ScrollAreaError;
}
