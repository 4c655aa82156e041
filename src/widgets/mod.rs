pub mod scroll;
pub mod scroll_area;

pub use scroll::{InputMode, PanDirection, ScrollAreaBuilder, ScrollAreaConfig, ScrollbarAxis};
pub use scroll_area::{
    EventResponse, MemoryViewport, PanEvent, ScrollArea, ScrollAreaEvent, ThumbGeometry, Viewport,
};
