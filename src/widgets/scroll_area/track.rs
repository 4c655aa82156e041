//! Jumping to a position by pressing on the track.

/// Scroll offset that centers the thumb under a press on the track.
///
/// `pointer_offset` is measured from the track origin along the active axis.
/// The result is not clamped; the viewport bounds it.
pub fn track_jump_target(
    pointer_offset: f32,
    thumb_size: f32,
    container_size: f32,
    scroll_size: f32,
) -> Option<f32> {
    if container_size <= 0.0 || !pointer_offset.is_finite() {
        return None;
    }
    let thumb_start = pointer_offset - thumb_size / 2.0;
    Some(thumb_start / container_size * scroll_size)
}
