//! Pointer input mapping
//!
//! Pointer events arrive at any rate between ticks; each one overwrites the
//! mouse position and paddle x, so only the latest survives to the next tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Canvas bounding rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
}

/// Document scroll offset
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub x: f32,
    pub y: f32,
}

/// Convert a viewport pointer position to canvas-local coordinates
#[inline]
pub fn to_canvas_local(pointer: Vec2, rect: CanvasRect, scroll: ScrollOffset) -> Vec2 {
    Vec2::new(pointer.x - rect.left - scroll.x, pointer.y - rect.top - scroll.y)
}

/// Record the pointer and center the paddle under it
pub fn update_paddle_position(
    state: &mut GameState,
    pointer_x: f32,
    pointer_y: f32,
    rect: CanvasRect,
    scroll: ScrollOffset,
) {
    state.mouse.pos = to_canvas_local(Vec2::new(pointer_x, pointer_y), rect, scroll);

    let paddle = &mut state.paddle;
    paddle.pos.x = state.mouse.pos.x - paddle.width / 2.0;
    if state.settings.clamp_paddle {
        let max_x = (state.canvas.width - paddle.width).max(0.0);
        paddle.pos.x = paddle.pos.x.clamp(0.0, max_x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Settings, Variant};
    use crate::sim::state::Canvas;
    use proptest::prelude::*;

    fn state_with(settings: Settings) -> GameState {
        GameState::new(settings, Canvas::new(800.0, 600.0), 3)
    }

    #[test]
    fn test_subtracts_rect_and_scroll() {
        let mut state = state_with(Settings::default());
        let rect = CanvasRect { left: 20.0, top: 30.0 };
        let scroll = ScrollOffset { x: 5.0, y: 10.0 };

        update_paddle_position(&mut state, 425.0, 140.0, rect, scroll);
        assert_eq!(state.mouse.pos, Vec2::new(400.0, 100.0));
        assert_eq!(state.paddle.pos.x, 350.0);
    }

    #[test]
    fn test_paddle_y_untouched() {
        let mut state = state_with(Settings::default());
        let y = state.paddle.pos.y;
        update_paddle_position(&mut state, 100.0, 5.0, CanvasRect::default(), ScrollOffset::default());
        assert_eq!(state.paddle.pos.y, y);
    }

    #[test]
    fn test_clamped_at_edges() {
        let mut state = state_with(Settings::default());
        update_paddle_position(&mut state, 10.0, 0.0, CanvasRect::default(), ScrollOffset::default());
        assert_eq!(state.paddle.pos.x, 0.0);
        update_paddle_position(&mut state, 790.0, 0.0, CanvasRect::default(), ScrollOffset::default());
        assert_eq!(state.paddle.pos.x, 700.0);
        // The mouse itself is never clamped
        assert_eq!(state.mouse.pos.x, 790.0);
    }

    #[test]
    fn test_unclamped_variant_leaves_canvas() {
        let mut state = state_with(Settings::from_variant(Variant::Classic));
        update_paddle_position(&mut state, 10.0, 0.0, CanvasRect::default(), ScrollOffset::default());
        assert_eq!(state.paddle.pos.x, -40.0);
    }

    #[test]
    fn test_last_write_wins() {
        let mut state = state_with(Settings::default());
        for x in [100.0, 600.0, 300.0] {
            update_paddle_position(&mut state, x, 0.0, CanvasRect::default(), ScrollOffset::default());
        }
        assert_eq!(state.paddle.pos.x, 250.0);
    }

    proptest! {
        #[test]
        fn prop_clamped_paddle_stays_on_canvas(x in -5000.0f32..5000.0, left in -100.0f32..100.0) {
            let mut state = state_with(Settings::default());
            let rect = CanvasRect { left, top: 0.0 };
            update_paddle_position(&mut state, x, 0.0, rect, ScrollOffset::default());
            prop_assert!(state.paddle.left() >= 0.0);
            prop_assert!(state.paddle.right() <= 800.0);
        }
    }
}
