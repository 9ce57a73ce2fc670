//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod init;
pub mod input;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{Collision, ball_over_paddle, resolve_brick_hit, resolve_paddle_hit};
pub use init::{init_ball, init_bricks, init_paddle, initialize};
pub use input::{CanvasRect, ScrollOffset, to_canvas_local, update_paddle_position};
pub use rng::{coin_flip, random_sign};
pub use state::{Ball, Brick, BrickGrid, BrickLayout, Canvas, GameState, Mouse, Paddle};
pub use tick::{TickReport, tick};
