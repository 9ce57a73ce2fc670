//! Brickfall - A Breakout-style brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, game state)
//! - `settings`: Data-driven tunables and variant presets
//! - `error`: Configuration/driver errors (the simulation itself is infallible)

pub mod error;
pub mod settings;
pub mod sim;

pub use error::BrickfallError;
pub use settings::{BottomExit, InitialBricks, Settings, Variant};

/// Game configuration constants (defaults for `Settings`)
pub mod consts {
    /// Nominal tick rate of the external scheduler
    pub const FPS: u32 = 30;
    /// Game time covered by one tick (seconds)
    pub const SIM_DT: f32 = 1.0 / FPS as f32;

    /// Brick grid dimensions
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_ROWS: usize = 10;
    /// Gap between bricks as a fraction of canvas width (floored to whole pixels)
    pub const BRICK_GAP_RATIO: f32 = 0.0025;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Lowest per-axis launch speed (pixels/tick)
    pub const SPEED_LOW_BOUND: u32 = 3;
    /// Width of the launch speed range: speeds are drawn from [low, low + span)
    pub const SPEED_SPAN: u32 = 10;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_THICKNESS: f32 = 10.0;
    /// Horizontal rebound velocity per pixel of offset from paddle center
    pub const PADDLE_REDIRECT_FACTOR: f32 = 0.4;
}
