//! Game state and core simulation types
//!
//! Everything the renderer reads lives here. The initializer writes it once,
//! afterwards only `tick` and the pointer handler mutate it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::init;
use crate::error::BrickfallError;
use crate::settings::Settings;

/// Display colors (0xRRGGBB, ignored by the simulation)
pub const BALL_COLOR: u32 = 0xffffff;
pub const PADDLE_COLOR: u32 = 0xffffff;
pub const BRICK_COLOR: u32 = 0x4169e1;

/// Drawing surface dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The ball. Position may overshoot the canvas for a tick before correction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub radius: f32,
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub color: u32,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            color: BALL_COLOR,
        }
    }

    /// Where the ball was before the last integration step
    #[inline]
    pub fn prev_pos(&self) -> Vec2 {
        self.pos - self.vel
    }
}

/// The player's paddle. `pos.y` is pinned to the bottom edge at init.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub thickness: f32,
    pub color: u32,
}

impl Paddle {
    pub fn new(width: f32, thickness: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            width,
            thickness,
            color: PADDLE_COLOR,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }
}

/// Last observed pointer position, canvas-local
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Mouse {
    pub pos: Vec2,
}

/// A single brick. Destroyed bricks stay in the grid as invisible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub visible: bool,
    pub color: u32,
}

/// Shared brick geometry, derived from canvas size and grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickLayout {
    pub cols: usize,
    pub rows: usize,
    pub width: f32,
    pub height: f32,
    pub gap: f32,
}

impl BrickLayout {
    pub fn new(canvas: Canvas, cols: usize, rows: usize, gap_ratio: f32) -> Self {
        let gap = (canvas.width * gap_ratio).floor();
        Self {
            cols,
            rows,
            width: canvas.width / cols as f32 - gap,
            height: canvas.height / 2.0 / rows as f32 - gap,
            gap,
        }
    }

    /// Horizontal distance between the left edges of adjacent bricks
    #[inline]
    pub fn pitch_x(&self) -> f32 {
        self.width + self.gap
    }

    /// Vertical distance between the top edges of adjacent bricks
    #[inline]
    pub fn pitch_y(&self) -> f32 {
        self.height + self.gap
    }

    /// Grid cell (col, row) containing a point. Unbounded: may be negative or
    /// past the grid, callers must go through `BrickGrid::index_of`.
    pub fn cell_at(&self, point: Vec2) -> (i64, i64) {
        let col = (point.x / self.pitch_x()).floor() as i64;
        let row = (point.y / self.pitch_y()).floor() as i64;
        (col, row)
    }

    /// Top-left corner of the brick at a cell
    pub fn brick_origin(&self, col: usize, row: usize) -> Vec2 {
        Vec2::new(
            self.width * col as f32 + self.gap * col as f32,
            self.height * row as f32 + self.gap * row as f32,
        )
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cols * self.rows
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fixed-size row-major brick grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    pub layout: BrickLayout,
    pub bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Linear index of a cell, or `None` if the cell lies outside the grid
    pub fn index_of(&self, col: i64, row: i64) -> Option<usize> {
        let cols = self.layout.cols as i64;
        let rows = self.layout.rows as i64;
        if col < 0 || col >= cols || row < 0 || row >= rows {
            return None;
        }
        let index = (row * cols + col) as usize;
        (index < self.bricks.len()).then_some(index)
    }

    /// Brick at a cell, if the cell is inside the grid
    pub fn cell(&self, col: i64, row: i64) -> Option<&Brick> {
        self.index_of(col, row).map(|i| &self.bricks[i])
    }

    /// True if a visible brick occupies the cell
    pub fn is_solid(&self, col: i64, row: i64) -> bool {
        self.cell(col, row).is_some_and(|b| b.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }
}

fn detached_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete game state (deterministic given the seed, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub settings: Settings,
    pub canvas: Canvas,
    pub ball: Ball,
    pub paddle: Paddle,
    pub mouse: Mouse,
    pub bricks: BrickGrid,
    /// Simulation tick counter
    pub time_ticks: u64,
    #[serde(skip, default = "detached_rng")]
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game and run the bootstrap sequence (ball, paddle, bricks)
    pub fn new(settings: Settings, canvas: Canvas, seed: u64) -> Self {
        let layout = BrickLayout::new(canvas, settings.cols, settings.rows, settings.brick_gap_ratio);
        let mut state = Self {
            seed,
            ball: Ball::new(settings.ball_radius),
            paddle: Paddle::new(settings.paddle_width, settings.paddle_thickness),
            mouse: Mouse::default(),
            bricks: BrickGrid {
                layout,
                bricks: Vec::new(),
            },
            settings,
            canvas,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };

        init::initialize(&mut state);
        state
    }

    /// Restart the session on the same canvas, continuing the RNG stream
    pub fn reset(&mut self) {
        self.time_ticks = 0;
        self.mouse = Mouse::default();
        init::initialize(self);
    }

    /// Restore a saved game. The RNG stream is rederived from seed and tick count.
    pub fn from_json(json: &str) -> Result<Self, BrickfallError> {
        let mut state: GameState = serde_json::from_str(json)?;
        state.settings.validate()?;
        state.rng = Pcg32::seed_from_u64(state.seed ^ state.time_ticks);
        Ok(state)
    }

    pub fn to_json(&self) -> Result<String, BrickfallError> {
        Ok(serde_json::to_string(self)?)
    }
}
