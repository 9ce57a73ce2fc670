//! Session bootstrap: ball launch, paddle placement, brick layout

use rand::Rng;

use super::rng::{central_coordinate, coin_flip, random_sign, random_speed};
use super::state::{BRICK_COLOR, Ball, Brick, BrickGrid, BrickLayout, Canvas, GameState, Paddle};
use crate::settings::{InitialBricks, Settings};

/// Run the full bootstrap sequence in order: ball, paddle, bricks
pub fn initialize(state: &mut GameState) {
    let canvas = state.canvas;
    init_ball(&mut state.ball, canvas, &state.settings, &mut state.rng);
    init_paddle(&mut state.paddle, canvas);
    init_bricks(&mut state.bricks, canvas, &state.settings, &mut state.rng);
    log::info!(
        "Initialized {}x{} canvas: {} bricks ({}x{} @ {}x{}, gap {})",
        canvas.width,
        canvas.height,
        state.bricks.visible_count(),
        state.bricks.layout.cols,
        state.bricks.layout.rows,
        state.bricks.layout.width,
        state.bricks.layout.height,
        state.bricks.layout.gap,
    );
}

/// Place the ball somewhere in the central half of the canvas and give it a
/// random integer speed and direction on each axis. Also used to respawn.
pub fn init_ball<R: Rng + ?Sized>(ball: &mut Ball, canvas: Canvas, settings: &Settings, rng: &mut R) {
    ball.pos.x = central_coordinate(rng, canvas.width);
    ball.pos.y = central_coordinate(rng, canvas.height);

    let (low, span) = (settings.speed_low_bound, settings.speed_span);
    ball.vel.x = random_speed(rng, low, span) * random_sign(rng);
    ball.vel.y = random_speed(rng, low, span) * random_sign(rng);

    log::debug!("Ball launched at {} with velocity {}", ball.pos, ball.vel);
}

/// Center the paddle horizontally, flush with the bottom edge
pub fn init_paddle(paddle: &mut Paddle, canvas: Canvas) {
    paddle.pos.x = canvas.width / 2.0 - paddle.width / 2.0;
    paddle.pos.y = canvas.height - paddle.thickness;
}

/// Rebuild the whole brick grid over the top half of the canvas
pub fn init_bricks<R: Rng + ?Sized>(
    grid: &mut BrickGrid,
    canvas: Canvas,
    settings: &Settings,
    rng: &mut R,
) {
    let layout = BrickLayout::new(canvas, settings.cols, settings.rows, settings.brick_gap_ratio);

    grid.layout = layout;
    grid.bricks.clear();
    grid.bricks.reserve(layout.len());
    for i in 0..layout.len() {
        let col = i % layout.cols;
        let row = i / layout.cols;
        let visible = match settings.initial_bricks {
            InitialBricks::AllVisible => true,
            InitialBricks::Random => coin_flip(rng),
        };
        grid.bricks.push(Brick {
            pos: layout.brick_origin(col, row),
            visible,
            color: BRICK_COLOR,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Variant;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_init_ball_ranges() {
        let canvas = Canvas::new(800.0, 600.0);
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut ball = Ball::new(10.0);

        for _ in 0..200 {
            init_ball(&mut ball, canvas, &settings, &mut rng);
            assert!((200.0..600.0).contains(&ball.pos.x));
            assert!((150.0..450.0).contains(&ball.pos.y));
            assert!((3.0..13.0).contains(&ball.vel.x.abs()));
            assert!((3.0..13.0).contains(&ball.vel.y.abs()));
        }
    }

    #[test]
    fn test_init_paddle_flush_bottom() {
        let mut paddle = Paddle::new(100.0, 10.0);
        init_paddle(&mut paddle, Canvas::new(800.0, 600.0));
        assert_eq!(paddle.pos, Vec2::new(350.0, 590.0));
    }

    #[test]
    fn test_init_bricks_layout() {
        let canvas = Canvas::new(800.0, 600.0);
        let state = GameState::new(Settings::default(), canvas, 1);
        let grid = &state.bricks;

        assert_eq!(grid.bricks.len(), 100);
        assert_eq!(grid.visible_count(), 100);
        assert_eq!(grid.bricks[0].pos, Vec2::ZERO);
        // index 13 -> col 3, row 1
        assert_eq!(grid.bricks[13].pos, Vec2::new(78.0 * 3.0 + 2.0 * 3.0, 28.0 + 2.0));
        // bricks stay in the top half
        let last = grid.bricks.last().unwrap();
        assert!(last.pos.y + grid.layout.height <= canvas.height / 2.0);
    }

    #[test]
    fn test_init_bricks_resets_grid() {
        let mut state = GameState::new(Settings::default(), Canvas::new(800.0, 600.0), 1);
        state.bricks.bricks[4].visible = false;
        state.bricks.bricks[40].visible = false;

        let canvas = state.canvas;
        init_bricks(&mut state.bricks, canvas, &state.settings, &mut state.rng);
        assert_eq!(state.bricks.bricks.len(), 100);
        assert_eq!(state.bricks.visible_count(), 100);
    }

    #[test]
    fn test_random_initial_bricks() {
        let settings = Settings::from_variant(Variant::Scattered);
        let state = GameState::new(settings, Canvas::new(800.0, 600.0), 5);
        let visible = state.bricks.visible_count();
        assert_eq!(state.bricks.bricks.len(), 100);
        assert!(visible > 0 && visible < 100);
    }
}
