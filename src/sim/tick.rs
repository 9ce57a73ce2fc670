//! Fixed timestep simulation tick
//!
//! One call advances the game by one frame: wall handling, then at most one
//! of {brick hit, paddle hit}, then Euler integration with the updated
//! velocity.

use super::collision::{Collision, resolve_brick_hit, resolve_paddle_hit};
use super::init::init_ball;
use super::state::GameState;
use crate::settings::BottomExit;

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Ball dropped past the bottom edge and was relaunched
    pub missed: bool,
    pub collision: Option<Collision>,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) -> TickReport {
    let mut report = TickReport::default();
    state.time_ticks += 1;

    let canvas = state.canvas;
    let ball = &mut state.ball;

    // Walls
    if ball.pos.x > canvas.width || ball.pos.x < 0.0 {
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.y < 0.0 {
        ball.vel.y = -ball.vel.y;
    }
    if ball.pos.y > canvas.height {
        match state.settings.bottom_exit {
            BottomExit::Respawn => {
                log::debug!("Tick {}: ball missed at x={}", state.time_ticks, ball.pos.x);
                init_ball(ball, canvas, &state.settings, &mut state.rng);
                report.missed = true;
            }
            BottomExit::Reflect => ball.vel.y = -ball.vel.y,
        }
    }

    // Bricks take priority over the paddle
    report.collision = resolve_brick_hit(ball, &mut state.bricks).or_else(|| {
        resolve_paddle_hit(
            ball,
            &state.paddle,
            canvas.height,
            state.settings.paddle_redirect_factor,
        )
    });

    match report.collision {
        Some(Collision::Brick {
            col,
            row,
            reflect_x,
            reflect_y,
            ..
        }) => log::debug!(
            "Tick {}: brick ({}, {}) destroyed, reflect x={} y={}, {} left",
            state.time_ticks,
            col,
            row,
            reflect_x,
            reflect_y,
            state.bricks.visible_count()
        ),
        Some(Collision::Paddle) => {
            log::debug!("Tick {}: paddle bounce, vel={}", state.time_ticks, ball.vel)
        }
        None => {}
    }

    ball.pos += ball.vel;

    report
}
