//! Collision detection and response for the brick grid and paddle
//!
//! The ball is treated as a point for collision purposes. Brick hits are
//! resolved on the grid itself: the cell the ball is in now, compared to the
//! cell it was in one tick ago, tells us which face it came through.

use super::state::{Ball, BrickGrid, Paddle};

/// What the ball bounced off during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Brick {
        /// Linear index into the grid
        index: usize,
        col: usize,
        row: usize,
        reflect_x: bool,
        reflect_y: bool,
    },
    Paddle,
}

/// Destroy the visible brick under the ball (if any) and bounce.
///
/// Only the axes whose crossed face is open (no visible neighbor on the side
/// the ball came from) are reflected. When both candidate neighbors are solid
/// the ball hit an inside corner and both axes reflect.
pub fn resolve_brick_hit(ball: &mut Ball, grid: &mut BrickGrid) -> Option<Collision> {
    let (col, row) = grid.layout.cell_at(ball.pos);
    let index = grid.index_of(col, row)?;
    if !grid.bricks[index].visible {
        return None;
    }
    grid.bricks[index].visible = false;

    let (prev_col, prev_row) = grid.layout.cell_at(ball.prev_pos());

    let mut reflect_x = prev_col != col && !grid.is_solid(prev_col, row);
    let mut reflect_y = prev_row != row && !grid.is_solid(col, prev_row);
    if !reflect_x && !reflect_y {
        reflect_x = true;
        reflect_y = true;
    }

    if reflect_x {
        ball.vel.x = -ball.vel.x;
    }
    if reflect_y {
        ball.vel.y = -ball.vel.y;
    }

    Some(Collision::Brick {
        index,
        col: col as usize,
        row: row as usize,
        reflect_x,
        reflect_y,
    })
}

/// True if the ball is strictly inside the band between the paddle's top
/// edge and the canvas bottom, within the paddle's horizontal extent
pub fn ball_over_paddle(ball: &Ball, paddle: &Paddle, canvas_height: f32) -> bool {
    ball.pos.x > paddle.left()
        && ball.pos.x < paddle.right()
        && ball.pos.y > paddle.top()
        && ball.pos.y < canvas_height
}

/// Bounce off the paddle, steering by how far from center the ball landed
pub fn resolve_paddle_hit(
    ball: &mut Ball,
    paddle: &Paddle,
    canvas_height: f32,
    redirect_factor: f32,
) -> Option<Collision> {
    if !ball_over_paddle(ball, paddle, canvas_height) {
        return None;
    }
    ball.vel.y = -ball.vel.y;
    ball.vel.x = (ball.pos.x - paddle.center_x()) * redirect_factor;
    Some(Collision::Paddle)
}
