//! Random helpers used when (re)launching the ball and laying out bricks

use rand::Rng;

/// Fair coin flip
#[inline]
pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.random_bool(0.5)
}

/// Uniformly random +1.0 or -1.0
#[inline]
pub fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if coin_flip(rng) { 1.0 } else { -1.0 }
}

/// Integer speed drawn from [low, low + span)
pub fn random_speed<R: Rng + ?Sized>(rng: &mut R, low: u32, span: u32) -> f32 {
    rng.random_range(low..low.saturating_add(span.max(1))) as f32
}

/// Integer coordinate drawn from [dim/4, dim/4 + dim/2), floored
pub fn central_coordinate<R: Rng + ?Sized>(rng: &mut R, dim: f32) -> f32 {
    let offset = rng.random::<f32>() * (dim / 2.0);
    (dim / 4.0 + offset).floor()
}
