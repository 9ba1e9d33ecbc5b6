//! Ball movement and collision response
//!
//! Unit timestep: one call to [`advance`] moves the ball by its velocity.
//! Boundary tests are inclusive, so a ball sitting exactly on a wall or paddle
//! edge bounces and is still in play that frame.

use rand::Rng;

use super::state::{Ball, Paddle, Playfield, Role, ScoreEvent};

/// What [`resolve_collisions`] did this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    /// Vertical velocity was reflected off the top or bottom wall
    pub wall_bounce: bool,
    /// Paddle the ball bounced off, if any
    pub paddle_hit: Option<Role>,
    /// Ball left the playfield
    pub score: Option<ScoreEvent>,
}

/// Move the ball by one tick of velocity
#[inline]
pub fn advance(ball: &mut Ball) {
    ball.pos += ball.vel;
}

/// Resolve walls, paddles and exits for the ball's current position.
///
/// `near` is the left (agent) paddle and `far` the right (human) paddle.
/// Paddle checks form an else-chain: near first, then far, and only when
/// neither is touched does the ball get tested against the side exits.
pub fn resolve_collisions(
    ball: &mut Ball,
    near: &Paddle,
    far: &Paddle,
    playfield: &Playfield,
) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();

    if ball.pos.y <= ball.radius || ball.pos.y >= playfield.height - ball.radius {
        ball.vel.y = -ball.vel.y;
        outcome.wall_bounce = true;
    }

    if ball.pos.x <= near.pos.x + near.size.x + ball.radius && near.spans_y(ball.pos.y) {
        ball.vel.x = -ball.vel.x;
        outcome.paddle_hit = Some(near.role);
    } else if ball.pos.x >= far.pos.x - ball.radius && far.spans_y(ball.pos.y) {
        ball.vel.x = -ball.vel.x;
        outcome.paddle_hit = Some(far.role);
    } else if ball.pos.x <= 0.0 {
        // Got past the near paddle
        outcome.score = Some(ScoreEvent { scorer: far.role });
    } else if ball.pos.x >= playfield.width {
        outcome.score = Some(ScoreEvent { scorer: near.role });
    }

    outcome
}

/// Serve again from the centre line toward the side that just scored
pub fn reset_ball<R: Rng>(ball: &mut Ball, playfield: &Playfield, rng: &mut R) {
    let lo = ball.radius.ceil() as i32;
    let hi = (playfield.height - ball.radius).floor() as i32;

    ball.pos.x = playfield.center_x();
    ball.pos.y = if hi >= lo {
        rng.random_range(lo..=hi) as f32
    } else {
        playfield.center_y()
    };
    ball.vel.x = -ball.vel.x;
}
