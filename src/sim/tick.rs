//! Simulation tick
//!
//! One active tick: human paddle input, ball step, collisions and scoring,
//! then the controller acts and learns from the resulting position.

use super::collision::{advance, reset_ball, resolve_collisions};
use super::state::{GameEvent, GameState};
use crate::agent::{Action, PaddleController, observe, reward};

/// Held keys for the human paddle this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
}

/// What an active tick produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    /// Controller output before its update
    pub predicted: f32,
    /// Reward the controller trained toward
    pub reward: f32,
    /// Squared error of that update
    pub loss: f32,
}

/// Advance the game by one tick. Returns `None` while idle.
pub fn tick(
    state: &mut GameState,
    controller: &mut PaddleController,
    input: &TickInput,
) -> Option<TickReport> {
    if !state.is_active() {
        return None;
    }

    state.time_ticks += 1;
    let mut report = TickReport::default();

    // Both keys held moves up then down, like the raw key polling it models
    if input.up {
        state.player.move_up();
    }
    if input.down {
        state.player.move_down(&state.playfield);
    }

    advance(&mut state.ball);
    let outcome =
        resolve_collisions(&mut state.ball, &state.agent, &state.player, &state.playfield);

    if outcome.wall_bounce {
        report.events.push(GameEvent::WallBounce);
    }
    if let Some(role) = outcome.paddle_hit {
        report.events.push(GameEvent::PaddleHit(role));
    }
    if let Some(event) = outcome.score {
        state.score.record(event.scorer);
        reset_ball(&mut state.ball, &state.playfield, &mut state.rng);
        log::info!(
            "{:?} scored: player {} - agent {}",
            event.scorer,
            state.score.player,
            state.score.agent
        );
        report.events.push(GameEvent::Scored(event));
    }

    let features = observe(&state.ball, &state.agent);
    let predicted = controller.predict(&features);
    match Action::from_prediction(predicted) {
        Action::Down => state.agent.move_down(&state.playfield),
        Action::Up => state.agent.move_up(),
    }

    let target = reward(&state.ball, &state.agent);
    report.loss = controller.update(&features, target);
    report.predicted = predicted;
    report.reward = target;

    log::trace!(
        "tick {} ball={:?} agent_y={} predicted={} reward={}",
        state.time_ticks,
        state.ball.pos,
        state.agent.pos.y,
        predicted,
        target
    );

    Some(report)
}
