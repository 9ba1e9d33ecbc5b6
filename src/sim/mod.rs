//! Simulation module
//!
//! All gameplay logic lives here:
//! - Unit timestep (one tick = one velocity step)
//! - Seeded RNG only (ball resets)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{CollisionOutcome, advance, reset_ball, resolve_collisions};
pub use state::{Ball, GameEvent, GameState, Mode, Paddle, Playfield, Role, Score, ScoreEvent};
pub use tick::{TickInput, TickReport, tick};
