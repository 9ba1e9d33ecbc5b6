//! Robo Pong - human vs learning robot
//!
//! Core modules:
//! - `sim`: Simulation (physics, collisions, scoring, per-tick orchestration)
//! - `agent`: Online-learning paddle controller (MLP + Adam)
//! - `game`: Game loop driving the simulation through platform delegates
//! - `platform`: Input abstraction and the headless platform
//! - `renderer`: Rendering delegate
//! - `audio`: Audio delegate
//! - `settings`: Data-driven configuration
//! - `ui`: Start/exit menu hit-testing

pub mod agent;
pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use agent::PaddleController;
pub use game::{Game, SessionSummary};
pub use settings::{Settings, SettingsError};

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Distance from the right wall to the human paddle's left edge
    pub const PLAYER_INSET: f32 = 20.0;
    /// Distance from the left wall to the agent paddle's left edge
    pub const AGENT_INSET: f32 = 10.0;
    pub const PLAYER_SPEED: f32 = 0.6;
    /// Nominal agent speed; the agent paddle moves at half of this
    pub const AGENT_SPEED: f32 = 5.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_X: f32 = 0.8;
    pub const BALL_SPEED_Y: f32 = 0.8;

    /// Controller defaults
    pub const HIDDEN_UNITS: usize = 64;
    pub const LEARNING_RATE: f32 = 0.001;
    pub const ADAM_BETA1: f32 = 0.9;
    pub const ADAM_BETA2: f32 = 0.999;
    pub const ADAM_EPSILON: f32 = 1e-8;

    /// Default tick pacing for interactive play
    pub const TICK_RATE_HZ: u32 = 240;
    /// Ticks between training log lines
    pub const TRAINING_LOG_INTERVAL: u64 = 1000;
}
