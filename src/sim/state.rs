//! Game state and core simulation types
//!
//! Everything the tick mutates lives here. Nothing is persisted: the state is
//! built from [`Settings`] at session start and dropped at exit.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Start menu, nothing simulates
    Idle,
    /// Ball, paddles and controller run every tick
    Active,
}

/// Who controls a paddle (and who a point goes to)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Human,
    Agent,
}

/// Rectangular simulation area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Horizontal centre, halved the integer way the classic layout does
    pub fn center_x(&self) -> f32 {
        (self.width / 2.0).floor()
    }

    pub fn center_y(&self) -> f32 {
        (self.height / 2.0).floor()
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Ball is travelling toward the left (agent) side
    #[inline]
    pub fn heading_left(&self) -> bool {
        self.vel.x < 0.0
    }
}

/// A paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Pixels per move
    pub speed: f32,
    pub role: Role,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2, speed: f32, role: Role) -> Self {
        Self {
            pos,
            size,
            speed,
            role,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Inclusive vertical range test
    #[inline]
    pub fn spans_y(&self, y: f32) -> bool {
        y >= self.top() && y <= self.bottom()
    }

    /// Move up by one step, stopping at the top wall
    pub fn move_up(&mut self) {
        if self.pos.y > 0.0 {
            self.pos.y = (self.pos.y - self.speed).max(0.0);
        }
    }

    /// Move down by one step, stopping at the bottom wall
    pub fn move_down(&mut self, playfield: &Playfield) {
        let floor = playfield.height - self.size.y;
        if self.pos.y < floor {
            self.pos.y = (self.pos.y + self.speed).min(floor);
        }
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub agent: u32,
}

impl Score {
    /// Award one point
    pub fn record(&mut self, scorer: Role) {
        match scorer {
            Role::Human => self.player += 1,
            Role::Agent => self.agent += 1,
        }
    }
}

/// Ball left the playfield; the point goes to `scorer`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub scorer: Role,
}

/// Things that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off a paddle
    PaddleHit(Role),
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Point scored
    Scored(ScoreEvent),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub playfield: Playfield,
    pub mode: Mode,
    pub ball: Ball,
    /// Human paddle (right side)
    pub player: Paddle,
    /// Agent paddle (left side)
    pub agent: Paddle,
    pub score: Score,
    /// Active ticks simulated
    pub time_ticks: u64,
    /// Seed the session RNG was built from
    pub seed: u64,
    /// Ball reset RNG
    pub rng: Pcg32,
}

impl GameState {
    /// Build the opening layout from settings
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let playfield = settings.playfield;
        let size = Vec2::new(settings.paddle.width, settings.paddle.height);
        let paddle_y = playfield.center_y() - (settings.paddle.height / 2.0).floor();

        let player = Paddle::new(
            Vec2::new(playfield.width - settings.paddle.player_inset, paddle_y),
            size,
            settings.paddle.player_speed,
            Role::Human,
        );
        let agent = Paddle::new(
            Vec2::new(settings.paddle.agent_inset, paddle_y),
            size,
            settings.agent_speed(),
            Role::Agent,
        );
        let ball = Ball::new(
            Vec2::new(playfield.center_x(), playfield.center_y()),
            Vec2::new(settings.ball.speed_x, settings.ball.speed_y),
            settings.ball.radius,
        );

        Self {
            playfield,
            mode: Mode::Idle,
            ball,
            player,
            agent,
            score: Score::default(),
            time_ticks: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Idle -> Active; no-op once active
    pub fn start(&mut self) {
        if self.mode == Mode::Idle {
            log::info!("Round started");
            self.mode = Mode::Active;
        }
    }

    pub fn is_active(&self) -> bool {
        self.mode == Mode::Active
    }
}
