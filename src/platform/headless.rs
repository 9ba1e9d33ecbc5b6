//! Windowless platform
//!
//! Stands in for a human: clicks Start, chases the ball with the right
//! paddle, and closes the session after a fixed number of active frames.

use glam::Vec2;

use super::{InputEvent, InputSource};
use crate::audio::{AudioSink, SoundEffect};
use crate::renderer::{Renderer, score_labels};
use crate::sim::{GameState, Score, TickInput};
use crate::ui::Menu;

/// Pixels the ball may drift from the paddle centre before it reacts
pub const DEFAULT_DEAD_ZONE: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    start_click: Vec2,
    max_ticks: u64,
    dead_zone: f32,
    clicked: bool,
    active_frames: u64,
    /// Ball y minus paddle centre y, from the last rendered frame
    offset: Option<f32>,
    last_score: Score,
    sounds: u64,
}

impl Autopilot {
    pub fn new(menu: &Menu, max_ticks: u64) -> Self {
        Self {
            start_click: menu.start.rect.center(),
            max_ticks,
            dead_zone: DEFAULT_DEAD_ZONE,
            clicked: false,
            active_frames: 0,
            offset: None,
            last_score: Score::default(),
            sounds: 0,
        }
    }

    pub fn with_dead_zone(mut self, dead_zone: f32) -> Self {
        self.dead_zone = dead_zone.max(0.0);
        self
    }

    /// Frames rendered while the round was active
    pub fn active_frames(&self) -> u64 {
        self.active_frames
    }

    /// Sound effects requested so far
    pub fn sounds(&self) -> u64 {
        self.sounds
    }
}

impl InputSource for Autopilot {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        if !self.clicked {
            self.clicked = true;
            return vec![InputEvent::Click(self.start_click)];
        }
        if self.active_frames >= self.max_ticks {
            log::info!("Autopilot finished after {} frames", self.active_frames);
            return vec![InputEvent::Terminate];
        }
        Vec::new()
    }

    fn held_keys(&self) -> TickInput {
        match self.offset {
            Some(d) if d < -self.dead_zone => TickInput { up: true, down: false },
            Some(d) if d > self.dead_zone => TickInput { up: false, down: true },
            _ => TickInput::default(),
        }
    }
}

impl Renderer for Autopilot {
    fn render(&mut self, state: &GameState, _menu: &Menu) {
        if !state.is_active() {
            return;
        }
        self.active_frames += 1;

        let center = state.player.pos.y + state.player.size.y / 2.0;
        self.offset = Some(state.ball.pos.y - center);

        if state.score != self.last_score {
            let [player, agent] = score_labels(&state.score, &state.playfield);
            log::info!("Score {} : {} (frame {})", player.text, agent.text, self.active_frames);
            self.last_score = state.score;
        }
    }
}

impl AudioSink for Autopilot {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        self.sounds += 1;
        log::trace!("play {:?} at {:.2}", effect, volume);
    }
}
