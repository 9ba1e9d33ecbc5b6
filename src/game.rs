//! Game loop
//!
//! Owns the simulation state, the controller and the menu, and drives them
//! through the platform delegates: poll input, tick while active, render,
//! then wait for the next tick slot when pacing is enabled.

use std::time::{Duration, Instant};

use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::agent::{PaddleController, TrainingStats};
use crate::audio::{AudioSink, SoundEffect};
use crate::consts::TRAINING_LOG_INTERVAL;
use crate::platform::{InputEvent, InputSource};
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Score, TickInput, TickReport, tick};
use crate::ui::{Menu, MenuAction};

/// PCG stream used for weight initialisation, separate from ball resets
const WEIGHT_INIT_STREAM: u64 = 0x5eed_0f_a9e47;

/// End-of-session report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub ticks: u64,
    pub score: Score,
    pub training: TrainingStats,
}

/// Sleeps the loop to a fixed tick rate
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next: Option<Instant>,
}

impl FramePacer {
    pub fn new(rate_hz: u32) -> Self {
        Self {
            interval: Duration::from_nanos(1_000_000_000 / u64::from(rate_hz.max(1))),
            next: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Block until the next slot. Falling more than one slot behind
    /// restarts the schedule instead of bursting to catch up.
    pub fn wait(&mut self) {
        let now = Instant::now();
        let next = self.next.unwrap_or(now + self.interval);
        if next > now {
            std::thread::sleep(next - now);
            self.next = Some(next + self.interval);
        } else if now - next > self.interval {
            self.next = Some(now + self.interval);
        } else {
            self.next = Some(next + self.interval);
        }
    }
}

/// A single game session
#[derive(Debug)]
pub struct Game {
    settings: Settings,
    state: GameState,
    controller: PaddleController,
    menu: Menu,
    pacer: Option<FramePacer>,
}

impl Game {
    /// Build a session, drawing a seed from the OS when none is configured
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        log::info!(
            "New session: seed={} playfield={}x{} hidden={} lr={}",
            seed,
            settings.playfield.width,
            settings.playfield.height,
            settings.controller.hidden_units,
            settings.controller.learning_rate
        );

        let state = GameState::new(&settings, seed);
        let mut init_rng = Pcg32::new(seed, WEIGHT_INIT_STREAM);
        let controller = PaddleController::new(&settings.controller, &mut init_rng);
        let menu = Menu::new(&settings.playfield);
        let pacer = settings.tick_rate_hz.map(FramePacer::new);
        if pacer.is_none() {
            log::info!("Tick rate uncapped");
        }

        Self {
            settings,
            state,
            controller,
            menu,
            pacer,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn controller(&self) -> &PaddleController {
        &self.controller
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Apply input events. Returns false once the session should end.
    pub fn handle_events(&mut self, events: &[InputEvent]) -> bool {
        for event in events {
            match *event {
                InputEvent::Terminate => {
                    log::info!("Terminate requested");
                    return false;
                }
                InputEvent::Click(pos) if !self.state.is_active() => match self.menu.hit(pos) {
                    Some(MenuAction::Start) => self.state.start(),
                    Some(MenuAction::Exit) => {
                        log::info!("Exit selected");
                        return false;
                    }
                    None => {}
                },
                InputEvent::Click(_) => {}
            }
        }
        true
    }

    /// Run one simulation tick and forward its sounds
    pub fn update<A: AudioSink + ?Sized>(
        &mut self,
        input: &TickInput,
        audio: &mut A,
    ) -> Option<TickReport> {
        let report = tick(&mut self.state, &mut self.controller, input)?;

        let volume = self.settings.audio.effective_volume();
        if volume > 0.0 {
            for event in &report.events {
                if let GameEvent::PaddleHit(_) = event {
                    audio.play(SoundEffect::PaddleHit, volume);
                }
            }
        }

        if self.state.time_ticks % TRAINING_LOG_INTERVAL == 0 {
            let stats = self.controller.stats();
            log::debug!(
                "tick {}: loss={:.4} alignment={:.3} updates={}",
                self.state.time_ticks,
                stats.last_loss,
                stats.alignment_rate(),
                stats.updates
            );
        }

        Some(report)
    }

    /// Loop until the platform asks to stop
    pub fn run<P>(&mut self, platform: &mut P) -> SessionSummary
    where
        P: InputSource + Renderer + AudioSink,
    {
        loop {
            let events = platform.poll_events();
            if !self.handle_events(&events) {
                break;
            }

            if self.state.is_active() {
                let input = platform.held_keys();
                self.update(&input, platform);
            }

            platform.render(&self.state, &self.menu);

            if let Some(pacer) = self.pacer.as_mut() {
                pacer.wait();
            }
        }

        let summary = self.summary();
        log::info!(
            "Session over after {} ticks: player {} - agent {}",
            summary.ticks,
            summary.score.player,
            summary.score.agent
        );
        summary
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.state.seed,
            ticks: self.state.time_ticks,
            score: self.state.score,
            training: *self.controller.stats(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Silent;
    use crate::sim::Mode;
    use glam::Vec2;

    fn uncapped(seed: u64) -> Settings {
        Settings {
            seed: Some(seed),
            tick_rate_hz: None,
            ..Default::default()
        }
    }

    #[derive(Default)]
    struct CountingAudio(u32);

    impl AudioSink for CountingAudio {
        fn play(&mut self, _effect: SoundEffect, _volume: f32) {
            self.0 += 1;
        }
    }

    #[test]
    fn test_start_click_activates() {
        let mut game = Game::new(uncapped(1));
        assert_eq!(game.state().mode, Mode::Idle);

        // Miss the buttons
        assert!(game.handle_events(&[InputEvent::Click(Vec2::new(10.0, 10.0))]));
        assert_eq!(game.state().mode, Mode::Idle);

        let start = game.menu().start.rect.center();
        assert!(game.handle_events(&[InputEvent::Click(start)]));
        assert_eq!(game.state().mode, Mode::Active);
    }

    #[test]
    fn test_exit_click_and_terminate() {
        let mut game = Game::new(uncapped(1));
        let exit = game.menu().exit.rect.center();
        assert!(!game.handle_events(&[InputEvent::Click(exit)]));

        let mut game = Game::new(uncapped(1));
        assert!(!game.handle_events(&[InputEvent::Terminate]));
    }

    #[test]
    fn test_menu_ignored_while_active() {
        let mut game = Game::new(uncapped(1));
        game.state_mut().start();
        let exit = game.menu().exit.rect.center();
        assert!(game.handle_events(&[InputEvent::Click(exit)]));
        assert!(game.state().is_active());
    }

    #[test]
    fn test_idle_update_is_noop() {
        let mut game = Game::new(uncapped(1));
        assert!(game.update(&TickInput::default(), &mut Silent).is_none());
        assert_eq!(game.summary().ticks, 0);
    }

    #[test]
    fn test_paddle_hit_plays_sound() {
        let mut game = Game::new(uncapped(1));
        game.state_mut().start();
        let state = game.state_mut();
        state.agent.pos.y = 250.0;
        state.ball.pos = Vec2::new(15.0, 300.0);
        state.ball.vel = Vec2::new(-0.8, 0.8);

        let mut audio = CountingAudio::default();
        game.update(&TickInput::default(), &mut audio);
        assert_eq!(audio.0, 1);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut settings = uncapped(1);
        settings.audio.muted = true;
        let mut game = Game::new(settings);
        game.state_mut().start();
        let state = game.state_mut();
        state.agent.pos.y = 250.0;
        state.ball.pos = Vec2::new(15.0, 300.0);
        state.ball.vel = Vec2::new(-0.8, 0.8);

        let mut audio = CountingAudio::default();
        game.update(&TickInput::default(), &mut audio);
        assert_eq!(audio.0, 0);
    }

    #[test]
    fn test_same_seed_same_session() {
        let mut a = Game::new(uncapped(77));
        let mut b = Game::new(uncapped(77));
        a.state_mut().start();
        b.state_mut().start();
        for _ in 0..500 {
            a.update(&TickInput::default(), &mut Silent);
            b.update(&TickInput::default(), &mut Silent);
        }
        assert_eq!(a.summary(), b.summary());
        assert_eq!(a.controller().params(), b.controller().params());
    }

    #[test]
    fn test_frame_pacer_interval() {
        let pacer = FramePacer::new(250);
        assert_eq!(pacer.interval(), Duration::from_millis(4));
    }

    #[test]
    fn test_frame_pacer_waits() {
        let mut pacer = FramePacer::new(200);
        let start = Instant::now();
        for _ in 0..3 {
            pacer.wait();
        }
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
