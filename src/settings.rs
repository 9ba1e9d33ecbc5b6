//! Game settings
//!
//! Every dimension and tuning constant the simulation uses. Loaded from a JSON
//! file named by `ROBO_PONG_SETTINGS`; missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Playfield;

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Paddle geometry and speeds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSettings {
    pub width: f32,
    pub height: f32,
    /// Human paddle left edge sits this far from the right wall
    pub player_inset: f32,
    /// Agent paddle left edge sits this far from the left wall
    pub agent_inset: f32,
    pub player_speed: f32,
    /// Nominal agent speed (halved when the paddle is built)
    pub agent_speed: f32,
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            player_inset: PLAYER_INSET,
            agent_inset: AGENT_INSET,
            player_speed: PLAYER_SPEED,
            agent_speed: AGENT_SPEED,
        }
    }
}

/// Ball size and launch velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    pub radius: f32,
    pub speed_x: f32,
    pub speed_y: f32,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            speed_x: BALL_SPEED_X,
            speed_y: BALL_SPEED_Y,
        }
    }
}

/// Approximator shape and optimizer hyperparameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    pub hidden_units: usize,
    pub learning_rate: f32,
    pub beta1: f32,
    pub beta2: f32,
    pub epsilon: f32,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            hidden_units: HIDDEN_UNITS,
            learning_rate: LEARNING_RATE,
            beta1: ADAM_BETA1,
            beta2: ADAM_BETA2,
            epsilon: ADAM_EPSILON,
        }
    }
}

/// Sound preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl AudioSettings {
    /// Volume handed to the audio sink (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }
}

/// Complete game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playfield: Playfield,
    pub paddle: PaddleSettings,
    pub ball: BallSettings,
    pub controller: ControllerSettings,
    pub audio: AudioSettings,
    /// RNG seed for ball resets and weight init (random when unset)
    pub seed: Option<u64>,
    /// Tick pacing; `None` runs as fast as the platform allows
    pub tick_rate_hz: Option<u32>,
    /// Tick budget for the headless autopilot
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield: Playfield::default(),
            paddle: PaddleSettings::default(),
            ball: BallSettings::default(),
            controller: ControllerSettings::default(),
            audio: AudioSettings::default(),
            seed: None,
            tick_rate_hz: Some(TICK_RATE_HZ),
            max_ticks: 100_000,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const ENV_VAR: &'static str = "ROBO_PONG_SETTINGS";

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from the file named by `ROBO_PONG_SETTINGS`, falling
    /// back to defaults when it is unset or unusable
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: &str| Err(SettingsError::Invalid(msg.to_string()));

        if !(self.playfield.width > 0.0 && self.playfield.height > 0.0) {
            return invalid("playfield dimensions must be positive");
        }
        if !(self.paddle.width > 0.0 && self.paddle.height > 0.0) {
            return invalid("paddle dimensions must be positive");
        }
        if self.paddle.height > self.playfield.height {
            return invalid("paddle is taller than the playfield");
        }
        if !(self.ball.radius > 0.0) {
            return invalid("ball radius must be positive");
        }
        if self.ball.radius * 2.0 > self.playfield.height {
            return invalid("ball does not fit in the playfield");
        }
        let speeds = [self.paddle.player_speed, self.paddle.agent_speed];
        if !speeds.iter().all(|s| s.is_finite() && *s > 0.0) {
            return invalid("paddle speeds must be positive and finite");
        }
        let insets = [self.paddle.player_inset, self.paddle.agent_inset];
        if !insets.iter().all(|i| (0.0..self.playfield.width).contains(i)) {
            return invalid("paddle insets must lie inside the playfield width");
        }
        if self.controller.hidden_units == 0 {
            return invalid("controller needs at least one hidden unit");
        }
        if !(self.controller.learning_rate > 0.0) {
            return invalid("learning rate must be positive");
        }
        let betas = [self.controller.beta1, self.controller.beta2];
        if !betas.iter().all(|b| (0.0..1.0).contains(b)) {
            return invalid("Adam betas must lie in [0, 1)");
        }
        if !(self.controller.epsilon > 0.0) {
            return invalid("Adam epsilon must be positive");
        }
        if self.tick_rate_hz == Some(0) {
            return invalid("tick rate must be positive when set");
        }
        Ok(())
    }

    /// Effective agent paddle speed
    pub fn agent_speed(&self) -> f32 {
        self.paddle.agent_speed / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_layout() {
        let settings = Settings::default();
        assert_eq!(settings.playfield.width, 800.0);
        assert_eq!(settings.playfield.height, 600.0);
        assert_eq!(settings.controller.hidden_units, 64);
        assert!((settings.agent_speed() - 2.5).abs() < f32::EPSILON);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "ball": { "radius": 6.0 } }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.ball.radius, 6.0);
        assert_eq!(settings.ball.speed_x, BALL_SPEED_X);
        assert_eq!(settings.paddle, PaddleSettings::default());
        assert_eq!(settings.tick_rate_hz, Some(TICK_RATE_HZ));
    }

    #[test]
    fn test_uncapped_tick_rate() {
        let settings = Settings::from_json(r#"{ "tick_rate_hz": null }"#).unwrap();
        assert_eq!(settings.tick_rate_hz, None);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let err = Settings::from_json(r#"{ "paddle": { "height": 700.0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        let err = Settings::from_json(r#"{ "controller": { "hidden_units": 0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        let err = Settings::from_json(r#"{ "tick_rate_hz": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        for json in [
            r#"{ "paddle": { "player_speed": -5.0 } }"#,
            r#"{ "paddle": { "player_speed": 0.0 } }"#,
            r#"{ "paddle": { "agent_speed": -1.0 } }"#,
            r#"{ "paddle": { "agent_inset": -1.0 } }"#,
            r#"{ "paddle": { "player_inset": 800.0 } }"#,
            r#"{ "controller": { "beta1": 1.0 } }"#,
            r#"{ "controller": { "beta2": -0.1 } }"#,
            r#"{ "controller": { "epsilon": 0.0 } }"#,
        ] {
            let err = Settings::from_json(json).unwrap_err();
            assert!(matches!(err, SettingsError::Invalid(_)), "{} was accepted", json);
        }

        let mut settings = Settings::default();
        settings.paddle.player_speed = f32::INFINITY;
        assert!(settings.validate().is_err());
        settings.paddle.player_speed = f32::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load_from("/nonexistent/robo-pong.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_muted_volume() {
        let mut audio = AudioSettings::default();
        assert!((audio.effective_volume() - 0.8).abs() < f32::EPSILON);
        audio.muted = true;
        assert_eq!(audio.effective_volume(), 0.0);
    }
}
