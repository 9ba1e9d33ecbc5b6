//! Audio delegate
//!
//! The game only signals which sound to play; playback belongs to the
//! platform and is fire-and-forget.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a paddle
    PaddleHit,
}

/// Anything that can play a sound effect
pub trait AudioSink {
    /// Start playing `effect` at `volume` (0.0 - 1.0) without blocking
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Discards every sound
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _effect: SoundEffect, _volume: f32) {}
}
