//! Platform abstraction layer
//!
//! Handles window/input differences behind two pieces:
//! - Discrete input events (close, pointer clicks)
//! - Held-key state for the human paddle
//!
//! `headless` implements the platform without a window.

pub mod headless;

pub use headless::Autopilot;

use glam::Vec2;

use crate::sim::TickInput;

/// Discrete input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window closed or the process was asked to stop
    Terminate,
    /// Pointer pressed at a playfield position
    Click(Vec2),
}

/// Source of player input
pub trait InputSource {
    /// Drain events queued since the last poll
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Movement keys currently held
    fn held_keys(&self) -> TickInput;
}
