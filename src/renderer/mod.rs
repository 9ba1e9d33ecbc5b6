//! Rendering delegate
//!
//! The game hands its full state to a [`Renderer`] once per loop iteration and
//! ignores whatever happens next. [`hud`] holds layout helpers every backend
//! shares.

pub mod hud;

pub use hud::{HudText, score_labels};

use crate::sim::GameState;
use crate::ui::Menu;

/// Draws one frame
pub trait Renderer {
    /// Idle frames show `menu`; active frames show paddles, ball and scores
    fn render(&mut self, state: &GameState, menu: &Menu);
}
