//! Score overlay layout

use glam::Vec2;

use crate::sim::{Playfield, Score};

/// Top margin of the score labels
const SCORE_TOP: f32 = 10.0;

/// A text label anchored at its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub pos: Vec2,
    pub text: String,
}

/// Player score on the left quarter, agent score on the right quarter
pub fn score_labels(score: &Score, playfield: &Playfield) -> [HudText; 2] {
    let quarter = (playfield.width / 4.0).floor();
    let three_quarters = (playfield.width * 3.0 / 4.0).floor();
    [
        HudText {
            pos: Vec2::new(quarter, SCORE_TOP),
            text: score.player.to_string(),
        },
        HudText {
            pos: Vec2::new(three_quarters, SCORE_TOP),
            text: score.agent.to_string(),
        },
    ]
}
