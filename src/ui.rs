//! Start menu
//!
//! Two stacked buttons, hit-tested against pointer clicks while idle.

use glam::Vec2;

use crate::sim::Playfield;

pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 50.0;

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Half-open containment: left/top edges inside, right/bottom outside
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x < self.pos.x + self.size.x
            && point.y >= self.pos.y
            && point.y < self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// What a menu click asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Exit,
}

/// A labelled clickable region
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    pub action: MenuAction,
}

impl Button {
    pub fn is_clicked(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }
}

/// Start/exit menu shown while idle
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub start: Button,
    pub exit: Button,
}

impl Menu {
    /// Buttons centred horizontally at one and two thirds of the height
    pub fn new(playfield: &Playfield) -> Self {
        let x = playfield.center_x() - BUTTON_WIDTH / 2.0;
        let third = (playfield.height / 3.0).floor();
        Self {
            start: Button {
                rect: Rect::new(x, third, BUTTON_WIDTH, BUTTON_HEIGHT),
                label: "Start",
                action: MenuAction::Start,
            },
            exit: Button {
                rect: Rect::new(x, third * 2.0, BUTTON_WIDTH, BUTTON_HEIGHT),
                label: "Exit",
                action: MenuAction::Exit,
            },
        }
    }

    /// Start wins if the buttons ever overlap
    pub fn hit(&self, point: Vec2) -> Option<MenuAction> {
        [&self.start, &self.exit]
            .into_iter()
            .find(|b| b.is_clicked(point))
            .map(|b| b.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_layout() {
        let menu = Menu::new(&Playfield::default());
        assert_eq!(menu.start.rect, Rect::new(300.0, 200.0, 200.0, 50.0));
        assert_eq!(menu.exit.rect, Rect::new(300.0, 400.0, 200.0, 50.0));
    }

    #[test]
    fn test_hit_testing() {
        let menu = Menu::new(&Playfield::default());
        assert_eq!(menu.hit(Vec2::new(400.0, 225.0)), Some(MenuAction::Start));
        assert_eq!(menu.hit(Vec2::new(300.0, 400.0)), Some(MenuAction::Exit));
        assert_eq!(menu.hit(Vec2::new(500.0, 225.0)), None);
        assert_eq!(menu.hit(Vec2::new(400.0, 300.0)), None);
    }

    #[test]
    fn test_center() {
        let menu = Menu::new(&Playfield::default());
        assert_eq!(menu.start.rect.center(), Vec2::new(400.0, 225.0));
    }
}
