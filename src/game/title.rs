//=========================================================================
// Title Scene
//=========================================================================

use log::info;

use crate::core::globals::GlobalContext;
use crate::core::render::Canvas;
use crate::core::scene::{Scene, SceneTransition};

use super::{draw_screen_lines, jump, RoundHandoff, SceneId};

const TITLE_LINES: &[&str] = &[
    "DOTDOT",
    "",
    "",
    "",
    "",
    "PRESS SPACE KEY",
    "",
    "OR TOUCH SCREEN",
];

/// Start screen. Waits for the jump input, then switches to the game.
#[derive(Default)]
pub struct TitleScene;

impl TitleScene {
    pub fn new() -> Self {
        Self
    }
}

impl Scene<SceneId, RoundHandoff> for TitleScene {
    fn on_start(&mut self, _context: &mut GlobalContext<SceneId, RoundHandoff>) {
        info!(target: "game", "Title screen");
    }

    fn update(&mut self, context: &mut GlobalContext<SceneId, RoundHandoff>) {
        if jump(&context.input) {
            context.transitions.push(SceneTransition::Switch(SceneId::Game));
        }
    }

    fn draw(&self, _context: &GlobalContext<SceneId, RoundHandoff>, canvas: &mut Canvas) {
        draw_screen_lines(canvas, TITLE_LINES);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
