//=========================================================================
// Lost Scene
//=========================================================================

use log::info;

use crate::core::globals::GlobalContext;
use crate::core::render::Canvas;
use crate::core::scene::{Scene, SceneTransition};

use super::{draw_screen_lines, jump, RoundHandoff, SceneId};

const LOST_LINES: &[&str] = &["", "GAME OVER!", "", "RUN OUT OF TIME"];

/// Failure screen shown when the round times out. The jump input
/// returns to the title screen.
#[derive(Default)]
pub struct LostScene;

impl LostScene {
    pub fn new() -> Self {
        Self
    }
}

impl Scene<SceneId, RoundHandoff> for LostScene {
    fn on_start(&mut self, _context: &mut GlobalContext<SceneId, RoundHandoff>) {
        info!(target: "game", "Round lost");
    }

    fn update(&mut self, context: &mut GlobalContext<SceneId, RoundHandoff>) {
        if jump(&context.input) {
            context.transitions.push(SceneTransition::Switch(SceneId::Title));
        }
    }

    fn draw(&self, _context: &GlobalContext<SceneId, RoundHandoff>, canvas: &mut Canvas) {
        draw_screen_lines(canvas, LOST_LINES);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, MouseButton};
    use crate::core::render::DrawCommand;

    #[test]
    fn idle_lost_screen_queues_nothing() {
        let mut scene = LostScene::new();
        let mut context = GlobalContext::new();

        for _ in 0..50 {
            scene.update(&mut context);
        }

        assert!(context.transitions.is_empty());
    }

    #[test]
    fn click_returns_to_title() {
        let mut scene = LostScene::new();
        let mut context = GlobalContext::new();

        context
            .input
            .process_events(&[InputEvent::MouseButtonDown(MouseButton::Left)]);
        scene.update(&mut context);

        assert_eq!(
            context.transitions.take(),
            vec![SceneTransition::Switch(SceneId::Title)]
        );
    }

    #[test]
    fn draws_game_over_text() {
        let scene = LostScene::new();
        let context = GlobalContext::new();
        let mut canvas = Canvas::new(800.0, 600.0);

        scene.draw(&context, &mut canvas);

        let has_game_over = canvas.commands().iter().any(|c| {
            matches!(c, DrawCommand::Text { text, .. } if text == "GAME OVER!")
        });
        assert!(has_game_over);
    }
}
