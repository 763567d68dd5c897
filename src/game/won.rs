//=========================================================================
// Won Scene
//=========================================================================

use log::info;

use crate::core::globals::GlobalContext;
use crate::core::render::Canvas;
use crate::core::scene::{Scene, SceneTransition};

use super::{draw_screen_lines, jump, RoundHandoff, SceneId};

/// Victory screen. Shows how long the round took (delivered via the
/// scene handoff); the jump input returns to the title screen.
#[derive(Default)]
pub struct WonScene {
    elapsed_secs: u64,
}

impl WonScene {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scene<SceneId, RoundHandoff> for WonScene {
    fn on_start(&mut self, _context: &mut GlobalContext<SceneId, RoundHandoff>) {
        info!(target: "game", "Round won in {}s", self.elapsed_secs);
    }

    fn on_handoff(&mut self, handoff: RoundHandoff) {
        match handoff {
            RoundHandoff::RoundWon { elapsed_secs } => self.elapsed_secs = elapsed_secs,
        }
    }

    fn update(&mut self, context: &mut GlobalContext<SceneId, RoundHandoff>) {
        if jump(&context.input) {
            context.transitions.push(SceneTransition::Switch(SceneId::Title));
        }
    }

    fn draw(&self, _context: &GlobalContext<SceneId, RoundHandoff>, canvas: &mut Canvas) {
        let time_line = format!("YOU USED {}S", self.elapsed_secs);
        draw_screen_lines(canvas, &["", "GAME WIN!", "", &time_line]);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::InputEvent;
    use crate::core::render::DrawCommand;

    fn drawn_texts(scene: &WonScene) -> Vec<String> {
        let context = GlobalContext::new();
        let mut canvas = Canvas::new(800.0, 600.0);
        scene.draw(&context, &mut canvas);
        canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn handoff_sets_elapsed_time() {
        let mut scene = WonScene::new();
        scene.on_handoff(RoundHandoff::RoundWon { elapsed_secs: 42 });

        assert_eq!(drawn_texts(&scene), vec!["GAME WIN!", "YOU USED 42S"]);
    }

    #[test]
    fn defaults_to_zero_without_handoff() {
        let scene = WonScene::new();
        assert_eq!(drawn_texts(&scene), vec!["GAME WIN!", "YOU USED 0S"]);
    }

    #[test]
    fn touch_returns_to_title() {
        let mut scene = WonScene::new();
        let mut context = GlobalContext::new();

        context
            .input
            .process_events(&[InputEvent::TouchStarted { x: 10.0, y: 10.0 }]);
        scene.update(&mut context);

        assert_eq!(
            context.transitions.take(),
            vec![SceneTransition::Switch(SceneId::Title)]
        );
    }
}
