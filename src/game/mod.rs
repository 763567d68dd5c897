//=========================================================================
// DotDot Game
//=========================================================================
//
// The game built on top of the engine: catch every wandering dot with
// the cursor before time runs out.
//
// Scene graph:
//
//   Title ──jump──► Game ──all captured──► Won ──jump──► Title
//                     │
//                     └──time exceeded──► Lost ──jump──► Title
//
// "jump" is the universal advance input: Space, left click, or a touch
// starting anywhere on the screen.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod dots;
mod lost;
mod play;
mod title;
mod won;

//=== Re-exports ==========================================================

pub use lost::LostScene;
pub use play::PlayScene;
pub use title::TitleScene;
pub use won::WonScene;

//=== Internal Imports ====================================================

use crate::core::input::{KeyCode, MouseButton, StateTracker};
use crate::core::render::{Canvas, Color};
use crate::core::scene::{Handoff, SceneKey};

//=== Constants ===========================================================

pub const WINDOW_TITLE: &str = "DotDot";
pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 600;

/// Title/menu text size (pixels).
pub(crate) const FONT_SIZE: f32 = 32.0;

/// In-game HUD text size (pixels).
pub(crate) const SMALL_FONT_SIZE: f32 = 10.0;

//=== SceneId =============================================================

/// Keys for the four game scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Title,
    Game,
    Lost,
    Won,
}

impl SceneKey for SceneId {}

//=== RoundHandoff ========================================================

/// Payloads carried across scene switches.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundHandoff {
    /// The round was won in `elapsed_secs` seconds.
    RoundWon { elapsed_secs: u64 },
}

impl Handoff for RoundHandoff {}

//=== GameConfig ==========================================================

/// Round rules.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Round fails once elapsed time exceeds this many seconds.
    pub timeout_secs: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { timeout_secs: 120 }
    }
}

//=== Shared Input ========================================================

/// The universal advance input: Space, left click, or touch start.
pub(crate) fn jump(input: &StateTracker) -> bool {
    input.is_key_pressed(KeyCode::Space)
        || input.is_button_pressed(MouseButton::Left)
        || input.is_touch_started()
}

//=== Shared Drawing ======================================================

/// Draws centered menu text, one line per entry, starting a few rows
/// down from the top. Empty entries leave a blank line.
pub(crate) fn draw_screen_lines(canvas: &mut Canvas, lines: &[&str]) {
    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let x = (SCREEN_WIDTH as f32 - line.len() as f32 * FONT_SIZE) / 2.0;
        let y = (i as f32 + 4.0) * FONT_SIZE;
        canvas.text(*line, x, y, FONT_SIZE, Color::WHITE);
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

    fn tracker_with(events: &[InputEvent]) -> StateTracker {
        let mut tracker = StateTracker::new();
        tracker.process_events(events);
        tracker
    }

    #[test]
    fn jump_triggers_on_space_click_and_touch() {
        let space = tracker_with(&[InputEvent::KeyDown(KeyCode::Space)]);
        let click = tracker_with(&[InputEvent::MouseButtonDown(MouseButton::Left)]);
        let touch = tracker_with(&[InputEvent::TouchStarted { x: 1.0, y: 1.0 }]);

        assert!(jump(&space));
        assert!(jump(&click));
        assert!(jump(&touch));
    }

    #[test]
    fn jump_ignores_other_input() {
        let idle = StateTracker::new();
        let key = tracker_with(&[InputEvent::KeyDown(KeyCode::KeyA)]);
        let right = tracker_with(&[InputEvent::MouseButtonDown(MouseButton::Right)]);

        assert!(!jump(&idle));
        assert!(!jump(&key));
        assert!(!jump(&right));
    }

    #[test]
    fn screen_lines_skip_blanks_and_center() {
        let mut canvas = Canvas::new(800.0, 600.0);
        draw_screen_lines(&mut canvas, &["", "ABCD", ""]);

        assert_eq!(canvas.commands().len(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Text { text, x, y, .. } => {
                assert_eq!(text, "ABCD");
                assert_eq!(*x, (800.0 - 4.0 * FONT_SIZE) / 2.0);
                assert_eq!(*y, 5.0 * FONT_SIZE);
            }
            other => panic!("Expected Text command, found {:?}", other),
        }
    }
}
