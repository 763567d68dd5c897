//=========================================================================
// Play Scene
//=========================================================================
//
// The round itself: dots wander, the cursor captures them, a one-second
// timer counts up in the background.
//
// Round resolution, checked every tick:
// - All dots captured → switch to the Won scene, handing off the
//   elapsed time
// - Elapsed time exceeds the configured timeout → switch to the Lost
//   scene
//
//=========================================================================

use log::{debug, info};

use crate::core::globals::GlobalContext;
use crate::core::render::Canvas;
use crate::core::scene::{Scene, SceneTransition};
use crate::core::timer::RoundTimer;

use super::dots::DotField;
use super::{GameConfig, RoundHandoff, SceneId, SMALL_FONT_SIZE};

/// The active round.
pub struct PlayScene {
    field: DotField,
    config: GameConfig,
    /// Running while the scene is active, None otherwise.
    timer: Option<RoundTimer>,
    cursor: (f32, f32),
    captured: usize,
}

impl PlayScene {
    pub fn new(field: DotField, config: GameConfig) -> Self {
        Self {
            field,
            config,
            timer: None,
            cursor: (0.0, 0.0),
            captured: 0,
        }
    }

    fn elapsed_secs(&self) -> u64 {
        self.timer.as_ref().map_or(0, RoundTimer::elapsed_secs)
    }

    #[cfg(test)]
    pub(crate) fn timer(&self) -> Option<&RoundTimer> {
        self.timer.as_ref()
    }
}

impl Scene<SceneId, RoundHandoff> for PlayScene {
    fn on_start(&mut self, _context: &mut GlobalContext<SceneId, RoundHandoff>) {
        info!(target: "game", "Round started: {} dots, {}s limit",
            self.field.count(), self.config.timeout_secs);

        self.captured = 0;
        self.cursor = (0.0, 0.0);
        self.field.start();
        self.timer = Some(RoundTimer::start());
    }

    fn on_stop(&mut self, _context: &mut GlobalContext<SceneId, RoundHandoff>) {
        if let Some(timer) = self.timer.take() {
            timer.stop();
        }
        debug!(target: "game", "Round stopped after {} captures", self.captured);
    }

    fn update(&mut self, context: &mut GlobalContext<SceneId, RoundHandoff>) {
        let elapsed = self.elapsed_secs();

        // Win check runs before anything else so the final capture's
        // elapsed time is what gets reported
        if self.captured == self.field.count() {
            context.transitions.push(SceneTransition::SwitchWith(
                SceneId::Won,
                RoundHandoff::RoundWon { elapsed_secs: elapsed },
            ));
            return;
        }

        self.cursor = context.input.mouse_position();
        self.field.update(self.cursor);
        self.captured = self.field.captured_count();

        if elapsed > self.config.timeout_secs {
            context.transitions.push(SceneTransition::Switch(SceneId::Lost));
        }
    }

    fn draw(&self, _context: &GlobalContext<SceneId, RoundHandoff>, canvas: &mut Canvas) {
        //--- Capture tethers ----------------------------------------------
        for dot in self.field.dots() {
            if !dot.captured() {
                continue;
            }
            let fade = (1.0 - dot.distance() / self.field.capture_distance()).clamp(0.0, 1.0);
            let alpha = (fade * 200.0) as u8;
            let (x, y) = dot.pos();
            canvas.line(
                self.cursor.0,
                self.cursor.1,
                x,
                y,
                dot.color().with_alpha(alpha),
            );
        }

        //--- Dots ---------------------------------------------------------
        for dot in self.field.dots() {
            let (x, y) = dot.pos();
            let size = dot.size();
            canvas.fill_rect(x - size / 2.0, y - size / 2.0, size, size, dot.color());
        }

        //--- HUD ----------------------------------------------------------
        let hud = [
            format!("TIME USED:{}", self.elapsed_secs()),
            format!("DOTS LEFT:{}", self.field.count() - self.captured),
        ];
        for (i, line) in hud.iter().enumerate() {
            let y = (i as f32 + 1.0) * (SMALL_FONT_SIZE + 10.0);
            canvas.text(
                line.as_str(),
                SMALL_FONT_SIZE,
                y,
                SMALL_FONT_SIZE,
                crate::core::render::Color::WHITE,
            );
        }
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
    use crate::game::dots::DotConfig;

    fn scene_with(capture_distance: f32) -> PlayScene {
        let field = DotField::with_seed(
            800.0,
            600.0,
            DotConfig {
                count: 5,
                capture_distance,
                ..DotConfig::default()
            },
            99,
        );
        PlayScene::new(field, GameConfig::default())
    }

    fn move_cursor(context: &mut GlobalContext<SceneId, RoundHandoff>, x: f32, y: f32) {
        context.input.clear();
        context.input.process_events(&[InputEvent::MouseMoved { x, y }]);
    }

    #[test]
    fn start_resets_round_state() {
        let mut scene = scene_with(100.0);
        let mut context = GlobalContext::new();

        scene.on_start(&mut context);

        assert_eq!(scene.captured, 0);
        assert_eq!(scene.field.dots().len(), 5);
        assert!(scene.timer().is_some());
        assert!(scene.timer().map_or(false, RoundTimer::is_running));
    }

    #[test]
    fn stop_halts_the_timer() {
        let mut scene = scene_with(100.0);
        let mut context = GlobalContext::new();

        scene.on_start(&mut context);
        scene.on_stop(&mut context);

        assert!(scene.timer().is_none());
    }

    #[test]
    fn capturing_every_dot_wins_with_elapsed_time() {
        let mut scene = scene_with(10_000.0);
        let mut context = GlobalContext::new();

        scene.on_start(&mut context);
        if let Some(timer) = scene.timer() {
            timer.force_elapsed(42);
        }

        // Capture range covers the whole field: first update grabs all
        move_cursor(&mut context, 400.0, 300.0);
        scene.update(&mut context);
        assert_eq!(scene.captured, 5);
        assert!(context.transitions.is_empty(), "Win fires on the next check");

        scene.update(&mut context);

        assert_eq!(
            context.transitions.take(),
            vec![SceneTransition::SwitchWith(
                SceneId::Won,
                RoundHandoff::RoundWon { elapsed_secs: 42 },
            )]
        );
    }

    #[test]
    fn exceeding_the_timeout_loses() {
        let mut scene = scene_with(0.5);
        let mut context = GlobalContext::new();

        scene.on_start(&mut context);
        if let Some(timer) = scene.timer() {
            timer.force_elapsed(121);
        }

        move_cursor(&mut context, -5000.0, -5000.0);
        scene.update(&mut context);

        assert_eq!(
            context.transitions.take(),
            vec![SceneTransition::Switch(SceneId::Lost)]
        );
    }

    #[test]
    fn reaching_the_timeout_exactly_does_not_lose() {
        let mut scene = scene_with(0.5);
        let mut context = GlobalContext::new();

        scene.on_start(&mut context);
        if let Some(timer) = scene.timer() {
            timer.force_elapsed(120);
        }

        move_cursor(&mut context, -5000.0, -5000.0);
        scene.update(&mut context);

        assert!(context.transitions.is_empty());
    }

    #[test]
    fn draws_dots_and_hud() {
        let mut scene = scene_with(0.5);
        let mut context = GlobalContext::new();
        let mut canvas = Canvas::new(800.0, 600.0);

        scene.on_start(&mut context);
        scene.draw(&context, &mut canvas);

        let rects = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        assert_eq!(rects, 5, "One rect per dot");

        let hud: Vec<String> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(hud, vec!["TIME USED:0", "DOTS LEFT:5"]);
    }

    #[test]
    fn captured_dots_get_tether_lines() {
        let mut scene = scene_with(10_000.0);
        let mut context = GlobalContext::new();
        let mut canvas = Canvas::new(800.0, 600.0);

        scene.on_start(&mut context);
        move_cursor(&mut context, 400.0, 300.0);
        scene.update(&mut context);
        scene.draw(&context, &mut canvas);

        let lines = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        assert_eq!(lines, 5, "One tether per captured dot");
    }
}
