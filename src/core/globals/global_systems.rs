//=========================================================================
// Global Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Systems operate on GlobalContext data each tick: the input batches
// are digested into queryable state, then the scene director runs the
// active scene and applies its transitions.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::render::Canvas;
use crate::core::scene::{Handoff, SceneDirector, SceneKey};

//=== GlobalSystems =======================================================

/// Container for engine-level logic systems.
///
/// Exposed during engine initialization via [`crate::Engine::init`] for
/// scene registration before the engine starts running.
///
/// # Available Systems
///
/// - `director`: scene lifecycle and switching
pub struct GlobalSystems<S: SceneKey, H: Handoff> {
    /// The scene director: registration, the active scene, transitions.
    pub director: SceneDirector<S, H>,
}

impl<S: SceneKey, H: Handoff> GlobalSystems<S, H> {
    /// Creates a new systems container with default-initialized systems.
    pub(crate) fn new() -> Self {
        Self {
            director: SceneDirector::new(),
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Activates the initial scene. Called once before the first tick.
    pub(crate) fn start(&mut self, context: &mut GlobalContext<S, H>) {
        self.director.start(context);
    }

    /// Updates all engine systems for one tick.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Input digest**: clears frame deltas, folds the tick's event
    ///    batches into the state tracker
    /// 2. **Scene update**: runs the active scene (which may queue
    ///    transitions)
    /// 3. **Transition processing**: applies queued scene switches
    pub(crate) fn update(&mut self, context: &mut GlobalContext<S, H>) {
        // 1. Digest input events into queryable state
        context.input.clear();
        let batches = std::mem::take(&mut context.frame_events);
        for batch in &batches {
            context.input.process_events(batch);
        }

        // 2. Run the active scene
        self.director.update(context);

        // 3. Apply scene transitions at the tick boundary
        self.director.process_transitions(context);
    }

    /// Records the active scene's draw commands for this tick.
    pub(crate) fn draw(&self, context: &GlobalContext<S, H>, canvas: &mut Canvas) {
        self.director.draw(context, canvas);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode};
    use crate::core::scene::{Scene, SceneTransition};

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        Main,
        Other,
    }

    impl SceneKey for TestScene {}

    #[derive(Clone, PartialEq, Debug)]
    enum TestHandoff {}

    impl Handoff for TestHandoff {}

    /// Switches away as soon as Space is pressed.
    struct SpaceWatcher;

    impl Scene<TestScene, TestHandoff> for SpaceWatcher {
        fn update(&mut self, context: &mut GlobalContext<TestScene, TestHandoff>) {
            if context.input.is_key_pressed(KeyCode::Space) {
                context
                    .transitions
                    .push(SceneTransition::Switch(TestScene::Other));
            }
        }

        fn draw(&self, _context: &GlobalContext<TestScene, TestHandoff>, _canvas: &mut Canvas) {}
    }

    struct Idle;

    impl Scene<TestScene, TestHandoff> for Idle {
        fn update(&mut self, _context: &mut GlobalContext<TestScene, TestHandoff>) {}
        fn draw(&self, _context: &GlobalContext<TestScene, TestHandoff>, _canvas: &mut Canvas) {}
    }

    #[test]
    fn update_digests_input_then_runs_scene() {
        let mut systems: GlobalSystems<TestScene, TestHandoff> = GlobalSystems::new();
        systems.director.register_scene(TestScene::Main, Box::new(SpaceWatcher));
        systems.director.register_scene(TestScene::Other, Box::new(Idle));
        systems.director.set_initial(TestScene::Main);

        let mut context = GlobalContext::new();
        systems.start(&mut context);

        // No input: the scene stays put
        systems.update(&mut context);
        assert_eq!(systems.director.active(), Some(TestScene::Main));

        // A Space press delivered this tick triggers the switch this tick
        context.frame_events.push(vec![InputEvent::KeyDown(KeyCode::Space)]);
        systems.update(&mut context);
        assert_eq!(systems.director.active(), Some(TestScene::Other));
        assert!(context.frame_events.is_empty(), "Event batches must be consumed");
    }

    #[test]
    fn input_deltas_reset_between_ticks() {
        let mut systems: GlobalSystems<TestScene, TestHandoff> = GlobalSystems::new();
        systems.director.register_scene(TestScene::Main, Box::new(Idle));
        systems.director.set_initial(TestScene::Main);

        let mut context = GlobalContext::new();
        systems.start(&mut context);

        context.frame_events.push(vec![InputEvent::KeyDown(KeyCode::Space)]);
        systems.update(&mut context);
        assert!(context.input.is_key_pressed(KeyCode::Space));

        systems.update(&mut context);
        assert!(
            !context.input.is_key_pressed(KeyCode::Space),
            "Pressed deltas must not leak into the next tick"
        );
        assert!(context.input.is_key_down(KeyCode::Space));
    }
}
