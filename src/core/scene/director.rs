//=========================================================================
// Scene Director
//=========================================================================
//
// Manages scene registration, the single active scene, and lifecycle.
//
// Scenes are stored in a HashMap by key and exactly one is active at a
// time. Switching deactivates the outgoing scene (`on_stop`), delivers
// any handoff payload to the incoming scene (`on_handoff`), and then
// activates it (`on_start`) — strictly in that order.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{Handoff, Scene, SceneKey};
use crate::core::globals::GlobalContext;
use crate::core::render::Canvas;

//=== Scene Transition ====================================================

/// A requested scene switch.
///
/// Pushed onto the context's [`TransitionQueue`](super::TransitionQueue)
/// during scene updates and applied by the director at the tick
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneTransition<S: SceneKey, H: Handoff> {
    /// Deactivate the current scene and activate the scene under `S`.
    Switch(S),

    /// Like `Switch`, additionally delivering a payload to the new
    /// scene before its `on_start` runs.
    SwitchWith(S, H),
}

//=== Scene Director ======================================================

/// Holds the registered scenes and dispatches to the single active one.
///
/// Scenes are registered once at startup and referenced by key, so each
/// scene keeps its state between activations. `update` and `draw` are
/// no-ops until [`start`](Self::start) activates the initial scene.
pub struct SceneDirector<S: SceneKey, H: Handoff> {
    scenes: HashMap<S, Box<dyn Scene<S, H>>>,
    active: Option<S>,
    initial: Option<S>,
}

impl<S: SceneKey, H: Handoff> SceneDirector<S, H> {
    //--- Construction -----------------------------------------------------

    /// Creates a director with no scenes and nothing active.
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            active: None,
            initial: None,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene under a key.
    ///
    /// Called once per scene at startup, before the engine runs.
    pub fn register_scene(&mut self, key: S, scene: Box<dyn Scene<S, H>>) {
        if self.scenes.insert(key, scene).is_some() {
            warn!("Scene {:?} was already registered and has been replaced", key);
        }
    }

    /// Selects the scene activated by [`start`](Self::start).
    pub fn set_initial(&mut self, key: S) {
        self.initial = Some(key);
    }

    /// Activates the initial scene. Called once when the core loop spins up.
    pub fn start(&mut self, context: &mut GlobalContext<S, H>) {
        match self.initial {
            Some(key) => {
                debug!("Starting director with initial scene {:?}", key);
                self.activate(key, None, context);
            }
            None => warn!("Director started without an initial scene"),
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Key of the currently active scene, if any.
    pub fn active(&self) -> Option<S> {
        self.active
    }

    //--- Update Loop ------------------------------------------------------

    /// Advances the active scene by one tick. No-op when nothing is active.
    pub fn update(&mut self, context: &mut GlobalContext<S, H>) {
        if let Some(key) = self.active {
            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.update(context);
            }
        }
    }

    /// Records the active scene's draw commands. No-op when nothing is active.
    pub fn draw(&self, context: &GlobalContext<S, H>, canvas: &mut Canvas) {
        if let Some(key) = self.active {
            if let Some(scene) = self.scenes.get(&key) {
                scene.draw(context, canvas);
            }
        }
    }

    //--- Transition Processing --------------------------------------------

    /// Applies all queued scene transitions, FIFO.
    ///
    /// Called at the tick boundary after scene updates, so a scene never
    /// sees itself deactivated in the middle of its own `update`.
    pub fn process_transitions(&mut self, context: &mut GlobalContext<S, H>) {
        for transition in context.transitions.take() {
            match transition {
                SceneTransition::Switch(key) => self.switch_to(key, context),
                SceneTransition::SwitchWith(key, handoff) => {
                    self.switch_to_with(key, handoff, context)
                }
            }
        }
    }

    /// Immediately switches to the scene under `key`.
    pub fn switch_to(&mut self, key: S, context: &mut GlobalContext<S, H>) {
        self.activate(key, None, context);
    }

    /// Immediately switches to the scene under `key`, delivering a
    /// handoff payload before the scene's `on_start`.
    pub fn switch_to_with(&mut self, key: S, handoff: H, context: &mut GlobalContext<S, H>) {
        self.activate(key, Some(handoff), context);
    }

    //--- Internal Helpers -------------------------------------------------

    fn activate(&mut self, key: S, handoff: Option<H>, context: &mut GlobalContext<S, H>) {
        if !self.scenes.contains_key(&key) {
            warn!("Attempted to switch to unregistered scene {:?}", key);
            return;
        }

        // Outgoing scene stops strictly before the incoming scene starts
        if let Some(current) = self.active.take() {
            debug!("Stopping scene {:?}", current);
            if let Some(scene) = self.scenes.get_mut(&current) {
                scene.on_stop(context);
            }
        }

        debug!("Switching to scene {:?}", key);
        if let Some(scene) = self.scenes.get_mut(&key) {
            if let Some(payload) = handoff {
                scene.on_handoff(payload);
            }
            scene.on_start(context);
        }
        self.active = Some(key);
    }
}

impl<S: SceneKey, H: Handoff> Default for SceneDirector<S, H> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    //--- Mock Types -------------------------------------------------------

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        A,
        B,
    }

    impl SceneKey for TestScene {}

    #[derive(Clone, PartialEq, Debug)]
    enum TestHandoff {
        Score(u64),
    }

    impl Handoff for TestHandoff {}

    type Ctx = GlobalContext<TestScene, TestHandoff>;
    type Log = Arc<Mutex<Vec<String>>>;

    /// Records every lifecycle call into a shared log.
    struct Recorder {
        name: &'static str,
        log: Log,
    }

    impl Recorder {
        fn boxed(name: &'static str, log: &Log) -> Box<dyn Scene<TestScene, TestHandoff>> {
            Box::new(Self {
                name,
                log: Arc::clone(log),
            })
        }

        fn record(&self, event: &str) {
            self.log.lock().unwrap().push(format!("{}:{}", self.name, event));
        }
    }

    impl Scene<TestScene, TestHandoff> for Recorder {
        fn on_start(&mut self, _context: &mut Ctx) {
            self.record("start");
        }

        fn on_stop(&mut self, _context: &mut Ctx) {
            self.record("stop");
        }

        fn on_handoff(&mut self, handoff: TestHandoff) {
            let TestHandoff::Score(value) = handoff;
            self.record(&format!("handoff({})", value));
        }

        fn update(&mut self, _context: &mut Ctx) {
            self.record("update");
        }

        fn draw(&self, _context: &Ctx, _canvas: &mut Canvas) {
            self.record("draw");
        }
    }

    fn director_with_recorders(log: &Log) -> SceneDirector<TestScene, TestHandoff> {
        let mut director = SceneDirector::new();
        director.register_scene(TestScene::A, Recorder::boxed("a", log));
        director.register_scene(TestScene::B, Recorder::boxed("b", log));
        director
    }

    fn entries(log: &Log) -> Vec<String> {
        log.lock().unwrap().clone()
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn start_activates_initial_scene() {
        let log = Log::default();
        let mut director = director_with_recorders(&log);
        let mut ctx = Ctx::new();

        director.set_initial(TestScene::A);
        director.start(&mut ctx);

        assert_eq!(director.active(), Some(TestScene::A));
        assert_eq!(entries(&log), vec!["a:start"]);
    }

    #[test]
    fn start_without_initial_scene_is_noop() {
        let log = Log::default();
        let mut director = director_with_recorders(&log);
        let mut ctx = Ctx::new();

        director.start(&mut ctx);

        assert_eq!(director.active(), None);
        assert!(entries(&log).is_empty());
    }

    #[test]
    fn update_and_draw_are_noops_without_active_scene() {
        let log = Log::default();
        let mut director = director_with_recorders(&log);
        let mut ctx = Ctx::new();
        let mut canvas = Canvas::new(800.0, 600.0);

        director.update(&mut ctx);
        director.draw(&ctx, &mut canvas);

        assert!(entries(&log).is_empty());
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn switch_stops_old_before_starting_new() {
        let log = Log::default();
        let mut director = director_with_recorders(&log);
        let mut ctx = Ctx::new();

        director.set_initial(TestScene::A);
        director.start(&mut ctx);
        director.switch_to(TestScene::B, &mut ctx);

        assert_eq!(director.active(), Some(TestScene::B));
        assert_eq!(entries(&log), vec!["a:start", "a:stop", "b:start"]);
    }

    #[test]
    fn switch_with_delivers_handoff_before_start() {
        let log = Log::default();
        let mut director = director_with_recorders(&log);
        let mut ctx = Ctx::new();

        director.set_initial(TestScene::A);
        director.start(&mut ctx);
        director.switch_to_with(TestScene::B, TestHandoff::Score(42), &mut ctx);

        assert_eq!(
            entries(&log),
            vec!["a:start", "a:stop", "b:handoff(42)", "b:start"]
        );
    }

    #[test]
    fn unregistered_key_keeps_current_scene() {
        let log = Log::default();
        let mut director: SceneDirector<TestScene, TestHandoff> = SceneDirector::new();
        director.register_scene(TestScene::A, Recorder::boxed("a", &log));
        let mut ctx = Ctx::new();

        director.set_initial(TestScene::A);
        director.start(&mut ctx);
        director.switch_to(TestScene::B, &mut ctx);

        assert_eq!(director.active(), Some(TestScene::A), "Unregistered key must not deactivate");
        assert_eq!(entries(&log), vec!["a:start"]);
    }

    #[test]
    fn queued_transitions_apply_at_tick_boundary_in_order() {
        let log = Log::default();
        let mut director = director_with_recorders(&log);
        let mut ctx = Ctx::new();

        director.set_initial(TestScene::A);
        director.start(&mut ctx);

        ctx.transitions.push(SceneTransition::Switch(TestScene::B));
        ctx.transitions
            .push(SceneTransition::SwitchWith(TestScene::A, TestHandoff::Score(7)));
        director.process_transitions(&mut ctx);

        assert_eq!(director.active(), Some(TestScene::A));
        assert_eq!(
            entries(&log),
            vec![
                "a:start",
                "a:stop",
                "b:start",
                "b:stop",
                "a:handoff(7)",
                "a:start"
            ]
        );
        assert!(ctx.transitions.is_empty());
    }

    #[test]
    fn updates_without_transitions_leave_scene_unchanged() {
        let log = Log::default();
        let mut director = director_with_recorders(&log);
        let mut ctx = Ctx::new();

        director.set_initial(TestScene::A);
        director.start(&mut ctx);

        for _ in 0..100 {
            director.update(&mut ctx);
            director.process_transitions(&mut ctx);
        }

        assert_eq!(director.active(), Some(TestScene::A));
        let log = entries(&log);
        assert_eq!(log.iter().filter(|e| e.as_str() == "a:start").count(), 1);
        assert!(!log.contains(&"a:stop".to_string()));
    }

    #[test]
    fn reregistration_replaces_scene() {
        let log = Log::default();
        let mut director = director_with_recorders(&log);
        let mut ctx = Ctx::new();

        // Replace A, then activate it: only the replacement runs
        let replacement_log = Log::default();
        director.register_scene(TestScene::A, Recorder::boxed("a2", &replacement_log));
        director.set_initial(TestScene::A);
        director.start(&mut ctx);

        assert!(entries(&log).is_empty());
        assert_eq!(entries(&replacement_log), vec!["a2:start"]);
    }
}
