//=========================================================================
// Scene System
//=========================================================================
//
// Manages scene lifecycle and switching between mutually exclusive
// screens.
//
// Architecture:
//   SceneDirector
//     ├─ scenes: HashMap<S, Box<dyn Scene>>
//     └─ active: Option<S>
//
// Flow:
//   update() → active Scene::update() → queued SceneTransition
//            → process_transitions() → on_stop / on_handoff / on_start
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::render::Canvas;

//=== Module Declarations =================================================

mod director;
mod transition_queue;

//=== Public API ==========================================================

pub use director::{SceneDirector, SceneTransition};
pub use transition_queue::TransitionQueue;

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
///
/// Scene keys uniquely identify scenes in the director's registry.
/// Typically implemented by a game-specific enum.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== Handoff Trait =======================================================

/// Marker trait for cross-scene handoff payloads.
///
/// A handoff carries data from the scene requesting a switch into the
/// scene being activated (e.g. the round's elapsed time into the win
/// screen). The director delivers it via [`Scene::on_handoff`] after
/// lookup and before [`Scene::on_start`]. Being an ordinary enum, the
/// payload is matched exhaustively; no downcasting is involved.
pub trait Handoff: Clone + PartialEq + Debug + Send + 'static {}

//=== Scene Trait =========================================================

/// Defines scene behavior with lifecycle hooks, update logic, and
/// read-only drawing.
///
/// Scenes are registered in the [`SceneDirector`] and activated one at
/// a time. Each scene keeps its own state between activations.
///
/// # Lifecycle
///
/// Per activation the director calls `on_start` exactly once, then
/// `update`/`draw` every tick, then `on_stop` exactly once — and
/// `on_stop` of the outgoing scene strictly before `on_start` of the
/// incoming one.
///
/// # Minimal Implementation
///
/// Only `update` and `draw` are required; lifecycle hooks have empty
/// defaults.
pub trait Scene<S: SceneKey, H: Handoff>: Send {
    /// Called when the scene becomes active.
    ///
    /// Override to initialize or reset per-round state.
    fn on_start(&mut self, _context: &mut GlobalContext<S, H>) {}

    /// Called when the scene is deactivated.
    ///
    /// Override to release resources held during this activation.
    fn on_stop(&mut self, _context: &mut GlobalContext<S, H>) {}

    /// Called with the handoff payload of a `SwitchWith` transition,
    /// after lookup and before `on_start`.
    fn on_handoff(&mut self, _handoff: H) {}

    /// Advances one tick of scene logic.
    ///
    /// Transitions are requested by pushing onto `context.transitions`;
    /// they take effect at the tick boundary.
    fn update(&mut self, context: &mut GlobalContext<S, H>);

    /// Records this scene's draw commands.
    ///
    /// Takes `&self`: drawing must not mutate scene state.
    fn draw(&self, context: &GlobalContext<S, H>, canvas: &mut Canvas);
}
