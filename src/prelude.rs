//=========================================================================
// Prelude
//
// Convenience re-exports for building games on the engine.
//=========================================================================

pub use crate::core::globals::{GlobalContext, GlobalSystems};
pub use crate::core::input::{InputEvent, KeyCode, MouseButton, StateTracker};
pub use crate::core::render::{Canvas, Color, DrawCommand, Frame};
pub use crate::core::scene::{
    Handoff, Scene, SceneDirector, SceneKey, SceneTransition, TransitionQueue,
};
pub use crate::core::timer::RoundTimer;
pub use crate::engine::{Engine, EngineBuilder};
