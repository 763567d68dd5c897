//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for scenes.
//
// Contains state data that scenes read/write:
// - input: low-level input state (keys, buttons, cursor, touch)
// - transitions: command queue for scene changes
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, StateTracker};
use crate::core::scene::{Handoff, SceneKey, TransitionQueue};

//=== GlobalContext =======================================================

/// Shared context data accessible to scenes during updates.
///
/// Scenes receive `&mut GlobalContext` in `update` (they may queue
/// transitions) and `&GlobalContext` in `draw` (read-only).
///
/// # Available Data
///
/// - `input`: raw input state (keys/buttons pressed this frame, cursor
///   position, touch trigger)
/// - `transitions`: queue for requesting scene changes
pub struct GlobalContext<S: SceneKey, H: Handoff> {
    /// Raw input state tracker for low-level input queries.
    pub input: StateTracker,

    /// Transition queue for scene changes.
    ///
    /// Scenes queue transitions here during updates; the director
    /// processes the queue at tick boundaries.
    pub transitions: TransitionQueue<S, H>,

    /// Input event batches for the current tick.
    ///
    /// Populated from the platform thread and digested into `input` at
    /// the start of each update. Not directly accessible to scenes.
    pub(crate) frame_events: Vec<Vec<InputEvent>>,
}

impl<S: SceneKey, H: Handoff> GlobalContext<S, H> {
    /// Creates a new context with empty state.
    pub(crate) fn new() -> Self {
        Self {
            input: StateTracker::new(),
            transitions: TransitionQueue::new(),
            frame_events: Vec::new(),
        }
    }
}
