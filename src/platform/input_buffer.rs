//=========================================================================
// Input Buffer
//
// Collects and normalizes raw input events (keyboard, mouse, touch)
// into two categories: discrete and continuous. Acts as a transient
// event aggregator between the OS event pump and the core thread.
//
// Responsibilities:
// - Store incoming platform events per frame
// - Deduplicate repeated discrete inputs (e.g., KeyDown)
// - Coalesce continuous inputs (e.g., MouseMoved)
// - Provide unified access to collected events via `drain()`
//
// The buffer exists only for the current frame and is reset after
// being drained at the frame boundary.
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== Internal Modules ====================================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

/// Transient event store for one frame of input.
///
/// Internally maintains:
/// - `discrete`: ordered one-shot inputs (key/button/touch)
/// - `continuous`: last-known state of continuous inputs (cursor)
pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 128;
        const CONTINUOUS_BASE: usize = 16;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
        }
    }

    //--- Event Handling ---------------------------------------------------

    /// Inserts or replaces a continuous input (e.g., mouse movement).
    /// The latest event always replaces any previous one of its type.
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.replace(event);
    }

    /// Appends a discrete input (key press, button click, touch start).
    /// Immediately repeated identical events are ignored.
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------

    /// Returns all collected events for this frame and clears the
    /// buffer, or `None` when nothing was collected.
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }
        let discrete = std::mem::take(&mut self.discrete);
        let continuous: Vec<InputEvent> = self.continuous.drain().collect();
        Some((discrete, continuous))
    }

    //--- Utilities --------------------------------------------------------

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.discrete.len() + self.continuous.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
