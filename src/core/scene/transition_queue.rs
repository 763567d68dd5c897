//=========================================================================
// Transition Queue
//=========================================================================
//
// Queue for scene transitions.
//
// Scenes queue transitions here during updates. The scene director
// processes this queue at tick boundaries, in FIFO order.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Handoff, SceneKey, SceneTransition};

//=== Transition Queue ====================================================

/// Queue for scene transitions.
///
/// Scenes queue transitions here during updates. The scene director
/// processes this queue at tick boundaries.
pub struct TransitionQueue<S: SceneKey, H: Handoff> {
    queue: Vec<SceneTransition<S, H>>,
}

impl<S: SceneKey, H: Handoff> TransitionQueue<S, H> {
    /// Creates a new empty transition queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a scene transition to be processed at the next tick boundary.
    pub fn push(&mut self, transition: SceneTransition<S, H>) {
        self.queue.push(transition);
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of queued transitions.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Clears all queued transitions.
    pub fn clear(&mut self) {
        self.queue.clear()
    }

    /// Takes all transitions from the queue, leaving it empty.
    ///
    /// Used by the scene director to process queued transitions without
    /// holding a borrow on the queue.
    pub fn take(&mut self) -> Vec<SceneTransition<S, H>> {
        std::mem::take(&mut self.queue)
    }
}

impl<S: SceneKey, H: Handoff> Default for TransitionQueue<S, H> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
