//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types.
//
// Defines the messages that cross the thread boundary between the
// platform event loop and the core logic thread.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from the platform layer to the core thread.
///
/// These are the only messages that cross the platform → core boundary.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Batched input events for a single frame.
    ///
    /// Sent on every `RedrawRequested` (typically at monitor refresh
    /// rate). Contains:
    /// - `discrete`: key/button/touch events (order significant)
    /// - `continuous`: cursor movement (coalesced, last position wins)
    ///
    /// Empty batches are not sent.
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// Window close requested by the user or the OS.
    ///
    /// The core thread terminates cleanly upon receiving this.
    WindowClosed,
}
