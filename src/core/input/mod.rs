//=========================================================================
// Input System
//=========================================================================
//
// Low-level input handling for the engine.
//
// The platform layer normalizes OS events into `InputEvent`s; the
// `StateTracker` digests them each tick and answers the queries game
// code cares about ("was Space just pressed?", "where is the cursor?").
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, MouseButton};
pub use state_tracker::StateTracker;
