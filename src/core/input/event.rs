//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level input events.
//
// This module abstracts away platform-specific input (Winit) into a
// unified, engine-friendly format used by the input subsystem.
//
// Responsibilities:
// - Represent keyboard, mouse, and touch inputs in a stable, portable way
// - Provide equality and hashing semantics for deduplication
// - Enable event coalescing (e.g., multiple MouseMoved → last position)
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (processes events)
//         ↓
//    Game Logic (jump, cursor queries)
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// Abstracts platform-specific button representations into a stable,
/// portable enum. The `Other` variant covers side buttons, macro buttons,
/// and any non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons, macro keys).
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// `KeyA` is always the same physical key regardless of keyboard layout
/// (QWERTY vs AZERTY).
///
/// Coverage:
/// - Alphanumeric keys (A-Z, 0-9)
/// - Arrow keys
/// - Common special keys (Space, Enter, Escape)
///
/// Additional keys can be added as needed without breaking existing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    /// Spacebar
    Space,

    /// Return/Enter key
    Enter,

    /// Escape key
    Escape,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Events carry both the input type (key/button/mouse/touch) and the
/// associated data (which key, position).
///
/// # Equality & Hashing Semantics
///
/// Discrete events are compared by type + payload. Positional events
/// (`MouseMoved`, `TouchStarted`) are equal regardless of coordinates,
/// allowing efficient coalescing (last position wins).
///
/// ```text
/// Equality Rules:
/// KeyDown(A)      == KeyDown(A)       ✓
/// KeyDown(A)      == KeyUp(A)         ✗ (different type)
/// MouseMoved{...} == MouseMoved{...}  ✓ (always equal)
/// ```
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),

    /// Mouse button pressed.
    MouseButtonDown(MouseButton),

    /// Mouse button released.
    MouseButtonUp(MouseButton),

    /// Mouse cursor moved to a new position.
    ///
    /// Coordinates are in screen space (pixels, top-left origin).
    /// Multiple consecutive MouseMoved events are typically coalesced
    /// by the platform layer before reaching the input system.
    MouseMoved { x: f32, y: f32 },

    /// A touch contact began.
    ///
    /// Coordinates are in screen space. Only the start of a touch is
    /// reported; the game treats it as a one-shot trigger, like a key
    /// press without a matching release.
    TouchStarted { x: f32, y: f32 },

    /// Unrecognized or unsupported event.
    ///
    /// Silently ignored by the input system. Used for forward
    /// compatibility when new platform events are added.
    Unidentified,
}

//--- Trait Implementations -----------------------------------------------

/// Equality implementation for InputEvent.
///
/// Rules:
/// - Same discriminant (KeyDown vs KeyUp, etc.)
/// - Same key/button payload
/// - MouseMoved / TouchStarted always equal (coordinates ignored for
///   coalescing)
impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown(a), KeyDown(b)) => a == b,
            (KeyUp(a), KeyUp(b)) => a == b,
            (MouseButtonDown(a), MouseButtonDown(b)) => a == b,
            (MouseButtonUp(a), MouseButtonUp(b)) => a == b,
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (TouchStarted { .. }, TouchStarted { .. }) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

/// Hash implementation for InputEvent.
///
/// Hashes discriminant + key/button. Coordinates are NOT hashed for
/// positional events (consistent with equality, so a == b implies
/// hash(a) == hash(b)).
impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the discriminant first (event type)
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown(key) | Self::KeyUp(key) => key.hash(state),
            Self::MouseButtonDown(button) | Self::MouseButtonUp(button) => button.hash(state),
            // Positional and Unidentified: only discriminant matters
            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
