//=========================================================================
// Input Processor
//=========================================================================
//
// Converts platform-specific Winit events into engine InputEvents.
//
// Architecture:
//   Winit Events → map_* functions → InputEvent (engine type) → InputBuffer
//
// Unmapped keys (F13-F24, numpad, exotic keyboards) are filtered
// (returns None). Touch contacts are reduced to their start phase; the
// game only reacts to a touch beginning.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton, Touch, TouchPhase},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, MouseButton};

//=== Event Mapping =======================================================

/// Converts a Winit KeyEvent to an InputEvent (filters unmapped keys).
pub(crate) fn map_key_event(key_event: &KeyEvent) -> Option<InputEvent> {
    let key_code = match key_event.physical_key {
        PhysicalKey::Code(code) => KeyCode::from(code),
        _ => return None,
    };

    if matches!(key_code, KeyCode::Unidentified) {
        return None;
    }

    Some(match key_event.state {
        ElementState::Pressed => InputEvent::KeyDown(key_code),
        ElementState::Released => InputEvent::KeyUp(key_code),
    })
}

/// Converts a Winit mouse button event to an InputEvent.
pub(crate) fn map_mouse_button(button: WinitMouseButton, state: ElementState) -> InputEvent {
    let mouse_button = MouseButton::from(button);

    match state {
        ElementState::Pressed => InputEvent::MouseButtonDown(mouse_button),
        ElementState::Released => InputEvent::MouseButtonUp(mouse_button),
    }
}

/// Creates a cursor move event (screen space).
pub(crate) fn map_cursor_moved(x: f32, y: f32) -> InputEvent {
    InputEvent::MouseMoved { x, y }
}

/// Converts a Winit touch event to an InputEvent.
///
/// Only the start of a contact is mapped; movement and release phases
/// are dropped.
pub(crate) fn map_touch(touch: &Touch) -> Option<InputEvent> {
    match touch.phase {
        TouchPhase::Started => Some(InputEvent::TouchStarted {
            x: touch.location.x as f32,
            y: touch.location.y as f32,
        }),
        _ => None,
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit mouse buttons to engine buttons.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

/// Converts Winit physical key codes to engine key codes.
///
/// Maps A-Z, 0-9, arrows, and common special keys. Everything else
/// returns `KeyCode::Unidentified` and is filtered upstream.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Digits ---------------------------------------------------

            Digit0 => KeyCode::Digit0,
            Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2,
            Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4,
            Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6,
            Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8,
            Digit9 => KeyCode::Digit9,

            //--- Letters --------------------------------------------------

            KeyA => KeyCode::KeyA,
            KeyB => KeyCode::KeyB,
            KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD,
            KeyE => KeyCode::KeyE,
            KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG,
            KeyH => KeyCode::KeyH,
            KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ,
            KeyK => KeyCode::KeyK,
            KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM,
            KeyN => KeyCode::KeyN,
            KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP,
            KeyQ => KeyCode::KeyQ,
            KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS,
            KeyT => KeyCode::KeyT,
            KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV,
            KeyW => KeyCode::KeyW,
            KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY,
            KeyZ => KeyCode::KeyZ,

            //--- Arrows ---------------------------------------------------

            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,
            ArrowUp => KeyCode::ArrowUp,

            //--- Special keys ---------------------------------------------

            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,

            //--- Everything else ------------------------------------------

            _ => KeyCode::Unidentified,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
