//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level input state tracking with per-frame delta tracking.
//
// Architecture:
//   InputEvent → process_events() → HashSet (keys/buttons held) → query
//
// Frame lifecycle: clear() → process_events() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};

//=== StateTracker ========================================================

/// Tracks persistent state (keys held) and per-frame deltas (keys pressed/released).
/// Frame lifecycle: clear() → process_events() → query.
pub struct StateTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,
    mouse_buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),

    //--- Frame Deltas (reset each frame via clear()) --------------------
    keys_pressed_this_frame: HashSet<KeyCode>,
    keys_released_this_frame: HashSet<KeyCode>,
    mouse_buttons_pressed_this_frame: HashSet<MouseButton>,
    mouse_buttons_released_this_frame: HashSet<MouseButton>,
    touch_started_this_frame: bool,
}

impl StateTracker {
    /// Creates a new state tracker with empty state.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            mouse_buttons_down: HashSet::new(),
            mouse_position: (0.0, 0.0),
            keys_pressed_this_frame: HashSet::new(),
            keys_released_this_frame: HashSet::new(),
            mouse_buttons_pressed_this_frame: HashSet::new(),
            mouse_buttons_released_this_frame: HashSet::new(),
            touch_started_this_frame: false,
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears frame-specific deltas (pressed/released/touch flags).
    pub(crate) fn clear(&mut self) {
        self.keys_pressed_this_frame.clear();
        self.keys_released_this_frame.clear();
        self.mouse_buttons_pressed_this_frame.clear();
        self.mouse_buttons_released_this_frame.clear();
        self.touch_started_this_frame = false;
    }

    /// Processes input events, updating internal state.
    pub(crate) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                // Only mark as pressed if it wasn't already down
                // (filters OS key-repeat)
                if self.keys_down.insert(*key) {
                    self.keys_pressed_this_frame.insert(*key);
                }
            }

            InputEvent::KeyUp(key) => {
                // Only mark as released if it was actually down
                if self.keys_down.remove(key) {
                    self.keys_released_this_frame.insert(*key);
                }
            }

            InputEvent::MouseButtonDown(button) => {
                if self.mouse_buttons_down.insert(*button) {
                    self.mouse_buttons_pressed_this_frame.insert(*button);
                }
            }

            InputEvent::MouseButtonUp(button) => {
                if self.mouse_buttons_down.remove(button) {
                    self.mouse_buttons_released_this_frame.insert(*button);
                }
            }

            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = (*x, *y);
            }

            InputEvent::TouchStarted { .. } => {
                self.touch_started_this_frame = true;
            }

            InputEvent::Unidentified => {
                // Ignore unrecognized events
            }
        }
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// Returns `true` if key transitioned UP → DOWN this frame (one frame only).
    ///
    /// Use for discrete actions like starting a round.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed_this_frame.contains(&key)
    }

    /// Returns `true` while key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if key transitioned DOWN → UP this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released_this_frame.contains(&key)
    }

    //=====================================================================
    // Query API - Mouse
    //=====================================================================

    /// Like [`is_key_pressed`](Self::is_key_pressed) but for mouse buttons.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons_pressed_this_frame.contains(&button)
    }

    /// Like [`is_key_down`](Self::is_key_down) but for mouse buttons.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    /// Like [`is_key_released`](Self::is_key_released) but for mouse buttons.
    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.mouse_buttons_released_this_frame.contains(&button)
    }

    /// Returns mouse position in screen coordinates (pixels, top-left origin).
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    //=====================================================================
    // Query API - Touch
    //=====================================================================

    /// Returns `true` if a touch contact started this frame.
    pub fn is_touch_started(&self) -> bool {
        self.touch_started_this_frame
    }
}

impl Default for StateTracker {
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

    //--- Test Helpers -----------------------------------------------------

    fn frame(tracker: &mut StateTracker, events: &[InputEvent]) {
        tracker.clear();
        tracker.process_events(events);
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn key_press_sets_pressed_and_down() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::KeyDown(KeyCode::Space)]);

        assert!(tracker.is_key_pressed(KeyCode::Space));
        assert!(tracker.is_key_down(KeyCode::Space));
        assert!(!tracker.is_key_released(KeyCode::Space));
    }

    #[test]
    fn pressed_lasts_one_frame_down_persists() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::KeyDown(KeyCode::Space)]);
        frame(&mut tracker, &[]);

        assert!(!tracker.is_key_pressed(KeyCode::Space), "Pressed is a one-frame delta");
        assert!(tracker.is_key_down(KeyCode::Space), "Down persists while held");
    }

    #[test]
    fn key_repeat_does_not_retrigger_pressed() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::KeyDown(KeyCode::Space)]);
        // OS repeat: another KeyDown without a KeyUp in between
        frame(&mut tracker, &[InputEvent::KeyDown(KeyCode::Space)]);

        assert!(!tracker.is_key_pressed(KeyCode::Space), "Repeat must not count as a new press");
        assert!(tracker.is_key_down(KeyCode::Space));
    }

    #[test]
    fn key_release_sets_released_and_clears_down() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::KeyDown(KeyCode::KeyA)]);
        frame(&mut tracker, &[InputEvent::KeyUp(KeyCode::KeyA)]);

        assert!(tracker.is_key_released(KeyCode::KeyA));
        assert!(!tracker.is_key_down(KeyCode::KeyA));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::KeyUp(KeyCode::KeyA)]);

        assert!(!tracker.is_key_released(KeyCode::KeyA), "Spurious release must be ignored");
    }

    #[test]
    fn mouse_button_press_and_release() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::MouseButtonDown(MouseButton::Left)]);
        assert!(tracker.is_button_pressed(MouseButton::Left));
        assert!(tracker.is_button_down(MouseButton::Left));

        frame(&mut tracker, &[InputEvent::MouseButtonUp(MouseButton::Left)]);
        assert!(tracker.is_button_released(MouseButton::Left));
        assert!(!tracker.is_button_down(MouseButton::Left));
    }

    #[test]
    fn mouse_movement_updates_position() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::MouseMoved { x: 100.0, y: 200.0 }]);

        assert_eq!(tracker.mouse_position(), (100.0, 200.0));
    }

    #[test]
    fn mouse_position_persists_across_frames() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::MouseMoved { x: 42.0, y: 7.0 }]);
        frame(&mut tracker, &[]);

        assert_eq!(tracker.mouse_position(), (42.0, 7.0));
    }

    #[test]
    fn touch_start_is_one_frame_trigger() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::TouchStarted { x: 10.0, y: 20.0 }]);
        assert!(tracker.is_touch_started());

        frame(&mut tracker, &[]);
        assert!(!tracker.is_touch_started(), "Touch trigger must clear at the frame boundary");
    }

    #[test]
    fn unidentified_events_are_ignored() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::Unidentified]);

        assert_eq!(tracker.mouse_position(), (0.0, 0.0));
        assert!(!tracker.is_touch_started());
    }
}
