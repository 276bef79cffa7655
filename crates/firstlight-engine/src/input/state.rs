use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState};

/// Current input state for the window.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies an input event to the current state.
    pub fn apply_event(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Key releases are not delivered while unfocused.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state: KeyState::Pressed } => {
                self.keys_down.insert(key);
            }
            InputEvent::Key { key, state: KeyState::Released } => {
                self.keys_down.remove(&key);
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state }
    }

    #[test]
    fn press_and_release_are_tracked() {
        let mut state = InputState::default();

        state.apply_event(key(Key::Escape, KeyState::Pressed));
        assert!(state.key_down(Key::Escape));

        state.apply_event(key(Key::Escape, KeyState::Released));
        assert!(!state.key_down(Key::Escape));
    }

    #[test]
    fn repeated_press_keeps_one_entry() {
        let mut state = InputState::default();

        state.apply_event(key(Key::Unknown(7), KeyState::Pressed));
        state.apply_event(key(Key::Unknown(7), KeyState::Pressed));
        assert_eq!(state.keys_down.len(), 1);
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut state = InputState::default();

        state.apply_event(key(Key::Escape, KeyState::Pressed));
        state.apply_event(InputEvent::Focused(false));
        assert!(state.keys_down.is_empty());
        assert!(!state.focused);
    }
}
