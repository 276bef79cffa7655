use crate::core::AppControl;

use super::state::InputState;
use super::types::Key;

/// The one key the render loop listens to.
pub const EXIT_KEY: Key = Key::Escape;

/// Per-frame input check: requests exit while [`EXIT_KEY`] is held.
pub fn process_input(state: &InputState) -> AppControl {
    if state.key_down(EXIT_KEY) {
        AppControl::Exit
    } else {
        AppControl::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, KeyState};

    fn press(state: &mut InputState, key: Key) {
        state.apply_event(InputEvent::Key { key, state: KeyState::Pressed });
    }

    #[test]
    fn idle_input_continues() {
        assert_eq!(process_input(&InputState::default()), AppControl::Continue);
    }

    #[test]
    fn other_keys_continue() {
        let mut state = InputState::default();
        press(&mut state, Key::Unknown(42));
        assert_eq!(process_input(&state), AppControl::Continue);
    }

    #[test]
    fn escape_requests_exit() {
        let mut state = InputState::default();
        press(&mut state, Key::Escape);
        assert_eq!(process_input(&state), AppControl::Exit);
    }
}
