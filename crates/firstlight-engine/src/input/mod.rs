//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The runtime translates platform events into `InputEvent`s.

mod exit;
mod state;
mod types;

pub use exit::{process_input, EXIT_KEY};
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};
