//! Color values used for clearing the frame.

mod color;

pub use color::Color;
