//! firstlight engine crate.
//!
//! The platform + GPU plumbing shared by the three tutorial programs:
//! window bootstrap, shader build pipeline, geometry upload, the frame loop
//! and the FPS title counter.

pub mod core;
pub mod device;
pub mod geometry;
pub mod input;
pub mod render;
pub mod shader;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
