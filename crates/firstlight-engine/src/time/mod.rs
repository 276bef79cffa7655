//! FPS title counter.
//!
//! Takes explicit timestamps so it can be driven with synthetic time in tests.

mod fps;

pub use fps::{FpsCounter, FpsReport, REPORT_INTERVAL};
