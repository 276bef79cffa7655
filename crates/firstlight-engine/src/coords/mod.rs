//! Coordinate types shared by the device layer and renderers.
//!
//! Drawable space is physical pixels with the origin at the top-left of the
//! surface.

mod viewport;

pub use viewport::Viewport;
