//! Per-frame draw dispatch.
//!
//! A [`Drawable`] pairs a linked program with an uploaded mesh and the draw
//! calls issued for it every frame.

mod drawable;

pub use drawable::Drawable;
