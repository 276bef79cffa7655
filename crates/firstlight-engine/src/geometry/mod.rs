//! Geometry upload.
//!
//! One flat `f32` array of interleaved vertex attributes, an optional `u32`
//! index array, and a [`VertexLayout`] describing how the bytes are read.
//! Everything is validated on the CPU, uploaded once before the render loop,
//! and never touched again.

mod draw;
mod error;
mod layout;
mod mesh;

pub use draw::DrawCall;
pub use error::GeometryError;
pub use layout::{AttributeSlot, ComponentType, VertexLayout};
pub use mesh::{Geometry, Mesh, MeshShape};
