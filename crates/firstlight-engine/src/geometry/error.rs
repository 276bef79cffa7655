use std::fmt;

/// Invalid vertex layout, geometry or draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    EmptyLayout,
    InvalidComponentCount { location: u32, components: u32 },
    DuplicateLocation { location: u32 },
    SlotOutsideStride { location: u32, end: u64, stride: u64 },
    MisalignedStride { stride: u64, align: u64 },
    MisalignedSlot { location: u32, offset: u64, align: u64 },
    LayoutMismatch,
    NoVertices,
    RaggedVertices { floats: usize, floats_per_vertex: usize },
    IndexOutOfRange { index: u32, vertex_count: u32 },
    DrawOutOfRange { end: u64, available: u32 },
    MissingIndexBuffer,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLayout => write!(f, "vertex layout has no attribute slots"),
            Self::InvalidComponentCount { location, components } => write!(
                f,
                "attribute slot {location} has {components} components (expected 1 to 4)"
            ),
            Self::DuplicateLocation { location } => {
                write!(f, "attribute location {location} is described twice")
            }
            Self::SlotOutsideStride { location, end, stride } => write!(
                f,
                "attribute slot {location} ends at byte {end}, past the {stride}-byte stride"
            ),
            Self::MisalignedStride { stride, align } => write!(
                f,
                "vertex stride {stride} is not a multiple of {align} bytes"
            ),
            Self::MisalignedSlot { location, offset, align } => write!(
                f,
                "attribute slot {location} starts at byte {offset}, not a multiple of {align}"
            ),
            Self::LayoutMismatch => write!(
                f,
                "mesh vertex layout differs from the layout the program was linked with"
            ),
            Self::NoVertices => write!(f, "geometry has no vertices"),
            Self::RaggedVertices { floats, floats_per_vertex } => write!(
                f,
                "{floats} floats is not a whole number of {floats_per_vertex}-float vertices"
            ),
            Self::IndexOutOfRange { index, vertex_count } => write!(
                f,
                "index {index} is out of range for {vertex_count} vertices"
            ),
            Self::DrawOutOfRange { end, available } => write!(
                f,
                "draw reaches element {end} but only {available} are uploaded"
            ),
            Self::MissingIndexBuffer => write!(f, "indexed draw without an index buffer"),
        }
    }
}

impl std::error::Error for GeometryError {}
