use super::error::GeometryError;
use super::mesh::MeshShape;

/// One draw command against the bound program and mesh.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawCall {
    /// Non-indexed: vertices `first .. first + count`.
    Arrays { first: u32, count: u32 },
    /// Indexed: the first `count` indices.
    Indexed { count: u32 },
}

impl DrawCall {
    /// Checks that the call only reads uploaded elements.
    pub fn validate(&self, shape: MeshShape) -> Result<(), GeometryError> {
        match *self {
            Self::Arrays { first, count } => {
                let end = u64::from(first) + u64::from(count);
                if end > u64::from(shape.vertex_count) {
                    return Err(GeometryError::DrawOutOfRange {
                        end,
                        available: shape.vertex_count,
                    });
                }
            }
            Self::Indexed { count } => {
                let available = shape.index_count.ok_or(GeometryError::MissingIndexBuffer)?;
                if count > available {
                    return Err(GeometryError::DrawOutOfRange {
                        end: u64::from(count),
                        available,
                    });
                }
            }
        }
        Ok(())
    }

    /// Records the call into `rpass`. Program and buffers must be bound.
    pub fn record(&self, rpass: &mut wgpu::RenderPass<'_>) {
        match *self {
            Self::Arrays { first, count } => rpass.draw(first..first + count, 0..1),
            Self::Indexed { count } => rpass.draw_indexed(0..count, 0, 0..1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: MeshShape = MeshShape { vertex_count: 3, index_count: None };
    const RECTANGLE: MeshShape = MeshShape { vertex_count: 4, index_count: Some(6) };

    #[test]
    fn whole_triangle_is_valid() {
        DrawCall::Arrays { first: 0, count: 3 }.validate(TRIANGLE).unwrap();
    }

    #[test]
    fn range_past_the_end_is_rejected() {
        assert_eq!(
            DrawCall::Arrays { first: 1, count: 3 }.validate(TRIANGLE),
            Err(GeometryError::DrawOutOfRange { end: 4, available: 3 })
        );
    }

    #[test]
    fn huge_range_does_not_overflow() {
        assert!(DrawCall::Arrays { first: u32::MAX, count: u32::MAX }.validate(TRIANGLE).is_err());
    }

    #[test]
    fn indexed_needs_an_index_buffer() {
        assert_eq!(
            DrawCall::Indexed { count: 3 }.validate(TRIANGLE),
            Err(GeometryError::MissingIndexBuffer)
        );
    }

    #[test]
    fn indexed_count_is_bounded() {
        DrawCall::Indexed { count: 6 }.validate(RECTANGLE).unwrap();
        assert!(DrawCall::Indexed { count: 7 }.validate(RECTANGLE).is_err());
    }

    #[test]
    fn ranges_can_split_the_vertices() {
        DrawCall::Arrays { first: 0, count: 2 }.validate(RECTANGLE).unwrap();
        DrawCall::Arrays { first: 2, count: 2 }.validate(RECTANGLE).unwrap();
    }
}
