use super::error::GeometryError;

/// Scalar type of one attribute component.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ComponentType {
    Float32,
}

impl ComponentType {
    /// Size of one component in bytes.
    pub const fn size(self) -> u64 {
        match self {
            Self::Float32 => 4,
        }
    }
}

/// One attribute inside an interleaved vertex.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AttributeSlot {
    /// Shader input location (`@location(n)`).
    pub location: u32,
    /// Components per vertex, 1 to 4.
    pub components: u32,
    pub component_type: ComponentType,
    /// Byte offset within a vertex.
    pub offset: u64,
}

impl AttributeSlot {
    /// Bytes this attribute occupies in a vertex.
    pub const fn size(&self) -> u64 {
        self.components as u64 * self.component_type.size()
    }

    fn format(&self) -> Option<wgpu::VertexFormat> {
        match (self.component_type, self.components) {
            (ComponentType::Float32, 1) => Some(wgpu::VertexFormat::Float32),
            (ComponentType::Float32, 2) => Some(wgpu::VertexFormat::Float32x2),
            (ComponentType::Float32, 3) => Some(wgpu::VertexFormat::Float32x3),
            (ComponentType::Float32, 4) => Some(wgpu::VertexFormat::Float32x4),
            _ => None,
        }
    }
}

/// How the pipeline reads raw vertex bytes: the stride between vertices and
/// one slot per attribute.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct VertexLayout {
    stride: u64,
    slots: Vec<AttributeSlot>,
}

impl VertexLayout {
    /// Tightly packed `f32` attributes at locations `0..n`, in order.
    ///
    /// `interleaved(&[3, 3])` is position + color: stride 24, offsets 0 and 12.
    pub fn interleaved(components: &[u32]) -> Result<Self, GeometryError> {
        let mut offset = 0;
        let mut slots = Vec::with_capacity(components.len());

        for (location, &count) in (0u32..).zip(components) {
            let slot = AttributeSlot {
                location,
                components: count,
                component_type: ComponentType::Float32,
                offset,
            };
            offset += slot.size();
            slots.push(slot);
        }

        Self::new(offset, slots)
    }

    /// Explicit layout. Every slot must have 1 to 4 components, a unique
    /// location, a component-aligned offset, and fit inside `stride`. The
    /// stride itself must be a whole number of components.
    pub fn new(stride: u64, slots: Vec<AttributeSlot>) -> Result<Self, GeometryError> {
        if slots.is_empty() {
            return Err(GeometryError::EmptyLayout);
        }

        let align = ComponentType::Float32.size();
        if stride % align != 0 {
            return Err(GeometryError::MisalignedStride { stride, align });
        }

        for (i, slot) in slots.iter().enumerate() {
            if slot.format().is_none() {
                return Err(GeometryError::InvalidComponentCount {
                    location: slot.location,
                    components: slot.components,
                });
            }
            let align = slot.component_type.size();
            if slot.offset % align != 0 {
                return Err(GeometryError::MisalignedSlot {
                    location: slot.location,
                    offset: slot.offset,
                    align,
                });
            }
            if slots[..i].iter().any(|s| s.location == slot.location) {
                return Err(GeometryError::DuplicateLocation { location: slot.location });
            }
            let end = slot.offset + slot.size();
            if end > stride {
                return Err(GeometryError::SlotOutsideStride {
                    location: slot.location,
                    end,
                    stride,
                });
            }
        }

        Ok(Self { stride, slots })
    }

    /// Bytes between consecutive vertices.
    pub fn stride(&self) -> u64 {
        self.stride
    }

    pub fn slots(&self) -> &[AttributeSlot] {
        &self.slots
    }

    pub fn slot(&self, location: u32) -> Option<&AttributeSlot> {
        self.slots.iter().find(|s| s.location == location)
    }

    /// `f32` values per vertex in a flat vertex array.
    pub fn floats_per_vertex(&self) -> usize {
        (self.stride / ComponentType::Float32.size()) as usize
    }

    /// wgpu attribute descriptors, one per slot.
    pub fn wgpu_attributes(&self) -> Vec<wgpu::VertexAttribute> {
        // Formats were checked in `new`.
        self.slots
            .iter()
            .filter_map(|slot| {
                Some(wgpu::VertexAttribute {
                    format: slot.format()?,
                    offset: slot.offset,
                    shader_location: slot.location,
                })
            })
            .collect()
    }

    pub fn buffer_layout<'a>(
        &self,
        attributes: &'a [wgpu::VertexAttribute],
    ) -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: self.stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_color_layout() {
        let layout = VertexLayout::interleaved(&[3, 3]).unwrap();
        assert_eq!(layout.stride(), 24);
        assert_eq!(layout.floats_per_vertex(), 6);

        let slots = layout.slots();
        assert_eq!((slots[0].location, slots[0].components, slots[0].offset), (0, 3, 0));
        assert_eq!((slots[1].location, slots[1].components, slots[1].offset), (1, 3, 12));
    }

    #[test]
    fn position_only_layout() {
        let layout = VertexLayout::interleaved(&[3]).unwrap();
        assert_eq!(layout.stride(), 12);
        assert!(layout.slot(1).is_none());
    }

    #[test]
    fn wgpu_attributes_mirror_slots() {
        let layout = VertexLayout::interleaved(&[2, 4]).unwrap();
        let attrs = layout.wgpu_attributes();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[0].format, wgpu::VertexFormat::Float32x2);
        assert_eq!(attrs[1].format, wgpu::VertexFormat::Float32x4);
        assert_eq!(attrs[1].offset, 8);
        assert_eq!(attrs[1].shader_location, 1);

        let buffer = layout.buffer_layout(&attrs);
        assert_eq!(buffer.array_stride, 24);
    }

    #[test]
    fn component_counts_outside_one_to_four_are_rejected() {
        assert_eq!(
            VertexLayout::interleaved(&[3, 5]),
            Err(GeometryError::InvalidComponentCount { location: 1, components: 5 })
        );
        assert!(VertexLayout::interleaved(&[0]).is_err());
        assert_eq!(VertexLayout::interleaved(&[]), Err(GeometryError::EmptyLayout));
    }

    #[test]
    fn explicit_layout_with_padding() {
        let slot = AttributeSlot {
            location: 0,
            components: 3,
            component_type: ComponentType::Float32,
            offset: 0,
        };
        let layout = VertexLayout::new(16, vec![slot]).unwrap();
        assert_eq!(layout.floats_per_vertex(), 4);
    }

    #[test]
    fn slot_past_stride_is_rejected() {
        let slot = AttributeSlot {
            location: 2,
            components: 3,
            component_type: ComponentType::Float32,
            offset: 8,
        };
        assert_eq!(
            VertexLayout::new(12, vec![slot]),
            Err(GeometryError::SlotOutsideStride { location: 2, end: 20, stride: 12 })
        );
    }

    #[test]
    fn duplicate_locations_are_rejected() {
        let slot = AttributeSlot {
            location: 0,
            components: 2,
            component_type: ComponentType::Float32,
            offset: 0,
        };
        let second = AttributeSlot { offset: 8, ..slot };
        assert_eq!(
            VertexLayout::new(16, vec![slot, second]),
            Err(GeometryError::DuplicateLocation { location: 0 })
        );
    }

    #[test]
    fn stride_must_be_whole_components() {
        let slot = AttributeSlot {
            location: 0,
            components: 3,
            component_type: ComponentType::Float32,
            offset: 0,
        };
        assert_eq!(
            VertexLayout::new(14, vec![slot]),
            Err(GeometryError::MisalignedStride { stride: 14, align: 4 })
        );
    }

    #[test]
    fn offset_must_be_component_aligned() {
        let slot = AttributeSlot {
            location: 1,
            components: 2,
            component_type: ComponentType::Float32,
            offset: 6,
        };
        assert_eq!(
            VertexLayout::new(16, vec![slot]),
            Err(GeometryError::MisalignedSlot { location: 1, offset: 6, align: 4 })
        );
    }
}
