use wgpu::util::DeviceExt;

use super::error::GeometryError;
use super::layout::VertexLayout;

/// Element counts a draw call is validated against.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MeshShape {
    pub vertex_count: u32,
    /// `None` when there is no index buffer.
    pub index_count: Option<u32>,
}

/// Validated CPU-side geometry, ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    vertices: Vec<f32>,
    indices: Option<Vec<u32>>,
    layout: VertexLayout,
}

impl Geometry {
    /// Checks that `vertices` holds whole vertices of `layout` and that every
    /// index refers to one of them.
    pub fn new(
        vertices: Vec<f32>,
        indices: Option<Vec<u32>>,
        layout: VertexLayout,
    ) -> Result<Self, GeometryError> {
        let floats_per_vertex = layout.floats_per_vertex();

        if vertices.is_empty() {
            return Err(GeometryError::NoVertices);
        }
        if vertices.len() % floats_per_vertex != 0 {
            return Err(GeometryError::RaggedVertices {
                floats: vertices.len(),
                floats_per_vertex,
            });
        }

        let vertex_count = (vertices.len() / floats_per_vertex) as u32;
        if let Some(&index) = indices.iter().flatten().find(|&&i| i >= vertex_count) {
            return Err(GeometryError::IndexOutOfRange { index, vertex_count });
        }

        Ok(Self { vertices, indices, layout })
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    pub fn shape(&self) -> MeshShape {
        MeshShape {
            vertex_count: (self.vertices.len() / self.layout.floats_per_vertex()) as u32,
            index_count: self.indices.as_ref().map(|i| i.len() as u32),
        }
    }
}

/// GPU-resident geometry. Buffers are written once at creation.
#[derive(Debug)]
pub struct Mesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: Option<wgpu::Buffer>,
    shape: MeshShape,
    layout: VertexLayout,
}

impl Mesh {
    /// Uploads `geometry` into immutable vertex (and index) buffers.
    pub fn upload(device: &wgpu::Device, geometry: &Geometry, label: &str) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(geometry.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = geometry.indices().map(|indices| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            })
        });

        let shape = geometry.shape();
        log::debug!(
            "uploaded mesh '{label}': {} vertices, {:?} indices",
            shape.vertex_count,
            shape.index_count
        );

        Self {
            vertex_buffer,
            index_buffer,
            shape,
            layout: geometry.layout().clone(),
        }
    }

    pub fn shape(&self) -> MeshShape {
        self.shape
    }

    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    /// Binds the vertex buffer to slot 0 and the index buffer, if any.
    pub fn bind(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        if let Some(index_buffer) = &self.index_buffer {
            rpass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos_color() -> VertexLayout { VertexLayout::interleaved(&[3, 3]).unwrap() }

    #[test]
    fn colored_triangle_has_three_vertices() {
        #[rustfmt::skip]
        let vertices = vec![
            // position         // color
             0.5, -0.5, 0.0,    1.0, 0.0, 0.0,
            -0.5, -0.5, 0.0,    0.0, 1.0, 0.0,
             0.0,  0.5, 0.0,    0.0, 0.0, 1.0,
        ];
        let geometry = Geometry::new(vertices, None, pos_color()).unwrap();
        assert_eq!(geometry.shape(), MeshShape { vertex_count: 3, index_count: None });
    }

    #[test]
    fn indexed_rectangle() {
        let positions = VertexLayout::interleaved(&[3]).unwrap();
        let vertices = vec![
            0.5, 0.5, 0.0, 0.5, -0.5, 0.0, -0.5, -0.5, 0.0, -0.5, 0.5, 0.0,
        ];
        let geometry = Geometry::new(vertices, Some(vec![0, 1, 3, 1, 2, 3]), positions).unwrap();
        assert_eq!(geometry.shape(), MeshShape { vertex_count: 4, index_count: Some(6) });
        assert_eq!(geometry.indices(), Some(&[0, 1, 3, 1, 2, 3][..]));
    }

    #[test]
    fn partial_vertex_is_rejected() {
        let err = Geometry::new(vec![0.0; 10], None, pos_color()).unwrap_err();
        assert_eq!(err, GeometryError::RaggedVertices { floats: 10, floats_per_vertex: 6 });
    }

    #[test]
    fn empty_vertices_are_rejected() {
        assert_eq!(Geometry::new(vec![], None, pos_color()), Err(GeometryError::NoVertices));
    }

    #[test]
    fn index_past_last_vertex_is_rejected() {
        let err = Geometry::new(vec![0.0; 18], Some(vec![0, 1, 3]), pos_color()).unwrap_err();
        assert_eq!(err, GeometryError::IndexOutOfRange { index: 3, vertex_count: 3 });
    }
}
