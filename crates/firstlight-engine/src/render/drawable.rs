use crate::geometry::{DrawCall, GeometryError, Mesh};
use crate::shader::Program;

/// A program, its mesh, and the draw calls recorded each frame.
#[derive(Debug)]
pub struct Drawable {
    program: Program,
    mesh: Mesh,
    draws: Vec<DrawCall>,
}

impl Drawable {
    /// Pairs `program` with `mesh`. The mesh must use the vertex layout the
    /// program was linked with, and every draw call must stay within the
    /// mesh's uploaded elements.
    pub fn new(program: Program, mesh: Mesh, draws: Vec<DrawCall>) -> Result<Self, GeometryError> {
        if mesh.layout() != program.layout() {
            return Err(GeometryError::LayoutMismatch);
        }
        for draw in &draws {
            draw.validate(mesh.shape())?;
        }
        Ok(Self { program, mesh, draws })
    }

    /// Binds the program and buffers, then issues every draw call.
    pub fn record(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(self.program.pipeline());
        self.mesh.bind(rpass);
        for draw in &self.draws {
            draw.record(rpass);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Geometry, VertexLayout};
    use crate::shader::{build_program, GpuLinker, ShaderSource};

    const VERTEX: &str = "
        @vertex
        fn main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
            return vec4<f32>(position, 1.0);
        }
    ";

    const FRAGMENT: &str = "
        @fragment
        fn main() -> @location(0) vec4<f32> {
            return vec4<f32>(1.0);
        }
    ";

    fn program(device: &wgpu::Device, layout: &VertexLayout) -> Program {
        build_program(
            &mut GpuLinker {
                device,
                target_format: wgpu::TextureFormat::Rgba8Unorm,
                layout,
                label: "drawable test",
            },
            &ShaderSource::Inline(VERTEX),
            &ShaderSource::Inline(FRAGMENT),
        )
        .unwrap()
    }

    #[test]
    fn matching_layout_and_draws_are_accepted() {
        let (device, _queue) = wgpu::Device::noop(&wgpu::DeviceDescriptor::default());
        let layout = VertexLayout::interleaved(&[3]).unwrap();
        let geometry = Geometry::new(vec![0.0; 9], None, layout.clone()).unwrap();

        let mesh = Mesh::upload(&device, &geometry, "triangle");
        let draws = vec![DrawCall::Arrays { first: 0, count: 3 }];
        assert!(Drawable::new(program(&device, &layout), mesh, draws).is_ok());
    }

    #[test]
    fn mesh_with_another_layout_is_rejected() {
        let (device, _queue) = wgpu::Device::noop(&wgpu::DeviceDescriptor::default());
        let linked = VertexLayout::interleaved(&[3]).unwrap();
        let colored = VertexLayout::interleaved(&[3, 3]).unwrap();
        let geometry = Geometry::new(vec![0.0; 18], None, colored).unwrap();

        let mesh = Mesh::upload(&device, &geometry, "colored triangle");
        let draws = vec![DrawCall::Arrays { first: 0, count: 3 }];
        let err = Drawable::new(program(&device, &linked), mesh, draws).unwrap_err();
        assert_eq!(err, GeometryError::LayoutMismatch);
    }

    #[test]
    fn draw_past_the_mesh_is_rejected() {
        let (device, _queue) = wgpu::Device::noop(&wgpu::DeviceDescriptor::default());
        let layout = VertexLayout::interleaved(&[3]).unwrap();
        let geometry = Geometry::new(vec![0.0; 9], None, layout.clone()).unwrap();

        let mesh = Mesh::upload(&device, &geometry, "triangle");
        let draws = vec![DrawCall::Arrays { first: 1, count: 3 }];
        let err = Drawable::new(program(&device, &layout), mesh, draws).unwrap_err();
        assert!(matches!(err, GeometryError::DrawOutOfRange { .. }));
    }
}
