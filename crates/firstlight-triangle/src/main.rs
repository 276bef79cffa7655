//! Second program: inline shaders and one interleaved position + color
//! triangle, drawn without indices.

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use firstlight_engine::core::{self, App, AppControl, FrameCtx};
use firstlight_engine::device::{Gpu, GpuInit};
use firstlight_engine::geometry::{DrawCall, Geometry, GeometryError, Mesh, VertexLayout};
use firstlight_engine::logging::{init_logging, LoggingConfig};
use firstlight_engine::paint::Color;
use firstlight_engine::render::Drawable;
use firstlight_engine::shader::{build_program, GpuLinker, ShaderSource};
use firstlight_engine::window::{Runtime, RuntimeConfig};

const TITLE: &str = "firstlight: triangle";
const CLEAR: Color = Color::rgb(0.2, 0.3, 0.3);

const VERTEX_SHADER: &str = r#"
struct VertexOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) color: vec3<f32>,
};

@vertex
fn main(@location(0) position: vec3<f32>, @location(1) color: vec3<f32>) -> VertexOutput {
    var out: VertexOutput;
    out.position = vec4<f32>(position, 1.0);
    out.color = color;
    return out;
}
"#;

const FRAGMENT_SHADER: &str = r#"
@fragment
fn main(@location(0) color: vec3<f32>) -> @location(0) vec4<f32> {
    return vec4<f32>(color, 1.0);
}
"#;

#[rustfmt::skip]
const VERTICES: [f32; 18] = [
    // position          // color
     0.5, -0.5, 0.0,     1.0, 0.0, 0.0,
    -0.5, -0.5, 0.0,     0.0, 1.0, 0.0,
     0.0,  0.5, 0.0,     0.0, 0.0, 1.0,
];

const DRAWS: [DrawCall; 1] = [DrawCall::Arrays { first: 0, count: 3 }];

fn triangle() -> Result<Geometry, GeometryError> {
    Geometry::new(VERTICES.to_vec(), None, VertexLayout::interleaved(&[3, 3])?)
}

#[derive(Default)]
struct Triangle {
    drawable: Option<Drawable>,
}

impl App for Triangle {
    fn init(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let geometry = triangle().context("invalid triangle geometry")?;

        let program = build_program(
            &mut GpuLinker {
                device: gpu.device(),
                target_format: gpu.surface_format(),
                layout: geometry.layout(),
                label: "triangle program",
            },
            &ShaderSource::Inline(VERTEX_SHADER),
            &ShaderSource::Inline(FRAGMENT_SHADER),
        )?;

        let mesh = Mesh::upload(gpu.device(), &geometry, "triangle vertices");
        self.drawable = Some(Drawable::new(program, mesh, DRAWS.to_vec())?);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let drawable = self.drawable.as_ref();
        ctx.render(CLEAR, |rpass| {
            if let Some(drawable) = drawable {
                drawable.record(rpass);
            }
        })
    }
}

fn main() {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: TITLE.to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
        ..RuntimeConfig::default()
    };

    core::finish(Runtime::run(config, GpuInit::default(), Triangle::default()));
}
