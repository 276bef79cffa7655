//! Third program: shaders read from files, an indexed rectangle, and a live
//! FPS counter in the title bar.
//!
//! Shader files are looked up in `shaders/` (see
//! `firstlight_engine::shader::shader_dir`); set `FIRSTLIGHT_SHADER_DIR` when
//! running from elsewhere.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use firstlight_engine::core::{self, App, AppControl, FrameCtx};
use firstlight_engine::device::{Gpu, GpuInit};
use firstlight_engine::geometry::{DrawCall, Geometry, GeometryError, Mesh, VertexLayout};
use firstlight_engine::logging::{init_logging, LoggingConfig};
use firstlight_engine::paint::Color;
use firstlight_engine::render::Drawable;
use firstlight_engine::shader::{build_program, shader_dir, GpuLinker, ShaderSource};
use firstlight_engine::time::FpsCounter;
use firstlight_engine::window::{Runtime, RuntimeConfig};

const TITLE: &str = "firstlight: quad";
const CLEAR: Color = Color::rgb(0.2, 0.3, 0.3);

const VERTEX_FILE: &str = "quad.vert.wgsl";
const FRAGMENT_FILE: &str = "quad.frag.wgsl";

#[rustfmt::skip]
const VERTICES: [f32; 12] = [
     0.5,  0.5, 0.0, // top right
     0.5, -0.5, 0.0, // bottom right
    -0.5, -0.5, 0.0, // bottom left
    -0.5,  0.5, 0.0, // top left
];

#[rustfmt::skip]
const INDICES: [u32; 6] = [
    0, 1, 3, // first triangle
    1, 2, 3, // second triangle
];

const DRAWS: [DrawCall; 1] = [DrawCall::Indexed { count: 6 }];

fn rectangle() -> Result<Geometry, GeometryError> {
    Geometry::new(
        VERTICES.to_vec(),
        Some(INDICES.to_vec()),
        VertexLayout::interleaved(&[3])?,
    )
}

fn shader_sources(dir: &Path) -> (ShaderSource, ShaderSource) {
    (
        ShaderSource::file(dir.join(VERTEX_FILE)),
        ShaderSource::file(dir.join(FRAGMENT_FILE)),
    )
}

#[derive(Default)]
struct Quad {
    drawable: Option<Drawable>,
    /// Started once the program is linked and the rectangle uploaded.
    fps: Option<FpsCounter>,
}

impl App for Quad {
    fn init(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let geometry = rectangle().context("invalid rectangle geometry")?;

        let dir = shader_dir();
        log::info!("loading shaders from {}", dir.display());
        let (vertex, fragment) = shader_sources(&dir);

        let program = build_program(
            &mut GpuLinker {
                device: gpu.device(),
                target_format: gpu.surface_format(),
                layout: geometry.layout(),
                label: "quad program",
            },
            &vertex,
            &fragment,
        )?;

        let mesh = Mesh::upload(gpu.device(), &geometry, "quad geometry");
        self.drawable = Some(Drawable::new(program, mesh, DRAWS.to_vec())?);
        self.fps = Some(FpsCounter::new(Instant::now()));
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if let Some(report) = self.fps.as_mut().and_then(|fps| fps.tick(ctx.now)) {
            ctx.window.set_title(&report.title(TITLE));
        }

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

    core::finish(Runtime::run(config, GpuInit::default(), Quad::default()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use firstlight_engine::shader::{check_interface, compile_stage, StageKind};

    fn shipped_dir() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders")
    }

    #[test]
    fn rectangle_is_two_indexed_triangles() {
        let geometry = rectangle().unwrap();
        let shape = geometry.shape();
        assert_eq!(shape.vertex_count, 4);
        assert_eq!(shape.index_count, Some(6));

        for draw in DRAWS {
            draw.validate(shape).unwrap();
        }
    }

    #[test]
    fn shipped_shader_files_link_against_the_layout() {
        let (vertex, fragment) = shader_sources(&shipped_dir());
        let vs = compile_stage(StageKind::Vertex, &vertex.load().unwrap()).unwrap();
        let fs = compile_stage(StageKind::Fragment, &fragment.load().unwrap()).unwrap();
        check_interface(&vs, &fs, rectangle().unwrap().layout()).unwrap();
    }

    #[test]
    fn missing_shader_dir_fails_to_load() {
        let (vertex, _) = shader_sources(Path::new("no/such/dir"));
        assert!(vertex.load().is_err());
    }

    #[test]
    fn fps_counter_starts_in_init() {
        let quad = Quad::default();
        assert!(quad.fps.is_none());
    }
}
