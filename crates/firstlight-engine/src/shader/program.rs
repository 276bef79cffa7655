use crate::geometry::VertexLayout;

use super::error::ShaderError;
use super::interface::check_interface;
use super::source::ShaderSource;
use super::stage::{compile_stage, CompiledStage, StageKind, ENTRY_POINT};

/// A linked program: both stages compiled, interface checked, render pipeline
/// created. The unit bound before each draw.
#[derive(Debug)]
pub struct Program {
    layout: VertexLayout,
    pipeline: wgpu::RenderPipeline,
}

impl Program {
    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    /// Vertex layout the pipeline was linked against.
    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }
}

/// Turns two compiled stages into a program.
pub trait ProgramLinker {
    type Program;

    fn link(
        &mut self,
        vertex: &CompiledStage,
        fragment: &CompiledStage,
    ) -> Result<Self::Program, ShaderError>;
}

/// Loads and compiles both stages, then links them.
///
/// A compile failure aborts before linking is attempted. The stage objects are
/// released once the link call returns, whatever its outcome.
pub fn build_program<L: ProgramLinker>(
    linker: &mut L,
    vertex: &ShaderSource,
    fragment: &ShaderSource,
) -> Result<L::Program, ShaderError> {
    let vertex = compile_stage(StageKind::Vertex, &vertex.load()?)?;
    let fragment = compile_stage(StageKind::Fragment, &fragment.load()?)?;

    let program = linker.link(&vertex, &fragment);

    drop(vertex);
    drop(fragment);

    match &program {
        Ok(_) => log::info!("shader program linked"),
        Err(err) => log::error!("{err}"),
    }
    program
}

/// Links stages into a wgpu render pipeline drawing triangle lists into one
/// color target.
///
/// Validation errors raised by wgpu while creating the modules or the pipeline
/// are captured and returned as link failures.
pub struct GpuLinker<'a> {
    pub device: &'a wgpu::Device,
    pub target_format: wgpu::TextureFormat,
    pub layout: &'a VertexLayout,
    pub label: &'a str,
}

impl ProgramLinker for GpuLinker<'_> {
    type Program = Program;

    fn link(
        &mut self,
        vertex: &CompiledStage,
        fragment: &CompiledStage,
    ) -> Result<Program, ShaderError> {
        check_interface(vertex, fragment, self.layout)?;

        let scope = self.device.push_error_scope(wgpu::ErrorFilter::Validation);

        let vs_label = format!("{} vertex", self.label);
        let fs_label = format!("{} fragment", self.label);

        let vs_module = self.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(vs_label.as_str()),
            source: wgpu::ShaderSource::Wgsl(vertex.source().into()),
        });
        let fs_module = self.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(fs_label.as_str()),
            source: wgpu::ShaderSource::Wgsl(fragment.source().into()),
        });

        let pipeline_layout = self
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some(self.label),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let attributes = self.layout.wgpu_attributes();

        let pipeline = self.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(self.label),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vs_module,
                entry_point: Some(ENTRY_POINT),
                compilation_options: Default::default(),
                buffers: &[self.layout.buffer_layout(&attributes)],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fs_module,
                entry_point: Some(ENTRY_POINT),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: self.target_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(scope.pop()) {
            return Err(ShaderError::link(err.to_string()));
        }

        Ok(Program {
            layout: self.layout.clone(),
            pipeline,
        })
    }
}
