//! Shader build pipeline.
//!
//! Two stages (vertex, fragment) are compiled independently from WGSL source
//! text, then linked into a [`Program`]. The first failure aborts the build:
//! nothing is retried and a partially built program is never handed out.
//!
//! ```text
//! ShaderSource --load--> text --compile_stage--> CompiledStage --+
//!                                                                 +--link--> Program
//! ShaderSource --load--> text --compile_stage--> CompiledStage --+
//! ```
//!
//! Compilation and the link-time interface check run on the CPU through naga,
//! the same front end wgpu validates with; the GPU only sees stages that
//! already passed.

mod error;
mod interface;
mod program;
mod source;
mod stage;

pub use error::{ShaderError, MAX_LOG_LEN};
pub use interface::check_interface;
pub use program::{build_program, GpuLinker, Program, ProgramLinker};
pub use source::{read_source_file, resolve_shader_dir, shader_dir, ShaderSource, DEFAULT_SHADER_DIR, SHADER_DIR_ENV};
pub use stage::{compile_stage, CompiledStage, StageKind, ENTRY_POINT};
