use std::fmt;

use naga::valid::{Capabilities, ValidationFlags, Validator};

use super::error::ShaderError;

/// Entry point every stage must define (`@vertex fn main` / `@fragment fn main`).
pub const ENTRY_POINT: &str = "main";

/// Which pipeline stage a source unit is compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum StageKind {
    Vertex,
    Fragment,
}

impl StageKind {
    pub(crate) fn naga_stage(self) -> naga::ShaderStage {
        match self {
            Self::Vertex => naga::ShaderStage::Vertex,
            Self::Fragment => naga::ShaderStage::Fragment,
        }
    }

    fn attribute(self) -> &'static str {
        match self {
            Self::Vertex => "@vertex",
            Self::Fragment => "@fragment",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        })
    }
}

/// One successfully compiled stage.
///
/// Owns its source text and the validated module. Stages are consumed by
/// linking; nothing keeps them afterwards.
#[derive(Debug)]
pub struct CompiledStage {
    kind: StageKind,
    source: String,
    module: naga::Module,
}

impl CompiledStage {
    pub fn kind(&self) -> StageKind {
        self.kind
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// The stage's `main` entry point.
    pub(crate) fn entry_point(&self) -> Option<&naga::EntryPoint> {
        find_entry_point(&self.module, self.kind)
    }

    pub(crate) fn module(&self) -> &naga::Module {
        &self.module
    }
}

/// Compiles one stage: parse, validate, and require the `main` entry point.
///
/// On failure the error names the stage and carries the compiler log.
pub fn compile_stage(kind: StageKind, source: &str) -> Result<CompiledStage, ShaderError> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|err| ShaderError::compile(kind, err.emit_to_string(source)))?;

    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .map_err(|err| ShaderError::compile(kind, err.emit_to_string(source)))?;

    if find_entry_point(&module, kind).is_none() {
        return Err(ShaderError::compile(
            kind,
            format!("missing entry point: expected `{} fn {ENTRY_POINT}`", kind.attribute()),
        ));
    }

    log::debug!("compiled {kind} stage ({} bytes of source)", source.len());

    Ok(CompiledStage {
        kind,
        source: source.to_owned(),
        module,
    })
}

fn find_entry_point(module: &naga::Module, kind: StageKind) -> Option<&naga::EntryPoint> {
    let stage = kind.naga_stage();
    module
        .entry_points
        .iter()
        .find(|ep| ep.stage == stage && ep.name == ENTRY_POINT)
}
