use std::fmt;
use std::path::PathBuf;

use super::stage::StageKind;

/// Longest diagnostic log kept from a failed compile or link, in bytes.
pub const MAX_LOG_LEN: usize = 512;

/// Failure anywhere in the shader build pipeline.
#[derive(Debug)]
pub enum ShaderError {
    /// Shader file missing or unreadable.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// One stage failed to compile.
    Compile { stage: StageKind, log: String },

    /// Both stages compiled but do not link into a program.
    Link { log: String },
}

impl ShaderError {
    pub(crate) fn compile(stage: StageKind, log: impl Into<String>) -> Self {
        Self::Compile { stage, log: bounded_log(log.into()) }
    }

    pub(crate) fn link(log: impl Into<String>) -> Self {
        Self::Link { log: bounded_log(log.into()) }
    }

    /// Diagnostic log of a compile or link failure.
    pub fn log(&self) -> Option<&str> {
        match self {
            Self::Compile { log, .. } | Self::Link { log } => Some(log.as_str()),
            Self::Io { .. } => None,
        }
    }
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read shader file {}: {source}", path.display())
            }
            Self::Compile { stage, log } => write!(f, "{stage} shader compilation failed\n{log}"),
            Self::Link { log } => write!(f, "shader program linking failed\n{log}"),
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Truncates `log` to at most [`MAX_LOG_LEN`] bytes on a char boundary.
fn bounded_log(mut log: String) -> String {
    if log.len() > MAX_LOG_LEN {
        let mut end = MAX_LOG_LEN;
        while !log.is_char_boundary(end) {
            end -= 1;
        }
        log.truncate(end);
    }
    log
}
