use std::borrow::Cow;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::error::ShaderError;

/// Environment variable overriding the shader resource directory.
pub const SHADER_DIR_ENV: &str = "FIRSTLIGHT_SHADER_DIR";

/// Shader resource directory, relative to the working directory.
pub const DEFAULT_SHADER_DIR: &str = "shaders";

/// Where a stage's source text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderSource {
    /// Text embedded at build time.
    Inline(&'static str),
    /// Text file read at startup.
    File(PathBuf),
}

impl ShaderSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Returns the source text, reading it from disk for `File`.
    pub fn load(&self) -> Result<Cow<'static, str>, ShaderError> {
        match self {
            Self::Inline(text) => Ok(Cow::Borrowed(text)),
            Self::File(path) => read_source_file(path).map(Cow::Owned),
        }
    }
}

/// Reads a shader file line by line, joining lines with `\n`.
///
/// Line endings are normalized, so CRLF files compile the same as LF files.
pub fn read_source_file(path: &Path) -> Result<String, ShaderError> {
    let io_err = |source| ShaderError::Io { path: path.to_path_buf(), source };

    let reader = BufReader::new(File::open(path).map_err(io_err)?);

    let mut text = String::new();
    for line in reader.lines() {
        let line = line.map_err(io_err)?;
        text.push_str(line.trim_end_matches('\r'));
        text.push('\n');
    }

    log::debug!("read shader source {} ({} bytes)", path.display(), text.len());
    Ok(text)
}

/// Shader resource directory for this process.
///
/// `FIRSTLIGHT_SHADER_DIR` wins; otherwise `shaders/` under the working
/// directory, then `shaders/` next to the executable.
pub fn shader_dir() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    resolve_shader_dir(std::env::var_os(SHADER_DIR_ENV), exe_dir.as_deref())
}

/// Resolution rule behind [`shader_dir`], with its inputs made explicit.
pub fn resolve_shader_dir(env_override: Option<OsString>, exe_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = env_override.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }

    let relative = PathBuf::from(DEFAULT_SHADER_DIR);
    if relative.is_dir() {
        return relative;
    }

    exe_dir
        .map(|dir| dir.join(DEFAULT_SHADER_DIR))
        .filter(|dir| dir.is_dir())
        .unwrap_or(relative)
}
