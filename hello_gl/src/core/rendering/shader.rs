use std::fmt;
use std::io;
use std::path::PathBuf;

/// Maximum number of bytes kept from a compile or link info log
pub const INFO_LOG_CAPACITY: usize = 1024;

/// Tag used by errors that concern the linked program instead of a single stage
pub const PROGRAM_TAG: &str = "PROGRAM";

/// Programmable stages a [`ShaderProgram`](super::shader_program::ShaderProgram) is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn tag(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "VERTEX",
            ShaderStage::Fragment => "FRAGMENT",
        }
    }

    /// OpenGL enum for this stage
    pub fn gl_type(&self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug)]
pub enum ShaderError {
    /// Source text for a stage could not be read
    ResourceRead {
        stage: ShaderStage,
        path: PathBuf,
        source: io::Error,
    },
    /// The context rejected the source of a stage
    Compile { stage: ShaderStage, log: String },
    /// Both stages compiled but the program could not be linked
    Link { log: String },
    /// The context could not allocate a shader or program object
    ObjectCreation {
        stage_tag: &'static str,
        message: String,
    },
}

impl ShaderError {
    /// "VERTEX", "FRAGMENT" or "PROGRAM"
    pub fn stage_tag(&self) -> &'static str {
        match self {
            ShaderError::ResourceRead { stage, .. } | ShaderError::Compile { stage, .. } => {
                stage.tag()
            }
            ShaderError::Link { .. } => PROGRAM_TAG,
            ShaderError::ObjectCreation { stage_tag, .. } => *stage_tag,
        }
    }

    /// Diagnostic text reported by the context, if any
    pub fn log(&self) -> Option<&str> {
        match self {
            ShaderError::Compile { log, .. } | ShaderError::Link { log } => Some(log.as_str()),
            ShaderError::ObjectCreation { message, .. } => Some(message.as_str()),
            ShaderError::ResourceRead { .. } => None,
        }
    }
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::ResourceRead { stage, path, source } => write!(
                f,
                "could not read {} shader source '{}': {}",
                stage,
                path.display(),
                source
            ),
            ShaderError::Compile { stage, log } => {
                write!(f, "{} shader compilation failed:\n{}", stage, log)
            }
            ShaderError::Link { log } => write!(f, "program linking failed:\n{}", log),
            ShaderError::ObjectCreation { stage_tag, message } => {
                write!(f, "could not create {} object: {}", stage_tag, message)
            }
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::ResourceRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Cuts an info log down to [`INFO_LOG_CAPACITY`] bytes without splitting a character
pub fn truncate_info_log(mut log: String) -> String {
    if log.len() > INFO_LOG_CAPACITY {
        let mut end = INFO_LOG_CAPACITY;
        while !log.is_char_boundary(end) {
            end -= 1;
        }
        log.truncate(end);
    }
    log
}
