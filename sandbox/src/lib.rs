//! Shared pieces of the sandbox demos.

pub mod input;
pub mod mesh;

use std::path::PathBuf;

/// Environment variable that overrides where the demos look for shader sources
pub const SHADER_DIR_VAR: &str = "HELLO_GL_SHADER_DIR";

pub fn shader_dir() -> PathBuf {
    match std::env::var_os(SHADER_DIR_VAR) {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("resources")
            .join("shaders"),
    }
}
