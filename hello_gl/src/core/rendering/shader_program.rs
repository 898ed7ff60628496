use std::fmt;
use std::path::Path;

use crate::core::assets_management::file_source::FileSource;

use super::graphics_context::GraphicsContext;
use super::shader::{truncate_info_log, ShaderError, ShaderStage, PROGRAM_TAG};

/// A linked vertex + fragment program.
///
/// A value of this type always refers to a successfully linked program: every
/// failure during construction is returned as a [`ShaderError`] and all the
/// intermediate objects are released before that. The context is not owned;
/// every operation receives the context that created the program.
pub struct ShaderProgram<C: GraphicsContext> {
    program: C::Program,
}

impl<C: GraphicsContext> fmt::Debug for ShaderProgram<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderProgram")
            .field("program", &self.program)
            .finish()
    }
}

impl<C: GraphicsContext> ShaderProgram<C> {
    /// Reads both stage sources through `files`, then compiles and links them.
    ///
    /// Nothing is created on the context unless both sources were read.
    pub fn new<F: FileSource>(
        gl: &C,
        files: &F,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, ShaderError> {
        let vertex_src = read_stage(files, ShaderStage::Vertex, vertex_path.as_ref())?;
        let fragment_src = read_stage(files, ShaderStage::Fragment, fragment_path.as_ref())?;

        Self::from_source(gl, &vertex_src, &fragment_src)
    }

    /// Compiles and links in-memory stage sources
    pub fn from_source(gl: &C, vertex_src: &str, fragment_src: &str) -> Result<Self, ShaderError> {
        let program = compile_shaders(
            gl,
            &[
                (ShaderStage::Vertex, vertex_src),
                (ShaderStage::Fragment, fragment_src),
            ],
        )?;

        Ok(ShaderProgram { program })
    }

    pub fn handle(&self) -> C::Program {
        self.program
    }

    /// Makes this the active program for the following draw calls
    pub fn use_program(&self, gl: &C) {
        gl.use_program(Some(self.program));
    }

    pub fn set_bool(&self, gl: &C, name: &str, value: bool) {
        self.set_int(gl, name, value as i32);
    }

    /// Writes `value` to the uniform `name`.
    ///
    /// Does nothing if `name` is not an active uniform of this program.
    pub fn set_int(&self, gl: &C, name: &str, value: i32) {
        if let Some(location) = self.uniform_location(gl, name) {
            gl.use_program(Some(self.program));
            gl.uniform_1_i32(&location, value);
        }
    }

    /// Writes `value` to the uniform `name`.
    ///
    /// Does nothing if `name` is not an active uniform of this program.
    pub fn set_float(&self, gl: &C, name: &str, value: f32) {
        if let Some(location) = self.uniform_location(gl, name) {
            gl.use_program(Some(self.program));
            gl.uniform_1_f32(&location, value);
        }
    }

    pub fn get_int(&self, gl: &C, name: &str) -> Option<i32> {
        self.uniform_location(gl, name)
            .map(|location| gl.get_uniform_i32(self.program, &location))
    }

    pub fn get_float(&self, gl: &C, name: &str) -> Option<f32> {
        self.uniform_location(gl, name)
            .map(|location| gl.get_uniform_f32(self.program, &location))
    }

    pub fn has_uniform(&self, gl: &C, name: &str) -> bool {
        self.uniform_location(gl, name).is_some()
    }

    /// Deletes the program object
    pub fn destroy(self, gl: &C) {
        gl.delete_program(self.program);
    }

    fn uniform_location(&self, gl: &C, name: &str) -> Option<C::UniformLocation> {
        if name.is_empty() {
            return None;
        }
        let location = gl.get_uniform_location(self.program, name);
        if location.is_none() {
            log::trace!("Uniform '{}' is not active in this program, ignoring", name);
        }
        location
    }
}

fn read_stage<F: FileSource>(
    files: &F,
    stage: ShaderStage,
    path: &Path,
) -> Result<String, ShaderError> {
    files.read_text(path).map_err(|source| {
        log::error!(
            "Could not read {} shader source '{}': {}",
            stage,
            path.display(),
            source
        );
        ShaderError::ResourceRead {
            stage,
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Compile every stage and link them into a new program.
///
/// Stage objects never outlive this function, whether it succeeds or not.
fn compile_shaders<C: GraphicsContext>(
    gl: &C,
    stages: &[(ShaderStage, &str)],
) -> Result<C::Program, ShaderError> {
    let mut created_shaders: Vec<C::Shader> = Vec::with_capacity(stages.len());

    for (stage, source) in stages.iter() {
        let shader = match gl.create_shader(*stage) {
            Ok(shader) => shader,
            Err(message) => {
                delete_shaders(gl, &created_shaders);
                log::error!("Could not create {} shader: {}", stage, message);
                return Err(ShaderError::ObjectCreation {
                    stage_tag: stage.tag(),
                    message,
                });
            }
        };
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = truncate_info_log(gl.get_shader_info_log(shader));

            gl.delete_shader(shader);
            delete_shaders(gl, &created_shaders);

            log::error!("Error compiling {} shader:\n{}", stage, log);
            return Err(ShaderError::Compile { stage: *stage, log });
        }
        created_shaders.push(shader);
    }

    let program = match gl.create_program() {
        Ok(program) => program,
        Err(message) => {
            delete_shaders(gl, &created_shaders);
            log::error!("Could not create program: {}", message);
            return Err(ShaderError::ObjectCreation {
                stage_tag: PROGRAM_TAG,
                message,
            });
        }
    };

    for shader in created_shaders.iter() {
        gl.attach_shader(program, *shader);
    }
    gl.link_program(program);
    let is_linked = gl.get_program_link_status(program);

    // The program keeps what it needs from the stages once linked
    for shader in created_shaders.iter() {
        gl.detach_shader(program, *shader);
    }
    delete_shaders(gl, &created_shaders);

    if !is_linked {
        let log = truncate_info_log(gl.get_program_info_log(program));
        gl.delete_program(program);

        log::error!("Error linking program:\n{}", log);
        return Err(ShaderError::Link { log });
    }

    Ok(program)
}

fn delete_shaders<C: GraphicsContext>(gl: &C, shaders: &[C::Shader]) {
    for shader in shaders {
        gl.delete_shader(*shader);
    }
}
