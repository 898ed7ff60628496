use std::fmt;

use super::shader::ShaderStage;

/// The subset of a graphics API that shader programs are built with.
///
/// Handles are only meaningful for the context that produced them. Contexts
/// are usually bound to the thread that created them, so implementations are
/// not expected to be `Send` or `Sync`; callers serialize access.
pub trait GraphicsContext {
    type Shader: Copy + fmt::Debug;
    type Program: Copy + fmt::Debug;
    type UniformLocation;

    // Shader stages
    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn get_shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn get_shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    // Programs
    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn get_program_link_status(&self, program: Self::Program) -> bool;
    fn get_program_info_log(&self, program: Self::Program) -> String;
    fn delete_program(&self, program: Self::Program);
    fn use_program(&self, program: Option<Self::Program>);

    // Uniforms
    /// `None` when the name is not an active uniform of `program`
    fn get_uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation>;
    /// Writes to the uniform of the currently active program
    fn uniform_1_i32(&self, location: &Self::UniformLocation, value: i32);
    /// Writes to the uniform of the currently active program
    fn uniform_1_f32(&self, location: &Self::UniformLocation, value: f32);
    fn get_uniform_i32(&self, program: Self::Program, location: &Self::UniformLocation) -> i32;
    fn get_uniform_f32(&self, program: Self::Program, location: &Self::UniformLocation) -> f32;
}
