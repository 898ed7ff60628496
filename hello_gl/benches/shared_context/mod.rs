use std::cell::Cell;

use hello_gl::core::rendering::graphics_context::GraphicsContext;
use hello_gl::core::rendering::shader::ShaderStage;

/// Context that accepts everything and only hands out ids.
/// Uniforms named in `ACTIVE_UNIFORMS` resolve, anything else does not.
#[derive(Default)]
pub struct NullContext {
    next_id: Cell<u32>,
    last_float: Cell<f32>,
}

pub const ACTIVE_UNIFORMS: [&str; 2] = ["textureMix", "bands"];

impl NullContext {
    fn next(&self) -> u32 {
        self.next_id.set(self.next_id.get() + 1);
        self.next_id.get()
    }

    pub fn last_float(&self) -> f32 {
        self.last_float.get()
    }
}

impl GraphicsContext for NullContext {
    type Shader = u32;
    type Program = u32;
    type UniformLocation = usize;

    fn create_shader(&self, _stage: ShaderStage) -> Result<u32, String> {
        Ok(self.next())
    }
    fn shader_source(&self, _shader: u32, _source: &str) {}
    fn compile_shader(&self, _shader: u32) {}
    fn get_shader_compile_status(&self, _shader: u32) -> bool {
        true
    }
    fn get_shader_info_log(&self, _shader: u32) -> String {
        String::new()
    }
    fn delete_shader(&self, _shader: u32) {}

    fn create_program(&self) -> Result<u32, String> {
        Ok(self.next())
    }
    fn attach_shader(&self, _program: u32, _shader: u32) {}
    fn detach_shader(&self, _program: u32, _shader: u32) {}
    fn link_program(&self, _program: u32) {}
    fn get_program_link_status(&self, _program: u32) -> bool {
        true
    }
    fn get_program_info_log(&self, _program: u32) -> String {
        String::new()
    }
    fn delete_program(&self, _program: u32) {}
    fn use_program(&self, _program: Option<u32>) {}

    fn get_uniform_location(&self, _program: u32, name: &str) -> Option<usize> {
        ACTIVE_UNIFORMS.iter().position(|active| *active == name)
    }
    fn uniform_1_i32(&self, _location: &usize, _value: i32) {}
    fn uniform_1_f32(&self, _location: &usize, value: f32) {
        self.last_float.set(value);
    }
    fn get_uniform_i32(&self, _program: u32, _location: &usize) -> i32 {
        0
    }
    fn get_uniform_f32(&self, _program: u32, _location: &usize) -> f32 {
        self.last_float.get()
    }
}
