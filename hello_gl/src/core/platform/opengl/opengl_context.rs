use glow::{Context, HasContext};

use crate::core::math::{color_from_rgba8, Colorf32};
use crate::core::rendering::graphics_context::GraphicsContext;
use crate::core::rendering::shader::ShaderStage;

impl GraphicsContext for Context {
    type Shader = glow::NativeShader;
    type Program = glow::NativeProgram;
    type UniformLocation = glow::NativeUniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        unsafe { HasContext::create_shader(self, stage.gl_type()) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn get_shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { HasContext::get_shader_compile_status(self, shader) }
    }

    fn get_shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { HasContext::get_shader_info_log(self, shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::detach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn get_program_link_status(&self, program: Self::Program) -> bool {
        unsafe { HasContext::get_program_link_status(self, program) }
    }

    fn get_program_info_log(&self, program: Self::Program) -> String {
        unsafe { HasContext::get_program_info_log(self, program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn get_uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation> {
        unsafe { HasContext::get_uniform_location(self, program, name) }
    }

    fn uniform_1_i32(&self, location: &Self::UniformLocation, value: i32) {
        unsafe { HasContext::uniform_1_i32(self, Some(location), value) }
    }

    fn uniform_1_f32(&self, location: &Self::UniformLocation, value: f32) {
        unsafe { HasContext::uniform_1_f32(self, Some(location), value) }
    }

    fn get_uniform_i32(&self, program: Self::Program, location: &Self::UniformLocation) -> i32 {
        let mut value = [0_i32];
        unsafe { HasContext::get_uniform_i32(self, program, location, &mut value) };
        value[0]
    }

    fn get_uniform_f32(&self, program: Self::Program, location: &Self::UniformLocation) -> f32 {
        let mut value = [0_f32];
        unsafe { HasContext::get_uniform_f32(self, program, location, &mut value) };
        value[0]
    }
}

/// Logs version, renderer and vendor of the current context
pub fn log_context_info(gl: &Context) {
    let (version, renderer, vendor) = unsafe {
        (
            gl.get_parameter_string(glow::VERSION),
            gl.get_parameter_string(glow::RENDERER),
            gl.get_parameter_string(glow::VENDOR),
        )
    };

    log::info!("Glow OpenGL successfully initialized!");
    log::info!("\tOpenGL Version: {}", version);
    log::info!("\tOpenGL Renderer: {}", renderer);
    log::info!("\tOpenGL Vendor: {}", vendor);
}

/// Reads a single RGBA8 pixel from the bound read framebuffer.
/// `(x, y)` is measured from the bottom-left corner.
pub fn read_pixel(gl: &Context, x: i32, y: i32) -> Colorf32 {
    let mut rgba = [0_u8; 4];
    unsafe {
        gl.pixel_store_i32(glow::PACK_ALIGNMENT, 1);
        gl.read_pixels(
            x,
            y,
            1,
            1,
            glow::RGBA,
            glow::UNSIGNED_BYTE,
            glow::PixelPackData::Slice(&mut rgba),
        );
    }
    color_from_rgba8(rgba)
}

pub fn set_viewport(gl: &Context, x: u32, y: u32, width: u32, height: u32) {
    unsafe {
        gl.viewport(x as i32, y as i32, width as i32, height as i32);
    }
}

pub fn clear(gl: &Context, color: Colorf32) {
    unsafe {
        gl.clear_color(color.x, color.y, color.z, color.w);
        gl.clear(glow::COLOR_BUFFER_BIT);
    }
}
