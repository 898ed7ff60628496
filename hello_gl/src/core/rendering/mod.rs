pub mod graphics_context;
pub mod shader;
pub mod shader_program;
