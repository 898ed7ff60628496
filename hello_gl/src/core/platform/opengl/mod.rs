pub mod opengl_context;

pub use opengl_context::{clear, log_context_info, read_pixel, set_viewport};
