pub use glam;

/// RGBA color with components in `[0, 1]`
pub type Colorf32 = glam::Vec4;

/// Converts an 8-bit-per-channel RGBA pixel into a normalized color
pub fn color_from_rgba8(rgba: [u8; 4]) -> Colorf32 {
    Colorf32::new(
        rgba[0] as f32 / 255.0,
        rgba[1] as f32 / 255.0,
        rgba[2] as f32 / 255.0,
        rgba[3] as f32 / 255.0,
    )
}

/// True when every channel of `a` and `b` differs by at most `tolerance`
pub fn colors_match(a: Colorf32, b: Colorf32, tolerance: f32) -> bool {
    (a - b).abs().max_element() <= tolerance
}
