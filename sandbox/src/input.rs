use hello_gl::core::rendering::graphics_context::GraphicsContext;
use hello_gl::core::rendering::shader_program::ShaderProgram;
use winit::keyboard::KeyCode;

pub const MIX_STEP: f32 = 0.001;
pub const MIN_BANDS: i32 = 1;
pub const MAX_BANDS: i32 = 32;

/// Uniform values of the color mix demo, driven by the keyboard.
///
/// Up/Down move `color_mix` by [`MIX_STEP`] every frame they are held,
/// Space toggles the vertex colors and Left/Right change the band count.
#[derive(Debug, Clone, PartialEq)]
pub struct MixControls {
    pub color_mix: f32,
    pub use_vertex_color: bool,
    pub bands: i32,
    raising: bool,
    lowering: bool,
}

impl Default for MixControls {
    fn default() -> Self {
        MixControls {
            color_mix: 0.2,
            use_vertex_color: true,
            bands: MAX_BANDS,
            raising: false,
            lowering: false,
        }
    }
}

impl MixControls {
    pub fn on_key(&mut self, key: KeyCode, pressed: bool, repeat: bool) {
        match key {
            KeyCode::ArrowUp => self.raising = pressed,
            KeyCode::ArrowDown => self.lowering = pressed,
            KeyCode::Space if pressed && !repeat => self.use_vertex_color = !self.use_vertex_color,
            KeyCode::ArrowRight if pressed => self.bands = (self.bands + 1).min(MAX_BANDS),
            KeyCode::ArrowLeft if pressed => self.bands = (self.bands - 1).max(MIN_BANDS),
            _ => {}
        }
    }

    /// Advances held keys by one frame
    pub fn tick(&mut self) {
        if self.raising {
            self.color_mix = (self.color_mix + MIX_STEP).min(1.0);
        }
        if self.lowering {
            self.color_mix = (self.color_mix - MIX_STEP).max(0.0);
        }
    }

    pub fn apply<C: GraphicsContext>(&self, gl: &C, program: &ShaderProgram<C>) {
        program.set_float(gl, "colorMix", self.color_mix);
        program.set_bool(gl, "useVertexColor", self.use_vertex_color);
        program.set_int(gl, "bands", self.bands);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_up_key_raises_mix_until_clamped() {
        let mut controls = MixControls::default();
        controls.on_key(KeyCode::ArrowUp, true, false);
        for _ in 0..2000 {
            controls.tick();
        }
        assert_eq!(controls.color_mix, 1.0);

        controls.on_key(KeyCode::ArrowUp, false, false);
        controls.on_key(KeyCode::ArrowDown, true, false);
        for _ in 0..2000 {
            controls.tick();
        }
        assert_eq!(controls.color_mix, 0.0);
    }

    #[test]
    fn released_keys_stop_changing_mix() {
        let mut controls = MixControls::default();
        controls.on_key(KeyCode::ArrowUp, true, false);
        controls.tick();
        controls.on_key(KeyCode::ArrowUp, false, false);
        let after_release = controls.color_mix;
        controls.tick();

        assert!(after_release > 0.2);
        assert_eq!(controls.color_mix, after_release);
    }

    #[test]
    fn space_toggles_once_per_press() {
        let mut controls = MixControls::default();
        controls.on_key(KeyCode::Space, true, false);
        controls.on_key(KeyCode::Space, true, true);
        controls.on_key(KeyCode::Space, false, false);

        assert!(!controls.use_vertex_color);
    }

    #[test]
    fn bands_stay_in_range() {
        let mut controls = MixControls::default();
        controls.on_key(KeyCode::ArrowRight, true, false);
        assert_eq!(controls.bands, MAX_BANDS);

        for _ in 0..100 {
            controls.on_key(KeyCode::ArrowLeft, true, true);
        }
        assert_eq!(controls.bands, MIN_BANDS);
    }
}
