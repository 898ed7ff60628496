//! Winit window with an OpenGL 3.3 core context made current on the calling thread.

use std::num::NonZeroU32;

use anyhow::{anyhow, Context as _, Result};
use glutin::config::{ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use raw_window_handle::HasRawWindowHandle;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window as winit_Window, WindowBuilder as winit_WindowBuilder};

use crate::core::platform::opengl::{log_context_info, set_viewport};
use crate::core::windowing::window::WindowBuilder;

pub struct WinitWindow {
    width: u32,
    height: u32,
    title: String,
    use_vsync: bool,
    // Field order is drop order: the gl function table goes before the context
    gl: glow::Context,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: winit_Window,
}

impl WinitWindow {
    /// Opens the window and makes its context current.
    ///
    /// The returned event loop drives the window; run it on this same thread.
    pub fn create(window_builder: WindowBuilder) -> Result<(Self, EventLoop<()>)> {
        let props = window_builder.build();
        let winit_builder = winit_WindowBuilder::new()
            .with_title(props.title.clone())
            .with_inner_size(LogicalSize::new(props.width, props.height))
            .with_decorations(true);

        let event_loop = EventLoop::new()
            .map_err(|err| anyhow!("Could not build event loop for winit window: {err}"))?;

        let (window, cfg) = glutin_winit::DisplayBuilder::new()
            .with_window_builder(Some(winit_builder))
            .build(&event_loop, ConfigTemplateBuilder::new(), |configs| {
                // glutin only calls the picker with at least one config
                configs
                    .reduce(|best, cfg| {
                        if cfg.num_samples() > best.num_samples() {
                            cfg
                        } else {
                            best
                        }
                    })
                    .expect("glutin offered no framebuffer configs")
            })
            .map_err(|err| anyhow!("Failed to create winit window: {err}"))?;
        let window = window.context("Failed to create winit window")?;
        let raw_handle = window.raw_window_handle();

        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_handle));
        let context = unsafe {
            cfg.display()
                .create_context(&cfg, &context_attrs)
                .context("Failed to create OpenGL 3.3 core context")?
        };

        let size = window.inner_size();
        let (width, height) = (
            NonZeroU32::new(size.width).context("window has zero width")?,
            NonZeroU32::new(size.height).context("window has zero height")?,
        );
        let surface_attrs =
            SurfaceAttributesBuilder::<WindowSurface>::new().build(raw_handle, width, height);
        let surface = unsafe {
            cfg.display()
                .create_window_surface(&cfg, &surface_attrs)
                .context("Failed to create OpenGL surface for window")?
        };

        let context = context
            .make_current(&surface)
            .context("Error making OpenGL context the current context")?;

        let gl = glow_context(&context);
        log_context_info(&gl);

        let result = WinitWindow {
            width: size.width,
            height: size.height,
            title: props.title,
            use_vsync: props.vsync,
            gl,
            surface,
            context,
            window,
        };
        result.apply_swap_interval(props.vsync);
        set_viewport(&result.gl, 0, 0, result.width, result.height);

        Ok((result, event_loop))
    }

    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    pub fn get_width(&self) -> u32 {
        self.width
    }

    pub fn get_height(&self) -> u32 {
        self.height
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_vsync(&self) -> bool {
        self.use_vsync
    }

    pub fn set_vsync(&mut self, is_vsync_active: bool) {
        if self.use_vsync == is_vsync_active {
            return;
        }

        if self.apply_swap_interval(is_vsync_active) {
            self.use_vsync = is_vsync_active;
        }
    }

    /// Resizes the surface and the viewport. Zero sizes (minimized window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        let (Some(nz_width), Some(nz_height)) = (NonZeroU32::new(width), NonZeroU32::new(height))
        else {
            return;
        };

        self.surface.resize(&self.context, nz_width, nz_height);
        self.width = width;
        self.height = height;
        set_viewport(&self.gl, 0, 0, width, height);
        log::debug!("Window resized to {}x{}", width, height);
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    pub fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .context("Error swapping buffers")
    }
}

impl WinitWindow {
    fn apply_swap_interval(&self, is_vsync_active: bool) -> bool {
        let interval = if is_vsync_active {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        match self.surface.set_swap_interval(&self.context, interval) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Could not change swap interval: {}", err);
                false
            }
        }
    }
}

fn glow_context(context: &PossiblyCurrentContext) -> glow::Context {
    unsafe {
        glow::Context::from_loader_function_cstr(|s| context.display().get_proc_address(s).cast())
    }
}
