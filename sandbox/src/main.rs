use anyhow::{anyhow, Context, Result};
use hello_gl::core::assets_management::file_source::FileSystemSource;
use hello_gl::core::logging::{init_logging, LoggingConfig};
use hello_gl::core::math::{colors_match, Colorf32};
use hello_gl::core::platform::opengl::{clear, read_pixel};
use hello_gl::core::platform::winit_window::WinitWindow;
use hello_gl::core::rendering::shader_program::ShaderProgram;
use hello_gl::core::windowing::window::WindowBuilder;
use sandbox::mesh::Mesh;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

const CLEAR_COLOR: Colorf32 = Colorf32::new(0.255, 0.588, 0.882, 1.0);
const TRIANGLE_COLOR: Colorf32 = Colorf32::new(1.0, 0.5, 0.2, 1.0);
const PIXEL_TOLERANCE: f32 = 2.0 / 255.0;

// A single triangle whose interior covers the whole viewport
const TRIANGLE: [f32; 9] = [
    -1.0, -1.0, 0.0, //
    3.0, -1.0, 0.0, //
    -1.0, 3.0, 0.0, //
];

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let (mut window, event_loop) = WinitWindow::create(
        WindowBuilder::new()
            .with_width(800)
            .with_height(600)
            .with_title("Hello Triangle".to_owned()),
    )?;

    let files = FileSystemSource::with_root(sandbox::shader_dir());
    let shader = ShaderProgram::new(window.gl(), &files, "simple.vert", "simple.frag")
        .context("Could not build the triangle shader")?;
    let mesh = Mesh::new(window.gl(), &TRIANGLE, &[], &[3])?;

    let mut resources = Some((shader, mesh));
    let mut center_checked = false;

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(size) => window.resize(size.width, size.height),
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(KeyCode::Escape),
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                } => elwt.exit(),
                WindowEvent::RedrawRequested => {
                    let Some((shader, mesh)) = resources.as_ref() else {
                        return;
                    };
                    let gl = window.gl();

                    clear(gl, CLEAR_COLOR);
                    shader.use_program(gl);
                    mesh.draw(gl);

                    if !center_checked {
                        center_checked = true;
                        check_center_pixel(&window);
                    }

                    if let Err(err) = window.swap_buffers() {
                        log::error!("{:#}", err);
                        elwt.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => window.request_redraw(),
            Event::LoopExiting => {
                if let Some((shader, mesh)) = resources.take() {
                    shader.destroy(window.gl());
                    mesh.destroy(window.gl());
                }
            }
            _ => {}
        })
        .map_err(|err| anyhow!("Event loop error: {err}"))
}

fn check_center_pixel(window: &WinitWindow) {
    let (x, y) = (window.get_width() / 2, window.get_height() / 2);
    let pixel = read_pixel(window.gl(), x as i32, y as i32);

    if colors_match(pixel, TRIANGLE_COLOR, PIXEL_TOLERANCE) {
        log::info!("Center pixel {} matches the triangle color", pixel);
    } else {
        log::warn!(
            "Center pixel {} differs from {} by more than {}",
            pixel,
            TRIANGLE_COLOR,
            PIXEL_TOLERANCE
        );
    }
}
