use anyhow::{anyhow, Context, Result};
use hello_gl::core::assets_management::file_source::FileSystemSource;
use hello_gl::core::logging::{init_logging, LoggingConfig};
use hello_gl::core::math::Colorf32;
use hello_gl::core::platform::opengl::clear;
use hello_gl::core::platform::winit_window::WinitWindow;
use hello_gl::core::rendering::shader_program::ShaderProgram;
use hello_gl::core::windowing::window::WindowBuilder;
use sandbox::input::MixControls;
use sandbox::mesh::Mesh;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

const CLEAR_COLOR: Colorf32 = Colorf32::new(0.255, 0.588, 0.882, 1.0);

#[rustfmt::skip]
const RECTANGLE: [f32; 24] = [
    // positions       // colors
     0.5,  0.5, 0.0,   1.0, 0.0, 0.0, // top right
     0.5, -0.5, 0.0,   0.0, 1.0, 0.0, // bottom right
    -0.5, -0.5, 0.0,   0.0, 0.0, 1.0, // bottom left
    -0.5,  0.5, 0.0,   1.0, 1.0, 0.0, // top left
];

const RECTANGLE_INDICES: [u32; 6] = [
    0, 1, 3, //
    1, 2, 3, //
];

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let (mut window, event_loop) = WinitWindow::create(
        WindowBuilder::new().with_title("Color Mix".to_owned()),
    )?;

    let files = FileSystemSource::with_root(sandbox::shader_dir());
    let shader = ShaderProgram::new(window.gl(), &files, "color_mix.vert", "color_mix.frag")
        .context("Could not build the color mix shader")?;
    let mesh = Mesh::new(window.gl(), &RECTANGLE, &RECTANGLE_INDICES, &[3, 3])?;

    let mut controls = MixControls::default();
    shader.use_program(window.gl());
    controls.apply(window.gl(), &shader);
    log::info!("Up/Down: mix, Space: vertex colors, Left/Right: bands, Escape: quit");

    let mut resources = Some((shader, mesh));

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(size) => window.resize(size.width, size.height),
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(key),
                            state,
                            repeat,
                            ..
                        },
                    ..
                } => {
                    let pressed = state == ElementState::Pressed;
                    if key == KeyCode::Escape && pressed {
                        elwt.exit();
                    } else {
                        controls.on_key(key, pressed, repeat);
                    }
                }
                WindowEvent::RedrawRequested => {
                    let Some((shader, mesh)) = resources.as_ref() else {
                        return;
                    };
                    let gl = window.gl();

                    controls.tick();

                    clear(gl, CLEAR_COLOR);
                    shader.use_program(gl);
                    controls.apply(gl, shader);
                    mesh.draw(gl);

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
