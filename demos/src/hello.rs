//! Green cube under a perspective camera, with a centered greeting.

use log::debug;

use rayframe::{Backend, Camera3D, Color, Frame, Vec3, WindowConfig};

use crate::{config::DemoConfig, runner};

pub const TEXT: &str = "Hello from Rust + Raylib";
pub const FONT_SIZE: i32 = 20;

pub fn default_config() -> DemoConfig {
    DemoConfig {
        window: WindowConfig::new(1920, 1080, "Hello Raylib from Rust"),
        camera: Camera3D::perspective(glam::vec3(5.0, 5.0, 5.0), Vec3::ZERO, 45.0),
    }
}

pub fn run<B: Backend>(backend: B, config: DemoConfig) -> anyhow::Result<u64> {
    let mut window = runner::open(backend, config.window)?;
    let camera = config.camera;
    debug!("hello camera: {camera:?}");

    let result = window.game_loop(|mut frame| {
        draw(&mut frame, &camera);
        Ok(())
    });
    runner::finish(&mut window, result)
}

fn draw<B: Backend>(frame: &mut Frame<'_, B>, camera: &Camera3D) {
    frame.clear_background(Color::BLACK);

    {
        let mut scene = frame.begin_mode_3d(camera);
        scene.draw_cube(Vec3::ZERO, 2.0, 2.0, 2.0, Color::GREEN);
    }

    let text_width = frame.measure_text(TEXT, FONT_SIZE);
    let x = frame.screen_width() / 2 - text_width / 2;
    let y = frame.screen_height() / 2 - FONT_SIZE / 2;
    frame.draw_text(TEXT, x, y, FONT_SIZE, Color::WHITE);
}
