//! Orbital camera over a grid, driven through the async loop.
//!
//! Space toggles orbiting, R puts the camera back where it started.

use log::info;

use rayframe::{Backend, Camera3D, CameraMode, Color, Frame, FrameFuture, Key, Vec3, WindowConfig};

use crate::{config::DemoConfig, runner};

pub const HINT: &str = "SPACE: pause orbit   R: reset camera";
pub const GRID_SLICES: i32 = 10;
pub const GRID_SPACING: f32 = 1.0;

pub fn default_config() -> DemoConfig {
    DemoConfig {
        window: WindowConfig::new(1280, 720, "rayframe: orbit"),
        camera: Camera3D::perspective(glam::vec3(10.0, 10.0, 10.0), Vec3::ZERO, 45.0),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitState {
    pub camera: Camera3D,
    home: Camera3D,
    pub paused: bool,
}

impl OrbitState {
    pub fn new(camera: Camera3D) -> Self {
        Self {
            camera,
            home: camera,
            paused: false,
        }
    }
}

pub fn run<B: Backend>(backend: B, config: DemoConfig) -> anyhow::Result<u64> {
    let mut window = runner::open(backend, config.window)?;
    let mut state = OrbitState::new(config.camera);

    let result = pollster::block_on(window.game_loop_async(&mut state, |frame, state| {
        Box::pin(step(frame, state)) as FrameFuture<'_>
    }));
    runner::finish(&mut window, result)
}

async fn step<B: Backend>(mut frame: Frame<'_, B>, state: &mut OrbitState) -> anyhow::Result<()> {
    if frame.is_key_pressed(Key::Space) {
        state.paused = !state.paused;
        info!("orbit {}", if state.paused { "paused" } else { "resumed" });
    }
    if frame.is_key_pressed(Key::R) {
        state.camera = state.home;
    }
    if !state.paused {
        frame.update_camera(&mut state.camera, CameraMode::Orbital);
    }

    frame.clear_background(Color::RAYWHITE);
    {
        let mut scene = frame.begin_mode_3d(&state.camera);
        scene.draw_cube(Vec3::ZERO, 2.0, 2.0, 2.0, Color::RED);
        scene.draw_grid(GRID_SLICES, GRID_SPACING);
    }
    frame.draw_text(HINT, 10, 10, 20, Color::DARKGRAY);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayframe::backend::{Call, HeadlessBackend};

    fn camera_in(calls: &[Call]) -> Camera3D {
        calls
            .iter()
            .find_map(|c| match c {
                Call::BeginMode3D(cam) => Some(*cam),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn camera_orbits_each_frame() {
        let backend = HeadlessBackend::new().close_after(3);
        let log = backend.log();
        let config = default_config();
        let home = config.camera;

        assert_eq!(run(backend, config).unwrap(), 3);

        let first = log.frame(0);
        assert_eq!(first[0], Call::UpdateCamera(CameraMode::Orbital));
        assert!(first.contains(&Call::DrawGrid {
            slices: GRID_SLICES,
            spacing: GRID_SPACING
        }));

        let cams: Vec<_> = (0..3).map(|i| camera_in(&log.frame(i))).collect();
        assert_ne!(cams[0].position, home.position);
        assert_ne!(cams[1].position, cams[0].position);
        for cam in &cams {
            let d = cam.position.distance(cam.target);
            assert!((d - home.position.length()).abs() < 1e-3);
        }
    }

    #[test]
    fn space_pauses_and_r_resets() {
        let backend = HeadlessBackend::new()
            .close_after(4)
            .press_key(1, Key::Space)
            .press_key(3, Key::R);
        let log = backend.log();
        let config = default_config();
        let home = config.camera;

        run(backend, config).unwrap();

        let updates: Vec<_> = (0..4)
            .map(|i| log.frame(i).contains(&Call::UpdateCamera(CameraMode::Orbital)))
            .collect();
        assert_eq!(updates, vec![true, false, false, false]);

        assert_eq!(camera_in(&log.frame(1)), camera_in(&log.frame(2)));
        assert_eq!(camera_in(&log.frame(3)), home);
    }
}
