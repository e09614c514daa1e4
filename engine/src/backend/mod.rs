//! The seam over the native graphics library.
//!
//! A [`Backend`] is the flat call set the window wrapper drives. Apart from
//! window creation and release, every call is infallible and forwards its
//! arguments unchanged.

use glam::Vec3;

use crate::{
    camera::{Camera3D, CameraMode},
    color::Color,
    error::EngineError,
    input::Key,
};

pub mod headless;

#[cfg(feature = "raylib")]
pub mod raylib;

pub use headless::{Call, CallLog, HeadlessBackend};

#[cfg(feature = "raylib")]
pub use self::raylib::RaylibBackend;

pub trait Backend: 'static {
    // Window lifecycle
    fn init_window(&mut self, width: i32, height: i32, title: &str) -> Result<(), EngineError>;
    fn is_window_ready(&self) -> bool;
    fn window_should_close(&mut self) -> bool;
    fn close_window(&mut self) -> Result<(), EngineError>;
    fn set_target_fps(&mut self, fps: u32);

    // Frame bracketing
    fn begin_drawing(&mut self);
    fn end_drawing(&mut self);

    // Drawing
    fn clear_background(&mut self, color: Color);
    fn begin_mode_3d(&mut self, camera: &Camera3D);
    fn end_mode_3d(&mut self);
    fn draw_cube(&mut self, position: Vec3, width: f32, height: f32, depth: f32, color: Color);
    fn draw_grid(&mut self, slices: i32, spacing: f32);
    fn measure_text(&mut self, text: &str, font_size: i32) -> i32;
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color);

    // Input
    fn is_key_pressed(&mut self, key: Key) -> bool;

    /// Advance `camera` according to `mode`, writing the result back.
    fn update_camera(&mut self, camera: &mut Camera3D, mode: CameraMode);
}
