//! Per-frame drawing handles.
//!
//! A [`Frame`] only exists between frame-begin and frame-end, and a [`Mode3D`]
//! only between 3D-begin and 3D-end, so the bracketing rules of the native
//! library are enforced by borrows.

use glam::Vec3;

use crate::{
    backend::Backend,
    camera::{Camera3D, CameraMode},
    color::Color,
    input::Key,
};

pub struct Frame<'w, B: Backend> {
    backend: &'w mut B,
    index: u64,
    width: i32,
    height: i32,
}

impl<'w, B: Backend> Frame<'w, B> {
    pub(crate) fn new(backend: &'w mut B, index: u64, width: i32, height: i32) -> Self {
        Self {
            backend,
            index,
            width,
            height,
        }
    }

    /// 0-based index of this frame within the current loop.
    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn screen_width(&self) -> i32 {
        self.width
    }

    pub fn screen_height(&self) -> i32 {
        self.height
    }

    pub fn clear_background(&mut self, color: Color) {
        self.backend.clear_background(color);
    }

    pub fn measure_text(&mut self, text: &str, font_size: i32) -> i32 {
        self.backend.measure_text(text, font_size)
    }

    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color) {
        self.backend.draw_text(text, x, y, font_size, color);
    }

    pub fn is_key_pressed(&mut self, key: Key) -> bool {
        self.backend.is_key_pressed(key)
    }

    pub fn update_camera(&mut self, camera: &mut Camera3D, mode: CameraMode) {
        self.backend.update_camera(camera, mode);
    }

    /// Enter 3D mode with `camera`. 3D mode ends when the guard drops.
    pub fn begin_mode_3d(&mut self, camera: &Camera3D) -> Mode3D<'_, B> {
        self.backend.begin_mode_3d(camera);
        Mode3D {
            backend: &mut *self.backend,
        }
    }
}

pub struct Mode3D<'f, B: Backend> {
    backend: &'f mut B,
}

impl<B: Backend> Mode3D<'_, B> {
    pub fn draw_cube(&mut self, position: Vec3, width: f32, height: f32, depth: f32, color: Color) {
        self.backend.draw_cube(position, width, height, depth, color);
    }

    pub fn draw_grid(&mut self, slices: i32, spacing: f32) {
        self.backend.draw_grid(slices, spacing);
    }
}

impl<B: Backend> Drop for Mode3D<'_, B> {
    fn drop(&mut self) {
        self.backend.end_mode_3d();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Call, HeadlessBackend};

    #[test]
    fn mode_3d_ends_on_drop() {
        let mut backend = HeadlessBackend::new();
        let log = backend.log();
        let cam = Camera3D::default();
        {
            let mut frame = Frame::new(&mut backend, 0, 800, 600);
            {
                let mut scene = frame.begin_mode_3d(&cam);
                scene.draw_grid(10, 1.0);
            }
            frame.draw_text("hi", 1, 2, 10, Color::WHITE);
        }
        assert_eq!(
            log.calls(),
            vec![
                Call::BeginMode3D(cam),
                Call::DrawGrid {
                    slices: 10,
                    spacing: 1.0
                },
                Call::EndMode3D,
                Call::DrawText {
                    text: "hi".to_string(),
                    x: 1,
                    y: 2,
                    font_size: 10,
                    color: Color::WHITE
                },
            ]
        );
    }
}
