//! A window-less backend that records what it is asked to draw.
//!
//! Drives tests and the demos' `--headless` mode. Close requests, key presses
//! and lifecycle failures are scripted up front.

use std::{cell::RefCell, rc::Rc};

use glam::Vec3;
use log::debug;

use super::Backend;
use crate::{
    camera::{Camera3D, CameraMode, ORBITAL_SPEED},
    color::Color,
    error::EngineError,
    input::Key,
};

/// One recorded backend call. Pure queries are not recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    InitWindow {
        width: i32,
        height: i32,
        title: String,
    },
    CloseWindow,
    SetTargetFps(u32),
    BeginDrawing,
    EndDrawing,
    ClearBackground(Color),
    BeginMode3D(Camera3D),
    EndMode3D,
    DrawCube {
        position: Vec3,
        width: f32,
        height: f32,
        depth: f32,
        color: Color,
    },
    DrawGrid {
        slices: i32,
        spacing: f32,
    },
    DrawText {
        text: String,
        x: i32,
        y: i32,
        font_size: i32,
        color: Color,
    },
    UpdateCamera(CameraMode),
}

/// Shared handle on the calls a [`HeadlessBackend`] has recorded.
///
/// Cloning is cheap; all clones see the same log, so a caller can keep one
/// after handing the backend to a window.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn count(&self, mut pred: impl FnMut(&Call) -> bool) -> usize {
        self.0.borrow().iter().filter(|c| pred(c)).count()
    }

    /// Calls recorded inside frame `index`, brackets excluded.
    pub fn frame(&self, index: usize) -> Vec<Call> {
        let calls = self.0.borrow();
        let mut seen = 0;
        let mut inside = false;
        let mut out = Vec::new();
        for call in calls.iter() {
            match call {
                Call::BeginDrawing => inside = seen == index,
                Call::EndDrawing => {
                    if inside {
                        return out;
                    }
                    seen += 1;
                }
                other if inside => out.push(other.clone()),
                _ => {}
            }
        }
        out
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

#[derive(Debug, Default)]
pub struct HeadlessBackend {
    log: CallLog,
    ready: bool,
    width: i32,
    height: i32,
    target_fps: u32,
    frames_ended: u64,
    close_after: Option<u64>,
    key_presses: Vec<(u64, Key)>,
    init_error: Option<String>,
    close_error: Option<String>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the close request once `frames` frames have been ended.
    pub fn close_after(mut self, frames: u64) -> Self {
        self.close_after = Some(frames);
        self
    }

    /// Report `key` as pressed during frame `frame` (0-based).
    pub fn press_key(mut self, frame: u64, key: Key) -> Self {
        self.key_presses.push((frame, key));
        self
    }

    pub fn fail_init(mut self, reason: impl Into<String>) -> Self {
        self.init_error = Some(reason.into());
        self
    }

    pub fn fail_close(mut self, reason: impl Into<String>) -> Self {
        self.close_error = Some(reason.into());
        self
    }

    pub fn log(&self) -> CallLog {
        self.log.clone()
    }

    pub fn frames_ended(&self) -> u64 {
        self.frames_ended
    }

    pub fn screen_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn frame_time(&self) -> f32 {
        match self.target_fps {
            0 => 1.0 / 60.0,
            fps => 1.0 / fps as f32,
        }
    }
}

impl Backend for HeadlessBackend {
    fn init_window(&mut self, width: i32, height: i32, title: &str) -> Result<(), EngineError> {
        if self.ready {
            return Err(EngineError::WindowAlreadyOpen);
        }
        if let Some(reason) = &self.init_error {
            return Err(EngineError::WindowInit(reason.clone()));
        }
        self.log.push(Call::InitWindow {
            width,
            height,
            title: title.to_string(),
        });
        self.ready = true;
        self.width = width;
        self.height = height;
        debug!("headless window {width}x{height} '{title}' ready");
        Ok(())
    }

    fn is_window_ready(&self) -> bool {
        self.ready
    }

    fn window_should_close(&mut self) -> bool {
        if !self.ready {
            return true;
        }
        self.close_after
            .is_some_and(|limit| self.frames_ended >= limit)
    }

    fn close_window(&mut self) -> Result<(), EngineError> {
        if !self.ready {
            return Ok(());
        }
        self.log.push(Call::CloseWindow);
        if let Some(reason) = &self.close_error {
            return Err(EngineError::WindowClose(reason.clone()));
        }
        self.ready = false;
        Ok(())
    }

    fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = fps;
        self.log.push(Call::SetTargetFps(fps));
    }

    fn begin_drawing(&mut self) {
        self.log.push(Call::BeginDrawing);
    }

    fn end_drawing(&mut self) {
        self.log.push(Call::EndDrawing);
        self.frames_ended += 1;
    }

    fn clear_background(&mut self, color: Color) {
        self.log.push(Call::ClearBackground(color));
    }

    fn begin_mode_3d(&mut self, camera: &Camera3D) {
        self.log.push(Call::BeginMode3D(*camera));
    }

    fn end_mode_3d(&mut self) {
        self.log.push(Call::EndMode3D);
    }

    fn draw_cube(&mut self, position: Vec3, width: f32, height: f32, depth: f32, color: Color) {
        self.log.push(Call::DrawCube {
            position,
            width,
            height,
            depth,
            color,
        });
    }

    fn draw_grid(&mut self, slices: i32, spacing: f32) {
        self.log.push(Call::DrawGrid { slices, spacing });
    }

    fn measure_text(&mut self, text: &str, font_size: i32) -> i32 {
        let glyphs = text.chars().count() as i32;
        if glyphs == 0 {
            return 0;
        }
        glyphs * (font_size / 2) + (glyphs - 1) * (font_size / 10)
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color) {
        self.log.push(Call::DrawText {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
    }

    fn is_key_pressed(&mut self, key: Key) -> bool {
        self.key_presses
            .iter()
            .any(|&(frame, k)| frame == self.frames_ended && k == key)
    }

    fn update_camera(&mut self, camera: &mut Camera3D, mode: CameraMode) {
        self.log.push(Call::UpdateCamera(mode));
        // Without input devices only the orbital mode moves.
        if mode == CameraMode::Orbital {
            camera.orbit(ORBITAL_SPEED * self.frame_time());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_close_without_window() {
        let mut b = HeadlessBackend::new();
        assert!(b.window_should_close());
        b.init_window(10, 10, "t").unwrap();
        assert!(!b.window_should_close());
    }

    #[test]
    fn second_init_is_rejected() {
        let mut b = HeadlessBackend::new();
        b.init_window(10, 10, "t").unwrap();
        assert!(matches!(
            b.init_window(10, 10, "t"),
            Err(EngineError::WindowAlreadyOpen)
        ));
    }

    #[test]
    fn close_is_noop_when_not_ready() {
        let mut b = HeadlessBackend::new();
        b.close_window().unwrap();
        assert!(b.log().is_empty());
    }

    #[test]
    fn measure_text_uses_fixed_advance() {
        let mut b = HeadlessBackend::new();
        assert_eq!(b.measure_text("", 20), 0);
        assert_eq!(b.measure_text("a", 20), 10);
        assert_eq!(b.measure_text("abcd", 20), 4 * 10 + 3 * 2);
    }

    #[test]
    fn key_presses_are_scoped_to_their_frame() {
        let mut b = HeadlessBackend::new().press_key(1, Key::Space);
        b.init_window(10, 10, "t").unwrap();
        assert!(!b.is_key_pressed(Key::Space));
        b.begin_drawing();
        b.end_drawing();
        assert!(b.is_key_pressed(Key::Space));
        assert!(!b.is_key_pressed(Key::R));
    }

    #[test]
    fn orbital_update_moves_camera_by_frame_time() {
        let mut b = HeadlessBackend::new();
        b.set_target_fps(30);
        let mut cam = Camera3D::default();
        let mut expected = cam;
        expected.orbit(ORBITAL_SPEED / 30.0);
        b.update_camera(&mut cam, CameraMode::Orbital);
        assert!(cam.position.abs_diff_eq(expected.position, 1e-6));

        let before = cam;
        b.update_camera(&mut cam, CameraMode::Custom);
        assert_eq!(cam, before);
    }

    #[test]
    fn frame_slices_log_between_brackets() {
        let mut b = HeadlessBackend::new();
        let log = b.log();
        b.begin_drawing();
        b.clear_background(Color::RED);
        b.end_drawing();
        b.begin_drawing();
        b.draw_grid(4, 0.5);
        b.end_drawing();
        assert_eq!(log.frame(0), vec![Call::ClearBackground(Color::RED)]);
        assert_eq!(
            log.frame(1),
            vec![Call::DrawGrid {
                slices: 4,
                spacing: 0.5
            }]
        );
        assert!(log.frame(2).is_empty());
    }
}
