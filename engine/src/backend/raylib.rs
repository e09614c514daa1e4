//! Native backend over raylib's C API.

use std::{
    ffi::{c_int, CString},
    marker::PhantomData,
    sync::atomic::{AtomicBool, Ordering},
};

use glam::Vec3;
use log::{debug, warn};
use ::raylib::ffi;

use super::Backend;
use crate::{
    camera::{Camera3D, CameraMode, Projection},
    color::Color,
    error::EngineError,
    input::Key,
};

/// raylib keeps one global window context per process.
static WINDOW_OPEN: AtomicBool = AtomicBool::new(false);

/// Forwards every call to raylib.
///
/// Must stay on the thread that opened the window, hence `!Send`.
#[derive(Debug, Default)]
pub struct RaylibBackend {
    owns_window: bool,
    _not_send: PhantomData<*const ()>,
}

impl RaylibBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

fn to_ffi_color(c: Color) -> ffi::Color {
    ffi::Color {
        r: c.r,
        g: c.g,
        b: c.b,
        a: c.a,
    }
}

fn to_ffi_vec3(v: Vec3) -> ffi::Vector3 {
    ffi::Vector3 {
        x: v.x,
        y: v.y,
        z: v.z,
    }
}

fn from_ffi_vec3(v: ffi::Vector3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

fn to_ffi_camera(c: &Camera3D) -> ffi::Camera3D {
    ffi::Camera3D {
        position: to_ffi_vec3(c.position),
        target: to_ffi_vec3(c.target),
        up: to_ffi_vec3(c.up),
        fovy: c.fovy,
        projection: c.projection.code() as c_int,
    }
}

fn from_ffi_camera(c: &ffi::Camera3D) -> Camera3D {
    Camera3D {
        position: from_ffi_vec3(c.position),
        target: from_ffi_vec3(c.target),
        up: from_ffi_vec3(c.up),
        fovy: c.fovy,
        projection: if c.projection == Projection::Orthographic.code() {
            Projection::Orthographic
        } else {
            Projection::Perspective
        },
    }
}

/// raylib stops reading at the first NUL anyway.
fn c_text(text: &str) -> CString {
    let end = text.find('\0').unwrap_or(text.len());
    CString::new(&text[..end]).unwrap_or_default()
}

impl Backend for RaylibBackend {
    fn init_window(&mut self, width: i32, height: i32, title: &str) -> Result<(), EngineError> {
        let title = CString::new(title)
            .map_err(|_| EngineError::InvalidConfig("title contains a NUL byte".to_string()))?;
        if WINDOW_OPEN
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(EngineError::WindowAlreadyOpen);
        }

        unsafe { ffi::InitWindow(width, height, title.as_ptr()) };

        if !unsafe { ffi::IsWindowReady() } {
            WINDOW_OPEN.store(false, Ordering::Release);
            return Err(EngineError::WindowInit(
                "raylib did not report the window as ready".to_string(),
            ));
        }
        self.owns_window = true;
        debug!("raylib window {width}x{height} ready");
        Ok(())
    }

    fn is_window_ready(&self) -> bool {
        self.owns_window && unsafe { ffi::IsWindowReady() }
    }

    fn window_should_close(&mut self) -> bool {
        !self.owns_window || unsafe { ffi::WindowShouldClose() }
    }

    fn close_window(&mut self) -> Result<(), EngineError> {
        if !self.owns_window {
            return Ok(());
        }
        if unsafe { ffi::IsWindowReady() } {
            unsafe { ffi::CloseWindow() };
        } else {
            warn!("raylib window was not ready at close; skipping native close");
        }
        self.owns_window = false;
        WINDOW_OPEN.store(false, Ordering::Release);
        Ok(())
    }

    fn set_target_fps(&mut self, fps: u32) {
        let fps = c_int::try_from(fps).unwrap_or(c_int::MAX);
        unsafe { ffi::SetTargetFPS(fps) };
    }

    fn begin_drawing(&mut self) {
        unsafe { ffi::BeginDrawing() };
    }

    fn end_drawing(&mut self) {
        unsafe { ffi::EndDrawing() };
    }

    fn clear_background(&mut self, color: Color) {
        unsafe { ffi::ClearBackground(to_ffi_color(color)) };
    }

    fn begin_mode_3d(&mut self, camera: &Camera3D) {
        unsafe { ffi::BeginMode3D(to_ffi_camera(camera)) };
    }

    fn end_mode_3d(&mut self) {
        unsafe { ffi::EndMode3D() };
    }

    fn draw_cube(&mut self, position: Vec3, width: f32, height: f32, depth: f32, color: Color) {
        unsafe {
            ffi::DrawCube(
                to_ffi_vec3(position),
                width,
                height,
                depth,
                to_ffi_color(color),
            )
        };
    }

    fn draw_grid(&mut self, slices: i32, spacing: f32) {
        unsafe { ffi::DrawGrid(slices, spacing) };
    }

    fn measure_text(&mut self, text: &str, font_size: i32) -> i32 {
        let text = c_text(text);
        unsafe { ffi::MeasureText(text.as_ptr(), font_size) }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color) {
        let text = c_text(text);
        unsafe { ffi::DrawText(text.as_ptr(), x, y, font_size, to_ffi_color(color)) };
    }

    fn is_key_pressed(&mut self, key: Key) -> bool {
        unsafe { ffi::IsKeyPressed(key.code()) }
    }

    fn update_camera(&mut self, camera: &mut Camera3D, mode: CameraMode) {
        let mut raw = to_ffi_camera(camera);
        unsafe { ffi::UpdateCamera(&mut raw, mode.code()) };
        *camera = from_ffi_camera(&raw);
    }
}

impl Drop for RaylibBackend {
    fn drop(&mut self) {
        if self.owns_window {
            let _ = self.close_window();
        }
    }
}
