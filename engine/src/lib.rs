//! `rayframe`: a thin, typed wrapper over an immediate-mode graphics library.
//!
//! - [`Window`] owns the native window and drives the frame loop.
//! - [`Frame`] and [`Mode3D`] are the drawing handles handed to per-frame work.
//! - [`backend`] holds the native seam plus a recording headless backend.

pub mod backend;
pub mod camera;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod input;
pub mod logging;
pub mod window;

pub use backend::{Backend, HeadlessBackend};
#[cfg(feature = "raylib")]
pub use backend::RaylibBackend;
pub use camera::{Camera3D, CameraMode, Projection};
pub use color::Color;
pub use config::WindowConfig;
pub use error::EngineError;
pub use frame::{Frame, Mode3D};
pub use glam::Vec3;
pub use input::Key;
pub use window::{FrameFuture, Window};
