//! Failure handling shared by the demos.

use anyhow::Context as _;
use log::error;

use rayframe::{Backend, EngineError, Window, WindowConfig};

/// Open the demo window, logging a construction failure before surfacing it.
pub fn open<B: Backend>(backend: B, config: WindowConfig) -> anyhow::Result<Window<B>> {
    Window::open(backend, config)
        .inspect_err(|err| error!("Failed to create window: {err}"))
        .context("window creation failed")
}

/// Settle a finished loop. A failed loop is logged and followed by a
/// best-effort close whose own failure is logged separately.
pub fn finish<B: Backend>(
    window: &mut Window<B>,
    result: Result<u64, EngineError>,
) -> anyhow::Result<u64> {
    match result {
        Ok(frames) => Ok(frames),
        Err(err) => {
            error!("Runtime error: {err}");
            if let Err(close_err) = window.close() {
                error!("Error closing window: {close_err}");
            }
            Err(err.into())
        }
    }
}
