//! Window wrapper and its frame-loop adapter.
//!
//! [`Window`] owns a [`Backend`] for as long as the native window lives. Its
//! loop polls the close request, brackets each frame with begin/end and runs
//! the caller's per-frame work in between, awaiting it before the frame ends.

use std::{future::Future, pin::Pin};

use log::{debug, info, warn};

use crate::{backend::Backend, config::WindowConfig, error::EngineError, frame::Frame};

/// Future returned by an async per-frame callback.
pub type FrameFuture<'f> = Pin<Box<dyn Future<Output = anyhow::Result<()>> + 'f>>;

pub struct Window<B: Backend> {
    backend: B,
    config: WindowConfig,
    open: bool,
    frames: u64,
}

impl<B: Backend> Window<B> {
    /// Create the native window. No loop can run if this fails.
    pub fn open(mut backend: B, config: WindowConfig) -> Result<Self, EngineError> {
        config.validate()?;
        backend.init_window(config.width, config.height, &config.title)?;
        info!(
            "opened window '{}' ({}x{})",
            config.title, config.width, config.height
        );
        Ok(Self {
            backend,
            config,
            open: true,
            frames: 0,
        })
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_ready(&self) -> bool {
        self.open && self.backend.is_window_ready()
    }

    /// Close-request state. A released window always reports `true`.
    pub fn should_close(&mut self) -> bool {
        !self.open || self.backend.window_should_close()
    }

    /// Frames rendered over the lifetime of this window.
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Release the native window. Only the first call reaches the backend.
    pub fn close(&mut self) -> Result<(), EngineError> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        self.backend.close_window()?;
        info!("closed window '{}'", self.config.title);
        Ok(())
    }

    /// Run frames until the close request is raised, awaiting `per_frame`
    /// inside each one. Returns the number of frames rendered.
    ///
    /// On normal exit the window is released. If `per_frame` fails, the frame
    /// is still ended and the error is returned with the window left open.
    pub async fn game_loop_async<S, F>(
        &mut self,
        state: &mut S,
        mut per_frame: F,
    ) -> Result<u64, EngineError>
    where
        F: for<'f> FnMut(Frame<'f, B>, &'f mut S) -> FrameFuture<'f>,
    {
        self.backend.set_target_fps(self.config.target_fps);
        let (width, height) = (self.config.width, self.config.height);

        let mut rendered = 0;
        while !self.should_close() {
            self.backend.begin_drawing();
            let outcome = {
                let frame = Frame::new(&mut self.backend, rendered, width, height);
                per_frame(frame, &mut *state).await
            };
            self.backend.end_drawing();

            rendered += 1;
            self.frames += 1;

            if let Err(source) = outcome {
                debug!("frame {} failed; leaving loop", rendered - 1);
                return Err(EngineError::Frame {
                    frame: rendered - 1,
                    source,
                });
            }
        }

        info!("close requested after {rendered} frames");
        self.close()?;
        Ok(rendered)
    }

    /// Blocking form of [`game_loop_async`](Self::game_loop_async) for a
    /// synchronous callback.
    pub fn game_loop<F>(&mut self, mut per_frame: F) -> Result<u64, EngineError>
    where
        F: FnMut(Frame<'_, B>) -> anyhow::Result<()>,
    {
        pollster::block_on(self.game_loop_async(&mut per_frame, |frame, per_frame| {
            let outcome = per_frame(frame);
            Box::pin(std::future::ready(outcome)) as FrameFuture<'_>
        }))
    }

    /// Run frames with no per-frame work until the close request.
    pub fn idle_loop(&mut self) -> Result<u64, EngineError> {
        self.game_loop(|_| Ok(()))
    }
}

impl<B: Backend> Drop for Window<B> {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            warn!("failed to release window on drop: {err}");
        }
    }
}
