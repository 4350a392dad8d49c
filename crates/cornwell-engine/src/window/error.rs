use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Failures that end the runtime.
///
/// Everything except `Loop` happens before the first frame; the inner
/// `anyhow::Error` carries the context chain (print with `{:#}`).
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("windowing system initialization failed: {0:#}")]
    EventLoop(anyhow::Error),
    #[error("window creation failed: {0:#}")]
    WindowCreation(anyhow::Error),
    #[error("GPU initialization failed: {0:#}")]
    Gpu(anyhow::Error),
    #[error("event loop terminated with error: {0:#}")]
    Loop(anyhow::Error),
}

impl RuntimeError {
    /// True for failures that happened before the render loop produced a frame.
    pub fn is_startup(&self) -> bool {
        !matches!(self, RuntimeError::Loop(_))
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn display_includes_context_chain() {
        let inner = Err::<(), _>(anyhow::anyhow!("no display"))
            .context("failed to create window")
            .unwrap_err();
        let err = RuntimeError::WindowCreation(inner);
        assert_eq!(
            err.to_string(),
            "window creation failed: failed to create window: no display"
        );
    }

    #[test]
    fn only_loop_errors_are_post_startup() {
        assert!(RuntimeError::EventLoop(anyhow::anyhow!("x")).is_startup());
        assert!(RuntimeError::Gpu(anyhow::anyhow!("x")).is_startup());
        assert!(!RuntimeError::Loop(anyhow::anyhow!("x")).is_startup());
    }
}
