/// Phase of the render loop.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Phase {
    /// Window or GPU not created yet.
    #[default]
    Starting,
    /// Frames are being rendered.
    Running,
    /// Close requested; terminal.
    Closing,
}

/// Gatekeeper for the render loop.
///
/// Frames are only rendered while `Running`. `Closing` is terminal: once a
/// close is requested no later event can resume rendering.
#[derive(Debug, Default)]
pub struct Lifecycle {
    phase: Phase,
    frames_rendered: u64,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Enters `Running` after successful startup. No-op in any other phase.
    pub fn start(&mut self) {
        if self.phase == Phase::Starting {
            self.phase = Phase::Running;
        }
    }

    /// Enters `Closing`. Returns `true` on the first request only.
    pub fn request_close(&mut self) -> bool {
        let first = self.phase != Phase::Closing;
        self.phase = Phase::Closing;
        first
    }

    pub fn is_closing(&self) -> bool {
        self.phase == Phase::Closing
    }

    pub fn should_render(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Records a rendered frame. Returns `false` (and records nothing) when
    /// rendering is not allowed in the current phase.
    pub fn record_frame(&mut self) -> bool {
        if !self.should_render() {
            return false;
        }
        self.frames_rendered += 1;
        true
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}
