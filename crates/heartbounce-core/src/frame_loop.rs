use std::time::Duration;

use heartbounce_platform::RenderSurface;
use tracing::{debug, info};

use crate::motion::MotionController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running { started_at: Duration },
}

/// Start/stop lifecycle around [`MotionController::tick`].
///
/// The host calls [`FrameLoop::advance`] from its repaint callback and keeps scheduling frames
/// while it returns `true`.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    state: LoopState,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Stopped,
            frames: 0,
        }
    }

    pub fn start(&mut self, now: Duration) {
        if self.is_running() {
            debug!("Frame loop already running");
            return;
        }
        self.state = LoopState::Running { started_at: now };
        info!("Frame loop started");
    }

    pub fn stop(&mut self) {
        if let LoopState::Running { .. } = self.state {
            self.state = LoopState::Stopped;
            info!("Frame loop stopped after {} frames", self.frames);
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    /// Frames ticked since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Time since the current run started.
    pub fn elapsed(&self, now: Duration) -> Option<Duration> {
        match self.state {
            LoopState::Running { started_at } => Some(now.saturating_sub(started_at)),
            LoopState::Stopped => None,
        }
    }

    /// Ticks `controller` when running. Returns whether another frame should be scheduled.
    pub fn advance<S: RenderSurface>(
        &mut self,
        controller: &mut MotionController<S>,
        now: Duration,
    ) -> bool {
        if !self.is_running() {
            return false;
        }
        controller.tick(now);
        self.frames += 1;
        true
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
