use std::f32::consts::PI;
use std::time::Duration;

use crate::config::PulseConfig;

/// Short emphasis on the heart. Retriggering restarts it.
#[derive(Debug, Clone)]
pub struct PulseTimer {
    duration: Duration,
    scale: f32,
    started_at: Option<Duration>,
}

impl PulseTimer {
    pub fn new(config: &PulseConfig) -> Self {
        Self {
            duration: config.duration(),
            scale: config.scale,
            started_at: None,
        }
    }

    pub fn trigger(&mut self, now: Duration) {
        self.started_at = Some(now);
    }

    /// Fraction of the pulse elapsed at `now`, or `None` once it has reverted.
    pub fn progress(&self, now: Duration) -> Option<f32> {
        let elapsed = now.saturating_sub(self.started_at?);
        if elapsed >= self.duration {
            return None;
        }
        Some(elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }

    pub fn is_active(&self, now: Duration) -> bool {
        self.progress(now).is_some()
    }

    /// Size multiplier: swells to `1 + scale` halfway through, back to 1 at the end.
    pub fn scale(&self, now: Duration) -> f32 {
        match self.progress(now) {
            Some(t) => 1.0 + self.scale * (PI * t).sin(),
            None => 1.0,
        }
    }
}
