//! Heartbounce core engine: platform-agnostic motion, trail and pulse logic.

pub mod config;
pub mod error;
pub mod frame_loop;
pub mod motion;
pub mod pulse;
pub mod speed;
pub mod trail;
pub mod viewport;

pub use config::{EngineConfig, HeartConfig, PulseConfig, TrailConfig};
pub use error::CoreError;
pub use frame_loop::{FrameLoop, LoopState};
pub use motion::{Mode, MotionController, BASE_ROTATION_DEGREES};
pub use pulse::PulseTimer;
pub use speed::SpeedLevel;
pub use trail::{Trail, TrailParticle};
pub use viewport::{Bounds, Viewport};
