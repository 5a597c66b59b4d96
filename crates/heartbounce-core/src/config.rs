//! Tunables for the heart, its trail and the pulse effect.
//!
//! Every field has a default, so a config file only needs the keys it changes.

use std::path::Path;
use std::time::Duration;

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CoreError;
use crate::speed::SpeedLevel;

/// Upper bound accepted for `trail.max_particles`.
pub const MAX_TRAIL_PARTICLES: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeartConfig {
    /// Share of the shorter viewport side used as the heart size.
    pub screen_fraction: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub color: Vec4,
    pub shadow_color: Vec4,
    pub shadow_offset: Vec2,
    pub shadow_opacity: f32,
    /// Text painted on the heart, if any.
    pub label: Option<String>,
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self {
            screen_fraction: 0.17,
            min_size: 80.0,
            max_size: 130.0,
            color: Vec4::new(1.0, 46.0 / 255.0, 99.0 / 255.0, 1.0),
            shadow_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            shadow_offset: Vec2::new(3.0, 5.0),
            shadow_opacity: 0.35,
            label: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrailConfig {
    pub max_particles: usize,
    /// Frames a particle lives before it is removed.
    pub lifetime_frames: u32,
    pub spawn_interval_ms: u64,
    /// Particles are only spawned while the heart moves faster than this.
    pub spawn_threshold: f32,
    pub min_diameter: f32,
    pub max_diameter: f32,
    pub min_alpha: f32,
    pub max_alpha: f32,
    /// Upper bound of each velocity component, in pixels per frame.
    pub max_drift: f32,
}

impl TrailConfig {
    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            max_particles: 30,
            lifetime_frames: 100,
            spawn_interval_ms: 50,
            spawn_threshold: 0.5,
            min_diameter: 4.0,
            max_diameter: 10.0,
            min_alpha: 0.2,
            max_alpha: 0.6,
            max_drift: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PulseConfig {
    pub duration_ms: u64,
    /// Peak growth of the heart during a pulse, as a fraction of its size.
    pub scale: f32,
}

impl PulseConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            duration_ms: 800,
            scale: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Fixed RNG seed for reproducible trails; entropy when absent.
    pub seed: Option<u64>,
    pub initial_speed: u8,
    pub trail_enabled: bool,
    pub initial_direction: Vec2,
    pub heart: HeartConfig,
    pub trail: TrailConfig,
    pub pulse: PulseConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            initial_speed: 5,
            trail_enabled: true,
            initial_direction: Vec2::new(1.0, 0.7),
            heart: HeartConfig::default(),
            trail: TrailConfig::default(),
            pulse: PulseConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Loads and validates a `.toml` or `.json` config file.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let text = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let config = match extension.as_str() {
            "toml" => Self::from_toml_str(&text)?,
            "json" => Self::from_json_str(&text)?,
            other => return Err(CoreError::UnsupportedConfigFormat(other.to_string())),
        };
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, CoreError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self, CoreError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn speed(&self) -> Result<SpeedLevel, CoreError> {
        SpeedLevel::new(self.initial_speed)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        self.speed()?;
        let heart = &self.heart;
        if !(heart.screen_fraction > 0.0) {
            return invalid("heart.screen_fraction must be positive");
        }
        if !(heart.min_size > 0.0 && heart.min_size <= heart.max_size) {
            return invalid("heart sizes must satisfy 0 < min_size <= max_size");
        }
        if !(0.0..=1.0).contains(&heart.shadow_opacity) {
            return invalid("heart.shadow_opacity must be within 0..=1");
        }
        let trail = &self.trail;
        if !(1..=MAX_TRAIL_PARTICLES).contains(&trail.max_particles) {
            return invalid("trail.max_particles must be within 1..=10000");
        }
        if trail.lifetime_frames == 0 {
            return invalid("trail.lifetime_frames must be at least 1");
        }
        if !(trail.min_diameter > 0.0 && trail.min_diameter <= trail.max_diameter) {
            return invalid("trail diameters must satisfy 0 < min_diameter <= max_diameter");
        }
        let alphas_ordered = 0.0 <= trail.min_alpha && trail.min_alpha <= trail.max_alpha;
        if !(alphas_ordered && trail.max_alpha <= 1.0) {
            return invalid("trail alphas must satisfy 0 <= min_alpha <= max_alpha <= 1");
        }
        if !(trail.max_drift >= 0.0) {
            return invalid("trail.max_drift must not be negative");
        }
        if self.pulse.duration_ms == 0 {
            return invalid("pulse.duration_ms must be at least 1");
        }
        if !(self.pulse.scale.is_finite() && self.pulse.scale >= 0.0) {
            return invalid("pulse.scale must be finite and not negative");
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> Result<(), CoreError> {
    Err(CoreError::InvalidConfig(reason.to_string()))
}
