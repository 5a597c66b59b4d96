//! The bouncing heart: position, direction, speed and drag handling.

use std::time::Duration;

use glam::Vec2;
use heartbounce_platform::{ElementId, RenderSurface};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use crate::config::EngineConfig;
use crate::error::CoreError;
use crate::pulse::PulseTimer;
use crate::speed::SpeedLevel;
use crate::trail::Trail;
use crate::viewport::{Bounds, Viewport};

/// Resting tilt of the heart element.
pub const BASE_ROTATION_DEGREES: f32 = -45.0;
const BOUNCE_TILT_DEGREES: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Autonomous,
    Dragging,
}

/// Owns every piece of animation state and reflects it into a [`RenderSurface`].
pub struct MotionController<S: RenderSurface> {
    config: EngineConfig,
    surface: S,
    viewport: Viewport,
    heart_size: f32,
    position: Vec2,
    direction: Vec2,
    speed: SpeedLevel,
    rotation_degrees: f32,
    /// Pointer minus heart center at drag start.
    grab_offset: Option<Vec2>,
    pulse: PulseTimer,
    trail: Trail,
    rng: StdRng,
    /// Latest timestamp seen from the host.
    clock: Duration,
}

impl<S: RenderSurface> MotionController<S> {
    pub fn new(
        config: EngineConfig,
        viewport: Viewport,
        mut surface: S,
    ) -> Result<Self, CoreError> {
        config.validate()?;
        let speed = config.speed()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let heart_size = viewport.heart_size(&config.heart);

        surface.attach(ElementId::Shadow, config.heart.shadow_color);
        surface.set_opacity(ElementId::Shadow, config.heart.shadow_opacity);
        surface.attach(ElementId::Heart, config.heart.color);

        let mut controller = Self {
            pulse: PulseTimer::new(&config.pulse),
            trail: Trail::new(config.trail.clone(), config.heart.color, config.trail_enabled),
            position: viewport.bounds(heart_size).clamp(viewport.center()),
            direction: config.initial_direction,
            config,
            surface,
            viewport,
            heart_size,
            speed,
            rotation_degrees: BASE_ROTATION_DEGREES,
            grab_offset: None,
            rng,
            clock: Duration::ZERO,
        };
        controller.render();
        info!(
            "Motion controller ready: viewport {}x{}, heart {}px, speed {}",
            viewport.width, viewport.height, heart_size, speed
        );
        Ok(controller)
    }

    /// Advances one animation frame: motion, then particles, then the surface.
    pub fn tick(&mut self, now: Duration) {
        self.observe(now);
        if self.grab_offset.is_none() {
            self.advance(now);
        }
        self.trail.update(&mut self.surface);
        self.render();
    }

    pub fn set_speed(&mut self, level: SpeedLevel) {
        if level != self.speed {
            debug!("Speed {} -> {} ({} px/frame)", self.speed, level, level.magnitude());
        }
        self.speed = level;
    }

    pub fn pulse(&mut self, now: Duration) {
        self.observe(now);
        self.pulse.trigger(now);
        self.render();
    }

    /// Flips the trail on or off and returns the new state.
    pub fn toggle_trail(&mut self) -> bool {
        let enabled = !self.trail.is_enabled();
        self.trail.set_enabled(enabled, &mut self.surface);
        info!("Trail {}", if enabled { "on" } else { "off" });
        enabled
    }

    pub fn reset(&mut self) {
        self.position = self.bounds().clamp(self.viewport.center());
        self.direction = self.config.initial_direction;
        self.rotation_degrees = BASE_ROTATION_DEGREES;
        self.render();
        info!("Reset heart to ({:.1}, {:.1})", self.position.x, self.position.y);
    }

    /// Whether `pointer` lies on the heart's box.
    pub fn hit_test(&self, pointer: Vec2) -> bool {
        let half = self.heart_size / 2.0;
        let delta = (pointer - self.position).abs();
        delta.x <= half && delta.y <= half
    }

    pub fn begin_drag(&mut self, pointer: Vec2, now: Duration) {
        self.observe(now);
        self.grab_offset = Some(pointer - self.position);
        self.pulse.trigger(now);
        self.render();
        debug!("Drag started at ({:.1}, {:.1})", pointer.x, pointer.y);
    }

    /// Moves the heart under the pointer. Ignored when no drag is active.
    pub fn update_drag(&mut self, pointer: Vec2) {
        let Some(offset) = self.grab_offset else {
            trace!("Drag move without active drag ignored");
            return;
        };
        self.position = self.bounds().clamp(pointer - offset);
        self.render();
    }

    pub fn end_drag(&mut self) {
        if self.grab_offset.take().is_some() {
            debug!("Drag ended at ({:.1}, {:.1})", self.position.x, self.position.y);
        }
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.heart_size = self.viewport.heart_size(&self.config.heart);
        self.position = self.bounds().clamp(self.position);
        self.render();
        info!(
            "Viewport resized to {}x{}, heart {}px",
            self.viewport.width, self.viewport.height, self.heart_size
        );
    }

    pub fn mode(&self) -> Mode {
        if self.grab_offset.is_some() {
            Mode::Dragging
        } else {
            Mode::Autonomous
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.mode() == Mode::Dragging
    }

    pub fn is_pulsing(&self, now: Duration) -> bool {
        self.pulse.is_active(now)
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn speed(&self) -> SpeedLevel {
        self.speed
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    pub fn heart_size(&self) -> f32 {
        self.heart_size
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn bounds(&self) -> Bounds {
        self.viewport.bounds(self.heart_size)
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn observe(&mut self, now: Duration) {
        self.clock = self.clock.max(now);
    }

    fn advance(&mut self, now: Duration) {
        let magnitude = self.speed.magnitude();
        self.position += self.direction * magnitude;

        let bounds = self.bounds();
        if (self.position.x <= bounds.min.x && self.direction.x < 0.0)
            || (self.position.x >= bounds.max.x && self.direction.x > 0.0)
        {
            self.direction.x = -self.direction.x;
            self.rotation_degrees = self.direction.x * BOUNCE_TILT_DEGREES + BASE_ROTATION_DEGREES;
            debug!("Bounce on x at {:.1}", self.position.x);
        }
        if (self.position.y <= bounds.min.y && self.direction.y < 0.0)
            || (self.position.y >= bounds.max.y && self.direction.y > 0.0)
        {
            self.direction.y = -self.direction.y;
            self.rotation_degrees = self.direction.y * BOUNCE_TILT_DEGREES + BASE_ROTATION_DEGREES;
            debug!("Bounce on y at {:.1}", self.position.y);
        }
        self.position = bounds.clamp(self.position);
        debug_assert!(bounds.contains(self.position));

        if magnitude > self.config.trail.spawn_threshold {
            self.trail.try_spawn(now, self.position, &mut self.rng, &mut self.surface);
        }
    }

    fn render(&mut self) {
        let size = self.heart_size * self.pulse.scale(self.clock);
        let shadow_position = self.position + self.config.heart.shadow_offset;

        self.surface.set_position(ElementId::Shadow, shadow_position);
        self.surface.set_size(ElementId::Shadow, size);
        self.surface.set_rotation(ElementId::Shadow, self.rotation_degrees);

        self.surface.set_position(ElementId::Heart, self.position);
        self.surface.set_size(ElementId::Heart, size);
        self.surface.set_rotation(ElementId::Heart, self.rotation_degrees);
    }
}
