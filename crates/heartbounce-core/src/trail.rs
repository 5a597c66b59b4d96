//! Fading particles left behind the moving heart.

use std::collections::VecDeque;
use std::time::Duration;

use glam::{Vec2, Vec3, Vec4};
use heartbounce_platform::{ElementId, RenderSurface};
use rand::Rng;
use tracing::trace;

use crate::config::TrailConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailParticle {
    pub id: u64,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Frames left before removal.
    pub life: u32,
    pub alpha: f32,
    pub diameter: f32,
}

impl TrailParticle {
    pub fn element(&self) -> ElementId {
        ElementId::Particle(self.id)
    }
}

/// Bounded FIFO of live particles. Oldest particles are evicted first.
#[derive(Debug, Clone)]
pub struct Trail {
    config: TrailConfig,
    color: Vec3,
    enabled: bool,
    particles: VecDeque<TrailParticle>,
    next_id: u64,
    last_spawn: Option<Duration>,
}

impl Trail {
    pub fn new(config: TrailConfig, color: Vec4, enabled: bool) -> Self {
        Self {
            particles: VecDeque::with_capacity(config.max_particles.min(64)),
            config,
            color: color.truncate(),
            enabled,
            next_id: 0,
            last_spawn: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling drops every live particle.
    pub fn set_enabled<S: RenderSurface + ?Sized>(&mut self, enabled: bool, surface: &mut S) {
        self.enabled = enabled;
        if !enabled {
            self.clear(surface);
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Live particles, oldest first.
    pub fn particles(&self) -> impl Iterator<Item = &TrailParticle> {
        self.particles.iter()
    }

    /// Spawns a particle at `origin` unless the trail is off or the last spawn was too recent.
    pub fn try_spawn<R, S>(
        &mut self,
        now: Duration,
        origin: Vec2,
        rng: &mut R,
        surface: &mut S,
    ) -> Option<u64>
    where
        R: Rng,
        S: RenderSurface + ?Sized,
    {
        if !self.enabled {
            return None;
        }
        if let Some(last) = self.last_spawn {
            if now.saturating_sub(last) < self.config.spawn_interval() {
                return None;
            }
        }
        self.last_spawn = Some(now);

        let drift = self.config.max_drift;
        let particle = TrailParticle {
            id: self.next_id,
            position: origin,
            velocity: Vec2::new(rng.gen_range(-drift..=drift), rng.gen_range(-drift..=drift)),
            life: self.config.lifetime_frames,
            alpha: rng.gen_range(self.config.min_alpha..=self.config.max_alpha),
            diameter: rng.gen_range(self.config.min_diameter..=self.config.max_diameter),
        };
        self.next_id += 1;

        let element = particle.element();
        surface.attach(element, self.color.extend(particle.alpha));
        surface.set_position(element, particle.position);
        surface.set_size(element, particle.diameter);
        surface.set_opacity(element, 1.0);
        self.particles.push_back(particle);

        while self.particles.len() > self.config.max_particles {
            if let Some(evicted) = self.particles.pop_front() {
                trace!("trail: evicting particle {}", evicted.id);
                release(&evicted, surface);
            }
        }
        Some(particle.id)
    }

    /// Ages every particle by one frame, drops expired ones and moves the rest.
    pub fn update<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) {
        for particle in self.particles.iter_mut() {
            particle.life = particle.life.saturating_sub(1);
        }
        self.particles.retain(|particle| {
            if particle.life == 0 {
                release(particle, surface);
                false
            } else {
                true
            }
        });

        let lifetime = self.config.lifetime_frames as f32;
        for particle in self.particles.iter_mut() {
            particle.position += particle.velocity;
            let element = particle.element();
            surface.set_opacity(element, particle.life as f32 / lifetime);
            surface.set_position(element, particle.position);
        }
    }

    pub fn clear<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) {
        for particle in self.particles.drain(..) {
            release(&particle, surface);
        }
    }
}

fn release<S: RenderSurface + ?Sized>(particle: &TrailParticle, surface: &mut S) {
    let element = particle.element();
    if surface.is_attached(element) {
        surface.detach(element);
    }
}
