//! Platform abstraction traits so `heartbounce-core` stays display-agnostic.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

mod scene;

pub use scene::Scene;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Handle of a visual element on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementId {
    Heart,
    Shadow,
    Particle(u64),
}

/// Last styling applied to an element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementState {
    pub id: ElementId,
    pub tint: Vec4,
    pub position: Vec2,
    pub size: f32,
    pub rotation_degrees: f32,
    pub opacity: f32,
}

impl ElementState {
    pub fn new(id: ElementId, tint: Vec4) -> Self {
        Self {
            id,
            tint,
            position: Vec2::ZERO,
            size: 0.0,
            rotation_degrees: 0.0,
            opacity: 1.0,
        }
    }
}

/// Styling sink for the moving heart, its shadow and trail particles.
///
/// Setters on an element that is not attached are ignored.
pub trait RenderSurface: Send {
    fn attach(&mut self, element: ElementId, tint: Vec4);
    /// Returns false when the element was not attached.
    fn detach(&mut self, element: ElementId) -> bool;
    fn is_attached(&self, element: ElementId) -> bool;
    fn set_position(&mut self, element: ElementId, position: Vec2);
    fn set_size(&mut self, element: ElementId, size: f32);
    fn set_rotation(&mut self, element: ElementId, degrees: f32);
    fn set_opacity(&mut self, element: ElementId, opacity: f32);
}
