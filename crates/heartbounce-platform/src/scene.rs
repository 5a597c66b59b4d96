use glam::{Vec2, Vec4};
use tracing::trace;

use crate::{ElementId, ElementState, RenderSurface};

/// Retained in-memory surface. Hosts paint from [`Scene::elements`], tests inspect it directly.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    elements: Vec<ElementState>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attached elements in attach order.
    pub fn elements(&self) -> &[ElementState] {
        &self.elements
    }

    pub fn element(&self, element: ElementId) -> Option<&ElementState> {
        self.elements.iter().find(|e| e.id == element)
    }

    pub fn particle_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e.id, ElementId::Particle(_)))
            .count()
    }

    fn element_mut(&mut self, element: ElementId) -> Option<&mut ElementState> {
        self.elements.iter_mut().find(|e| e.id == element)
    }
}

impl RenderSurface for Scene {
    fn attach(&mut self, element: ElementId, tint: Vec4) {
        match self.element_mut(element) {
            Some(existing) => existing.tint = tint,
            None => {
                trace!("scene: attach {:?}", element);
                self.elements.push(ElementState::new(element, tint));
            }
        }
    }

    fn detach(&mut self, element: ElementId) -> bool {
        let before = self.elements.len();
        self.elements.retain(|e| e.id != element);
        before != self.elements.len()
    }

    fn is_attached(&self, element: ElementId) -> bool {
        self.element(element).is_some()
    }

    fn set_position(&mut self, element: ElementId, position: Vec2) {
        if let Some(state) = self.element_mut(element) {
            state.position = position;
        }
    }

    fn set_size(&mut self, element: ElementId, size: f32) {
        if let Some(state) = self.element_mut(element) {
            state.size = size;
        }
    }

    fn set_rotation(&mut self, element: ElementId, degrees: f32) {
        if let Some(state) = self.element_mut(element) {
            state.rotation_degrees = degrees;
        }
    }

    fn set_opacity(&mut self, element: ElementId, opacity: f32) {
        if let Some(state) = self.element_mut(element) {
            state.opacity = opacity;
        }
    }
}
