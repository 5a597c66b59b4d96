//! Paints a [`Scene`] with egui shapes.

use egui::{Align2, Color32, FontId, Painter, Pos2, Shape, Stroke, Vec2};
use glam::Vec4;
use heartbounce_platform::{ElementId, ElementState, Scene};

/// Side of the heart's square relative to the element size, so the lobes stay inside the box.
const HEART_SQUARE_SCALE: f32 = 0.62;

/// A heart built like the classic CSS one: a rotated square with two round lobes.
#[derive(Debug, Clone, PartialEq)]
pub struct HeartGeometry {
    pub square: [Pos2; 4],
    pub lobes: [Pos2; 2],
    pub lobe_radius: f32,
}

impl HeartGeometry {
    pub fn new(center: Pos2, size: f32, rotation_degrees: f32) -> Self {
        let side = size * HEART_SQUARE_SCALE;
        let half = side / 2.0;
        let (sin, cos) = rotation_degrees.to_radians().sin_cos();
        let place = |x: f32, y: f32| center + Vec2::new(x * cos - y * sin, x * sin + y * cos);
        Self {
            square: [
                place(-half, -half),
                place(half, -half),
                place(half, half),
                place(-half, half),
            ],
            lobes: [place(0.0, -half), place(half, 0.0)],
            lobe_radius: half,
        }
    }

    fn paint(&self, painter: &Painter, fill: Color32) {
        painter.add(Shape::convex_polygon(self.square.to_vec(), fill, Stroke::NONE));
        for lobe in self.lobes {
            painter.circle_filled(lobe, self.lobe_radius, fill);
        }
    }
}

pub fn color(tint: Vec4, opacity: f32) -> Color32 {
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(
        channel(tint.x),
        channel(tint.y),
        channel(tint.z),
        channel(tint.w * opacity),
    )
}

/// Particles first, then the shadow, then the heart on top.
pub fn paint_scene(painter: &Painter, origin: Pos2, scene: &Scene, label: Option<&str>) {
    let at = |state: &ElementState| origin + Vec2::new(state.position.x, state.position.y);

    for particle in scene
        .elements()
        .iter()
        .filter(|e| matches!(e.id, ElementId::Particle(_)))
    {
        let fill = color(particle.tint, particle.opacity);
        painter.circle_filled(at(particle), particle.size / 2.0, fill);
    }

    for id in [ElementId::Shadow, ElementId::Heart] {
        if let Some(state) = scene.element(id) {
            HeartGeometry::new(at(state), state.size, state.rotation_degrees)
                .paint(painter, color(state.tint, state.opacity));
        }
    }

    if let (Some(text), Some(heart)) = (label, scene.element(ElementId::Heart)) {
        painter.text(
            at(heart),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(heart.size * 0.22),
            Color32::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_heart_has_lobes_on_top() {
        let center = Pos2::new(100.0, 100.0);
        let heart = HeartGeometry::new(center, 100.0, -45.0);
        for lobe in heart.lobes {
            assert!(lobe.y < center.y);
        }
        assert!(heart.lobes[0].x < center.x && heart.lobes[1].x > center.x);
        let tip = heart
            .square
            .iter()
            .fold(f32::MIN, |lowest, corner| lowest.max(corner.y));
        assert!(tip > center.y);
    }

    #[test]
    fn color_applies_opacity_to_alpha() {
        let faded = color(Vec4::new(1.0, 0.0, 0.0, 0.5), 0.5);
        assert_eq!(faded.a(), 64);
        assert_eq!(color(Vec4::ONE, 2.0).a(), 255);
    }
}
