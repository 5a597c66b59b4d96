use glam::Vec2;

use crate::config::HeartConfig;

/// Visible drawing area in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Heart edge length: a share of the shorter side, clamped to the configured range.
    pub fn heart_size(&self, heart: &HeartConfig) -> f32 {
        (self.width.min(self.height) * heart.screen_fraction).clamp(heart.min_size, heart.max_size)
    }

    /// Region the center of an element of `size` may occupy.
    pub fn bounds(&self, size: f32) -> Bounds {
        let half = size / 2.0;
        let (min_x, max_x) = axis_range(self.width, half);
        let (min_y, max_y) = axis_range(self.height, half);
        Bounds {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }
}

// An axis shorter than the element collapses to its midpoint.
fn axis_range(extent: f32, half: f32) -> (f32, f32) {
    if extent >= half * 2.0 {
        (half, extent - half)
    } else {
        (extent / 2.0, extent / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_viewport_caps_heart_size() {
        let size = Viewport::new(1000.0, 800.0).heart_size(&HeartConfig::default());
        assert_eq!(size, 130.0);
    }

    #[test]
    fn small_viewport_floors_heart_size() {
        let size = Viewport::new(300.0, 300.0).heart_size(&HeartConfig::default());
        assert_eq!(size, 80.0);
    }

    #[test]
    fn mid_viewport_uses_screen_fraction() {
        let size = Viewport::new(1200.0, 600.0).heart_size(&HeartConfig::default());
        assert!((size - 102.0).abs() < 1e-3);
    }

    #[test]
    fn bounds_are_inset_by_half_size() {
        let bounds = Viewport::new(300.0, 200.0).bounds(80.0);
        assert_eq!(bounds.min, Vec2::new(40.0, 40.0));
        assert_eq!(bounds.max, Vec2::new(260.0, 160.0));
        assert_eq!(bounds.clamp(Vec2::new(10.0, 500.0)), Vec2::new(40.0, 160.0));
        assert!(bounds.contains(Vec2::new(40.0, 160.0)));
        assert!(!bounds.contains(Vec2::new(39.9, 100.0)));
    }

    #[test]
    fn narrow_axis_collapses_to_center() {
        let bounds = Viewport::new(50.0, 400.0).bounds(80.0);
        assert_eq!(bounds.min.x, 25.0);
        assert_eq!(bounds.max.x, 25.0);
        assert_eq!(bounds.clamp(Vec2::new(0.0, 0.0)), Vec2::new(25.0, 40.0));
    }
}
