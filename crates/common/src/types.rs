use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Drawable area of the window in pixels. Objects are clamped against it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center point of the area.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Largest top-left position an object of `size` may occupy.
    ///
    /// Never negative: an object larger than the area is pinned at the origin.
    pub fn max_position(&self, size: Vec2) -> Vec2 {
        Vec2::new(
            (self.width - size.x).max(0.0),
            (self.height - size.y).max(0.0),
        )
    }
}

/// An axis-aligned rectangle with a velocity, in window pixel space.
///
/// `position` is the top-left corner. The size is fixed once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GameObject {
    pub position: Vec2,
    /// Pixels per second.
    pub velocity: Vec2,
    size: Vec2,
}

impl GameObject {
    /// A resting object of the given size at `position`.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Move by `velocity * delta_time`, then clamp into `bounds`.
    ///
    /// Velocity is untouched at a wall: the object stops, it does not bounce.
    pub fn integrate(&mut self, delta_time: f32, bounds: Bounds) {
        self.position += self.velocity * delta_time;
        self.clamp_to(bounds);
    }

    /// Constrain the position so the whole rectangle lies inside `bounds`.
    pub fn clamp_to(&mut self, bounds: Bounds) {
        let max = bounds.max_position(self.size);
        self.position = self.position.clamp(Vec2::ZERO, max);
    }

    /// True when the rectangle lies fully inside `bounds`.
    pub fn is_within(&self, bounds: Bounds) -> bool {
        let max = bounds.max_position(self.size);
        self.position.x >= 0.0
            && self.position.y >= 0.0
            && self.position.x <= max.x
            && self.position.y <= max.y
    }
}

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Enemy fill.
    pub const ROSE: Self = Self::rgb(206, 71, 96);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Components normalized to `0.0..=1.0`.
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(800.0, 600.0)
    }

    #[test]
    fn new_object_is_at_rest() {
        let obj = GameObject::new(Vec2::new(10.0, 20.0), Vec2::splat(15.0));
        assert_eq!(obj.velocity, Vec2::ZERO);
        assert_eq!(obj.width(), 15.0);
        assert_eq!(obj.height(), 15.0);
    }

    #[test]
    fn integrate_moves_by_velocity_times_dt() {
        let mut obj = GameObject::new(Vec2::new(400.0, 300.0), Vec2::splat(15.0));
        obj.velocity = Vec2::new(400.0, -100.0);
        obj.integrate(0.1, bounds());
        assert!((obj.x() - 440.0).abs() < 1e-4);
        assert!((obj.y() - 290.0).abs() < 1e-4);
    }

    #[test]
    fn clamp_stops_at_walls_without_bounce() {
        let mut obj = GameObject::new(Vec2::new(780.0, 5.0), Vec2::splat(15.0));
        obj.velocity = Vec2::new(400.0, -400.0);
        obj.integrate(1.0, bounds());
        assert_eq!(obj.position, Vec2::new(785.0, 0.0));
        assert_eq!(obj.velocity, Vec2::new(400.0, -400.0));
    }

    #[test]
    fn oversized_object_pins_to_origin() {
        let mut obj = GameObject::new(Vec2::new(50.0, 50.0), Vec2::new(900.0, 700.0));
        obj.clamp_to(bounds());
        assert_eq!(obj.position, Vec2::ZERO);
        assert!(obj.is_within(bounds()));
    }

    #[test]
    fn center_is_half_extent() {
        assert_eq!(bounds().center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn color_normalizes() {
        let [r, g, b, a] = Color::ROSE.to_f32_array();
        assert!((r - 206.0 / 255.0).abs() < 1e-6);
        assert!((g - 71.0 / 255.0).abs() < 1e-6);
        assert!((b - 96.0 / 255.0).abs() < 1e-6);
        assert_eq!(a, 1.0);
    }
}
