use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// True if `other` lies entirely inside this box (edges inclusive)
    pub fn contains_aabb(&self, other: &Aabb) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    /// Check if circle intersects AABB
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = Vec2::new(
            center.x.clamp(self.min.x, self.max.x),
            center.y.clamp(self.min.y, self.max.y),
        );
        (center - closest).length_squared() <= radius * radius
    }
}

/// The playing field: a single screen with walls at top and bottom and
/// goals at the left and right edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &crate::Config) -> Self {
        Self::new(config.screen_width, config.screen_height)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(Vec2::ZERO, Vec2::new(self.width, self.height))
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn ball_spawn(&self) -> Vec2 {
        self.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_overlapping_face() {
        let rect = Aabb::from_min_size(Vec2::new(50.0, 175.0), Vec2::new(10.0, 100.0));
        assert!(rect.intersects_circle(Vec2::new(66.0, 225.0), 7.0));
        assert!(rect.intersects_circle(Vec2::new(67.0, 225.0), 7.0), "touching counts");
        assert!(!rect.intersects_circle(Vec2::new(67.5, 225.0), 7.0));
    }

    #[test]
    fn test_circle_near_corner() {
        let rect = Aabb::from_min_size(Vec2::new(50.0, 175.0), Vec2::new(10.0, 100.0));
        // 5 px right and 5 px above the top-right corner: ~7.07 px away
        assert!(!rect.intersects_circle(Vec2::new(65.0, 170.0), 7.0));
        assert!(rect.intersects_circle(Vec2::new(64.0, 171.0), 7.0));
    }

    #[test]
    fn test_circle_center_inside() {
        let rect = Aabb::from_min_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!(rect.intersects_circle(Vec2::new(5.0, 5.0), 0.1));
    }

    #[test]
    fn test_contains_aabb() {
        let map = GameMap::new(800.0, 450.0);
        let inside = Aabb::from_min_size(Vec2::new(750.0, 0.0), Vec2::new(10.0, 100.0));
        let poking_out = Aabb::from_min_size(Vec2::new(750.0, -1.0), Vec2::new(10.0, 100.0));
        assert!(map.bounds().contains_aabb(&inside));
        assert!(!map.bounds().contains_aabb(&poking_out));
    }

    #[test]
    fn test_ball_spawn_is_center() {
        let map = GameMap::new(800.0, 450.0);
        assert_eq!(map.ball_spawn(), Vec2::new(400.0, 225.0));
        assert_eq!(map.bounds().center(), map.center());
    }
}
