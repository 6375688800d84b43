//! Spatial queries over a room outline
//!
//! Rooms are stored in drawing space (pixels, y down). A room object in the
//! scene maps the drawing canvas center onto its own x/z position, one grid
//! cell to `world_cell_size` world units, drawing y to world z.

use geo::{Contains, Point};
use glam::{Vec2, Vec3};
use rand::Rng;

use super::polygon::{geo_polygon, RoomPolygon};
use crate::core::config::GeometryConfig;

/// Strict interior test; points on the outline count as outside
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    geo_polygon(polygon).contains(&Point::new(point.x as f64, point.y as f64))
}

/// Queries against one room placed in the world
#[derive(Debug, Clone, Copy)]
pub struct RoomSpatialQuery<'a> {
    room: &'a RoomPolygon,
    /// World position of the room object (canvas center, base elevation)
    origin: Vec3,
    world_cell_size: f32,
    attempts: u32,
}

impl<'a> RoomSpatialQuery<'a> {
    pub fn new(room: &'a RoomPolygon, origin: Vec3, config: &GeometryConfig) -> Self {
        Self {
            room,
            origin,
            world_cell_size: config.world_cell_size,
            attempts: config.random_point_attempts,
        }
    }

    pub fn room(&self) -> &RoomPolygon {
        self.room
    }

    /// World units per drawing pixel
    fn pixel_scale(&self) -> f32 {
        self.world_cell_size / self.room.grid_size
    }

    /// Floor elevation: base minus one cell height
    pub fn floor_y(&self) -> f32 {
        self.origin.y - self.world_cell_size
    }

    /// Drawing point to world, at floor height
    pub fn drawing_to_world(&self, point: Vec2) -> Vec3 {
        let offset = (point - self.room.drawing_center()) * self.pixel_scale();
        Vec3::new(
            self.origin.x + offset.x,
            self.floor_y(),
            self.origin.z + offset.y,
        )
    }

    /// World point to drawing space; elevation is dropped
    pub fn world_to_drawing(&self, point: Vec3) -> Vec2 {
        let offset = Vec2::new(point.x - self.origin.x, point.z - self.origin.z);
        offset / self.pixel_scale() + self.room.drawing_center()
    }

    pub fn contains_drawing_point(&self, point: Vec2) -> bool {
        point_in_polygon(point, &self.room.points)
    }

    pub fn contains_world_point(&self, point: Vec3) -> bool {
        self.contains_drawing_point(self.world_to_drawing(point))
    }

    /// Uniform rejection sample inside the outline, at floor height
    ///
    /// Falls back to the centroid once the attempt budget is spent.
    pub fn random_position_in_room<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let (lo, hi) = self.room.bounding_rect();
        let span = hi - lo;

        for _ in 0..self.attempts {
            let sample = lo + Vec2::new(rng.gen::<f32>(), rng.gen::<f32>()) * span;
            if self.contains_drawing_point(sample) {
                return self.drawing_to_world(sample);
            }
        }

        tracing::debug!(
            attempts = self.attempts,
            "No interior sample found, using room centroid"
        );
        self.drawing_to_world(self.room.centroid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::CanvasBounds;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn room() -> RoomPolygon {
        // 4 x 2 cells at 20 px per cell, on a 10 x 10 canvas
        RoomPolygon::new(
            vec![
                Vec2::new(20.0, 20.0),
                Vec2::new(100.0, 20.0),
                Vec2::new(100.0, 60.0),
                Vec2::new(20.0, 60.0),
            ],
            20.0,
            CanvasBounds::new(10, 10),
        )
    }

    #[test]
    fn test_point_in_polygon_square() {
        let square = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];

        assert!(point_in_polygon(Vec2::new(5.0, 5.0), &square));
        assert!(point_in_polygon(Vec2::new(1.0, 1.0), &square));
        assert!(!point_in_polygon(Vec2::new(15.0, 5.0), &square));
        assert!(!point_in_polygon(Vec2::new(-5.0, 5.0), &square));
    }

    #[test]
    fn test_point_in_polygon_concave() {
        // L shape missing the top-right quadrant
        let l_shape = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(5.0, 5.0),
            Vec2::new(10.0, 5.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        assert!(point_in_polygon(Vec2::new(2.0, 2.0), &l_shape));
        assert!(point_in_polygon(Vec2::new(8.0, 8.0), &l_shape));
        assert!(!point_in_polygon(Vec2::new(8.0, 2.0), &l_shape));
    }

    #[test]
    fn test_point_on_outline_is_outside() {
        let square = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        assert!(!point_in_polygon(Vec2::new(0.0, 5.0), &square));
        assert!(!point_in_polygon(Vec2::new(10.0, 10.0), &square));
    }

    #[test]
    fn test_point_in_polygon_empty() {
        let empty: Vec<Vec2> = vec![];
        assert!(!point_in_polygon(Vec2::new(0.0, 0.0), &empty));
    }

    #[test]
    fn test_transform_round_trip() {
        let room = room();
        let config = GeometryConfig::default();
        let query = RoomSpatialQuery::new(&room, Vec3::new(5.0, 2.0, -3.0), &config);

        // Canvas center maps to the room origin
        let center = query.drawing_to_world(Vec2::new(100.0, 100.0));
        assert_eq!(center, Vec3::new(5.0, 1.0, -3.0));

        let p = Vec2::new(37.0, 55.0);
        let back = query.world_to_drawing(query.drawing_to_world(p));
        assert!(back.distance(p) < 1e-3);
    }

    #[test]
    fn test_floor_is_one_cell_below_base() {
        let room = room();
        let config = GeometryConfig {
            world_cell_size: 0.5,
            ..GeometryConfig::default()
        };
        let query = RoomSpatialQuery::new(&room, Vec3::new(0.0, 3.0, 0.0), &config);
        assert_eq!(query.floor_y(), 2.5);
    }

    #[test]
    fn test_random_positions_inside() {
        let room = room();
        let config = GeometryConfig::default();
        let query = RoomSpatialQuery::new(&room, Vec3::ZERO, &config);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..200 {
            let p = query.random_position_in_room(&mut rng);
            assert!(query.contains_world_point(p));
            assert_eq!(p.y, query.floor_y());
        }
    }

    #[test]
    fn test_zero_attempts_uses_centroid() {
        let room = room();
        let config = GeometryConfig {
            random_point_attempts: 0,
            ..GeometryConfig::default()
        };
        let query = RoomSpatialQuery::new(&room, Vec3::ZERO, &config);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let p = query.random_position_in_room(&mut rng);
        let expected = query.drawing_to_world(room.centroid());
        assert_eq!(p, expected);
    }
}
