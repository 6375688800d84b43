//! Closed room outlines produced from a sketch

use geo::{Centroid, LineString, Polygon};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::segment::GridSegment;

/// Size of the sketch canvas in grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub cols: u32,
    pub rows: u32,
}

impl CanvasBounds {
    pub fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.cols == 0 || self.rows == 0
    }
}

/// A room outline in drawing space (pixels), immutable once extracted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPolygon {
    pub points: Vec<Vec2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Wall segments touching this room's boundary
    #[serde(default)]
    pub walls: Vec<GridSegment>,
    /// Openings touching this room's boundary; shared openings appear in both rooms
    #[serde(default)]
    pub openings: Vec<GridSegment>,
    /// Every segment of the sketch, for interior walls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_segments: Option<Vec<GridSegment>>,
    /// Pixels per grid cell
    pub grid_size: f32,
    /// Canvas size in pixels (`canvas` cells times `grid_size`)
    pub drawing_bounds: Vec2,
    pub canvas: CanvasBounds,
}

impl RoomPolygon {
    pub fn new(points: Vec<Vec2>, grid_size: f32, canvas: CanvasBounds) -> Self {
        Self {
            points,
            name: None,
            walls: Vec::new(),
            openings: Vec::new(),
            all_segments: None,
            grid_size,
            drawing_bounds: Vec2::new(canvas.cols as f32, canvas.rows as f32) * grid_size,
            canvas,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn drawing_center(&self) -> Vec2 {
        self.drawing_bounds / 2.0
    }

    /// Axis-aligned (min, max) rectangle around the outline
    pub fn bounding_rect(&self) -> (Vec2, Vec2) {
        self.points.iter().fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(lo, hi), p| (lo.min(*p), hi.max(*p)),
        )
    }

    /// Shoelace area, always positive
    pub fn area(&self) -> f32 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f32 = (0..n)
            .map(|i| self.points[i].perp_dot(self.points[(i + 1) % n]))
            .sum();
        twice.abs() / 2.0
    }

    /// Area centroid; vertex average when the outline is degenerate
    pub fn centroid(&self) -> Vec2 {
        if self.points.is_empty() {
            return Vec2::ZERO;
        }

        match geo_polygon(&self.points).centroid() {
            Some(c) if c.x().is_finite() && c.y().is_finite() => {
                Vec2::new(c.x() as f32, c.y() as f32)
            }
            _ => self.points.iter().copied().sum::<Vec2>() / self.points.len() as f32,
        }
    }
}

/// Outline as a closed `geo` polygon without holes
pub(crate) fn geo_polygon(points: &[Vec2]) -> Polygon<f64> {
    let mut coords: Vec<(f64, f64)> = points.iter().map(|p| (p.x as f64, p.y as f64)).collect();
    if let Some(&first) = coords.first() {
        coords.push(first);
    }
    Polygon::new(LineString::from(coords), vec![])
}

/// Drop vertices whose adjacent edges are parallel (or fold back)
///
/// Works cyclically and repeats until stable, so chains of collinear
/// vertices collapse to their end points.
pub fn remove_collinear(points: &[Vec2], epsilon: f32) -> Vec<Vec2> {
    let mut current: Vec<Vec2> = points.to_vec();

    loop {
        let n = current.len();
        if n < 3 {
            return current;
        }

        let drop = (0..n).find(|&i| {
            let prev = current[(i + n - 1) % n];
            let next = current[(i + 1) % n];
            let cross = (current[i] - prev).perp_dot(next - current[i]);
            cross.abs() < epsilon
        });

        match drop {
            Some(i) => {
                current.remove(i);
            }
            None => return current,
        }
    }
}
