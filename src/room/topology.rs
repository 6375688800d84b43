//! Room extraction from a wall sketch
//!
//! Cells of the sketch canvas form a 4-connected graph that is cut wherever
//! a wall or opening runs between two cells. Everything reachable from the
//! canvas border is exterior; each remaining connected component is a room
//! whose outline is traced from its boundary unit edges.

use ahash::{AHashMap, AHashSet};
use glam::{IVec2, Vec2};
use std::collections::VecDeque;

use super::lattice::{EdgeLattice, Grid};
use super::polygon::{remove_collinear, CanvasBounds, RoomPolygon};
use super::segment::{GridSegment, UnitEdge};
use crate::core::config::{config, GeometryConfig};
use crate::core::error::{GeometryError, Result};

/// Fewer segments than this cannot enclose anything worth tracing
const MIN_SEGMENTS: usize = 3;

/// Outlines with fewer raw lattice points are discarded
const MIN_RAW_POINTS: usize = 4;

const EXTERIOR: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    fn offset(self) -> IVec2 {
        match self {
            Side::Top => IVec2::new(0, -1),
            Side::Right => IVec2::new(1, 0),
            Side::Bottom => IVec2::new(0, 1),
            Side::Left => IVec2::new(-1, 0),
        }
    }

    /// Lattice edge on this side of `cell`
    fn edge(self, cell: IVec2) -> UnitEdge {
        match self {
            Side::Top => UnitEdge::Horizontal { x: cell.x, y: cell.y },
            Side::Bottom => UnitEdge::Horizontal { x: cell.x, y: cell.y + 1 },
            Side::Left => UnitEdge::Vertical { x: cell.x, y: cell.y },
            Side::Right => UnitEdge::Vertical { x: cell.x + 1, y: cell.y },
        }
    }

    /// Directed edge, clockwise around the cell with y pointing down
    fn directed(self, cell: IVec2) -> DirectedEdge {
        let (x, y) = (cell.x, cell.y);
        let (start, end) = match self {
            Side::Top => (IVec2::new(x, y), IVec2::new(x + 1, y)),
            Side::Right => (IVec2::new(x + 1, y), IVec2::new(x + 1, y + 1)),
            Side::Bottom => (IVec2::new(x + 1, y + 1), IVec2::new(x, y + 1)),
            Side::Left => (IVec2::new(x, y + 1), IVec2::new(x, y)),
        };
        DirectedEdge {
            start,
            end,
            lattice: self.edge(cell),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct DirectedEdge {
    start: IVec2,
    end: IVec2,
    lattice: UnitEdge,
}

/// Result of chaining a component's boundary edges
#[derive(Debug, Clone)]
struct TracedOutline {
    /// Lattice points in traversal order, without the closing repeat
    points: Vec<IVec2>,
    /// False when the chain hit a dead end or the iteration cap
    closed: bool,
}

/// Converts sketched segments into closed room polygons
pub struct RoomTopologyExtractor {
    config: GeometryConfig,
}

impl RoomTopologyExtractor {
    pub fn new() -> Self {
        Self::with_config(config().clone())
    }

    pub fn with_config(config: GeometryConfig) -> Self {
        Self { config }
    }

    /// Rooms enclosed by `segments` on a canvas of `canvas` cells
    ///
    /// A zero or non-finite `grid_size` is rejected. Fewer than three
    /// segments yield no rooms. Rooms are named "Room 1", "Room 2", ... in
    /// scan order of their first cell.
    pub fn extract(
        &self,
        segments: &[GridSegment],
        grid_size: f32,
        canvas: CanvasBounds,
    ) -> Result<Vec<RoomPolygon>> {
        if !grid_size.is_finite() || grid_size <= 0.0 {
            return Err(GeometryError::InvalidGridSize(grid_size));
        }

        if segments.len() < MIN_SEGMENTS || canvas.is_empty() {
            tracing::debug!(segments = segments.len(), "Sketch too small for rooms");
            return Ok(Vec::new());
        }

        let cols = canvas.cols as usize;
        let rows = canvas.rows as usize;
        let walls = EdgeLattice::from_segments(cols, rows, segments, |s| !s.is_opening());
        let boundary = EdgeLattice::from_segments(cols, rows, segments, |_| true);

        let mut labels: Grid<Option<u32>> = Grid::new(cols, rows);
        flood_exterior(&mut labels, &boundary);
        let components = label_interior(&mut labels, &boundary);

        let mut rooms = Vec::new();
        for (id, cells) in components {
            let edges = boundary_edges(&cells, id, &labels, &boundary);
            let outline = chain_edges(&edges, self.config.chain_cap_factor);

            if !outline.closed {
                tracing::warn!(
                    component = id,
                    edges = edges.len(),
                    points = outline.points.len(),
                    "Room boundary did not close, keeping partial outline"
                );
            }

            if outline.points.len() < MIN_RAW_POINTS {
                tracing::debug!(component = id, "Discarding outline with too few points");
                continue;
            }

            let drawing: Vec<Vec2> = outline
                .points
                .iter()
                .map(|p| p.as_vec2() * grid_size)
                .collect();
            let points = remove_collinear(&drawing, self.config.collinear_epsilon);
            if points.len() < 3 {
                tracing::debug!(component = id, "Discarding degenerate outline");
                continue;
            }

            let touching: AHashSet<UnitEdge> = edges.iter().map(|e| e.lattice).collect();
            let adjacent = |segment: &GridSegment, lattice: &EdgeLattice| {
                segment
                    .unit_edges()
                    .any(|e| touching.contains(&e) && lattice.is_set(e))
            };

            let mut room = RoomPolygon::new(points, grid_size, canvas)
                .with_name(format!("Room {}", rooms.len() + 1));
            room.walls = segments
                .iter()
                .filter(|s| !s.is_opening() && adjacent(*s, &walls))
                .copied()
                .collect();
            room.openings = segments
                .iter()
                .filter(|s| s.is_opening() && adjacent(*s, &boundary))
                .copied()
                .collect();
            room.all_segments = Some(segments.to_vec());

            rooms.push(room);
        }

        tracing::info!(
            segments = segments.len(),
            rooms = rooms.len(),
            "Extracted rooms from sketch"
        );
        Ok(rooms)
    }
}

impl Default for RoomTopologyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn crosses_boundary(boundary: &EdgeLattice, cell: IVec2, side: Side) -> bool {
    boundary.is_set(side.edge(cell))
}

/// Breadth-first fill from `seeds` without crossing boundary edges
fn flood(
    labels: &mut Grid<Option<u32>>,
    boundary: &EdgeLattice,
    seeds: impl IntoIterator<Item = IVec2>,
    id: u32,
) -> Vec<IVec2> {
    let mut queue: VecDeque<IVec2> = VecDeque::new();
    let mut filled = Vec::new();

    for seed in seeds {
        if labels.get(seed.x, seed.y) == Some(&None) {
            labels.set(seed.x, seed.y, Some(id));
            queue.push_back(seed);
        }
    }

    while let Some(cell) = queue.pop_front() {
        filled.push(cell);
        for side in Side::ALL {
            if crosses_boundary(boundary, cell, side) {
                continue;
            }
            let next = cell + side.offset();
            if labels.get(next.x, next.y) == Some(&None) {
                labels.set(next.x, next.y, Some(id));
                queue.push_back(next);
            }
        }
    }

    filled
}

/// Label everything reachable from the canvas border as exterior
///
/// A border cell seeds the fill only when its outward edge is open.
fn flood_exterior(labels: &mut Grid<Option<u32>>, boundary: &EdgeLattice) {
    let cols = labels.width as i32;
    let rows = labels.height as i32;

    let mut seeds = Vec::new();
    for y in 0..rows {
        for x in 0..cols {
            let cell = IVec2::new(x, y);
            let open_outward = Side::ALL.iter().any(|&side| {
                let outside = cell + side.offset();
                !labels.contains(outside.x, outside.y) && !crosses_boundary(boundary, cell, side)
            });
            if open_outward {
                seeds.push(cell);
            }
        }
    }

    let filled = flood(labels, boundary, seeds, EXTERIOR);
    tracing::debug!(cells = filled.len(), "Labeled exterior region");
}

/// Label the remaining cells component by component, in scan order
fn label_interior(
    labels: &mut Grid<Option<u32>>,
    boundary: &EdgeLattice,
) -> Vec<(u32, Vec<IVec2>)> {
    let mut components = Vec::new();
    let mut next_id = EXTERIOR + 1;

    for y in 0..labels.height as i32 {
        for x in 0..labels.width as i32 {
            if labels.get(x, y) == Some(&None) {
                let mut cells = flood(labels, boundary, [IVec2::new(x, y)], next_id);
                cells.sort_by_key(|c| (c.y, c.x));
                components.push((next_id, cells));
                next_id += 1;
            }
        }
    }

    components
}

/// Directed boundary edges of a component, in cell scan order
fn boundary_edges(
    cells: &[IVec2],
    id: u32,
    labels: &Grid<Option<u32>>,
    boundary: &EdgeLattice,
) -> Vec<DirectedEdge> {
    let mut edges = Vec::new();
    for &cell in cells {
        for side in Side::ALL {
            let neighbor = cell + side.offset();
            let outside = labels.get(neighbor.x, neighbor.y).copied().flatten() != Some(id);
            if outside || crosses_boundary(boundary, cell, side) {
                edges.push(side.directed(cell));
            }
        }
    }
    edges
}

/// Chain edges end-to-start into a loop starting at the first edge
///
/// Stops when the loop closes, when no unused edge continues the chain, or
/// after `cap_factor * edges.len()` steps (saturating).
fn chain_edges(edges: &[DirectedEdge], cap_factor: usize) -> TracedOutline {
    let Some(first) = edges.first() else {
        return TracedOutline {
            points: Vec::new(),
            closed: false,
        };
    };

    let mut by_start: AHashMap<IVec2, Vec<usize>> = AHashMap::new();
    for (i, edge) in edges.iter().enumerate() {
        by_start.entry(edge.start).or_default().push(i);
    }

    let mut used = vec![false; edges.len()];
    used[0] = true;

    let origin = first.start;
    let mut points = vec![origin];
    let mut current = first.end;
    let mut closed = false;

    for _ in 0..edges.len().saturating_mul(cap_factor) {
        if current == origin {
            closed = true;
            break;
        }

        let next = by_start
            .get(&current)
            .and_then(|candidates| candidates.iter().copied().find(|&i| !used[i]));

        match next {
            Some(i) => {
                used[i] = true;
                points.push(current);
                current = edges[i].end;
            }
            None => break,
        }
    }

    TracedOutline { points, closed }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(x0: i32, y0: i32, x1: i32, y1: i32) -> GridSegment {
        GridSegment::wall(IVec2::new(x0, y0), IVec2::new(x1, y1)).unwrap()
    }

    fn rectangle(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<GridSegment> {
        vec![
            wall(x0, y0, x1, y0),
            wall(x1, y0, x1, y1),
            wall(x1, y1, x0, y1),
            wall(x0, y1, x0, y0),
        ]
    }

    #[test]
    fn test_unit_square_room() {
        let extractor = RoomTopologyExtractor::new();
        let rooms = extractor
            .extract(&rectangle(2, 2, 3, 3), 20.0, CanvasBounds::new(6, 6))
            .unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].points.len(), 4);
        assert_eq!(rooms[0].points[0], Vec2::new(40.0, 40.0));
        assert_eq!(rooms[0].walls.len(), 4);
    }

    #[test]
    fn test_large_rectangle_simplifies_to_corners() {
        let extractor = RoomTopologyExtractor::new();
        let rooms = extractor
            .extract(&rectangle(1, 1, 5, 4), 10.0, CanvasBounds::new(8, 8))
            .unwrap();
        assert_eq!(rooms.len(), 1);
        let room = &rooms[0];
        assert_eq!(room.points.len(), 4);
        assert_eq!(room.area(), 40.0 * 30.0);
    }

    #[test]
    fn test_room_touching_canvas_border() {
        let extractor = RoomTopologyExtractor::new();
        let rooms = extractor
            .extract(&rectangle(0, 0, 2, 2), 1.0, CanvasBounds::new(4, 4))
            .unwrap();
        assert_eq!(rooms.len(), 1);
    }

    #[test]
    fn test_open_sketch_has_no_rooms() {
        let segments = vec![wall(0, 1, 4, 1), wall(4, 1, 4, 4), wall(4, 4, 1, 4)];
        let rooms = RoomTopologyExtractor::new()
            .extract(&segments, 1.0, CanvasBounds::new(8, 8))
            .unwrap();
        assert!(rooms.is_empty());
    }

    #[test]
    fn test_two_segments_short_circuit() {
        let segments = vec![wall(0, 0, 2, 0), wall(2, 0, 2, 2)];
        let rooms = RoomTopologyExtractor::new()
            .extract(&segments, 1.0, CanvasBounds::new(4, 4))
            .unwrap();
        assert!(rooms.is_empty());
    }

    #[test]
    fn test_bad_grid_size_rejected() {
        let result = RoomTopologyExtractor::new().extract(&rectangle(0, 0, 1, 1), 0.0, CanvasBounds::new(4, 4));
        assert!(matches!(result, Err(GeometryError::InvalidGridSize(_))));
    }

    #[test]
    fn test_divided_rectangle_yields_two_rooms() {
        let mut segments = rectangle(0, 0, 4, 2);
        segments.push(wall(2, 0, 2, 2));
        let rooms = RoomTopologyExtractor::new()
            .extract(&segments, 1.0, CanvasBounds::new(6, 4))
            .unwrap();
        assert_eq!(rooms.len(), 2);
        for room in &rooms {
            assert_eq!(room.points.len(), 4);
            assert_eq!(room.area(), 4.0);
        }
    }

    #[test]
    fn test_chain_detects_dead_end() {
        let edges = vec![
            Side::Top.directed(IVec2::new(0, 0)),
            Side::Right.directed(IVec2::new(0, 0)),
        ];
        let outline = chain_edges(&edges, 2);
        assert!(!outline.closed);
        assert_eq!(outline.points.len(), 2);
    }

    #[test]
    fn test_chain_closes_cell_loop() {
        let edges: Vec<_> = Side::ALL
            .iter()
            .map(|s| s.directed(IVec2::new(3, 1)))
            .collect();
        let outline = chain_edges(&edges, 2);
        assert!(outline.closed);
        assert_eq!(
            outline.points,
            vec![
                IVec2::new(3, 1),
                IVec2::new(4, 1),
                IVec2::new(4, 2),
                IVec2::new(3, 2)
            ]
        );
    }

    #[test]
    fn test_huge_chain_cap_stays_bounded() {
        let config = GeometryConfig::from_toml_str("chain_cap_factor = 9223372036854775807").unwrap();
        let rooms = RoomTopologyExtractor::with_config(config)
            .extract(&rectangle(1, 1, 3, 3), 10.0, CanvasBounds::new(5, 5))
            .unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].points.len(), 4);
    }

    #[test]
    fn test_rooms_named_in_scan_order() {
        let mut segments = rectangle(0, 0, 4, 2);
        segments.push(wall(2, 0, 2, 2));
        let rooms = RoomTopologyExtractor::new()
            .extract(&segments, 1.0, CanvasBounds::new(6, 4))
            .unwrap();
        let names: Vec<_> = rooms.iter().map(|r| r.name.as_deref()).collect();
        assert_eq!(names, vec![Some("Room 1"), Some("Room 2")]);
    }
}
