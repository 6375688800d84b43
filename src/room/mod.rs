//! Room extraction from wall sketches and queries over room outlines

pub mod lattice;
pub mod polygon;
pub mod query;
pub mod segment;
pub mod topology;

pub use polygon::{CanvasBounds, RoomPolygon};
pub use query::{point_in_polygon, RoomSpatialQuery};
pub use segment::{GridSegment, UnitEdge};
pub use topology::RoomTopologyExtractor;
