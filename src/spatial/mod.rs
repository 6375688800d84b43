//! Object dimensions, relation-driven placement and collision resolution

pub mod bounds;
pub mod collision;
pub mod dimensions;
pub mod placement;
pub mod relation;

pub use bounds::{bounding_box, BoundingBox};
pub use collision::{CollisionFilter, CollisionResolution, CollisionResolver, ResolutionStrategy};
pub use dimensions::{dimensions, scaled_dimensions, Dimensions};
pub use placement::{
    should_match_dimensions, MatchCase, PlacementResult, PlacementTarget, SpatialPlacementResolver,
};
pub use relation::SpatialRelation;
