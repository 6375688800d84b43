//! Command execution pipeline
//!
//! Converts translator CommandRecords into placement proposals:
//! CommandRecord -> ReferenceResolver -> SpatialPlacementResolver -> CollisionResolver

pub mod executor;
pub mod record;
pub mod resolver;

pub use executor::{CommandExecutor, ContactType, PlacementOutcome};
pub use record::{CommandAction, CommandRecord};
pub use resolver::{MatchReason, ObjectMatch, ReferenceResolver};
