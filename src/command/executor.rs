//! Command execution - turns a placement command into proposed coordinates
//!
//! CommandRecord -> ReferenceResolver -> SpatialPlacementResolver -> CollisionResolver
//!
//! Nothing here mutates the scene; callers apply the outcome themselves.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::command::record::{CommandAction, CommandRecord, DEFAULT_TARGET_TYPE};
use crate::command::resolver::ReferenceResolver;
use crate::core::config::GeometryConfig;
use crate::core::error::{GeometryError, Result};
use crate::core::types::{ObjectId, SceneObjectRef};
use crate::spatial::{
    CollisionFilter, CollisionResolver, PlacementTarget, ResolutionStrategy,
    SpatialPlacementResolver,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    Direct,
}

/// Placement handed to the scene-mutation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementOutcome {
    pub position: Vec3,
    pub scale: Option<Vec3>,
    pub match_dimensions: bool,
    pub contact_type: ContactType,
    /// Id of the object this outcome applies to (new id for creations)
    pub object_id: ObjectId,
    pub object_type: String,
    /// True when collision resolution moved the contact position
    pub relocated: bool,
}

/// Executes placement commands against scene snapshots
pub struct CommandExecutor {
    placement: SpatialPlacementResolver,
    collision: CollisionResolver,
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self {
            placement: SpatialPlacementResolver::new(),
            collision: CollisionResolver::new(),
        }
    }

    /// Deterministic executor; `seed` drives room interior sampling
    pub fn with_config(config: GeometryConfig, seed: u64) -> Self {
        Self {
            placement: SpatialPlacementResolver::with_config(config.clone(), seed),
            collision: CollisionResolver::with_config(config),
        }
    }

    /// Execute one command, returning the proposed placement
    pub fn execute(
        &mut self,
        record: &CommandRecord,
        scene: &[SceneObjectRef],
    ) -> Result<PlacementOutcome> {
        let resolver = ReferenceResolver::new(scene);
        let reference = resolver
            .resolve(&record.relative_to_object)
            .ok_or_else(|| GeometryError::ReferenceNotFound(record.relative_to_object.clone()))?
            .object;

        let (object_id, mut target) = match record.action {
            CommandAction::Move => {
                let name = record.object_id.as_deref().unwrap_or_default();
                let existing = resolver
                    .resolve(name)
                    .ok_or_else(|| GeometryError::ReferenceNotFound(name.to_string()))?
                    .object;
                (existing.id.clone(), PlacementTarget::from(existing))
            }
            CommandAction::Create => {
                let object_type = record
                    .target_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TARGET_TYPE.to_string());
                (ObjectId::generate(), PlacementTarget::new(object_type))
            }
        };
        if let Some(scale) = record.target_scale {
            target.scale = scale;
        }

        let relation = record.relation();
        if relation.is_none() {
            tracing::warn!(
                relation = %record.spatial_relation,
                "Unrecognized spatial relation, command is a no-op"
            );
        }

        let placed = self.placement.resolve(&target, reference, relation, scene);

        let mut position = placed.position;
        let mut relocated = false;
        if relation.is_some() {
            let dims = match placed.scale {
                Some(scale) => target.base_dimensions().scaled(scale),
                None => target.world_dimensions(),
            };
            let filter = CollisionFilter::new()
                .excluding(&object_id)
                .touching(&reference.id);
            let resolution = self
                .collision
                .resolve_detailed(placed.position, dims, scene, filter);
            position = resolution.position;
            relocated = !matches!(
                resolution.strategy,
                ResolutionStrategy::Clear | ResolutionStrategy::ExpectedContact
            );
        }

        tracing::debug!(
            object = %object_id,
            reference = %reference.id,
            ?position,
            relocated,
            "Executed placement command"
        );

        Ok(PlacementOutcome {
            position,
            scale: placed.scale,
            match_dimensions: placed.match_dimensions,
            contact_type: ContactType::Direct,
            object_id,
            object_type: target.object_type,
            relocated,
        })
    }
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}
