//! Symbolic placement commands produced by the external command translator

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::spatial::SpatialRelation;

/// What the command does with its target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CommandAction {
    /// Add a new object of `target_type`
    #[default]
    Create,
    /// Relocate the existing object named by `object_id`
    Move,
}

/// One placement command, as emitted by the translator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRecord {
    #[serde(default)]
    pub action: CommandAction,
    /// Id (or type tag) of the reference object
    pub relative_to_object: String,
    /// Relation text, e.g. "on-top-of"; unknown text makes the command a no-op
    pub spatial_relation: String,
    /// Type of the object to create
    #[serde(default)]
    pub target_type: Option<String>,
    #[serde(default)]
    pub target_scale: Option<Vec3>,
    /// Object to move, for `Move` commands
    #[serde(default)]
    pub object_id: Option<String>,
}

/// Type created when a command names none
pub const DEFAULT_TARGET_TYPE: &str = "cube";

impl CommandRecord {
    pub fn create(
        target_type: impl Into<String>,
        relation: SpatialRelation,
        relative_to: impl Into<String>,
    ) -> Self {
        Self {
            action: CommandAction::Create,
            relative_to_object: relative_to.into(),
            spatial_relation: relation.as_str().to_string(),
            target_type: Some(target_type.into()),
            target_scale: None,
            object_id: None,
        }
    }

    pub fn move_object(
        object_id: impl Into<String>,
        relation: SpatialRelation,
        relative_to: impl Into<String>,
    ) -> Self {
        Self {
            action: CommandAction::Move,
            relative_to_object: relative_to.into(),
            spatial_relation: relation.as_str().to_string(),
            target_type: None,
            target_scale: None,
            object_id: Some(object_id.into()),
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.target_scale = Some(scale);
        self
    }

    /// Parsed relation; `None` for text no relation matches
    pub fn relation(&self) -> Option<SpatialRelation> {
        SpatialRelation::parse(&self.spatial_relation)
    }
}
