//! Core type definitions used throughout the codebase

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::room::RoomPolygon;

/// Identifier of an object in the scene snapshot
///
/// Ids are owned by the scene layer; the core only compares them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh id for a hypothetical object that is not in the scene yet
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Read-only view of one scene object, supplied per call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneObjectRef {
    pub id: ObjectId,
    /// Type tag, e.g. "cube", "house-basic", "room"
    #[serde(rename = "type")]
    pub object_type: String,
    pub position: Vec3,
    #[serde(default)]
    pub rotation: Vec3,
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
    #[serde(default)]
    pub color: String,
    /// Sketch geometry stored on room objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomPolygon>,
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

impl SceneObjectRef {
    pub fn new(id: impl Into<ObjectId>, object_type: impl Into<String>, position: Vec3) -> Self {
        Self {
            id: id.into(),
            object_type: object_type.into(),
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            color: String::new(),
            room: None,
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Attach room geometry, turning this into a room object
    pub fn with_room(mut self, room: RoomPolygon) -> Self {
        self.room = Some(room);
        self
    }

    /// Room geometry, if this object is a room created from a sketch
    pub fn room_geometry(&self) -> Option<&RoomPolygon> {
        self.room.as_ref()
    }
}

impl From<String> for ObjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
