//! Per-type base dimensions for scene objects
//!
//! The table is a static, read-only map initialized on first use. Unknown
//! type tags resolve to a unit cube, so lookups never fail.

use ahash::AHashMap;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Axis extents of an object in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Extent along X
    pub width: f32,
    /// Extent along Y
    pub height: f32,
    /// Extent along Z
    pub depth: f32,
}

impl Dimensions {
    pub const UNIT: Dimensions = Dimensions::new(1.0, 1.0, 1.0);

    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    pub fn as_vec3(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }

    /// Per-axis scaling; negative (mirrored) scales contribute their magnitude
    pub fn scaled(&self, scale: Vec3) -> Self {
        Self::from_vec3(self.as_vec3() * scale.abs())
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::UNIT
    }
}

const BASE_DIMENSIONS: &[(&str, Dimensions)] = &[
    // Primitives
    ("cube", Dimensions::new(2.0, 2.0, 2.0)),
    ("sphere", Dimensions::new(2.0, 2.0, 2.0)),
    ("cylinder", Dimensions::new(2.0, 2.0, 2.0)),
    ("cone", Dimensions::new(2.0, 2.0, 2.0)),
    ("pyramid", Dimensions::new(2.0, 2.0, 2.0)),
    ("torus", Dimensions::new(3.0, 1.0, 3.0)),
    ("capsule", Dimensions::new(1.0, 2.0, 1.0)),
    ("plane", Dimensions::new(2.0, 0.1, 2.0)),
    ("ground", Dimensions::new(100.0, 0.1, 100.0)),
    // Structures
    ("house-basic", Dimensions::new(4.0, 3.0, 4.0)),
    ("house-single", Dimensions::new(6.0, 3.0, 6.0)),
    ("house-double", Dimensions::new(8.0, 6.0, 8.0)),
    ("house-l-shaped", Dimensions::new(8.0, 3.0, 8.0)),
    ("house-hallway", Dimensions::new(2.0, 3.0, 6.0)),
    ("house-roof", Dimensions::new(4.4, 1.5, 4.4)),
    ("roof", Dimensions::new(4.4, 1.5, 4.4)),
    ("room", Dimensions::new(4.0, 3.0, 4.0)),
    ("wall", Dimensions::new(4.0, 3.0, 0.2)),
    ("floor", Dimensions::new(4.0, 0.1, 4.0)),
    ("door", Dimensions::new(1.0, 2.1, 0.1)),
    ("window", Dimensions::new(1.2, 1.2, 0.1)),
    // Furniture and props
    ("table", Dimensions::new(2.0, 0.8, 1.0)),
    ("chair", Dimensions::new(0.5, 1.0, 0.5)),
    ("sofa", Dimensions::new(2.0, 0.9, 0.9)),
    ("bed", Dimensions::new(2.0, 0.6, 2.0)),
    ("lamp", Dimensions::new(0.4, 1.6, 0.4)),
    ("tree", Dimensions::new(2.0, 5.0, 2.0)),
    ("car", Dimensions::new(4.2, 1.5, 1.8)),
];

static DIMENSION_TABLE: OnceLock<AHashMap<&'static str, Dimensions>> = OnceLock::new();

fn table() -> &'static AHashMap<&'static str, Dimensions> {
    DIMENSION_TABLE.get_or_init(|| BASE_DIMENSIONS.iter().copied().collect())
}

/// Base (unscaled) dimensions for a type tag
pub fn dimensions(object_type: &str) -> Dimensions {
    table()
        .get(object_type)
        .copied()
        .unwrap_or(Dimensions::UNIT)
}

/// World dimensions for a type tag at the given scale
pub fn scaled_dimensions(object_type: &str, scale: Vec3) -> Dimensions {
    dimensions(object_type).scaled(scale)
}

/// True if the tag has an entry in the dimension table
pub fn is_known_type(object_type: &str) -> bool {
    table().contains_key(object_type)
}

// === TYPE CLASSIFICATION ===

/// Roof pieces meant to sit on house structures
pub fn is_roof_like(object_type: &str) -> bool {
    object_type == "roof" || object_type == "house-roof" || object_type.starts_with("roof-")
}

/// House structures and sketched rooms
pub fn is_house_like(object_type: &str) -> bool {
    (object_type.starts_with("house-") && !is_roof_like(object_type)) || object_type == "room"
}

pub fn is_plain_cube(object_type: &str) -> bool {
    object_type == "cube"
}

/// Round primitives that get fitted onto cubes
pub fn is_round(object_type: &str) -> bool {
    matches!(object_type, "sphere" | "cylinder")
}

/// The ground plane never counts as an obstacle
pub fn is_ground(object_type: &str) -> bool {
    object_type == "ground"
}
