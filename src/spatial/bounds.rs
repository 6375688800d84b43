//! Axis-aligned bounding boxes
//!
//! Boxes are derived on demand from position and scaled type dimensions.
//! Object rotation is ignored: a rotated object keeps the box of its
//! unrotated extents.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::dimensions::{scaled_dimensions, Dimensions};
use crate::core::types::SceneObjectRef;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
    pub size: Vec3,
    pub center: Vec3,
}

impl BoundingBox {
    /// Box centered on `center` with the given extents
    pub fn from_center(center: Vec3, dims: Dimensions) -> Self {
        let size = dims.as_vec3().abs();
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
            size,
            center,
        }
    }

    /// Inclusive slab test on all three axes; touching faces overlap
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// World-space box of a scene object
pub fn bounding_box(object: &SceneObjectRef) -> BoundingBox {
    let dims = scaled_dimensions(&object.object_type, object.scale);
    BoundingBox::from_center(object.position, dims)
}
