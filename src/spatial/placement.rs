//! Relation-driven placement of a target against a reference object
//!
//! Placement runs in two steps: a fixed rule table decides whether the
//! target is rescaled to the reference's footprint, then the contact
//! position puts the two bounding boxes face to face on the relation's axis.

use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::bounds::bounding_box;
use super::dimensions::{
    dimensions, is_house_like, is_known_type, is_plain_cube, is_roof_like, is_round, Dimensions,
};
use super::relation::SpatialRelation;
use crate::core::config::{config, GeometryConfig};
use crate::core::types::SceneObjectRef;
use crate::room::RoomSpatialQuery;

/// The object being placed: a new object or a hypothetical copy of an existing one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementTarget {
    pub object_type: String,
    pub scale: Vec3,
}

impl PlacementTarget {
    pub fn new(object_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            scale: Vec3::ONE,
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn base_dimensions(&self) -> Dimensions {
        dimensions(&self.object_type)
    }

    pub fn world_dimensions(&self) -> Dimensions {
        self.base_dimensions().scaled(self.scale)
    }
}

impl From<&SceneObjectRef> for PlacementTarget {
    fn from(object: &SceneObjectRef) -> Self {
        Self {
            object_type: object.object_type.clone(),
            scale: object.scale,
        }
    }
}

/// Proposed position (and optional rescale) for the target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementResult {
    pub position: Vec3,
    pub scale: Option<Vec3>,
    pub match_dimensions: bool,
}

impl PlacementResult {
    fn unchanged(position: Vec3) -> Self {
        Self {
            position,
            scale: None,
            match_dimensions: false,
        }
    }
}

/// Which rescale formula applies once dimension matching is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCase {
    /// Roof onto a house structure: footprint matched, roof height kept
    RoofOnHouse,
    /// Generic stacking: footprint matched, height kept
    StackedFootprint,
    /// Every axis fitted to the reference
    FullFit,
}

impl MatchCase {
    pub fn classify(target_type: &str, reference_type: &str, relation: SpatialRelation) -> Self {
        if is_roof_like(target_type) && is_house_like(reference_type) {
            MatchCase::RoofOnHouse
        } else if relation == SpatialRelation::OnTopOf {
            MatchCase::StackedFootprint
        } else {
            MatchCase::FullFit
        }
    }
}

/// Fixed rule table deciding whether the target is fitted to the reference
pub fn should_match_dimensions(
    target_type: &str,
    reference_type: &str,
    relation: SpatialRelation,
) -> bool {
    let roof_on_house = is_roof_like(target_type) && is_house_like(reference_type);
    let plain_stack = relation == SpatialRelation::OnTopOf
        && !is_house_like(target_type)
        && !is_house_like(reference_type);
    let round_on_cube = relation == SpatialRelation::OnTopOf
        && is_plain_cube(reference_type)
        && is_round(target_type);

    roof_on_house || plain_stack || round_on_cube
}

/// Scale factors that fit `target_base` onto `reference` under `case`
pub fn matching_scale(case: MatchCase, target_base: Dimensions, reference: Dimensions) -> Vec3 {
    match case {
        MatchCase::RoofOnHouse => Vec3::new(
            reference.width / target_base.width,
            1.0,
            reference.depth / target_base.depth,
        ),
        MatchCase::StackedFootprint => Vec3::new(
            reference.width / target_base.width,
            1.0,
            reference.depth / target_base.depth,
        ),
        MatchCase::FullFit => Vec3::new(
            reference.width / target_base.width,
            reference.height / target_base.height,
            reference.depth / target_base.depth,
        ),
    }
}

/// Turns (target, reference, relation) into a contact position
pub struct SpatialPlacementResolver {
    config: GeometryConfig,
    rng: ChaCha8Rng,
}

impl SpatialPlacementResolver {
    /// Resolver using the global config and an entropy-seeded RNG
    pub fn new() -> Self {
        Self {
            config: config().clone(),
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Deterministic resolver for reproducible room placements
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(config().clone(), seed)
    }

    pub fn with_config(config: GeometryConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// Place `target` relative to `reference`
    ///
    /// `relation` is `None` when the command named a relation we do not
    /// know; that is a no-op returning the reference's position. The scene
    /// is consulted for the freshest copy of the reference.
    pub fn resolve(
        &mut self,
        target: &PlacementTarget,
        reference: &SceneObjectRef,
        relation: Option<SpatialRelation>,
        scene: &[SceneObjectRef],
    ) -> PlacementResult {
        let reference = scene
            .iter()
            .find(|o| o.id == reference.id)
            .unwrap_or(reference);

        let Some(relation) = relation else {
            tracing::debug!(reference = %reference.id, "Unrecognized relation, leaving position unchanged");
            return PlacementResult::unchanged(reference.position);
        };

        if !is_known_type(&target.object_type) {
            tracing::debug!(target = %target.object_type, "Unknown type tag, sizing as unit cube");
        }

        let match_dimensions =
            should_match_dimensions(&target.object_type, &reference.object_type, relation);

        let (scale, dims) = if match_dimensions {
            let case = MatchCase::classify(&target.object_type, &reference.object_type, relation);
            let reference_dims = bounding_box(reference).size;
            let base = target.base_dimensions();
            let scale = matching_scale(case, base, Dimensions::from_vec3(reference_dims));
            tracing::debug!(
                target = %target.object_type,
                reference = %reference.object_type,
                ?case,
                ?scale,
                "Matching target dimensions to reference"
            );
            (Some(scale), base.scaled(scale))
        } else {
            (None, target.world_dimensions())
        };

        let position = self.contact_position(reference, dims, relation);

        PlacementResult {
            position,
            scale,
            match_dimensions,
        }
    }

    /// Position at which a box of `dims` touches `reference` under `relation`
    pub fn contact_position(
        &mut self,
        reference: &SceneObjectRef,
        dims: Dimensions,
        relation: SpatialRelation,
    ) -> Vec3 {
        let ref_box = bounding_box(reference);
        let p = reference.position;

        match relation {
            SpatialRelation::OnTopOf => Vec3::new(p.x, ref_box.max.y + dims.height / 2.0, p.z),
            SpatialRelation::Above => Vec3::new(
                p.x,
                ref_box.max.y + dims.height / 2.0 + self.config.above_gap,
                p.z,
            ),
            SpatialRelation::Below => Vec3::new(p.x, ref_box.min.y - dims.height / 2.0, p.z),
            // Only the +X face; callers rely on the fixed side
            SpatialRelation::Beside => Vec3::new(ref_box.max.x + dims.width / 2.0, p.y, p.z),
            SpatialRelation::InFrontOf => Vec3::new(p.x, p.y, ref_box.max.z + dims.depth / 2.0),
            SpatialRelation::Behind => Vec3::new(p.x, p.y, ref_box.min.z - dims.depth / 2.0),
            SpatialRelation::Inside => match reference.room_geometry() {
                Some(room) => {
                    let query = RoomSpatialQuery::new(room, p, &self.config);
                    let floor_point = query.random_position_in_room(&mut self.rng);
                    floor_point + Vec3::new(0.0, dims.height / 2.0, 0.0)
                }
                None => p,
            },
        }
    }
}

impl Default for SpatialPlacementResolver {
    fn default() -> Self {
        Self::new()
    }
}
