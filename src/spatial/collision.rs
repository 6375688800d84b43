//! Nearest collision-free position search
//!
//! A candidate that overlaps nothing (or only the object it is meant to
//! touch) is returned unchanged. Otherwise rings of increasing radius are
//! sampled around the candidate; the first ring with a clear sample wins.
//! If every ring is blocked the target is pushed flush against the first
//! obstacle. The search is bounded by the ring count and always returns.

use glam::Vec3;
use ordered_float::OrderedFloat;
use std::f32::consts::TAU;

use super::bounds::{bounding_box, BoundingBox};
use super::dimensions::{is_ground, Dimensions};
use crate::core::config::{config, GeometryConfig};
use crate::core::types::{ObjectId, SceneObjectRef};

/// How the returned position was found
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolutionStrategy {
    /// No overlap with anything
    Clear,
    /// Only overlapping the intended contact object
    ExpectedContact,
    /// Moved to the closest clear sample on this ring radius
    Relocated { radius: f32 },
    /// Search exhausted; flush against the first obstacle
    Flush,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResolution {
    pub position: Vec3,
    pub strategy: ResolutionStrategy,
}

/// Who to ignore while testing a candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionFilter<'a> {
    /// The object being moved, when it already exists in the scene
    pub self_id: Option<&'a ObjectId>,
    /// The reference the target is supposed to touch
    pub expected_contact: Option<&'a ObjectId>,
}

impl<'a> CollisionFilter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn excluding(mut self, id: &'a ObjectId) -> Self {
        self.self_id = Some(id);
        self
    }

    pub fn touching(mut self, id: &'a ObjectId) -> Self {
        self.expected_contact = Some(id);
        self
    }
}

pub struct CollisionResolver {
    config: GeometryConfig,
}

impl CollisionResolver {
    pub fn new() -> Self {
        Self::with_config(config().clone())
    }

    pub fn with_config(config: GeometryConfig) -> Self {
        Self { config }
    }

    /// Scene objects whose boxes overlap a box of `dims` centered at `position`
    ///
    /// Ground planes and the filter's self id are skipped. Scene order is kept.
    pub fn find_collisions<'s>(
        &self,
        position: Vec3,
        dims: Dimensions,
        scene: &'s [SceneObjectRef],
        filter: CollisionFilter<'_>,
    ) -> Vec<&'s SceneObjectRef> {
        let candidate = BoundingBox::from_center(position, dims);
        scene
            .iter()
            .filter(|o| filter.self_id != Some(&o.id))
            .filter(|o| !is_ground(&o.object_type))
            .filter(|o| candidate.overlaps(&bounding_box(o)))
            .collect()
    }

    fn is_acceptable(collisions: &[&SceneObjectRef], filter: CollisionFilter<'_>) -> bool {
        match collisions {
            [] => true,
            [only] => filter.expected_contact == Some(&only.id),
            _ => false,
        }
    }

    /// Collision-free position for the target, or `candidate` if already clear
    pub fn resolve(
        &self,
        candidate: Vec3,
        dims: Dimensions,
        scene: &[SceneObjectRef],
        filter: CollisionFilter<'_>,
    ) -> Vec3 {
        self.resolve_detailed(candidate, dims, scene, filter).position
    }

    pub fn resolve_detailed(
        &self,
        candidate: Vec3,
        dims: Dimensions,
        scene: &[SceneObjectRef],
        filter: CollisionFilter<'_>,
    ) -> CollisionResolution {
        let collisions = self.find_collisions(candidate, dims, scene, filter);

        if collisions.is_empty() {
            return CollisionResolution {
                position: candidate,
                strategy: ResolutionStrategy::Clear,
            };
        }

        if Self::is_acceptable(&collisions, filter) {
            return CollisionResolution {
                position: candidate,
                strategy: ResolutionStrategy::ExpectedContact,
            };
        }

        tracing::debug!(
            count = collisions.len(),
            first = %collisions[0].id,
            "Candidate position collides, starting spiral search"
        );

        if let Some((position, radius)) = self.spiral_search(candidate, dims, scene, filter) {
            tracing::debug!(radius, ?position, "Spiral search found clear position");
            return CollisionResolution {
                position,
                strategy: ResolutionStrategy::Relocated { radius },
            };
        }

        let obstacle = collisions[0];
        let position = flush_against(candidate, dims, &bounding_box(obstacle));
        tracing::warn!(
            obstacle = %obstacle.id,
            ?position,
            "Spiral search exhausted, placing flush against obstacle"
        );
        CollisionResolution {
            position,
            strategy: ResolutionStrategy::Flush,
        }
    }

    /// Closest clear sample on the first ring that has one
    fn spiral_search(
        &self,
        candidate: Vec3,
        dims: Dimensions,
        scene: &[SceneObjectRef],
        filter: CollisionFilter<'_>,
    ) -> Option<(Vec3, f32)> {
        let half_height = dims.height / 2.0;
        let height_offsets = [0.0, half_height, -half_height];
        let angles = self.config.spiral_angles;

        for ring in 1..=self.config.spiral_rings() {
            let radius = ring as f32 * self.config.spiral_step;

            let best = (0..angles)
                .flat_map(|k| {
                    let theta = TAU * k as f32 / angles as f32;
                    height_offsets.iter().map(move |&dy| {
                        candidate + Vec3::new(radius * theta.cos(), dy, radius * theta.sin())
                    })
                })
                .filter(|&point| {
                    let hits = self.find_collisions(point, dims, scene, filter);
                    Self::is_acceptable(&hits, filter)
                })
                .min_by_key(|point| OrderedFloat(point.distance(candidate)));

            if let Some(point) = best {
                return Some((point, radius));
            }
        }

        None
    }
}

impl Default for CollisionResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Push the target onto the obstacle face facing it on the dominant axis
///
/// Dominance compares |dx| and |dz| between candidate and obstacle center;
/// ties go to X. The other two coordinates are kept.
pub fn flush_against(candidate: Vec3, dims: Dimensions, obstacle: &BoundingBox) -> Vec3 {
    let dx = candidate.x - obstacle.center.x;
    let dz = candidate.z - obstacle.center.z;

    if dx.abs() >= dz.abs() {
        let x = if dx >= 0.0 {
            obstacle.max.x + dims.width / 2.0
        } else {
            obstacle.min.x - dims.width / 2.0
        };
        Vec3::new(x, candidate.y, candidate.z)
    } else {
        let z = if dz >= 0.0 {
            obstacle.max.z + dims.depth / 2.0
        } else {
            obstacle.min.z - dims.depth / 2.0
        };
        Vec3::new(candidate.x, candidate.y, z)
    }
}
