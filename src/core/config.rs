//! Geometry configuration with documented constants
//!
//! All magic numbers of the placement and sketch systems are collected here
//! with the behavior they control.

use serde::{Deserialize, Serialize};

use crate::core::error::{GeometryError, Result};

/// Configuration for placement, collision search and room extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    // === PLACEMENT ===
    /// Vertical gap left between a reference and an object placed "above" it
    pub above_gap: f32,

    // === COLLISION SEARCH ===
    /// Radius increment between spiral rings (world units)
    pub spiral_step: f32,

    /// Largest ring radius tried before falling back to flush placement
    ///
    /// Together with `spiral_step` this fixes the ring count (50 by default).
    pub spiral_max_radius: f32,

    /// Sample angles per full turn of a ring
    pub spiral_angles: u32,

    // === ROOMS ===
    /// Rejection-sampling attempts for a random interior point before the
    /// centroid is used instead
    pub random_point_attempts: u32,

    /// World-space size of one sketch grid cell
    ///
    /// Also the downward offset applied to a room's floor height.
    pub world_cell_size: f32,

    /// Cross products below this magnitude mark a vertex as collinear
    pub collinear_epsilon: f32,

    /// Boundary chaining stops after `chain_cap_factor * edge_count` steps
    pub chain_cap_factor: usize,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            above_gap: 0.2,

            spiral_step: 0.1,
            spiral_max_radius: 5.0,
            spiral_angles: 16,

            random_point_attempts: 50,
            world_cell_size: 1.0,
            collinear_epsilon: 1e-6,
            chain_cap_factor: 2,
        }
    }
}

impl GeometryConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GeometryConfig = toml::from_str(content)?;
        config.validate().map_err(GeometryError::InvalidConfig)?;
        Ok(config)
    }

    /// Number of spiral rings searched
    pub fn spiral_rings(&self) -> u32 {
        (self.spiral_max_radius / self.spiral_step).round() as u32
    }

    /// Validate configuration for internal consistency
    ///
    /// Float fields must be finite; NaN fails every check.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.above_gap.is_finite() {
            return Err(format!("above_gap ({}) must be finite", self.above_gap));
        }

        if !(self.spiral_step.is_finite() && self.spiral_step > 0.0) {
            return Err(format!(
                "spiral_step ({}) must be finite and positive",
                self.spiral_step
            ));
        }

        if !(self.spiral_max_radius.is_finite() && self.spiral_max_radius >= self.spiral_step) {
            return Err(format!(
                "spiral_max_radius ({}) must be finite and >= spiral_step ({})",
                self.spiral_max_radius, self.spiral_step
            ));
        }

        if self.spiral_angles == 0 {
            return Err("spiral_angles must be at least 1".into());
        }

        if !(self.world_cell_size.is_finite() && self.world_cell_size > 0.0) {
            return Err(format!(
                "world_cell_size ({}) must be finite and positive",
                self.world_cell_size
            ));
        }

        if !(self.collinear_epsilon.is_finite() && self.collinear_epsilon >= 0.0) {
            return Err(format!(
                "collinear_epsilon ({}) must be finite and non-negative",
                self.collinear_epsilon
            ));
        }

        if self.chain_cap_factor == 0 {
            return Err("chain_cap_factor must be at least 1".into());
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<GeometryConfig> = OnceLock::new();

/// Shared default geometry config
pub fn config() -> &'static GeometryConfig {
    CONFIG.get_or_init(GeometryConfig::default)
}
