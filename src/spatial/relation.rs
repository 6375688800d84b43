//! Symbolic spatial relations between a target and a reference object

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Relation of a placed target to its reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpatialRelation {
    /// Resting on the reference's top face
    OnTopOf,
    /// Touching the reference's +X face
    Beside,
    /// Touching the reference's +Z face
    InFrontOf,
    /// Touching the reference's -Z face
    Behind,
    /// Over the top face with a small gap
    Above,
    /// Under the bottom face
    Below,
    /// Within a room's floor polygon
    Inside,
}

impl SpatialRelation {
    pub const ALL: [SpatialRelation; 7] = [
        SpatialRelation::OnTopOf,
        SpatialRelation::Beside,
        SpatialRelation::InFrontOf,
        SpatialRelation::Behind,
        SpatialRelation::Above,
        SpatialRelation::Below,
        SpatialRelation::Inside,
    ];

    /// Parse the loose spellings command translators produce
    ///
    /// Case, hyphens, underscores and spaces are interchangeable.
    pub fn parse(text: &str) -> Option<Self> {
        let normalized: String = text
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '_' || c == ' ' { '-' } else { c })
            .collect();

        match normalized.as_str() {
            "on-top-of" | "on-top" | "on" | "ontopof" => Some(Self::OnTopOf),
            "beside" | "next-to" | "besides" => Some(Self::Beside),
            "in-front-of" | "in-front" | "infrontof" => Some(Self::InFrontOf),
            "behind" => Some(Self::Behind),
            "above" | "over" => Some(Self::Above),
            "below" | "under" | "beneath" => Some(Self::Below),
            "inside" | "in" | "within" => Some(Self::Inside),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnTopOf => "on-top-of",
            Self::Beside => "beside",
            Self::InFrontOf => "in-front-of",
            Self::Behind => "behind",
            Self::Above => "above",
            Self::Below => "below",
            Self::Inside => "inside",
        }
    }
}

impl FromStr for SpatialRelation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown spatial relation: {s}"))
    }
}

impl std::fmt::Display for SpatialRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
