//! Sketched wall segments on the integer lattice

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::core::error::{GeometryError, Result};

/// One unit-length lattice edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitEdge {
    /// From (x, y) to (x + 1, y)
    Horizontal { x: i32, y: i32 },
    /// From (x, y) to (x, y + 1)
    Vertical { x: i32, y: i32 },
}

/// Axis-aligned segment between two lattice points
///
/// Openings (doors, gaps) still separate rooms but are not walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawGridSegment")]
pub struct GridSegment {
    start: IVec2,
    end: IVec2,
    is_opening: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGridSegment {
    start: IVec2,
    end: IVec2,
    #[serde(default)]
    is_opening: bool,
}

impl TryFrom<RawGridSegment> for GridSegment {
    type Error = GeometryError;

    fn try_from(raw: RawGridSegment) -> Result<Self> {
        GridSegment::new(raw.start, raw.end, raw.is_opening)
    }
}

impl GridSegment {
    /// Rejects segments that are neither horizontal nor vertical
    pub fn new(start: IVec2, end: IVec2, is_opening: bool) -> Result<Self> {
        if start.x != end.x && start.y != end.y {
            return Err(GeometryError::InvalidSegment {
                start_x: start.x,
                start_y: start.y,
                end_x: end.x,
                end_y: end.y,
            });
        }
        Ok(Self {
            start,
            end,
            is_opening,
        })
    }

    pub fn wall(start: IVec2, end: IVec2) -> Result<Self> {
        Self::new(start, end, false)
    }

    pub fn opening(start: IVec2, end: IVec2) -> Result<Self> {
        Self::new(start, end, true)
    }

    pub fn start(&self) -> IVec2 {
        self.start
    }

    pub fn end(&self) -> IVec2 {
        self.end
    }

    pub fn is_opening(&self) -> bool {
        self.is_opening
    }

    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    /// Unit edges covered, independent of segment direction
    pub fn unit_edges(&self) -> impl Iterator<Item = UnitEdge> {
        let lo = self.start.min(self.end);
        let hi = self.start.max(self.end);
        let horizontal = self.is_horizontal();

        let (from, to) = if horizontal { (lo.x, hi.x) } else { (lo.y, hi.y) };
        (from..to).map(move |i| {
            if horizontal {
                UnitEdge::Horizontal { x: i, y: lo.y }
            } else {
                UnitEdge::Vertical { x: lo.x, y: i }
            }
        })
    }
}
