//! Dense grids over sketch cells and lattice edges

use super::segment::{GridSegment, UnitEdge};

/// Generic 2D grid addressed by integer coordinates
///
/// Out-of-range reads return `None` and out-of-range writes are ignored,
/// so callers can probe neighbors past the canvas edge.
#[derive(Debug, Clone)]
pub struct Grid<T: Clone + Default> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        self.index(x, y).map(|i| &self.data[i])
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = value;
        }
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }
}

/// Flags on the horizontal and vertical unit edges of a cols × rows canvas
///
/// Both edge grids are sized (rows + 1) × (cols + 1); the extra row of
/// vertical edges and column of horizontal edges are never set.
#[derive(Debug, Clone)]
pub struct EdgeLattice {
    horizontal: Grid<bool>,
    vertical: Grid<bool>,
}

impl EdgeLattice {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            horizontal: Grid::new(cols + 1, rows + 1),
            vertical: Grid::new(cols + 1, rows + 1),
        }
    }

    /// Lattice with the unit edges of every segment accepted by `keep`
    pub fn from_segments<'a>(
        cols: usize,
        rows: usize,
        segments: impl IntoIterator<Item = &'a GridSegment>,
        keep: impl Fn(&GridSegment) -> bool,
    ) -> Self {
        let mut lattice = Self::new(cols, rows);
        for segment in segments.into_iter().filter(|s| keep(s)) {
            for edge in segment.unit_edges() {
                lattice.mark(edge);
            }
        }
        lattice
    }

    /// Edges that leave the canvas are dropped
    pub fn mark(&mut self, edge: UnitEdge) {
        match edge {
            UnitEdge::Horizontal { x, y } if x + 1 < self.horizontal.width as i32 => {
                self.horizontal.set(x, y, true)
            }
            UnitEdge::Vertical { x, y } if y + 1 < self.vertical.height as i32 => {
                self.vertical.set(x, y, true)
            }
            _ => {}
        }
    }

    pub fn is_set(&self, edge: UnitEdge) -> bool {
        match edge {
            UnitEdge::Horizontal { x, y } => self.horizontal.get(x, y).copied().unwrap_or(false),
            UnitEdge::Vertical { x, y } => self.vertical.get(x, y).copied().unwrap_or(false),
        }
    }
}
