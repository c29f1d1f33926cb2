//! Square grid layout and neighbor topology.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Index layout of an `n × n` particle grid.
///
/// Particle at (col, row) has index `col * n + row`: columns are laid out
/// one after another, each running top to bottom.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridTopology {
    n: usize,
}

impl GridTopology {
    pub fn new(n: usize) -> Self {
        GridTopology { n }
    }

    pub fn resolution(&self) -> usize {
        self.n
    }

    pub fn len(&self) -> usize {
        self.n * self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        col * self.n + row
    }

    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.n, index % self.n)
    }

    /// Axis-adjacent neighbor pairs `(a, b)` with `a < b`. No diagonals.
    ///
    /// For each cell the right neighbor comes first, then the one below,
    /// giving `2·n·(n-1)` links.
    pub fn neighbor_pairs(&self) -> AllocVec<(usize, usize)> {
        let n = self.n;
        let mut pairs = AllocVec::with_capacity(2 * n * n.saturating_sub(1));
        for col in 0..n {
            for row in 0..n {
                if col + 1 < n {
                    pairs.push((self.index(col, row), self.index(col + 1, row)));
                }
                if row + 1 < n {
                    pairs.push((self.index(col, row), self.index(col, row + 1)));
                }
            }
        }
        pairs
    }

    /// Rest positions filling `width × height` from `origin`, corners included.
    pub fn positions<F: Float>(&self, origin: Vec2<F>, width: F, height: F) -> AllocVec<Vec2<F>> {
        let steps = F::from_usize(self.n.saturating_sub(1).max(1));
        let dx = width / steps;
        let dy = height / steps;
        let mut out = AllocVec::with_capacity(self.len());
        for col in 0..self.n {
            for row in 0..self.n {
                out.push(Vec2::new(
                    origin.x + F::from_usize(col) * dx,
                    origin.y + F::from_usize(row) * dy,
                ));
            }
        }
        out
    }
}
