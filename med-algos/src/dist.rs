//! The distance table: a full `(m+1) x (n+1)` DP over the cost model, plus a
//! parallel table with the set of optimal predecessors of every cell.
use log::debug;
use med_types::*;
use std::ops::{Index, IndexMut};

/// Row-major dense table indexed by `(i, j)`.
#[derive(Clone, Debug)]
pub(crate) struct Grid<V> {
    cols: usize,
    data: Vec<V>,
}

impl<V: Clone + Default> Grid<V> {
    fn new(rows: usize, cols: usize) -> Self {
        Grid {
            cols,
            data: vec![V::default(); rows * cols],
        }
    }
}

impl<V> Index<(usize, usize)> for Grid<V> {
    type Output = V;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &V {
        debug_assert!(j < self.cols);
        &self.data[i * self.cols + j]
    }
}

impl<V> IndexMut<(usize, usize)> for Grid<V> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut V {
        debug_assert!(j < self.cols);
        &mut self.data[i * self.cols + j]
    }
}

/// Distance and direction tables for transforming `a` (length `m`) into `b`
/// (length `n`).
///
/// Cell `(i, j)` holds the minimum cost of transforming `a[..i]` into `b[..j]`.
/// Both tables are filled on construction and read-only afterwards.
#[derive(Clone, Debug)]
pub struct DistanceTable<'a, T> {
    a: &'a [T],
    b: &'a [T],
    cm: CostModel,
    dist: Grid<Cost>,
    dirs: Grid<Directions>,
}

impl<'a, T: PartialEq> DistanceTable<'a, T> {
    /// Fill the distance table and derive the directions.
    /// Fails with `InvalidConfiguration` for negative costs, and with
    /// `CostOverflow` when the distances could exceed `Cost::MAX`.
    pub fn new(a: &'a [T], b: &'a [T], cm: CostModel) -> Result<Self, MedError> {
        cm.validate()?;
        cm.check_bounds(a.len(), b.len())?;
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut table = DistanceTable {
            a,
            b,
            cm,
            dist: Grid::new(rows, cols),
            dirs: Grid::new(rows, cols),
        };
        table.fill_distance();
        table.fill_directions();
        debug!(
            "Filled {rows}x{cols} distance table with {cm:?}: distance {}",
            table.min_dist()
        );
        Ok(table)
    }

    fn fill_distance(&mut self) {
        let DistanceTable { a, b, cm, dist, .. } = self;
        for i in 0..=a.len() {
            dist[(i, 0)] = i as Cost * cm.del;
        }
        for j in 0..=b.len() {
            dist[(0, j)] = j as Cost * cm.ins;
        }

        // Each cell only depends on cells with smaller or equal i and j.
        for i in 1..=a.len() {
            for j in 1..=b.len() {
                let sub = cm.match_cost(&a[i - 1], &b[j - 1]);
                dist[(i, j)] = (dist[(i - 1, j)] + cm.del)
                    .min(dist[(i, j - 1)] + cm.ins)
                    .min(dist[(i - 1, j - 1)] + sub);
            }
        }
    }

    /// Mark every recurrence term that reaches the minimum of its cell.
    ///
    /// The diagonal is marked when it is free *or* when it costs exactly one
    /// substitution, independent of whether the elements match.
    fn fill_directions(&mut self) {
        let DistanceTable {
            a,
            b,
            cm,
            dist,
            dirs,
        } = self;
        for i in 1..=a.len() {
            dirs[(i, 0)] = Directions::only(Up);
        }
        for j in 1..=b.len() {
            dirs[(0, j)] = Directions::only(Left);
        }

        for i in 1..=a.len() {
            for j in 1..=b.len() {
                let d = dist[(i, j)];
                let cell = &mut dirs[(i, j)];
                if dist[(i - 1, j)] + cm.del == d {
                    cell.insert(Up);
                }
                if dist[(i, j - 1)] + cm.ins == d {
                    cell.insert(Left);
                }
                let diag = dist[(i - 1, j - 1)];
                if diag == d || diag + cm.sub == d {
                    cell.insert(UpLeft);
                }
            }
        }
    }
}

impl<'a, T> DistanceTable<'a, T> {
    /// The minimum edit distance between the full sequences.
    pub fn min_dist(&self) -> Cost {
        self.dist[(self.a.len(), self.b.len())]
    }

    pub fn dist(&self, i: usize, j: usize) -> Cost {
        self.dist[(i, j)]
    }

    pub fn directions(&self, i: usize, j: usize) -> Directions {
        self.dirs[(i, j)]
    }

    pub fn source(&self) -> &'a [T] {
        self.a
    }

    pub fn target(&self) -> &'a [T] {
        self.b
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.cm
    }

    /// `(rows, cols)` of both tables, i.e. `(m+1, n+1)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.a.len() + 1, self.b.len() + 1)
    }

    /// The predecessor of `(i, j)` on the chosen path, and the direction taken.
    ///
    /// Fails with `CorruptPath` when no direction is set, or when the chosen
    /// direction would leave the table.
    pub fn parent(&self, i: usize, j: usize) -> Result<(usize, usize, Direction), MedError> {
        let dir = self.dirs[(i, j)]
            .first()
            .ok_or(MedError::CorruptPath { i, j })?;
        let (di, dj) = dir.delta();
        if i < di || j < dj {
            return Err(MedError::CorruptPath { i, j });
        }
        Ok((i - di, j - dj, dir))
    }

    #[cfg(test)]
    pub(crate) fn directions_mut(&mut self, i: usize, j: usize) -> &mut Directions {
        &mut self.dirs[(i, j)]
    }
}
