//! Backtracking through the direction table, and replaying the resulting
//! edits on a copy of the source.
use crate::dist::DistanceTable;
use log::trace;
use med_types::*;

/// A single step of the backward walk, leaving cell `(i, j)` in direction `dir`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub i: usize,
    pub j: usize,
    pub dir: Direction,
}

/// Lazy walk from `(m, n)` to `(0, 0)`.
///
/// Yields one `Step` per cell left. On a cell without a usable direction it
/// yields a single `CorruptPath` error and is exhausted afterwards.
pub struct Trace<'t, T> {
    table: &'t DistanceTable<'t, T>,
    i: usize,
    j: usize,
    failed: bool,
}

impl<'t, T> Trace<'t, T> {
    pub fn new(table: &'t DistanceTable<'t, T>) -> Self {
        Trace {
            table,
            i: table.source().len(),
            j: table.target().len(),
            failed: false,
        }
    }
}

impl<'t, T> Iterator for Trace<'t, T> {
    type Item = Result<Step, MedError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || (self.i == 0 && self.j == 0) {
            return None;
        }
        let (i, j) = (self.i, self.j);
        match self.table.parent(i, j) {
            Ok((pi, pj, dir)) => {
                trace!("({i}, {j}) {dir} ({pi}, {pj})");
                self.i = pi;
                self.j = pj;
                Some(Ok(Step { i, j, dir }))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl<'t, T: PartialEq + Clone> DistanceTable<'t, T> {
    /// The edit performed by `step`, or `None` for a diagonal step over equal elements.
    pub fn edit_op(&self, step: &Step) -> Option<EditOp<T>> {
        let (a, b) = (self.source(), self.target());
        let Step { i, j, dir } = *step;
        Some(match dir {
            Left => EditOp::Insert(b[j - 1].clone()),
            Up => EditOp::Delete(a[i - 1].clone()),
            UpLeft if a[i - 1] == b[j - 1] => return None,
            UpLeft => EditOp::Substitute(a[i - 1].clone(), b[j - 1].clone()),
        })
    }

    /// The real edits on the chosen path, starting at the end of both sequences.
    pub fn edit_ops(&'t self) -> impl Iterator<Item = Result<EditOp<T>, MedError>> + 't {
        self.trace()
            .filter_map(move |step| step.map(|step| self.edit_op(&step)).transpose())
    }

    /// As `edit_ops`, wrapped for printing as `← : Insert x`.
    pub fn instructions(&'t self) -> impl Iterator<Item = Result<Instruction<T>, MedError>> + 't {
        self.edit_ops().map(|op| op.map(Instruction::from))
    }

    /// Replay the path on a copy of the source. See [`StepByStep`].
    pub fn step_by_step(&'t self) -> StepByStep<'t, T> {
        StepByStep::new(self)
    }
}

impl<'t, T> DistanceTable<'t, T> {
    pub fn trace(&'t self) -> Trace<'t, T> {
        Trace::new(self)
    }

    /// The directions of all steps on the chosen path, including diagonal
    /// steps over equal elements.
    pub fn instructions_raw(&'t self) -> impl Iterator<Item = Result<Direction, MedError>> + 't {
        self.trace().map(|step| step.map(|step| step.dir))
    }
}

/// Lazy replay of the backward walk on a private copy of the source.
///
/// Yields the unmodified source first, and then the state after every edit.
/// Edits are applied at the cursors of the walk, so positions left of `i`
/// still hold the original elements of the source:
/// - `UpLeft`: overwrite position `i-1` with `b[j-1]`,
/// - `Left`: insert `b[j-1]` at position `i`,
/// - `Up`: remove position `i-1`.
///
/// Diagonal steps over equal elements change nothing and yield nothing, so
/// consecutive snapshots differ by exactly one edit.
pub struct StepByStep<'t, T> {
    trace: Trace<'t, T>,
    target: &'t [T],
    current: Vec<T>,
    started: bool,
}

impl<'t, T: Clone> StepByStep<'t, T> {
    pub fn new(table: &'t DistanceTable<'t, T>) -> Self {
        StepByStep {
            trace: table.trace(),
            target: table.target(),
            current: table.source().to_vec(),
            started: false,
        }
    }
}

impl<'t, T: Clone + PartialEq> Iterator for StepByStep<'t, T> {
    type Item = Result<Vec<T>, MedError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(Ok(self.current.clone()));
        }
        loop {
            let Step { i, j, dir } = match self.trace.next()? {
                Ok(step) => step,
                Err(e) => return Some(Err(e)),
            };
            match dir {
                UpLeft => {
                    if self.current[i - 1] == self.target[j - 1] {
                        continue;
                    }
                    self.current[i - 1] = self.target[j - 1].clone();
                }
                Left => self.current.insert(i, self.target[j - 1].clone()),
                Up => {
                    self.current.remove(i - 1);
                }
            }
            return Some(Ok(self.current.clone()));
        }
    }
}
