//! Minimum edit distance under weighted substitution, deletion and insertion
//! costs, with reconstruction of the edits and a step-by-step replay.
//!
//! ```
//! use med_algos::DistanceTable;
//! use med_types::CostModel;
//!
//! let a: Vec<char> = "shayan".chars().collect();
//! let b: Vec<char> = "daneshvar".chars().collect();
//! let table = DistanceTable::new(&a, &b, CostModel::default()).unwrap();
//! assert_eq!(table.min_dist(), 9);
//! let last = table.step_by_step().last().unwrap().unwrap();
//! assert_eq!(last, b);
//! ```
mod dist;
mod trace;

pub use dist::DistanceTable;
pub use trace::{Step, StepByStep, Trace};

use med_types::*;


/// Aligner computing the full distance table for each pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Med {
    pub cm: CostModel,
}

impl Med {
    pub fn new(cm: CostModel) -> Self {
        Med { cm }
    }

    /// Fill the tables for a single pair.
    pub fn build<'a, T: PartialEq>(
        &self,
        a: &'a [T],
        b: &'a [T],
    ) -> Result<DistanceTable<'a, T>, MedError> {
        DistanceTable::new(a, b, self.cm)
    }
}

impl Aligner for Med {
    fn align(&self, a: Seq, b: Seq) -> Result<Alignment, MedError> {
        let table = self.build(a, b)?;
        let ops = table.edit_ops().collect::<Result<Vec<_>, _>>()?;
        let snapshots = table.step_by_step().collect::<Result<Vec<_>, _>>()?;
        Ok(Alignment {
            cost: table.min_dist(),
            ops,
            snapshots,
        })
    }

    fn cost(&self, a: Seq, b: Seq) -> Result<Cost, MedError> {
        Ok(self.build(a, b)?.min_dist())
    }

    fn cost_model(&self) -> &CostModel {
        &self.cm
    }
}
