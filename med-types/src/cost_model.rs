//! This module contains the `CostModel` with linear substitution, deletion and insertion costs.

use crate::{Cost, MedError};
use serde::{Deserialize, Serialize};

/// Weights for the three edit operations, applied uniformly to every cell.
///
/// Construct through [`CostModel::new`] to reject negative weights. Models
/// read through serde should be checked with [`CostModel::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CostModel {
    /// The substitution cost.
    pub sub: Cost,
    /// The deletion cost: removing an element of the source.
    pub del: Cost,
    /// The insertion cost: adding an element of the target.
    pub ins: Cost,
}

impl Default for CostModel {
    /// `sub=2`, `del=1`, `ins=1`: a substitution costs as much as a deletion
    /// followed by an insertion.
    fn default() -> Self {
        CostModel {
            sub: 2,
            del: 1,
            ins: 1,
        }
    }
}

impl CostModel {
    pub fn new(sub: Cost, del: Cost, ins: Cost) -> Result<CostModel, MedError> {
        let cm = CostModel { sub, del, ins };
        cm.validate()?;
        Ok(cm)
    }

    /// Classic Levenshtein distance.
    pub fn unit() -> CostModel {
        CostModel {
            sub: 1,
            del: 1,
            ins: 1,
        }
    }

    pub fn linear(sub: Cost, indel: Cost) -> Result<CostModel, MedError> {
        Self::new(sub, indel, indel)
    }

    /// Negative weights break the minimality assumptions of the backtrace.
    pub fn validate(&self) -> Result<(), MedError> {
        for (name, value) in [("sub", self.sub), ("del", self.del), ("ins", self.ins)] {
            if value < 0 {
                return Err(MedError::InvalidConfiguration { name, value });
            }
        }
        Ok(())
    }

    /// Check that no cell of an `(m+1) x (n+1)` table can overflow `Cost`.
    ///
    /// Every cell is at most `(i + j) * max_cost`, and the recurrence adds one
    /// more edge on top of that.
    pub fn check_bounds(&self, m: usize, n: usize) -> Result<(), MedError> {
        let max_cost = self.sub.max(self.del).max(self.ins);
        let steps = m.saturating_add(n).saturating_add(1);
        Cost::try_from(steps)
            .ok()
            .and_then(|s| s.checked_mul(max_cost))
            .map(|_| ())
            .ok_or(MedError::CostOverflow { max_cost, steps })
    }

    /// The cost model of the reverse problem: deleting from `a` becomes
    /// inserting into `b` and vice versa.
    pub fn swapped(&self) -> CostModel {
        CostModel {
            sub: self.sub,
            del: self.ins,
            ins: self.del,
        }
    }

    /// Cost of the diagonal step between two elements.
    #[inline]
    pub fn match_cost<T: PartialEq>(&self, a: &T, b: &T) -> Cost {
        if a == b {
            0
        } else {
            self.sub
        }
    }
}
