use crate::Cost;
use thiserror::Error;

/// All variants are invariant violations. They are returned as soon as they
/// are detected and never recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MedError {
    #[error("invalid cost model: {name} cost is {value}, costs must be non-negative")]
    InvalidConfiguration { name: &'static str, value: Cost },

    /// Some cell of the table could exceed `Cost::MAX`.
    #[error("cost overflow: max cost {max_cost} times {steps} steps exceeds {}", Cost::MAX)]
    CostOverflow { max_cost: Cost, steps: usize },

    /// A cell reachable from the end of the table has no direction flag set.
    #[error("corrupt path: no direction set at cell ({i}, {j})")]
    CorruptPath { i: usize, j: usize },
}
