pub mod cost_model;
pub mod direction;
pub mod edit_op;
pub mod error;

// Re-export types for convenience of `use med_types::*;`.
pub use cost_model::*;
pub use direction::*;
pub use edit_op::*;
pub use error::*;

/// Type for the cost of a single edit and for accumulated distances.
pub type Cost = i32;

/// A borrowed byte sequence. Most of the workspace operates on these.
pub type Seq<'a> = &'a [u8];

/// An owned byte sequence.
pub type Sequence = Vec<u8>;

/// Lossy conversion of a byte sequence for printing.
pub fn seq_to_string(seq: Seq) -> String {
    String::from_utf8_lossy(seq).into_owned()
}

/// The result of aligning a pair of sequences.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alignment {
    /// The minimum edit distance.
    pub cost: Cost,
    /// The edits in the order they are emitted by the backward walk, i.e. the
    /// edit closest to the end of both sequences comes first.
    pub ops: Vec<EditOp<u8>>,
    /// The source sequence before any edit, followed by the state after each edit.
    pub snapshots: Vec<Sequence>,
}

impl Alignment {
    /// Sum of the costs of `ops` under `cm`.
    pub fn ops_cost(&self, cm: &CostModel) -> Cost {
        self.ops.iter().map(|op| op.cost(cm)).sum()
    }
}

/// An aligner computes the edit distance and edit script between two sequences.
pub trait Aligner: std::fmt::Debug {
    fn align(&self, a: Seq, b: Seq) -> Result<Alignment, MedError>;

    /// Only compute the distance.
    fn cost(&self, a: Seq, b: Seq) -> Result<Cost, MedError> {
        Ok(self.align(a, b)?.cost)
    }

    fn cost_model(&self) -> &CostModel;
}
