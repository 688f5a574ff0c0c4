use crate::{Cost, CostModel, Direction};
use std::fmt::{self, Display};

/// A single edit transforming the source towards the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditOp<T> {
    /// Insert an element of the target.
    Insert(T),
    /// Delete an element of the source.
    Delete(T),
    /// Replace an element of the source by an element of the target.
    Substitute(T, T),
}

impl<T> EditOp<T> {
    /// The direction of the backtrace step producing this edit.
    pub fn direction(&self) -> Direction {
        match self {
            EditOp::Insert(_) => Direction::Left,
            EditOp::Delete(_) => Direction::Up,
            EditOp::Substitute(..) => Direction::UpLeft,
        }
    }

    pub fn cost(&self, cm: &CostModel) -> Cost {
        match self {
            EditOp::Insert(_) => cm.ins,
            EditOp::Delete(_) => cm.del,
            EditOp::Substitute(..) => cm.sub,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> EditOp<U> {
        match self {
            EditOp::Insert(x) => EditOp::Insert(f(x)),
            EditOp::Delete(x) => EditOp::Delete(f(x)),
            EditOp::Substitute(x, y) => EditOp::Substitute(f(x), f(y)),
        }
    }
}

impl<T: Display> Display for EditOp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOp::Insert(x) => write!(f, "Insert {x}"),
            EditOp::Delete(x) => write!(f, "Delete {x}"),
            EditOp::Substitute(x, y) => write!(f, "Replace {x} with {y}"),
        }
    }
}

/// A human-readable instruction: the edit together with the glyph of its
/// backtrace direction, printed as `↖ : Replace a with b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction<T> {
    pub op: EditOp<T>,
}

impl<T> Instruction<T> {
    pub fn direction(&self) -> Direction {
        self.op.direction()
    }
}

impl<T> From<EditOp<T>> for Instruction<T> {
    fn from(op: EditOp<T>) -> Self {
        Instruction { op }
    }
}

impl<T: Display> Display for Instruction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.direction().glyph(), self.op)
    }
}
