//! Backpointer directions in the distance table.
//!
//! `Left` comes from `(i, j-1)` (insertion), `Up` from `(i-1, j)` (deletion)
//! and `UpLeft` from `(i-1, j-1)` (match or substitution).

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    UpLeft,
}

pub use Direction::*;

impl Direction {
    /// Order in which directions are tried when walking back.
    /// When multiple flags are set, `Left` wins over `Up`, which wins over `UpLeft`.
    pub const PRIORITY: [Direction; 3] = [Left, Up, UpLeft];

    pub fn glyph(&self) -> char {
        match self {
            Left => '←',
            Up => '↑',
            UpLeft => '↖',
        }
    }

    /// Offset `(di, dj)` to the predecessor cell.
    pub fn delta(&self) -> (usize, usize) {
        match self {
            Left => (0, 1),
            Up => (1, 0),
            UpLeft => (1, 1),
        }
    }

    #[inline]
    fn bit(&self) -> u8 {
        match self {
            Left => 1,
            Up => 2,
            UpLeft => 4,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// The set of directions that achieve the minimum of a cell.
///
/// Several recurrence terms can tie, so every optimal predecessor is kept
/// even though the backtrace only follows one of them.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directions(u8);

impl Directions {
    pub const fn empty() -> Self {
        Directions(0)
    }

    pub fn only(dir: Direction) -> Self {
        let mut d = Self::empty();
        d.insert(dir);
        d
    }

    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    pub fn contains(&self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// The direction to follow according to [`Direction::PRIORITY`].
    pub fn first(&self) -> Option<Direction> {
        self.iter().next()
    }

    /// Iterate the set directions in priority order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::PRIORITY
            .into_iter()
            .filter(move |dir| self.contains(*dir))
    }
}

impl FromIterator<Direction> for Directions {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut d = Directions::empty();
        for dir in iter {
            d.insert(dir);
        }
        d
    }
}

impl fmt::Debug for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
