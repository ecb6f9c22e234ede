use serde::{Deserialize, Serialize};

use crate::{Coord, Coord2};

/// What lies under a cell, fixed when the grid is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Mine,
    /// Number of mines among the up to 8 surrounding cells.
    Count(u8),
}

impl CellContent {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Count(count) => Some(count),
        }
    }

    /// Whether revealing this cell opens up its neighbors on its own.
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Count(0))
    }
}

/// One position of the grid.
///
/// `revealed` only ever goes from `false` to `true`. `flagged` is stored
/// independently of it; a flagged cell swept up by a flood-fill stays
/// flagged after being revealed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coords: Coord2,
    content: CellContent,
    flagged: bool,
    revealed: bool,
}

impl Cell {
    pub(crate) const fn new(coords: Coord2, content: CellContent) -> Self {
        Self {
            coords,
            content,
            flagged: false,
            revealed: false,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn x(&self) -> Coord {
        self.coords.0
    }

    pub const fn y(&self) -> Coord {
        self.coords.1
    }

    pub const fn content(&self) -> CellContent {
        self.content
    }

    pub const fn is_mine(&self) -> bool {
        self.content.is_mine()
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Marks the cell revealed, returns whether it was hidden before.
    pub(crate) fn reveal(&mut self) -> bool {
        !core::mem::replace(&mut self.revealed, true)
    }

    /// Flips the flag, returns the new value.
    pub(crate) fn toggle_flag(&mut self) -> bool {
        self.flagged = !self.flagged;
        self.flagged
    }
}
