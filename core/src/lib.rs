use core::ops::{BitOr, Index};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use input::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod grid;
mod input;
mod types;

/// Board width and height used when nothing else is configured.
pub const DEFAULT_SIZE: Coord2 = (30, 16);

/// Chance of any single cell holding a mine used when nothing else is configured.
pub const DEFAULT_MINE_PROBABILITY: f64 = 0.206;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    /// Independent per-cell chance of a mine, so the mine total is only
    /// expected, not exact.
    pub mine_probability: f64,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mine_probability: f64) -> Self {
        Self {
            size,
            mine_probability,
        }
    }

    pub fn new((size_x, size_y): Coord2, mine_probability: f64) -> Self {
        let size_x = size_x.clamp(1, Coord::MAX);
        let size_y = size_y.clamp(1, Coord::MAX);
        let mine_probability = if mine_probability.is_nan() {
            0.0
        } else {
            mine_probability.clamp(0.0, 1.0)
        };
        Self::new_unchecked((size_x, size_y), mine_probability)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(GameError::InvalidSize);
        }
        if !(0.0..=1.0).contains(&self.mine_probability) {
            return Err(GameError::InvalidProbability);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SIZE, DEFAULT_MINE_PROBABILITY)
    }
}

/// Where the mines are, before any numbers have been computed.
///
/// A [`Grid`] can only be built from a complete layout, which keeps mine
/// placement and number computation in the right order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Builds a layout from a row-major mask of shape `(height, width)`.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        if Coord::try_from(rows).is_err() || Coord::try_from(cols).is_err() {
            return Err(GameError::InvalidSize);
        }
        Ok(Self::from_mine_mask_unchecked(mine_mask))
    }

    pub(crate) fn from_mine_mask_unchecked(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask
            .iter()
            .fold(0, |count, &is_mine| count + CellCount::from(is_mine));
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(nd_shape(size));

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask_unchecked(mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (cols as Coord, rows as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (width, height) = self.size();
        mult(width, height)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    /// Out-of-range coordinates hold no mine.
    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_mask
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .fold(0, |count, _| count + 1)
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> Neighbors {
        Neighbors::new(coords, self.size())
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
        }
    }
}

/// Used to merge outcomes when one reveal opens several cells
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}
