use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-size rectangle of [`Cell`]s, stored row-major.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Builds every cell from `layout`, giving each non-mine cell the count
    /// of mines around it.
    pub fn from_layout(layout: &MineLayout) -> Self {
        let (width, height) = layout.size();
        let cells = Array2::from_shape_fn(nd_shape((width, height)), |(row, col)| {
            let coords = (col as Coord, row as Coord);
            let content = if layout[coords] {
                CellContent::Mine
            } else {
                CellContent::Count(layout.adjacent_mine_count(coords))
            };
            Cell::new(coords, content)
        });
        Self { cells }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (cols as Coord, rows as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        let (width, height) = self.size();
        x < width && y < height
    }

    /// Returns `None` when `coords` fall outside the grid.
    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub(crate) fn cell_at_mut(&mut self, coords: Coord2) -> Option<&mut Cell> {
        self.cells.get_mut(coords.to_nd_index())
    }

    /// Coordinates of the in-bounds cells around `coords`, in no particular order.
    pub fn neighbors_of(&self, coords: Coord2) -> Neighbors {
        Neighbors::new(coords, self.size())
    }

    pub fn neighbor_cells(&self, coords: Coord2) -> impl Iterator<Item = &Cell> {
        self.neighbors_of(coords).map(|pos| &self[pos])
    }

    /// All cells, row by row.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &Cell>> {
        self.cells.rows().into_iter().map(|row| row.into_iter())
    }
}

/// Panics when `coords` fall outside the grid, use [`Grid::cell_at`] otherwise.
impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(size: Coord2, mines: &[Coord2]) -> Grid {
        Grid::from_layout(&MineLayout::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn cell_at_out_of_range_is_none() {
        let grid = grid((3, 2), &[]);

        assert!(grid.cell_at((2, 1)).is_some());
        assert!(grid.cell_at((3, 0)).is_none());
        assert!(grid.cell_at((0, 2)).is_none());
        assert!(grid.cell_at((Coord::MAX, Coord::MAX)).is_none());
    }

    #[test]
    fn cells_keep_their_coordinates() {
        let grid = grid((4, 3), &[]);

        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.cell_at((x, y)).unwrap().coords(), (x, y));
            }
        }
        assert_eq!((grid.width(), grid.height()), (4, 3));
    }

    #[test]
    fn single_center_mine_gives_ring_of_ones() {
        let grid = grid((3, 3), &[(1, 1)]);

        for cell in grid.iter() {
            if cell.coords() == (1, 1) {
                assert_eq!(cell.content(), CellContent::Mine);
            } else {
                assert_eq!(cell.content(), CellContent::Count(1));
            }
        }
    }

    #[test]
    fn counts_only_direct_neighbors() {
        let grid = grid((4, 4), &[(0, 0), (3, 3)]);

        assert_eq!(grid[(1, 1)].content(), CellContent::Count(1));
        assert_eq!(grid[(2, 2)].content(), CellContent::Count(1));
        assert_eq!(grid[(3, 0)].content(), CellContent::Count(0));
        assert_eq!(grid[(1, 2)].content(), CellContent::Count(0));
        assert_eq!(grid[(2, 1)].content(), CellContent::Count(0));
    }

    #[test]
    fn neighbor_cells_match_neighbor_coords() {
        let grid = grid((3, 3), &[]);

        let coords: Vec<_> = grid.neighbor_cells((0, 1)).map(Cell::coords).collect();

        assert_eq!(coords.len(), 5);
        assert!(coords.iter().all(|&pos| grid.neighbors_of((0, 1)).any(|n| n == pos)));
    }

    #[test]
    fn rows_are_ordered_top_to_bottom() {
        let grid = grid((2, 2), &[(1, 0)]);

        let rows: Vec<Vec<_>> = grid
            .rows()
            .map(|row| row.map(Cell::coords).collect())
            .collect();

        assert_eq!(rows, vec![vec![(0, 0), (1, 0)], vec![(0, 1), (1, 1)]]);
    }
}
