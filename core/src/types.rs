/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, `x` being the column and `y` the row.
pub type Coord2 = (Coord, Coord);

/// Converts board coordinates into an `ndarray` index.
///
/// Storage is row-major, so `(x, y)` maps to `[y, x]`.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

/// Shape of a `(width, height)` board as an `ndarray` dimension.
pub(crate) fn nd_shape((width, height): Coord2) -> (usize, usize) {
    (height.into(), width.into())
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn offset_within(center: Coord2, (dx, dy): (i8, i8), (width, height): Coord2) -> Option<Coord2> {
    let x = center.0.checked_add_signed(dx).filter(|&x| x < width)?;
    let y = center.1.checked_add_signed(dy).filter(|&y| y < height)?;
    Some((x, y))
}

/// In-bounds cells at Chebyshev distance 1 from a center cell.
///
/// Yields at most 8 coordinates; cells on an edge or corner get fewer.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    bounds: Coord2,
    offsets: core::slice::Iter<'static, (i8, i8)>,
}

impl Neighbors {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            offsets: OFFSETS.iter(),
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let (center, bounds) = (self.center, self.bounds);
        self.offsets
            .by_ref()
            .find_map(|&offset| offset_within(center, offset, bounds))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.offsets.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(iter: Neighbors) -> Vec<Coord2> {
        let mut coords: Vec<_> = iter.collect();
        coords.sort_unstable();
        coords
    }

    #[test]
    fn corner_has_three_neighbors() {
        assert_eq!(
            sorted(Neighbors::new((0, 0), (3, 3))),
            vec![(0, 1), (1, 0), (1, 1)]
        );
        assert_eq!(
            sorted(Neighbors::new((2, 2), (3, 3))),
            vec![(1, 1), (1, 2), (2, 1)]
        );
    }

    #[test]
    fn edge_and_center_neighbor_counts() {
        assert_eq!(Neighbors::new((1, 0), (3, 3)).count(), 5);
        assert_eq!(Neighbors::new((1, 1), (3, 3)).count(), 8);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(Neighbors::new((0, 0), (1, 1)).next(), None);
    }

    #[test]
    fn neighbors_never_include_center() {
        assert!(Neighbors::new((4, 7), (10, 10)).all(|pos| pos != (4, 7)));
    }

    #[test]
    fn nd_index_is_row_major() {
        assert_eq!((3, 5).to_nd_index(), [5, 3]);
        assert_eq!(nd_shape((30, 16)), (16, 30));
    }
}
