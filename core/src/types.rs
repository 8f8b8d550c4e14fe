use ndarray::Array2;

/// Single board axis, used for row/column coordinates and board extents.
pub type Coord = u8;

/// Area-sized count, used for mine counts and total-cell counts.
pub type CellCount = u16;

/// A `(row, column)` position on the board.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn cell_area(rows: Coord, columns: Coord) -> CellCount {
    let rows = rows as CellCount;
    let columns = columns as CellCount;
    rows.saturating_mul(columns)
}

const NEIGHBOR_OFFSETS: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterates the up-to-8 in-bounds neighbors of `center`; positions past the
/// grid edge are skipped, never clamped.
pub fn iter_neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    NEIGHBOR_OFFSETS.iter().filter_map(move |&(d_row, d_col)| {
        let row = i16::from(center.0) + d_row;
        let col = i16::from(center.1) + d_col;
        if row < 0 || col < 0 || row >= i16::from(bounds.0) || col >= i16::from(bounds.1) {
            None
        } else {
            Some((row as Coord, col as Coord))
        }
    })
}

pub trait AdjacentIterExt {
    fn iter_adjacent(&self, center: Coord2) -> impl Iterator<Item = Coord2>;
}

impl<T> AdjacentIterExt for Array2<T> {
    fn iter_adjacent(&self, center: Coord2) -> impl Iterator<Item = Coord2> {
        let dim = self.dim();
        let bounds = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        iter_neighbors(center, bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn center_cell_has_eight_neighbors() {
        let neighbors: Vec<_> = iter_neighbors((1, 1), (3, 3)).collect();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(1, 1)));
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        let neighbors: Vec<_> = iter_neighbors((0, 0), (3, 3)).collect();
        assert_eq!(neighbors.len(), 3);
        assert!(neighbors.contains(&(0, 1)));
        assert!(neighbors.contains(&(1, 0)));
        assert!(neighbors.contains(&(1, 1)));
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        let neighbors: Vec<_> = iter_neighbors((0, 1), (3, 3)).collect();
        assert_eq!(neighbors.len(), 5);
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        for row in 0..4 {
            for col in 0..4 {
                for (n_row, n_col) in iter_neighbors((row, col), (4, 4)) {
                    assert!(n_row < 4 && n_col < 4);
                }
            }
        }
    }

    #[test]
    fn cell_area_saturates() {
        assert_eq!(cell_area(10, 15), 150);
        assert_eq!(cell_area(255, 255), 255 * 255);
    }
}
