#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod game;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Board extents as `(rows, columns)`.
    pub size: Coord2,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_area(self.size.0, self.size.1)
    }

    /// Cells left over once the 3x3 first-click zone is reserved.
    pub const fn placeable_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(9)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(GameError::InvalidDimension);
        }
        Ok(())
    }
}

/// Authoritative mine placement: a boolean mask over the grid plus the mine
/// total. Never leaves the server; clients only ever see projections of the
/// cell grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineField {
    mask: Array2<bool>,
    count: CellCount,
}

impl MineField {
    pub fn from_mask(mask: Array2<bool>) -> Self {
        let count = mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap();
        Self { mask, count }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mask(mask))
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mask.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn mine_count(&self) -> CellCount {
        self.count
    }

    pub fn total_cells(&self) -> CellCount {
        self.mask.len().try_into().unwrap()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.mask
            .iter_adjacent(coords)
            .filter(|&pos| self[pos])
            .count()
            .try_into()
            .unwrap()
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }
}

impl Index<Coord2> for MineField {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.mask[(row as usize, col as usize)]
    }
}
