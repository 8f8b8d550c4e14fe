use alloc::collections::{BTreeSet, VecDeque};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of revealing a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome ends the game.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::HitMine | Self::Won)
    }
}

/// Authoritative board state: the cell grid players act on, plus the mine
/// layout, which stays unset until the first accepted move places it.
///
/// The grid itself never holds information a client may not see; the mine
/// mask lives in the separate [`MineField`] until the end-of-game reveal
/// writes `Cell::Mine` markers into the grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    grid: Array2<Cell>,
    mines: Option<MineField>,
    revealed_count: CellCount,
}

impl Board {
    pub fn new(rows: Coord, columns: Coord) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(GameError::InvalidDimension);
        }

        Ok(Self {
            grid: Array2::default((rows, columns).to_nd_index()),
            mines: None,
            revealed_count: 0,
        })
    }

    /// Builds a board over an already-decided mine layout, every cell still
    /// hidden. Lazy placement via [`Board::place_mines`] is the normal path;
    /// this is for rehydrating or replaying a known layout.
    pub fn with_mines(mines: MineField) -> Self {
        Self {
            grid: Array2::default(mines.size().to_nd_index()),
            mines: Some(mines),
            revealed_count: 0,
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.grid.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.grid.len().try_into().unwrap()
    }

    pub fn mines_placed(&self) -> bool {
        self.mines.is_some()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.as_ref().map_or(0, MineField::mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.grid[coords.to_nd_index()])
    }

    pub fn is_mine_at(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self.has_mine(coords))
    }

    /// Cells that are neither mines nor revealed. Zero means every safe cell
    /// has been cleared, which is the win condition.
    pub fn safe_cells_remaining(&self) -> CellCount {
        let safe = match &self.mines {
            Some(mines) => mines.safe_cell_count(),
            None => self.total_cells(),
        };
        safe - self.revealed_count
    }

    /// Installs a generated mine layout. Only legal once, and only before
    /// anything depends on the layout; the coordinator calls this on the
    /// first accepted move so the clicked neighborhood is excluded.
    pub fn place_mines<G: MineFieldGenerator>(
        &mut self,
        generator: &mut G,
        mines: CellCount,
        exclude: Coord2,
    ) -> Result<()> {
        // The layout decision point has passed once mines exist or any cell
        // has been revealed.
        if self.mines.is_some() || self.revealed_count > 0 {
            return Err(GameError::MinesAlreadyPlaced);
        }
        let exclude = self.validate_coords(exclude)?;

        let config = BoardConfig::new(self.size(), mines);
        self.mines = Some(generator.generate(config, exclude)?);
        Ok(())
    }

    /// Reveals the cell at `coords`, flood-filling outward across the
    /// zero-count region when the cell has no adjacent mines.
    ///
    /// Revealing an already-revealed cell is a no-op. Hitting a mine reveals
    /// only that cell; the caller decides what the loss looks like.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;

        if !self.grid[coords.to_nd_index()].is_hidden() {
            return Ok(RevealOutcome::NoChange);
        }

        if self.has_mine(coords) {
            self.grid[coords.to_nd_index()] = Cell::Mine;
            log::debug!("mine hit at {:?}", coords);
            return Ok(RevealOutcome::HitMine);
        }

        let count = self.adjacent_count(coords);
        self.grid[coords.to_nd_index()] = Cell::Revealed(count);
        self.revealed_count += 1;
        log::debug!("revealed {:?}, adjacent mines: {}", coords, count);

        if count == 0 {
            self.flood_fill_from(coords);
        }

        if self.safe_cells_remaining() == 0 {
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Expands the connected zero-count region around `origin` with an
    /// explicit frontier; non-zero cells are revealed but not expanded, so
    /// they form the border of the fill.
    fn flood_fill_from(&mut self, origin: Coord2) {
        let mut visited = BTreeSet::from([origin]);
        let mut frontier: VecDeque<_> = self
            .grid
            .iter_adjacent(origin)
            .filter(|&pos| self.grid[pos.to_nd_index()].is_hidden())
            .collect();
        log::trace!("flood fill from {:?}, frontier: {:?}", origin, frontier);

        while let Some(coords) = frontier.pop_front() {
            if !visited.insert(coords) {
                continue;
            }

            if !self.grid[coords.to_nd_index()].is_hidden() {
                continue;
            }

            let count = self.adjacent_count(coords);
            self.grid[coords.to_nd_index()] = Cell::Revealed(count);
            self.revealed_count += 1;
            log::trace!("flood revealed {:?}, adjacent mines: {}", coords, count);

            if count == 0 {
                let next: VecDeque<_> = self
                    .grid
                    .iter_adjacent(coords)
                    .filter(|&pos| self.grid[pos.to_nd_index()].is_hidden())
                    .filter(|pos| !visited.contains(pos))
                    .collect();
                frontier.extend(next);
            }
        }
    }

    /// End-of-game reveal: flips every still-hidden mine to `Cell::Mine` so
    /// the terminal view shows the full layout.
    pub fn reveal_mines(&mut self) {
        let Some(mines) = &self.mines else {
            return;
        };

        let mine_coords: alloc::vec::Vec<_> = mines.mine_coords().collect();
        for coords in mine_coords {
            if self.grid[coords.to_nd_index()].is_hidden() {
                self.grid[coords.to_nd_index()] = Cell::Mine;
            }
        }
    }

    /// Derived copy safe to broadcast. The grid carries no mine placement
    /// (the mask is a separate field), so the projection is the grid itself
    /// and re-sanitizing a view changes nothing.
    pub fn sanitized_view(&self) -> Array2<Cell> {
        self.grid.clone()
    }

    fn has_mine(&self, coords: Coord2) -> bool {
        self.mines
            .as_ref()
            .is_some_and(|mines| mines.contains_mine(coords))
    }

    fn adjacent_count(&self, coords: Coord2) -> u8 {
        self.mines
            .as_ref()
            .map_or(0, |mines| mines.adjacent_mine_count(coords))
    }
}
