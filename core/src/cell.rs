use serde::{Deserialize, Serialize};

/// Player-visible state of a single board cell.
///
/// `Mine` only appears through the end-of-game reveal; while a game is live
/// every unrevealed cell is `Hidden` no matter what it holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Hidden,
    Revealed(u8),
    Mine,
}

impl Cell {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Hidden
    }
}
