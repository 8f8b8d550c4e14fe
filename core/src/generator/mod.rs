use crate::*;
pub use random::*;

mod random;

/// Placement seam: implementations decide where the mines go for a given
/// board configuration and first-click exclusion zone.
pub trait MineFieldGenerator {
    fn generate(&mut self, config: BoardConfig, exclude: Coord2) -> Result<MineField>;
}
