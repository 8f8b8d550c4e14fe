use minado_core::{Cell, Coord, Game, GameId, PublicId};
use serde::{Deserialize, Serialize};

/// Wire mirror of a sanitized board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellView {
    Hidden,
    Revealed(u8),
    Mine,
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Hidden => Self::Hidden,
            Cell::Revealed(count) => Self::Revealed(count),
            Cell::Mine => Self::Mine,
        }
    }
}

/// Client-facing snapshot of one game: the sanitized board plus whose turn
/// it is. `current_turn` is absent once the game has finished.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: GameId,
    pub rows: Coord,
    pub columns: Coord,
    pub board: Vec<Vec<CellView>>,
    pub current_turn: Option<PublicId>,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        let (rows, columns) = game.board().size();
        let board = game
            .board()
            .sanitized_view()
            .outer_iter()
            .map(|row| row.iter().map(|&cell| CellView::from(cell)).collect())
            .collect();

        let current_turn = if game.status().is_finished() {
            None
        } else {
            game.next_to_act().map(|player| player.public_id.clone())
        };

        Self {
            id: game.id().clone(),
            rows,
            columns,
            board,
            current_turn,
        }
    }
}

impl GameView {
    pub fn cell(&self, row: Coord, column: Coord) -> Option<CellView> {
        self.board
            .get(row as usize)
            .and_then(|cells| cells.get(column as usize))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minado_core::{Address, Board, MineField, Player, PrivateId};

    fn player(tag: &str) -> Player {
        Player {
            private_id: PrivateId(tag.into()),
            public_id: PublicId(format!("{tag}-pub")),
            address: Address(format!("{tag}-addr")),
        }
    }

    fn sample_game() -> Game {
        let mines = MineField::from_mine_coords((2, 3), &[(0, 0)]).unwrap();
        let mut game = Game::new(
            GameId("ABC123".into()),
            Board::with_mines(mines),
            player("a"),
        );
        game.admit_opponent(player("b"));
        game
    }

    #[test]
    fn view_mirrors_the_sanitized_grid() {
        let mut game = sample_game();
        game.board_mut().reveal((1, 2)).unwrap();

        let view = GameView::from(&game);

        assert_eq!((view.rows, view.columns), (2, 3));
        assert_eq!(view.cell(0, 0), Some(CellView::Hidden));
        assert_eq!(view.cell(1, 2), Some(CellView::Revealed(0)));
        assert_eq!(view.cell(5, 5), None);
    }

    #[test]
    fn unrevealed_mines_stay_hidden_on_the_wire() {
        let view = GameView::from(&sample_game());

        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("mine"));
        assert_eq!(view.cell(0, 0), Some(CellView::Hidden));
    }

    #[test]
    fn current_turn_starts_with_the_creator() {
        let view = GameView::from(&sample_game());
        assert_eq!(view.current_turn, Some(PublicId("a-pub".into())));
    }

    #[test]
    fn current_turn_alternates_after_a_move() {
        let mut game = sample_game();
        game.board_mut().reveal((0, 2)).unwrap();
        game.record_move((0, 2), PrivateId("a".into()));

        let view = GameView::from(&game);
        assert_eq!(view.current_turn, Some(PublicId("b-pub".into())));
    }

    #[test]
    fn finished_games_have_no_current_turn() {
        let mut game = sample_game();
        game.finish(false);

        let view = GameView::from(&game);
        assert_eq!(view.current_turn, None);
    }

    #[test]
    fn cell_view_json_shapes() {
        assert_eq!(
            serde_json::to_string(&CellView::Hidden).unwrap(),
            "\"hidden\""
        );
        assert_eq!(
            serde_json::to_string(&CellView::Revealed(3)).unwrap(),
            "{\"revealed\":3}"
        );
        assert_eq!(serde_json::to_string(&CellView::Mine).unwrap(), "\"mine\"");
    }
}
