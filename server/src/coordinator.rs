use minado_core::{
    cell_area, Board, CellCount, Coord, Coord2, Game, GameId, GameStatus, Player, PrivateId,
    RandomMineFieldGenerator, RevealOutcome,
};
use minado_protocol::{GameView, PlayerInfo, ServerEvent};
use rand::Rng;

use crate::codes::random_game_code;
use crate::error::{Result, ServerError};
use crate::store::{GameStore, Stored, StoreError};
use crate::transport::Notifier;

/// Board shape and mine density for newly created games.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameSettings {
    pub rows: Coord,
    pub columns: Coord,
    pub mine_percent: u8,
}

impl GameSettings {
    pub fn mine_count(&self) -> CellCount {
        let cells = cell_area(self.rows, self.columns) as u32;
        (cells * u32::from(self.mine_percent) / 100) as CellCount
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 15,
            mine_percent: 18,
        }
    }
}

/// A move that lost the save race reflects a legitimate concurrent move on
/// the same game, so the whole load-check-mutate-save sequence is re-run a
/// bounded number of times before the conflict is surfaced.
const MAX_MOVE_ATTEMPTS: usize = 3;

/// Drives the create/join/move lifecycle. Owns nothing but the collaborator
/// seams; every game lives in the store and is loaded per request.
pub struct Coordinator<S, N> {
    store: S,
    notifier: N,
    settings: GameSettings,
}

impl<S: GameStore, N: Notifier> Coordinator<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self::with_settings(store, notifier, GameSettings::default())
    }

    pub fn with_settings(store: S, notifier: N, settings: GameSettings) -> Self {
        Self {
            store,
            notifier,
            settings,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Creates a fresh game with a mine-less board and tells the creator its
    /// code. Codes are drawn until one is free; the create-time conflict
    /// check in the store is the final word, so a lost race just draws again.
    pub fn create_game(&self, player: PlayerInfo) -> Result<GameId> {
        let creator: Player = player.into();
        let mut rng = rand::rng();

        loop {
            let id = random_game_code(&mut rng);
            if self.store.exists(&id)? {
                log::debug!("game code {} taken, drawing another", id);
                continue;
            }

            let board = Board::new(self.settings.rows, self.settings.columns)?;
            let game = Game::new(id.clone(), board, creator.clone());

            match self.store.save(game, None) {
                Ok(_) => {
                    log::info!("game {} created", id);
                    self.notifier.notify(
                        core::slice::from_ref(&creator.address),
                        &ServerEvent::GameCreated {
                            game_id: id.clone(),
                        },
                    )?;
                    return Ok(id);
                }
                Err(StoreError::VersionConflict) => {
                    log::debug!("game code {} was taken mid-create, drawing another", id);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Attaches the second player and starts the game. Missing games, full
    /// games, and self-joins are rejected without any broadcast.
    pub fn join_game(&self, game_id: &GameId, player: PlayerInfo) -> Result<()> {
        let joiner: Player = player.into();

        let Some(Stored { version, mut game }) = self.store.load(game_id)? else {
            log::debug!("join for unknown game {}", game_id);
            return Err(minado_core::GameError::NoSuchGame.into());
        };

        if game.player2().is_some() {
            return Err(ServerError::GameFull);
        }
        if game.creator().private_id == joiner.private_id {
            return Err(ServerError::CannotJoinOwnGame);
        }

        game.admit_opponent(joiner);
        self.store.save(game.clone(), Some(version))?;
        log::info!("game {} started", game_id);

        let event = ServerEvent::GameStarted {
            game: GameView::from(&game),
        };
        self.notifier.notify(&broadcast_addresses(&game), &event)?;
        Ok(())
    }

    /// Applies one move end to end: load, legality, lazy mine placement,
    /// reveal, persist, broadcast. Illegal moves abort with nothing
    /// persisted and nothing broadcast. Returns the broadcast event.
    pub fn make_move(
        &self,
        game_id: &GameId,
        actor: &PrivateId,
        target: Coord2,
    ) -> Result<ServerEvent> {
        let mut attempts = 0;
        loop {
            match self.try_move(game_id, actor, target) {
                Err(ServerError::ConcurrentModification) if attempts + 1 < MAX_MOVE_ATTEMPTS => {
                    attempts += 1;
                    log::warn!(
                        "game {} changed while applying a move, retrying ({}/{})",
                        game_id,
                        attempts,
                        MAX_MOVE_ATTEMPTS - 1
                    );
                }
                other => return other,
            }
        }
    }

    fn try_move(&self, game_id: &GameId, actor: &PrivateId, target: Coord2) -> Result<ServerEvent> {
        let Some(Stored { version, mut game }) = self.store.load(game_id)? else {
            log::debug!("move for unknown game {}", game_id);
            return Err(minado_core::GameError::NoSuchGame.into());
        };

        if let Err(reason) = game.check_move(target, actor) {
            log::debug!("illegal move on game {}: {}", game_id, reason);
            return Err(reason.into());
        }

        // Mine layout is decided here and nowhere else, so the first click
        // and its neighborhood can never hold a mine.
        if !game.board().mines_placed() {
            let mines = self.settings.mine_count();
            let mut generator = RandomMineFieldGenerator::new(rand::rng().random());
            game.board_mut().place_mines(&mut generator, mines, target)?;
        }

        let outcome = game.board_mut().reveal(target)?;
        match outcome {
            RevealOutcome::HitMine => {
                game.board_mut().reveal_mines();
                game.finish(false);
            }
            RevealOutcome::Won => game.finish(true),
            RevealOutcome::Revealed | RevealOutcome::NoChange => {}
        }

        game.record_move(target, actor.clone());
        self.store.save(game.clone(), Some(version))?;

        let view = GameView::from(&game);
        let event = match game.status() {
            GameStatus::Won => ServerEvent::GameWon { game: view },
            GameStatus::Lost => ServerEvent::GameLost { game: view },
            _ => ServerEvent::MoveMade { game: view },
        };

        log::info!("game {}: broadcasting {}", game_id, event.kind());
        self.notifier.notify(&broadcast_addresses(&game), &event)?;
        Ok(event)
    }
}

fn broadcast_addresses(game: &Game) -> Vec<minado_core::Address> {
    game.participants().map(|p| p.address.clone()).collect()
}
