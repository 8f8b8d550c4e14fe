use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Short shareable game code, negotiated unique at the storage boundary.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub String);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authorizes moves. Never broadcast to the other participant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrivateId(pub String);

/// Labels turn order in broadcasts; safe to share with everyone.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicId(pub String);

impl fmt::Display for PublicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque transport address owned by the session layer; the engine only
/// carries it so the coordinator knows where notifications go.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(pub String);

/// A player identity, created once at join time and immutable after.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub private_id: PrivateId,
    pub public_id: PublicId,
    pub address: Address,
}

/// One entry of the append-only move history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub target: Coord2,
    pub actor: PrivateId,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    WaitingForPlayer,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::WaitingForPlayer
    }
}

/// Aggregate root for one match. The only mutable aggregate in the system;
/// boards, players, and moves are reachable exclusively through it, and only
/// the lifecycle coordinator persists changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    board: Board,
    started: bool,
    status: GameStatus,
    creator: Player,
    player1: Player,
    player2: Option<Player>,
    moves: Vec<Move>,
}

impl Game {
    pub fn new(id: GameId, board: Board, creator: Player) -> Self {
        Self {
            id,
            board,
            started: false,
            status: GameStatus::default(),
            player1: creator.clone(),
            creator,
            player2: None,
            moves: Vec::new(),
        }
    }

    pub fn id(&self) -> &GameId {
        &self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn creator(&self) -> &Player {
        &self.creator
    }

    pub fn player1(&self) -> &Player {
        &self.player1
    }

    pub fn player2(&self) -> Option<&Player> {
        self.player2.as_ref()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn is_participant(&self, actor: &PrivateId) -> bool {
        self.player1.private_id == *actor
            || self
                .player2
                .as_ref()
                .is_some_and(|p| p.private_id == *actor)
    }

    /// Both joined players, creator first. Broadcast targets.
    pub fn participants(&self) -> impl Iterator<Item = &Player> {
        core::iter::once(&self.player1).chain(self.player2.as_ref())
    }

    /// Attaches the second player and starts the match. The coordinator
    /// rejects full and self-joins before calling this.
    pub fn admit_opponent(&mut self, player: Player) {
        debug_assert!(self.player2.is_none());
        self.player2 = Some(player);
        self.started = true;
        self.status = GameStatus::InProgress;
        log::debug!("game {} started", self.id);
    }

    /// Pure legality predicate, first match wins. Safe to call
    /// speculatively; never mutates anything.
    pub fn check_move(&self, target: Coord2, actor: &PrivateId) -> Result<()> {
        if self.status.is_finished() {
            return Err(GameError::GameFinished);
        }

        // No turn exists until there is an opponent to alternate with.
        if !self.started || self.player2.is_none() {
            return Err(GameError::NotYourTurn);
        }

        if !self.is_participant(actor) {
            return Err(GameError::NotYourTurn);
        }

        match self.moves.last() {
            None => {
                if *actor != self.creator.private_id {
                    return Err(GameError::NotYourTurn);
                }
            }
            Some(last) => {
                if last.actor == *actor {
                    return Err(GameError::NotYourTurn);
                }
            }
        }

        let target = self.board.validate_coords(target)?;
        if !self.board.cell_at(target)?.is_hidden() {
            return Err(GameError::AlreadyRevealed);
        }

        Ok(())
    }

    /// Labels whose turn is next *after* the last move: whichever joined
    /// player did not act last. `None` until the second player joins.
    pub fn next_to_act(&self) -> Option<&Player> {
        let player2 = self.player2.as_ref()?;

        match self.moves.last() {
            None => Some(&self.player1),
            Some(last) if last.actor == self.player1.private_id => Some(player2),
            Some(_) => Some(&self.player1),
        }
    }

    pub fn record_move(&mut self, target: Coord2, actor: PrivateId) {
        self.moves.push(Move { target, actor });
    }

    pub fn finish(&mut self, won: bool) {
        self.status = if won { GameStatus::Won } else { GameStatus::Lost };
        log::debug!("game {} finished: {:?}", self.id, self.status);
    }
}
