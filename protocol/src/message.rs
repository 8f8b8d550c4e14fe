use minado_core::{Address, Coord, Coord2, GameId, Player, PrivateId, PublicId};
use serde::{Deserialize, Serialize};

use crate::GameView;

/// Wire mirror of a player identity as clients submit it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub private_id: PrivateId,
    pub public_id: PublicId,
    pub socket_id: Address,
}

impl From<PlayerInfo> for Player {
    fn from(info: PlayerInfo) -> Self {
        Player {
            private_id: info.private_id,
            public_id: info.public_id,
            address: info.socket_id,
        }
    }
}

impl From<&Player> for PlayerInfo {
    fn from(player: &Player) -> Self {
        PlayerInfo {
            private_id: player.private_id.clone(),
            public_id: player.public_id.clone(),
            socket_id: player.address.clone(),
        }
    }
}

/// A targeted board cell as it appears in move payloads.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRef {
    pub row: Coord,
    pub column: Coord,
}

impl From<TileRef> for Coord2 {
    fn from(tile: TileRef) -> Self {
        (tile.row, tile.column)
    }
}

impl From<Coord2> for TileRef {
    fn from((row, column): Coord2) -> Self {
        Self { row, column }
    }
}

/// Everything a client can ask the server to do.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "action",
    content = "data",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum ClientRequest {
    /// Connection bookkeeping: ask which address this session speaks from.
    GetSocketInfo,
    CreateGame {
        player: PlayerInfo,
    },
    JoinGame {
        game_id: GameId,
        player: PlayerInfo,
    },
    MakeMove {
        game_id: GameId,
        player: PlayerInfo,
        tile: TileRef,
    },
}

/// Everything the server can push to clients. One strongly-typed payload
/// per kind; terminal kinds are distinct from the ordinary move update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "action",
    content = "data",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum ServerEvent {
    Connected { socket_id: Address },
    GameCreated { game_id: GameId },
    GameStarted { game: GameView },
    MoveMade { game: GameView },
    GameWon { game: GameView },
    GameLost { game: GameView },
}

impl ServerEvent {
    /// The wire tag, for logging.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Connected { .. } => "connected",
            Self::GameCreated { .. } => "gameCreated",
            Self::GameStarted { .. } => "gameStarted",
            Self::MoveMade { .. } => "moveMade",
            Self::GameWon { .. } => "gameWon",
            Self::GameLost { .. } => "gameLost",
        }
    }
}
