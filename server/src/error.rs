use minado_core::GameError;
use thiserror::Error;

use crate::store::StoreError;
use crate::transport::NotifyError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServerError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("The game store is unavailable")]
    PersistenceUnavailable,
    #[error("The game changed while the request was being applied")]
    ConcurrentModification,
    #[error("This game already has two players")]
    GameFull,
    #[error("A player cannot join their own game")]
    CannotJoinOwnGame,
    #[error(transparent)]
    Delivery(#[from] NotifyError),
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable => Self::PersistenceUnavailable,
            StoreError::VersionConflict => Self::ConcurrentModification,
        }
    }
}

pub type Result<T, E = ServerError> = core::result::Result<T, E>;
