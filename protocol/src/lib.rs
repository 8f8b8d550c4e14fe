//! Wire types for the minado protocol: the tagged client/server message
//! unions and the sanitized view structures they carry. Everything here is
//! built from the engine's sanitized projections, so unrevealed board
//! contents cannot reach the wire by construction.

pub use message::*;
pub use view::*;

mod message;
mod view;
