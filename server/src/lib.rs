//! Server-side game lifecycle for minado: the coordinator that drives
//! create/join/move flows, plus the trait seams it talks through for
//! persistence ([`GameStore`]) and transport ([`Notifier`]). The board and
//! turn rules themselves live in `minado-core`; this crate decides when to
//! load, mutate, persist, and broadcast.

pub use codes::*;
pub use coordinator::*;
pub use error::*;
pub use store::*;
pub use transport::*;

mod codes;
mod coordinator;
mod error;
mod store;
mod transport;
