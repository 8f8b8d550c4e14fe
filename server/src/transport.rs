use minado_core::Address;
use minado_protocol::ServerEvent;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("Delivery failed for {failed} of {attempted} recipients")]
    Delivery { attempted: usize, failed: usize },
}

/// Transport seam: the session layer maps logical participant addresses to
/// physical delivery. Outcomes are reported per batch, not per recipient.
pub trait Notifier {
    fn notify(&self, to: &[Address], event: &ServerEvent) -> Result<(), NotifyError>;
}
