use super::types::ListenerId;
use thiserror::Error;

/// Errors raised when a pattern role is used before its preconditions hold
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PizzeriaError {
    /// A price was read before any pricing strategy was chosen
    #[error("No pricing strategy set: choose one before reading the price")]
    PricingStrategyNotSet,

    /// Detach was called for a listener that is not attached
    #[error("Listener '{0}' is not attached to this order")]
    ListenerNotAttached(ListenerId),

    /// The invoker was asked to run without holding a command
    #[error("No command set on the invoker")]
    NoCommandSet,
}

pub type Result<T> = std::result::Result<T, PizzeriaError>;
