use thiserror::Error;

use crate::network::{NodeId, Power};

/// Convenient result alias for the delivery network library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a queried node was never registered in the network.
    #[error("unknown node: {node}")]
    UnknownNode { node: NodeId },

    /// Raised when source and destination lie in different components.
    #[error("no path between {src} and {dest}")]
    NoPath { src: NodeId, dest: NodeId },

    /// A path exists but needs more power than the vehicle provides.
    ///
    /// This is an expected outcome rather than a fault; `required` is the
    /// power a vehicle must have to make the trip.
    #[error("path from {src} to {dest} requires power {required}, vehicle provides {supplied}")]
    InsufficientPower {
        src: NodeId,
        dest: NodeId,
        required: Power,
        supplied: Power,
    },

    /// Raised when a network description does not follow the expected grammar.
    #[error("invalid network description at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Power needed for the trip when the error is [`Error::InsufficientPower`].
    pub fn required_power(&self) -> Option<Power> {
        match self {
            Error::InsufficientPower { required, .. } => Some(*required),
            _ => None,
        }
    }
}
