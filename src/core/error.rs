use thiserror::Error;

/// Fault raised by a host collaborator during a query.
///
/// Queries that merely cannot produce a value this frame return `Ok(None)`
/// instead; a `HostError` is the unexpected case. It aborts whichever phase
/// saw it and is contained by the cycle driver, never propagated to the
/// host's render loop.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct HostError(pub String);

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

pub type HostResult<T> = std::result::Result<T, HostError>;
