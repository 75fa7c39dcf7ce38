use std::error::Error as StdError;

use thiserror::Error;

use super::ConfigError;

/// Errors that can occur during transient integration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("ode system error: {0}")]
    System(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn system<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::System(Box::new(err))
    }

    /// Returns the underlying system error if it has type `E`.
    #[must_use]
    pub fn system_error<E: StdError + 'static>(&self) -> Option<&E> {
        match self {
            Self::System(err) => err.downcast_ref::<E>(),
            Self::InvalidConfig(_) => None,
        }
    }
}
