use thiserror::Error;

use tidespin_core::{BodyId, OrbitError};

/// Errors raised by the tidal effect.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The set of spin-tracked bodies no longer matches the ODE state.
    ///
    /// Tracked bodies must not be added or removed after the spin ODE has
    /// been initialized. Integration cannot continue.
    #[error(
        "spin ODE is not of the expected length: {tracked} tracked bodies, {state_len} state entries"
    )]
    LayoutMismatch { tracked: usize, state_len: usize },

    #[error("body {id:?} holds a spin slot but is no longer spin-tracked")]
    UntrackedBody { id: BodyId },

    /// Two real bodies share an id, so spin slots cannot be mapped to bodies.
    #[error("body id {id:?} is used by more than one real body")]
    DuplicateBody { id: BodyId },

    #[error("no real body with id {id:?}")]
    UnknownBody { id: BodyId },

    #[error("cannot derive sigma: Love number k2 is not set for body {id:?}")]
    MissingLoveNumber { id: BodyId },

    #[error("cannot derive sigma: physical radius of body {id:?} is zero")]
    ZeroRadius { id: BodyId },

    #[error("quality factor must be positive and finite, got {q}")]
    InvalidQualityFactor { q: f64 },

    #[error("cannot derive sigma: {0}")]
    Orbit(#[from] OrbitError),
}
