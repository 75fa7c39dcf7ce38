//! A minimal host simulation used to exercise the tidal effect end to end.

pub mod host;

pub use host::Host;
