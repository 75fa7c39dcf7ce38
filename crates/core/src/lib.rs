//! Core types for the Tidespin framework.
//!
//! This crate defines the host-side abstractions that the tidal effect and
//! the ODE steppers build on:
//!
//! - [`Body`] and [`Structure`] — a point mass with optional structural
//!   parameters (Love number, dissipation, moment of inertia, spin)
//! - [`Simulation`] — the body set, gravitational constant, and the count of
//!   trailing variational bodies
//! - [`OdeSystem`] and [`Ode`] — an ODE with explicit context passing, a
//!   derivative function, and pre/post synchronization hooks
//! - [`Observer`] — receives solver events and optionally returns control
//!   actions
//! - [`Orbit`] — two-body osculating elements used to derive mean motion

mod body;
mod observer;
mod ode;
mod orbit;
mod simulation;
mod structure;

pub use body::{Body, BodyId};
pub use observer::Observer;
pub use ode::{Ode, OdeSystem};
pub use orbit::{Orbit, OrbitError};
pub use simulation::Simulation;
pub use structure::Structure;
