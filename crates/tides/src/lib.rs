//! Constant-time-lag tides and spin evolution for bodies with structure.
//!
//! Bodies carry optional [`Structure`]: a Love number `k2`, a dissipation
//! parameter `sigma`, a moment of inertia `moi`, and a spin vector. A body
//! with `k2` and spin raises a tidal bulge that pulls on every other body; a
//! body with `moi` and spin has its spin evolved by the reaction torque.
//! Following Eggleton, Kiseleva & Hut (1998), the force has a conservative
//! quadrupole part and a dissipative lag part proportional to `sigma`.
//!
//! # Pieces
//!
//! - [`tidal_force`], [`tidal_potential`] — pairwise kernels
//! - [`apply_tidal_forces`] — adds tidal accelerations for every pair
//! - [`SpinSystem`], [`SpinLayout`] — the spin ODE and its slot layout
//! - [`TidesSpin`] — the effect: eligibility scan, ODE ownership, forces
//! - [`total_tidal_potential`] — energy diagnostic
//! - [`sigma_from_time_lag`], [`sigma_from_quality_factor`] — parameter
//!   derivation
//!
//! [`Structure`]: tidespin_core::Structure

mod accumulate;
mod effect;
mod energy;
mod error;
mod kernel;
mod sigma;
mod spin;

pub use accumulate::apply_tidal_forces;
pub use effect::TidesSpin;
pub use energy::total_tidal_potential;
pub use error::Error;
pub use kernel::{TidalSource, tidal_force, tidal_potential};
pub use sigma::{sigma_from_quality_factor, sigma_from_time_lag};
pub use spin::{SpinLayout, SpinSystem};
