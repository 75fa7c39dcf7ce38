//! The spin ODE: one angular-velocity 3-vector per spin-tracked body.
//!
//! The [`SpinLayout`] fixes which body owns which slot of the state vector.
//! It is built once by the eligibility scan and checked on every derivative
//! evaluation and synchronization, so a change in the tracked set is caught
//! instead of silently shifting slots.

mod layout;
mod system;

pub use layout::SpinLayout;
pub use system::SpinSystem;
