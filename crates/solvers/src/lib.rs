//! Reference ODE steppers for the Tidespin framework.
//!
//! A host simulation registers [`Ode`]s whose state lives in the host between
//! steps. The steppers here advance such an ODE by one host timestep: pull
//! the state in, evaluate derivatives as the method requires, and push the
//! advanced state back out.
//!
//! # Modules
//!
//! - [`transient`] — fixed-step forward Euler and classic RK4
//!
//! [`Ode`]: tidespin_core::Ode

pub mod transient;
