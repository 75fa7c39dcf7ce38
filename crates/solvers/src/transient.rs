//! Fixed-step time integration of host-synchronized ODEs.
//!
//! Every step follows the same sequence:
//!
//! ```text
//! pre_step(ctx, y)          pull authoritative state from the host
//! y <- advance(y, t, dt)    one or more derivative evaluations
//! post_step(ctx, y)         push the advanced state back to the host
//! ```
//!
//! # Example
//!
//! ```ignore
//! use tidespin_solvers::transient::{self, Config, Method};
//!
//! let config = Config::new(Method::Rk4, 1e-3, 1000)?;
//! let solution = transient::solve_unobserved(&mut ode, &mut sim, &config)?;
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;

pub mod euler;
pub mod rk4;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use tidespin_core::{Observer, Ode, OdeSystem};

/// Integration method used to advance the state within a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Explicit first-order Euler: one derivative evaluation per step.
    Euler,

    /// Classic fourth-order Runge–Kutta: four derivative evaluations per step.
    #[default]
    Rk4,
}

/// Advances `ode` by a single step of size `dt` starting at time `t`.
///
/// The host context is read before the step and updated after it, so the
/// caller may freely modify the context between calls.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if `dt` is zero or not finite, or
/// [`Error::System`] if any hook or derivative evaluation fails. A failed
/// step leaves the context untouched.
pub fn step<S: OdeSystem>(
    ode: &mut Ode<S>,
    ctx: &mut S::Context,
    method: Method,
    t: f64,
    dt: f64,
) -> Result<(), Error> {
    config::validate_dt(dt)?;

    ode.sync_pre(ctx).map_err(Error::system)?;

    let (system, y) = ode.parts_mut();
    match method {
        Method::Euler => euler::advance(system, ctx, t, dt, y),
        Method::Rk4 => rk4::advance(system, ctx, t, dt, y),
    }
    .map_err(Error::system)?;

    ode.sync_post(ctx).map_err(Error::system)
}

/// Integrates `ode` for `config.steps()` steps.
///
/// # Algorithm
///
/// 1. Pull the initial state from the context and emit step 0.
/// 2. For each step:
///    - Advance the ODE with [`step`].
///    - Emit an [`Event`] with the step number, time, and state.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the final time and state.
///
/// # Errors
///
/// Returns an error if any hook or derivative evaluation fails. Steps taken
/// before the failure remain applied to the context.
pub fn solve<S, Obs>(
    ode: &mut Ode<S>,
    ctx: &mut S::Context,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    S: OdeSystem,
    Obs: Observer<Event, Action>,
{
    ode.sync_pre(ctx).map_err(Error::system)?;

    let mut time = config.start_time();
    let event = Event {
        step: 0,
        time,
        state: ode.state().to_vec(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            steps: 0,
            time,
            state: event.state,
        });
    }

    for n in 1..=config.steps() {
        step(ode, ctx, config.method(), time, config.dt())?;
        time = config.start_time() + config.dt() * n as f64;

        let event = Event {
            step: n,
            time,
            state: ode.state().to_vec(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                steps: n,
                time,
                state: event.state,
            });
        }
    }

    Ok(Solution {
        status: Status::Complete,
        steps: config.steps(),
        time,
        state: ode.state().to_vec(),
    })
}

/// Integrates `ode` without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if any hook or derivative evaluation fails.
pub fn solve_unobserved<S: OdeSystem>(
    ode: &mut Ode<S>,
    ctx: &mut S::Context,
    config: &Config,
) -> Result<Solution, Error> {
    solve(ode, ctx, config, ())
}
