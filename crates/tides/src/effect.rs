use std::cell::Cell;

use tracing::{debug, warn};

use tidespin_core::{Ode, Simulation};

use crate::{Error, SpinLayout, SpinSystem, accumulate};

/// The spin-orbit-tidal effect attached to a simulation.
///
/// Forces are always available through [`apply_tidal_forces`]; spin evolution
/// additionally requires [`initialize_spin_ode`], which registers the spin ODE
/// that a stepper then advances with the simulation as context.
///
/// ```ignore
/// let mut tides = TidesSpin::new();
/// tides.initialize_spin_ode(&sim)?;
///
/// // every force evaluation
/// tides.apply_tidal_forces(&mut sim);
///
/// // every timestep
/// if let Some(ode) = tides.ode_mut() {
///     transient::step(ode, &mut sim, Method::Rk4, t, dt)?;
/// }
/// ```
///
/// [`apply_tidal_forces`]: TidesSpin::apply_tidal_forces
/// [`initialize_spin_ode`]: TidesSpin::initialize_spin_ode
#[derive(Debug, Clone, Default)]
pub struct TidesSpin {
    ode: Option<Ode<SpinSystem>>,
    warned_no_ode: Cell<bool>,
}

impl TidesSpin {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `sim` for spin-tracked bodies and registers the spin ODE.
    ///
    /// Allocates a state vector of three entries per tracked body and fills
    /// it from the bodies' current spins. With no tracked bodies no ODE is
    /// created and every spin stays constant. Calling this again replaces any
    /// previous ODE.
    ///
    /// Returns the number of tracked bodies.
    ///
    /// # Errors
    ///
    /// Returns an error if two real bodies share an id or the initial
    /// synchronization fails.
    pub fn initialize_spin_ode(&mut self, sim: &Simulation) -> Result<usize, Error> {
        let layout = SpinLayout::scan(sim)?;
        self.warned_no_ode.set(false);
        let tracked = layout.len();

        if layout.is_empty() {
            debug!("no spin-tracked bodies; spin ODE not created");
            self.ode = None;
            return Ok(0);
        }

        let state_len = layout.state_len();
        let mut ode = Ode::new(SpinSystem::new(layout), state_len);
        ode.sync_pre(sim)?;

        debug!(tracked, state_len, "spin ODE initialized");
        self.ode = Some(ode);
        Ok(tracked)
    }

    /// Adds tidal accelerations to every real body of `sim`.
    ///
    /// Spins are read from the bodies, so forces are correct whether or not
    /// the spin ODE exists; without it the spins simply never change. The
    /// first call without an ODE logs a warning, later ones only at debug
    /// level.
    pub fn apply_tidal_forces(&self, sim: &mut Simulation) {
        if self.ode.is_none() {
            if self.warned_no_ode.replace(true) {
                debug!("spin axes are not being evolved");
            } else {
                warn!("spin axes are not being evolved; call initialize_spin_ode to evolve them");
            }
        }

        let g = sim.g;
        accumulate::apply_tidal_forces(g, sim.real_bodies_mut());
    }

    #[must_use]
    pub fn ode(&self) -> Option<&Ode<SpinSystem>> {
        self.ode.as_ref()
    }

    pub fn ode_mut(&mut self) -> Option<&mut Ode<SpinSystem>> {
        self.ode.as_mut()
    }

    /// Layout of the registered spin ODE, if any.
    #[must_use]
    pub fn layout(&self) -> Option<&SpinLayout> {
        self.ode.as_ref().map(|ode| ode.system().layout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use nalgebra::Vector3;

    use tidespin_core::{Body, BodyId, Structure};

    fn system() -> Simulation {
        let mut sim = Simulation::new(1.0);
        sim.push(
            Body::new(BodyId(0), 1.0)
                .with_radius(0.1)
                .with_structure(Structure::default().with_k2(0.3).with_spin(0.0, 0.0, 0.5)),
        );
        sim.push(Body::new(BodyId(0), 0.001).with_position(1.0, 0.0, 0.0));
        sim
    }

    #[test]
    fn forces_do_not_need_an_ode() {
        let mut sim = system();
        let tides = TidesSpin::new();

        tides.apply_tidal_forces(&mut sim);

        assert!(tides.ode().is_none());
        assert!(sim.bodies[1].acceleration.x < 0.0);
    }

    #[test]
    fn variational_bodies_feel_nothing() {
        let mut sim = system();
        sim.push(Body::new(BodyId(0), 0.001).with_position(0.0, 1.0, 0.0));
        sim.n_var = 1;

        TidesSpin::new().apply_tidal_forces(&mut sim);

        assert_eq!(sim.bodies[2].acceleration, Vector3::zeros());
    }

    #[test]
    fn missing_ode_warning_is_raised_once() {
        let mut sim = system();
        let mut tides = TidesSpin::new();

        tides.apply_tidal_forces(&mut sim);
        assert!(tides.warned_no_ode.get());
        tides.apply_tidal_forces(&mut sim);
        assert!(tides.warned_no_ode.get());

        // A fresh scan that again finds nothing warns again.
        assert_eq!(tides.initialize_spin_ode(&sim), Ok(0));
        assert!(!tides.warned_no_ode.get());

        sim.bodies[0].structure.moi = Some(7e-4);
        assert_eq!(tides.initialize_spin_ode(&sim), Ok(1));
        tides.apply_tidal_forces(&mut sim);
        assert!(!tides.warned_no_ode.get());
    }

    #[test]
    fn reinitialization_replaces_the_ode() {
        let mut sim = system();
        let mut tides = TidesSpin::new();
        assert_eq!(tides.initialize_spin_ode(&sim), Ok(0));

        sim.bodies[0].structure.moi = Some(7e-4);
        assert_eq!(tides.initialize_spin_ode(&sim), Ok(1));
        assert_eq!(tides.ode().map(|ode| ode.state().to_vec()), Some(vec![0.0, 0.0, 0.5]));

        sim.bodies[0].structure.moi = None;
        assert_eq!(tides.initialize_spin_ode(&sim), Ok(0));
        assert!(tides.ode_mut().is_none());
    }
}
