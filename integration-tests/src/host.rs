use nalgebra::Vector3;

use tidespin_core::Simulation;
use tidespin_solvers::transient::{self, Method};
use tidespin_tides::{Error, TidesSpin};

/// Drift-kick-drift N-body host with direct gravity, tides, and a spin ODE.
///
/// Each step drifts half a step, evaluates accelerations and advances the
/// spins with the bodies frozen at the midpoint, kicks, and drifts again.
pub struct Host {
    pub sim: Simulation,
    pub tides: TidesSpin,
    pub time: f64,
}

impl Host {
    /// Wraps `sim` and registers its spin ODE.
    ///
    /// # Errors
    ///
    /// Returns an error if the spin ODE cannot be initialized.
    pub fn new(sim: Simulation) -> Result<Self, Error> {
        let mut tides = TidesSpin::new();
        tides.initialize_spin_ode(&sim)?;
        Ok(Self {
            sim,
            tides,
            time: 0.0,
        })
    }

    /// Advances the system by `dt`.
    ///
    /// # Errors
    ///
    /// Returns an error if the spin ODE step fails.
    pub fn step(&mut self, dt: f64) -> Result<(), transient::Error> {
        self.drift(0.5 * dt);

        self.accelerations();
        if let Some(ode) = self.tides.ode_mut() {
            transient::step(ode, &mut self.sim, Method::Rk4, self.time, dt)?;
        }
        for body in self.sim.real_bodies_mut() {
            body.velocity += body.acceleration * dt;
        }

        self.drift(0.5 * dt);
        self.time += dt;
        Ok(())
    }

    /// Advances the system by `steps` steps of `dt`.
    ///
    /// # Errors
    ///
    /// Returns the first step error.
    pub fn run(&mut self, dt: f64, steps: usize) -> Result<(), transient::Error> {
        for _ in 0..steps {
            self.step(dt)?;
        }
        Ok(())
    }

    fn drift(&mut self, dt: f64) {
        for body in self.sim.real_bodies_mut() {
            body.position += body.velocity * dt;
        }
    }

    fn accelerations(&mut self) {
        self.sim.zero_accelerations();

        let g = self.sim.g;
        let bodies = self.sim.real_bodies_mut();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let d: Vector3<f64> = bodies[j].position - bodies[i].position;
                let r3 = d.norm().powi(3);
                let (mi, mj) = (bodies[i].mass, bodies[j].mass);
                bodies[i].acceleration += d * (g * mj / r3);
                bodies[j].acceleration -= d * (g * mi / r3);
            }
        }

        self.tides.apply_tidal_forces(&mut self.sim);
    }
}
