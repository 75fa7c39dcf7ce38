use nalgebra::Vector3;

use tidespin_core::{OdeSystem, Simulation};

use crate::{
    Error,
    kernel::{TidalSource, tidal_force},
};

use super::SpinLayout;

/// The spin ODE system.
///
/// Between steps the spin vectors stored on the bodies are authoritative;
/// during a step the ODE state is. [`pre_step`] and [`post_step`] copy between
/// the two.
///
/// The spin of a tracked body changes only through the torque of its own
/// bulge: for each other body `j`, the force `F` of body `i`'s bulge on `j`
/// produces
///
/// ```text
/// dΩ_i/dt += -μ_ij (d_ij × F) / moi_i
/// ```
///
/// where `d_ij` points from `j` to `i`. A tracked body without `k2` keeps a
/// constant spin.
///
/// [`pre_step`]: OdeSystem::pre_step
/// [`post_step`]: OdeSystem::post_step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinSystem {
    layout: SpinLayout,
}

impl SpinSystem {
    #[must_use]
    pub fn new(layout: SpinLayout) -> Self {
        Self { layout }
    }

    #[must_use]
    pub fn layout(&self) -> &SpinLayout {
        &self.layout
    }
}

impl OdeSystem for SpinSystem {
    type Context = Simulation;
    type Error = Error;

    fn derivatives(
        &self,
        sim: &Simulation,
        _t: f64,
        y: &[f64],
        y_dot: &mut [f64],
    ) -> Result<(), Error> {
        let slots = self.layout.resolve(sim, y.len())?;
        if y_dot.len() != y.len() {
            return Err(Error::LayoutMismatch {
                tracked: slots.len(),
                state_len: y_dot.len(),
            });
        }

        let bodies = sim.real_bodies();

        for (slot, &i) in slots.iter().enumerate() {
            let range = 3 * slot..3 * slot + 3;
            y_dot[range.clone()].fill(0.0);

            let body = &bodies[i];
            let Some(moi) = body.structure.moi else {
                return Err(Error::UntrackedBody { id: body.id });
            };
            let Some(k2) = body.structure.k2 else {
                continue;
            };

            let tide = TidalSource {
                k2,
                sigma: body.structure.sigma_or_zero(),
                spin: Vector3::from_column_slice(&y[range.clone()]),
            };

            let mut spin_rate = Vector3::zeros();
            for (j, other) in bodies.iter().enumerate() {
                if i == j || body.mass == 0.0 || other.mass == 0.0 {
                    continue;
                }

                let mu = body.mass * other.mass / (body.mass + other.mass);
                let d = body.position - other.position;
                let force = tidal_force(body, other, sim.g, &tide);

                spin_rate += d.cross(&force) * (-mu / moi);
            }

            y_dot[range].copy_from_slice(spin_rate.as_slice());
        }

        Ok(())
    }

    fn pre_step(&self, sim: &Simulation, y: &mut [f64]) -> Result<(), Error> {
        let slots = self.layout.resolve(sim, y.len())?;
        let bodies = sim.real_bodies();

        for (slot, &i) in slots.iter().enumerate() {
            let Some(spin) = bodies[i].structure.spin else {
                return Err(Error::UntrackedBody { id: bodies[i].id });
            };
            y[3 * slot..3 * slot + 3].copy_from_slice(spin.as_slice());
        }

        Ok(())
    }

    fn post_step(&self, sim: &mut Simulation, y: &[f64]) -> Result<(), Error> {
        let slots = self.layout.resolve(sim, y.len())?;
        let bodies = sim.real_bodies_mut();

        for (slot, &i) in slots.iter().enumerate() {
            bodies[i].structure.spin = Some(Vector3::from_column_slice(
                &y[3 * slot..3 * slot + 3],
            ));
        }

        Ok(())
    }
}
