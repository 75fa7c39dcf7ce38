use nalgebra::Vector3;

use crate::{Body, BodyId};

/// The host simulation context seen by the tidal effect.
///
/// Bodies are stored in a single array. The last `n_var` entries are
/// variational bodies used for sensitivity analysis; they are carried along
/// but never take part in tidal interactions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Simulation {
    /// Gravitational constant.
    pub g: f64,

    pub bodies: Vec<Body>,

    /// Number of trailing variational bodies.
    #[cfg_attr(feature = "serde", serde(default))]
    pub n_var: usize,
}

impl Simulation {
    /// Creates an empty simulation with gravitational constant `g`.
    #[must_use]
    pub fn new(g: f64) -> Self {
        Self {
            g,
            bodies: Vec::new(),
            n_var: 0,
        }
    }

    /// Adds a body, assigning it the next free identity, and returns that
    /// identity.
    ///
    /// Any id already present on `body` is overwritten.
    pub fn push(&mut self, mut body: Body) -> BodyId {
        let id = BodyId(
            self.bodies
                .iter()
                .map(|b| b.id.0 + 1)
                .max()
                .unwrap_or(0),
        );
        body.id = id;
        self.bodies.push(body);
        id
    }

    /// Number of real (non-variational) bodies.
    #[must_use]
    pub fn n_real(&self) -> usize {
        self.bodies.len().saturating_sub(self.n_var)
    }

    #[must_use]
    pub fn real_bodies(&self) -> &[Body] {
        &self.bodies[..self.n_real()]
    }

    pub fn real_bodies_mut(&mut self) -> &mut [Body] {
        let n_real = self.n_real();
        &mut self.bodies[..n_real]
    }

    /// Returns the array index of the real body with identity `id`.
    #[must_use]
    pub fn index_of(&self, id: BodyId) -> Option<usize> {
        self.real_bodies().iter().position(|b| b.id == id)
    }

    #[must_use]
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.real_bodies().iter().find(|b| b.id == id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.real_bodies_mut().iter_mut().find(|b| b.id == id)
    }

    /// Clears every body's acceleration accumulator.
    pub fn zero_accelerations(&mut self) {
        for body in &mut self.bodies {
            body.acceleration = Vector3::zeros();
        }
    }

    /// Total angular momentum of the real bodies: orbital `m (r × v)` plus
    /// spin `moi · Ω` for every spin-tracked body.
    #[must_use]
    pub fn total_angular_momentum(&self) -> Vector3<f64> {
        self.real_bodies()
            .iter()
            .map(|b| b.orbital_angular_momentum() + b.spin_angular_momentum())
            .sum()
    }
}
