use nalgebra::Vector3;

use crate::Structure;

/// Stable identity of a body within a simulation.
///
/// Slot assignments for spin tracking are keyed by this identity, never by
/// array index, so the host may reorder bodies between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyId(pub u32);

/// A body in the host simulation.
///
/// The tidal effect reads mass, radius, position, velocity, and structure,
/// and adds into `acceleration`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body {
    pub id: BodyId,
    pub mass: f64,
    /// Physical radius.
    #[cfg_attr(feature = "serde", serde(default))]
    pub radius: f64,
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    #[cfg_attr(feature = "serde", serde(default = "zero_vector"))]
    pub acceleration: Vector3<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub structure: Structure,
}

#[cfg(feature = "serde")]
fn zero_vector() -> Vector3<f64> {
    Vector3::zeros()
}

impl Body {
    /// Creates a point mass at rest at the origin with no structure.
    #[must_use]
    pub fn new(id: BodyId, mass: f64) -> Self {
        Self {
            id,
            mass,
            radius: 0.0,
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            acceleration: Vector3::zeros(),
            structure: Structure::default(),
        }
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64, z: f64) -> Self {
        self.position = Vector3::new(x, y, z);
        self
    }

    #[must_use]
    pub fn with_velocity(mut self, vx: f64, vy: f64, vz: f64) -> Self {
        self.velocity = Vector3::new(vx, vy, vz);
        self
    }

    #[must_use]
    pub fn with_structure(mut self, structure: Structure) -> Self {
        self.structure = structure;
        self
    }

    /// Orbital angular momentum about the origin, `m (r × v)`.
    #[must_use]
    pub fn orbital_angular_momentum(&self) -> Vector3<f64> {
        self.position.cross(&self.velocity) * self.mass
    }

    /// Spin angular momentum `moi · Ω`, or zero when the spin is not tracked.
    #[must_use]
    pub fn spin_angular_momentum(&self) -> Vector3<f64> {
        match (self.structure.moi, self.structure.spin) {
            (Some(moi), Some(spin)) => spin * moi,
            _ => Vector3::zeros(),
        }
    }
}
