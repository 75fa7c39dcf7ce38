use std::f64::consts::TAU;

use nalgebra::Vector3;
use thiserror::Error;

use crate::Body;

/// Osculating two-body elements of a body relative to a primary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    /// Semi-major axis. Negative for hyperbolic orbits.
    pub a: f64,

    /// Eccentricity.
    pub e: f64,

    /// Mean motion. Carries the sign of `a`.
    pub n: f64,

    /// Orbital period, `2π / n`.
    pub period: f64,

    /// Specific angular momentum vector, `d × v`.
    pub h: Vector3<f64>,
}

/// Errors that can occur when computing an orbit.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum OrbitError {
    #[error("combined gravitational parameter must be positive, got {mu}")]
    NonPositiveMu { mu: f64 },

    #[error("body and primary are coincident")]
    Coincident,

    #[error("orbit is parabolic; semi-major axis is unbounded")]
    Parabolic,
}

impl Orbit {
    /// Computes the orbit of `body` around `primary` with gravitational
    /// constant `g`.
    ///
    /// # Errors
    ///
    /// Returns an error if the combined mass is not positive, if the bodies
    /// coincide, or if the orbit is exactly parabolic.
    pub fn from_bodies(g: f64, body: &Body, primary: &Body) -> Result<Self, OrbitError> {
        let mu = g * (body.mass + primary.mass);
        if mu <= 0.0 || !mu.is_finite() {
            return Err(OrbitError::NonPositiveMu { mu });
        }

        let d = body.position - primary.position;
        let v = body.velocity - primary.velocity;
        let r = d.norm();
        if r == 0.0 {
            return Err(OrbitError::Coincident);
        }

        // Vis-viva.
        let inv_a = 2.0 / r - v.norm_squared() / mu;
        if inv_a == 0.0 {
            return Err(OrbitError::Parabolic);
        }
        let a = 1.0 / inv_a;

        let h = d.cross(&v);
        let e_vec = v.cross(&h) / mu - d / r;

        let n = a.signum() * (mu / a.powi(3)).abs().sqrt();

        Ok(Self {
            a,
            e: e_vec.norm(),
            n,
            period: TAU / n,
            h,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::BodyId;

    fn star() -> Body {
        Body::new(BodyId(0), 1.0)
    }

    #[test]
    fn circular_orbit() {
        // v = sqrt(G M / r) with G = 1, M = 1.001, r = 2.
        let v = (1.001_f64 / 2.0).sqrt();
        let planet = Body::new(BodyId(1), 0.001)
            .with_position(2.0, 0.0, 0.0)
            .with_velocity(0.0, v, 0.0);

        let orbit = Orbit::from_bodies(1.0, &planet, &star()).unwrap();

        assert_relative_eq!(orbit.a, 2.0, epsilon = 1e-12);
        assert_relative_eq!(orbit.e, 0.0, epsilon = 1e-12);
        assert_relative_eq!(orbit.n, (1.001_f64 / 8.0).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(orbit.period * orbit.n, TAU);
        assert!(orbit.h.z > 0.0);
    }

    #[test]
    fn eccentric_orbit_at_pericenter() {
        // At pericenter r = a (1 - e), v² = mu (1 + e) / r.
        let (a, e, mu): (f64, f64, f64) = (1.0, 0.3, 1.0);
        let r = a * (1.0 - e);
        let v = (mu * (1.0 + e) / r).sqrt();
        let primary = Body::new(BodyId(0), 1.0);
        let test_particle = Body::new(BodyId(1), 0.0)
            .with_position(r, 0.0, 0.0)
            .with_velocity(0.0, v, 0.0);

        let orbit = Orbit::from_bodies(1.0, &test_particle, &primary).unwrap();

        assert_relative_eq!(orbit.a, a, epsilon = 1e-12);
        assert_relative_eq!(orbit.e, e, epsilon = 1e-12);
    }

    #[test]
    fn hyperbolic_orbit_has_negative_mean_motion() {
        let planet = Body::new(BodyId(1), 0.0)
            .with_position(1.0, 0.0, 0.0)
            .with_velocity(0.0, 2.0, 0.0);

        let orbit = Orbit::from_bodies(1.0, &planet, &star()).unwrap();

        assert!(orbit.a < 0.0);
        assert!(orbit.n < 0.0);
        assert!(orbit.e > 1.0);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        let massless = Body::new(BodyId(0), 0.0);
        let other = Body::new(BodyId(1), 0.0).with_position(1.0, 0.0, 0.0);
        assert!(matches!(
            Orbit::from_bodies(1.0, &other, &massless),
            Err(OrbitError::NonPositiveMu { .. })
        ));

        let on_top = Body::new(BodyId(1), 0.001);
        assert_eq!(
            Orbit::from_bodies(1.0, &on_top, &star()),
            Err(OrbitError::Coincident)
        );

        // Escape speed at r = 2 for mu = 1 is exactly 1.
        let parabolic = Body::new(BodyId(1), 0.0)
            .with_position(2.0, 0.0, 0.0)
            .with_velocity(0.0, 1.0, 0.0);
        assert_eq!(
            Orbit::from_bodies(1.0, &parabolic, &star()),
            Err(OrbitError::Parabolic)
        );
    }
}
