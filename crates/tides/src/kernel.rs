use nalgebra::Vector3;

use tidespin_core::{Body, Structure};

/// Parameters of the body raising a tide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TidalSource {
    /// Potential Love number of degree 2.
    pub k2: f64,

    /// Dissipation parameter; zero disables the lag term.
    pub sigma: f64,

    /// Angular velocity of the source.
    pub spin: Vector3<f64>,
}

impl TidalSource {
    /// Builds the source parameters from a body's structure.
    ///
    /// Returns `None` unless both `k2` and the spin vector are set. A missing
    /// `sigma` is treated as zero.
    #[must_use]
    pub fn from_structure(structure: &Structure) -> Option<Self> {
        Some(Self {
            k2: structure.k2?,
            sigma: structure.sigma_or_zero(),
            spin: structure.spin?,
        })
    }
}

/// Tidal force between the bulge of `source` and `target`.
///
/// `F` is oriented so that the target's acceleration is `-(m_s / M) F` and
/// the source's is `+(m_t / M) F`.
///
/// The result is the sum of two terms:
///
/// - a conservative quadrupole term from the equilibrium bulge, present
///   whenever `k2 != 0`;
/// - the Eggleton–Kiseleva–Hut lag term, present only when `sigma != 0`,
///   which dissipates energy and drives circularization and spin
///   synchronization.
///
/// Both are scaled by the reduced mass `μ` of the pair so that the caller
/// recovers accelerations by mass-weighting (see [`apply_tidal_forces`]).
///
/// Returns the zero vector when `k2 == 0`.
///
/// Both masses must be nonzero and the bodies must not coincide.
///
/// [`apply_tidal_forces`]: crate::apply_tidal_forces
#[must_use]
pub fn tidal_force(source: &Body, target: &Body, g: f64, tide: &TidalSource) -> Vector3<f64> {
    if tide.k2 == 0.0 {
        return Vector3::zeros();
    }

    let ms = source.mass;
    let mt = target.mass;
    let mu = ms * mt / (ms + mt);
    let big_a = tide.k2 * source.radius.powi(5);

    let d = source.position - target.position;
    let d2 = d.norm_squared();
    let r = d2.sqrt();
    debug_assert!(r > 0.0, "tidal force between coincident bodies");

    let omega = tide.spin;
    let omega_dot_d = omega.dot(&d);

    let t1 = 5.0 * omega_dot_d * omega_dot_d / (2.0 * r.powi(7));
    let t2 = omega.norm_squared() / (2.0 * r.powi(5));
    let t3 = omega_dot_d / r.powi(5);
    let t4 = 6.0 * g * mt / r.powi(8);

    let quad_prefactor = mt * big_a / mu;
    let mut force = (d * (t1 - t2 - t4) - omega * t3) * quad_prefactor;

    if tide.sigma != 0.0 {
        let v = source.velocity - target.velocity;

        let radial = d * (3.0 * d.dot(&v));
        let h = d.cross(&v);
        let lag = (h - omega * d2).cross(&d);

        let prefactor =
            -9.0 * tide.sigma * mt * mt * big_a * big_a / (2.0 * mu * d2.powi(5));
        force += (radial + lag) * prefactor;
    }

    force
}

/// Conservative energy of the static tidal distortion in a pair.
///
/// Evaluates `-½ G m_s m_t (m_s / m_t) k2 R_t⁵ / r⁶`, using the target's
/// radius and the supplied Love number. Used for energy bookkeeping only;
/// the lag term has no potential.
///
/// Both masses must be nonzero and the bodies must not coincide.
#[must_use]
pub fn tidal_potential(source: &Body, target: &Body, g: f64, k2: f64) -> f64 {
    let ms = source.mass;
    let mt = target.mass;

    let fac = ms / mt * k2 * target.radius.powi(5);
    let dr2 = (target.position - source.position).norm_squared();

    -0.5 * g * ms * mt / dr2.powi(3) * fac
}
