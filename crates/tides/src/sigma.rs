//! Conversions from conventional tidal timescales to `sigma`.

use tracing::warn;

use tidespin_core::{Body, BodyId, Orbit, Simulation};

use crate::Error;

/// Derives `sigma` from a constant tidal time lag `tau`:
///
/// ```text
/// sigma = 4 τ G / (3 R⁵ k2)
/// ```
///
/// # Errors
///
/// Returns an error if `body` is not a real body of `sim`, has no `k2`, or
/// has zero radius.
pub fn sigma_from_time_lag(sim: &Simulation, body: BodyId, tau: f64) -> Result<f64, Error> {
    let (body, k2) = structured_body(sim, body)?;

    Ok(4.0 * tau * sim.g / (3.0 * body.radius.powi(5) * k2))
}

/// Derives `sigma` from a tidal quality factor `q`, using the mean motion
/// `n` of `body` around `primary`:
///
/// ```text
/// sigma = 2 G / (3 Q R⁵ k2 n)
/// ```
///
/// # Errors
///
/// Returns an error if either body is not a real body of `sim`, if `body`
/// has no `k2` or zero radius, if `q` is not positive and finite, or if the
/// orbit of `body` around `primary` is degenerate.
pub fn sigma_from_quality_factor(
    sim: &Simulation,
    body: BodyId,
    primary: BodyId,
    q: f64,
) -> Result<f64, Error> {
    let (body, k2) = structured_body(sim, body)?;
    let primary = sim.body(primary).ok_or(Error::UnknownBody { id: primary })?;

    if !(q.is_finite() && q > 0.0) {
        warn!(q, "could not derive sigma from quality factor");
        return Err(Error::InvalidQualityFactor { q });
    }

    let orbit = Orbit::from_bodies(sim.g, body, primary).inspect_err(|err| {
        warn!(%err, "could not derive sigma from quality factor");
    })?;

    Ok(2.0 * sim.g / (3.0 * q * body.radius.powi(5) * k2 * orbit.n))
}

/// Looks up a body that has a Love number and a physical radius.
fn structured_body(sim: &Simulation, id: BodyId) -> Result<(&Body, f64), Error> {
    let body = sim.body(id).ok_or(Error::UnknownBody { id })?;

    let result = match body.structure.k2 {
        None => Err(Error::MissingLoveNumber { id }),
        Some(_) if body.radius == 0.0 => Err(Error::ZeroRadius { id }),
        Some(k2) => Ok((body, k2)),
    };

    if let Err(err) = &result {
        warn!(%err, "could not derive sigma");
    }
    result
}
