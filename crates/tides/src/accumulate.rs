use tidespin_core::Body;

use crate::kernel::{TidalSource, tidal_force};

/// Adds the tidal acceleration of every ordered pair to both bodies.
///
/// For each body `i` that is a tidal source (`k2` and spin set) and each
/// other body `j`, the force `F` of `i`'s bulge on `j` is distributed as
///
/// ```text
/// a_j -= (m_i / M) F
/// a_i += (m_j / M) F
/// ```
///
/// with `M = m_i + m_j`, so each pair conserves linear momentum. Pairs with a
/// zero mass are skipped. Bodies that are not sources are still targets of
/// other bodies' tides.
pub fn apply_tidal_forces(g: f64, bodies: &mut [Body]) {
    let n = bodies.len();

    for i in 0..n {
        let Some(tide) = TidalSource::from_structure(&bodies[i].structure) else {
            continue;
        };

        for j in 0..n {
            if i == j {
                continue;
            }

            let ms = bodies[i].mass;
            let mt = bodies[j].mass;
            if ms == 0.0 || mt == 0.0 {
                continue;
            }

            let force = tidal_force(&bodies[i], &bodies[j], g, &tide);
            let mtot = ms + mt;

            bodies[j].acceleration -= force * (ms / mtot);
            bodies[i].acceleration += force * (mt / mtot);
        }
    }
}
