use tidespin_core::Simulation;

use crate::kernel::tidal_potential;

/// Total conservative tidal energy of the real bodies in `sim`.
///
/// Sums [`tidal_potential`] over every ordered pair whose first body has
/// `k2` and `sigma` set and a nonzero radius. Pairs with a zero mass are
/// skipped.
#[must_use]
pub fn total_tidal_potential(sim: &Simulation) -> f64 {
    let bodies = sim.real_bodies();
    let mut energy = 0.0;

    for (i, source) in bodies.iter().enumerate() {
        let (Some(k2), Some(_)) = (source.structure.k2, source.structure.sigma) else {
            continue;
        };
        if source.radius == 0.0 || source.mass == 0.0 {
            continue;
        }

        for (j, target) in bodies.iter().enumerate() {
            if i == j || target.mass == 0.0 {
                continue;
            }
            energy += tidal_potential(source, target, sim.g, k2);
        }
    }

    energy
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use tidespin_core::{Body, BodyId, Structure};

    fn planet(radius: f64) -> Body {
        Body::new(BodyId(1), 0.001)
            .with_radius(radius)
            .with_position(2.0, 0.0, 0.0)
    }

    fn tidal_star(structure: Structure) -> Body {
        Body::new(BodyId(0), 1.0)
            .with_radius(0.1)
            .with_structure(structure)
    }

    #[test]
    fn sums_eligible_pairs() {
        let mut sim = Simulation::new(1.0);
        sim.push(tidal_star(Structure::default().with_k2(0.3).with_sigma(1.0)));
        sim.push(planet(0.05));

        let expected = tidal_potential(&sim.bodies[0], &sim.bodies[1], 1.0, 0.3);

        assert_relative_eq!(total_tidal_potential(&sim), expected);
        assert!(expected < 0.0);
    }

    #[test]
    fn requires_sigma_and_radius() {
        let mut sim = Simulation::new(1.0);
        sim.push(tidal_star(Structure::default().with_k2(0.3)));
        sim.push(planet(0.05));
        assert_eq!(total_tidal_potential(&sim), 0.0);

        let mut sim = Simulation::new(1.0);
        sim.push(tidal_star(Structure::default().with_k2(0.3).with_sigma(1.0)).with_radius(0.0));
        sim.push(planet(0.05));
        assert_eq!(total_tidal_potential(&sim), 0.0);
    }

    #[test]
    fn skips_massless_and_variational_bodies() {
        let mut sim = Simulation::new(1.0);
        sim.push(tidal_star(Structure::default().with_k2(0.3).with_sigma(1.0)));
        sim.push(planet(0.05));
        let alone = total_tidal_potential(&sim);

        sim.push(Body::new(BodyId(0), 0.0).with_position(0.0, 3.0, 0.0));
        sim.push(planet(0.05).with_position(0.0, -1.0, 0.0));
        sim.n_var = 1;

        assert_relative_eq!(total_tidal_potential(&sim), alone);
    }

    #[test]
    fn empty_simulation_has_no_energy() {
        assert_eq!(total_tidal_potential(&Simulation::new(1.0)), 0.0);
    }
}
