use approx::assert_relative_eq;
use nalgebra::Vector3;

use integration_tests::Host;
use tidespin_core::{Body, BodyId, Simulation, Structure};
use tidespin_solvers::transient::{self, Action, Config, Event, Method, Status};

const A: f64 = 0.2;
const PLANET_RADIUS: f64 = 0.005;
const PLANET_MOI: f64 = 0.25 * 0.001 * PLANET_RADIUS * PLANET_RADIUS;

/// Dissipation strong enough to move the spin noticeably within a few
/// orbits while the bulge stays a small perturbation on the orbit.
const SIGMA: f64 = 1e8;

/// Relative circular speed for the star/planet pair at separation `A`.
fn orbital_speed() -> f64 {
    (1.001 / A).sqrt()
}

/// A point-mass star and a close-in planet with a tidal bulge, on a circular
/// orbit in the xy-plane. The planet's spin is tracked when `moi` is set.
fn close_in_planet(sigma: Option<f64>, moi: Option<f64>, spin_z: f64) -> (Simulation, BodyId) {
    let v = orbital_speed();
    let mut sim = Simulation::new(1.0);
    sim.push(Body::new(BodyId(0), 1.0).with_velocity(0.0, -v * 0.001 / 1.001, 0.0));
    let planet = sim.push(
        Body::new(BodyId(0), 0.001)
            .with_radius(PLANET_RADIUS)
            .with_position(A, 0.0, 0.0)
            .with_velocity(0.0, v / 1.001, 0.0)
            .with_structure(Structure {
                k2: Some(0.5),
                sigma,
                moi,
                spin: Some(Vector3::new(0.0, 0.0, spin_z)),
            }),
    );
    (sim, planet)
}

fn spin_of(sim: &Simulation, id: BodyId) -> Vector3<f64> {
    sim.body(id).and_then(|b| b.structure.spin).expect("spin set")
}

fn separation(sim: &Simulation, id: BodyId) -> f64 {
    let planet = sim.body(id).expect("planet");
    (planet.position - sim.bodies[0].position).norm()
}

#[test]
fn spin_and_orbit_exchange_angular_momentum() {
    let (sim, planet) = close_in_planet(Some(SIGMA), Some(PLANET_MOI), 0.0);
    let mut host = Host::new(sim).expect("spin ODE");

    let total_before = host.sim.total_angular_momentum();
    host.run(0.005, 200).expect("should integrate");
    let total_after = host.sim.total_angular_momentum();

    let spin = spin_of(&host.sim, planet);
    let spin_gain = spin.z * PLANET_MOI;

    // The tide perturbs the orbit without destroying it.
    assert_relative_eq!(separation(&host.sim, planet), A, max_relative = 1e-2);

    // A non-rotating planet is spun up by the orbit...
    assert!(spin.z > 0.01);
    assert!(spin.z < orbital_speed() / A);
    // ...and the orbit pays for it.
    assert_relative_eq!(
        (total_after - total_before).z,
        0.0,
        epsilon = 1e-3 * spin_gain
    );
}

#[test]
fn supersynchronous_spin_slows_down() {
    let (sim, planet) = close_in_planet(Some(SIGMA), Some(PLANET_MOI), 20.0);
    let mut host = Host::new(sim).expect("spin ODE");

    host.run(0.005, 100).expect("should integrate");

    let spin = spin_of(&host.sim, planet);
    assert!(spin.z < 20.0 - 1e-3);
    assert!(spin.z > orbital_speed() / A);
    assert_relative_eq!(separation(&host.sim, planet), A, max_relative = 1e-2);
}

#[test]
fn conservative_tide_keeps_aligned_spin() {
    let (sim, planet) = close_in_planet(None, Some(PLANET_MOI), 5.0);
    let mut host = Host::new(sim).expect("spin ODE");

    host.run(0.005, 200).expect("should integrate");

    assert_relative_eq!(
        spin_of(&host.sim, planet),
        Vector3::new(0.0, 0.0, 5.0),
        epsilon = 1e-12
    );
}

#[test]
fn untracked_spin_is_never_mutated() {
    let (sim, planet) = close_in_planet(Some(SIGMA), None, 3.0);
    let mut host = Host::new(sim).expect("no ODE needed");
    assert!(host.tides.ode().is_none());

    host.run(0.005, 50).expect("should integrate");

    assert_eq!(spin_of(&host.sim, planet), Vector3::new(0.0, 0.0, 3.0));
}

#[test]
fn frozen_orbit_drives_spin_to_synchronous_rate() {
    let (mut sim, planet) = close_in_planet(Some(SIGMA), Some(PLANET_MOI), 0.0);
    let mut host = Host::new(sim.clone()).expect("spin ODE");
    let ode = host.tides.ode_mut().expect("planet is tracked");

    // Bodies are not moved, so the spin relaxes to h / r².
    let synchronous = orbital_speed() / A;
    let config = Config::new(Method::Rk4, 10.0, 300).unwrap();

    let mut spins = Vec::new();
    let solution = transient::solve(ode, &mut sim, &config, |event: &Event| -> Option<Action> {
        spins.push(event.state[2]);
        None
    })
    .expect("should integrate");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(spins.len(), 301);
    assert!(spins.windows(2).all(|w| w[1] >= w[0]));
    assert_relative_eq!(spin_of(&sim, planet).z, synchronous, max_relative = 1e-2);
}
