//! Tests for penalty contact and fixer binding.

use velum_math::{Mat4, Vec3};
use velum_mesh::generators::quad_grid;
use velum_contact::{FixerVolume, PenaltySphere};
use velum_solver::{assemble_cloth, ExternalForce, ParticleSet, SimulationConfig};
use velum_types::constants::PENALTY_RADIUS_MARGIN;

fn particle_at(p: Vec3) -> ParticleSet {
    ParticleSet::with_uniform_mass(vec![p], 1.0).unwrap()
}

// ─── Penalty sphere ───────────────────────────────────────────

#[test]
fn no_force_outside_inflated_radius() {
    let sphere = PenaltySphere::new(Vec3::ZERO, 1.0, 100.0);

    // Outside the configured radius but also outside the inflated one.
    let mut particles = particle_at(Vec3::new(1.2, 0.0, 0.0));
    sphere.accumulate(&mut particles);
    assert_eq!(particles.forces[0], Vec3::ZERO);
}

#[test]
fn inflation_shell_is_inside_the_contact_test() {
    // Between radius and radius * margin: the inflated test catches it
    // and the depth (also measured against the inflated radius) stays
    // positive, so the force points outward.
    let sphere = PenaltySphere::new(Vec3::ZERO, 1.0, 100.0);
    assert!((sphere.inflated_radius() - PENALTY_RADIUS_MARGIN).abs() < 1e-6);

    let mut particles = particle_at(Vec3::new(1.05, 0.0, 0.0));
    sphere.accumulate(&mut particles);
    assert!(particles.forces[0].x > 0.0);
    assert_eq!(particles.forces[0].y, 0.0);
}

#[test]
fn force_is_stiffness_times_penetration_outward() {
    let sphere = PenaltySphere::new(Vec3::ZERO, 1.0, 100.0);
    let mut particles = particle_at(Vec3::new(0.5, 0.0, 0.0));
    sphere.accumulate(&mut particles);

    let expected = 100.0 * (sphere.inflated_radius() - 0.5);
    assert!((particles.forces[0].x - expected).abs() < 1e-4);
}

#[test]
fn force_accumulates_instead_of_overwriting() {
    let sphere = PenaltySphere::new(Vec3::ZERO, 1.0, 100.0);
    let mut particles = particle_at(Vec3::new(0.5, 0.0, 0.0));
    particles.forces[0] = Vec3::new(0.0, -9.81, 0.0);
    sphere.accumulate(&mut particles);

    assert!((particles.forces[0].y + 9.81).abs() < 1e-6);
    assert!(particles.forces[0].x > 0.0);
}

#[test]
fn center_coincident_particle_is_skipped() {
    // The outward direction is undefined at the center; no force rather
    // than a NaN.
    let sphere = PenaltySphere::new(Vec3::ZERO, 1.0, 100.0);
    let mut particles = particle_at(Vec3::ZERO);
    sphere.accumulate(&mut particles);
    assert_eq!(particles.forces[0], Vec3::ZERO);
}

#[test]
fn contact_count_uses_inflated_radius() {
    let sphere = PenaltySphere::new(Vec3::ZERO, 1.0, 100.0);
    let particles = ParticleSet::with_uniform_mass(
        vec![
            Vec3::new(0.5, 0.0, 0.0),  // inside
            Vec3::new(1.05, 0.0, 0.0), // inflation shell
            Vec3::new(2.0, 0.0, 0.0),  // outside
        ],
        1.0,
    )
    .unwrap();

    assert_eq!(sphere.contact_count(&particles), 2);
}

// ─── Fixer volumes ────────────────────────────────────────────

#[test]
fn contains_is_inclusive_at_the_boundary() {
    let fixer = FixerVolume::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
    assert!(fixer.contains(Vec3::new(1.0, -1.0, 1.0)));
    assert!(!fixer.contains(Vec3::new(1.0001, 0.0, 0.0)));
}

#[test]
fn bind_captures_contained_particles_only() {
    // Grid spanning [-0.5, 0.5]²; the fixer covers the top edge (y = 0.5).
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    let mut sim = assemble_cloth(&mesh, Mat4::IDENTITY, SimulationConfig::default()).unwrap();

    let fixer = FixerVolume::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.6, 0.05, 0.1));
    let anchor = fixer.bind_particles(&mut sim).unwrap();

    let bound = sim.particles.bindings.iter().filter(|b| b.is_some()).count();
    assert_eq!(bound, 3);
    assert_eq!(sim.anchor_position(anchor), Vec3::new(0.0, 0.5, 0.0));
}

#[test]
fn empty_fixer_creates_no_anchor() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    let mut sim = assemble_cloth(&mesh, Mat4::IDENTITY, SimulationConfig::default()).unwrap();

    let fixer = FixerVolume::new(Vec3::new(10.0, 10.0, 10.0), Vec3::ONE);
    assert!(fixer.bind_particles(&mut sim).is_none());
}

#[test]
fn bound_row_follows_the_anchor() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    let mut sim = assemble_cloth(&mesh, Mat4::IDENTITY, SimulationConfig::default()).unwrap();

    let fixer = FixerVolume::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.6, 0.05, 0.1));
    let anchor = fixer.bind_particles(&mut sim).unwrap();
    let before: Vec<Vec3> = sim.particles.positions[0..3].to_vec();

    sim.set_running(true);
    sim.set_anchor_position(anchor, Vec3::new(1.0, 0.5, 0.0));
    sim.tick(&[]);

    // The whole bound row translates rigidly by the anchor displacement.
    for (i, &p) in sim.particles.positions[0..3].iter().enumerate() {
        assert!((p - (before[i] + Vec3::new(1.0, 0.0, 0.0))).length() < 1e-6);
    }
}

#[test]
fn sphere_pushes_resting_cloth_through_the_force_seam() {
    // A cloth sheet resting at the sphere boundary gains upward velocity
    // when the sphere overlaps it from below.
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    let config = SimulationConfig {
        gravity: Vec3::ZERO,
        node_damping: 0.0,
        ..Default::default()
    };
    let mut sim = assemble_cloth(&mesh, Mat4::IDENTITY, config).unwrap();
    sim.set_running(true);

    let sphere = PenaltySphere::new(Vec3::new(0.0, 0.0, -0.5), 0.6, 100.0);
    sim.tick(&[&sphere]);

    // The center particle sits closest to the sphere; it must be pushed
    // along +Z.
    assert!(sim.particles.velocities[4].z > 0.0);
}
