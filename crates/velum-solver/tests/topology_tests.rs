//! Tests for the edge-deduplicating spring network builders and
//! volumetric mass distribution.

use velum_math::Vec3;
use velum_mesh::generators::{quad_grid, single_tetrahedron};
use velum_solver::{ParticleSet, SpringKind, Tetrahedron};
use velum_solver::tetra::distribute_mass;
use velum_solver::topology::{cloth_springs, solid_springs};
use velum_types::{ParticleId, TetraId};

fn count_kind(springs: &[velum_solver::Spring], kind: SpringKind) -> usize {
    springs.iter().filter(|s| s.kind == kind).count()
}

// ─── Cloth topology ───────────────────────────────────────────

#[test]
fn single_quad_dedups_shared_diagonal() {
    // Two triangles sharing one diagonal: 4 border edges + 1 diagonal,
    // each a traction spring; the diagonal's run of 2 emits one bending
    // spring across the two wing vertices.
    let mesh = quad_grid(1, 1, 1.0, 1.0);
    let particles = ParticleSet::with_uniform_mass(mesh.positions.clone(), 1.0).unwrap();

    let springs = cloth_springs(&mesh.indices, &particles, 100.0, 50.0).unwrap();

    assert_eq!(count_kind(&springs, SpringKind::Traction), 5);
    assert_eq!(count_kind(&springs, SpringKind::Bending), 1);
}

#[test]
fn quad_grid_spring_counts() {
    // 2×2 quads (3×3 vertices): 6 horizontal + 6 vertical + 4 diagonal
    // edges, all unique; 8 internal edges shared by exactly two
    // triangles.
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    let particles = ParticleSet::with_uniform_mass(mesh.positions.clone(), 1.0).unwrap();

    let springs = cloth_springs(&mesh.indices, &particles, 100.0, 50.0).unwrap();

    assert_eq!(count_kind(&springs, SpringKind::Traction), 16);
    assert_eq!(count_kind(&springs, SpringKind::Bending), 8);
}

#[test]
fn bending_stiffness_reaches_bending_springs() {
    let mesh = quad_grid(1, 1, 1.0, 1.0);
    let particles = ParticleSet::with_uniform_mass(mesh.positions.clone(), 1.0).unwrap();

    let springs = cloth_springs(&mesh.indices, &particles, 100.0, 7.5).unwrap();
    let bending = springs
        .iter()
        .find(|s| s.kind == SpringKind::Bending)
        .unwrap();

    assert_eq!(bending.stiffness, 7.5);
}

#[test]
fn non_manifold_edge_emits_no_bending_spring() {
    // Three triangles fanning around edge (0, 1): run length 3, so the
    // edge gets one traction spring and no bending — the exactly-two
    // rule, not "two or more".
    let positions = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.5, 1.0, 0.0),
        Vec3::new(0.5, -1.0, 0.0),
        Vec3::new(0.5, 0.0, 1.0),
    ];
    let indices = [0, 1, 2, 0, 1, 3, 0, 1, 4];
    let particles = ParticleSet::with_uniform_mass(positions, 1.0).unwrap();

    let springs = cloth_springs(&indices, &particles, 100.0, 50.0).unwrap();

    // Unique edges: (0,1) plus two per fan triangle.
    assert_eq!(count_kind(&springs, SpringKind::Traction), 7);
    assert_eq!(count_kind(&springs, SpringKind::Bending), 0);
}

#[test]
fn ragged_index_buffer_is_rejected() {
    let particles =
        ParticleSet::with_uniform_mass(vec![Vec3::ZERO, Vec3::X, Vec3::Y], 1.0).unwrap();
    assert!(cloth_springs(&[0, 1], &particles, 100.0, 50.0).is_err());
}

// ─── Solid topology ───────────────────────────────────────────

fn make_tets(positions: &[Vec3], cells: &[u32]) -> (ParticleSet, Vec<Tetrahedron>) {
    let particles = ParticleSet::with_uniform_mass(positions.to_vec(), 1.0).unwrap();
    let tets = cells
        .chunks_exact(4)
        .enumerate()
        .map(|(i, c)| {
            Tetrahedron::new(
                TetraId(i as u32),
                [
                    ParticleId(c[0]),
                    ParticleId(c[1]),
                    ParticleId(c[2]),
                    ParticleId(c[3]),
                ],
                &particles,
            )
            .unwrap()
        })
        .collect();
    (particles, tets)
}

#[test]
fn single_tetrahedron_yields_six_weighted_springs() {
    let (positions, cell) = single_tetrahedron();
    let (particles, tets) = make_tets(&positions, &cell);

    let springs = solid_springs(&tets, &particles, 100.0).unwrap();

    assert_eq!(springs.len(), 6);
    let expected = tets[0].volume / 6.0;
    for spring in &springs {
        assert_eq!(spring.kind, SpringKind::Traction);
        assert!((spring.weight.unwrap() - expected).abs() < 1e-9);
    }
}

#[test]
fn shared_face_edges_sum_volume_shares() {
    // Two cells glued on face (1, 2, 3). The three edges of the shared
    // face collect shares from both cells; the other six edges keep a
    // single cell's share. 9 unique edges total.
    let positions = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.5, 1.0, 0.0),
        Vec3::new(0.5, 0.5, 1.0),
        Vec3::new(1.5, 1.0, 1.0),
    ];
    let cells = [0, 1, 2, 3, 1, 2, 3, 4];
    let (particles, tets) = make_tets(&positions, &cells);

    let springs = solid_springs(&tets, &particles, 100.0).unwrap();
    assert_eq!(springs.len(), 9);

    let both = (tets[0].volume + tets[1].volume) / 6.0;
    let shared_endpoints = |s: &velum_solver::Spring| {
        let (a, b) = (s.a.0, s.b.0);
        matches!((a.min(b), a.max(b)), (1, 2) | (1, 3) | (2, 3))
    };

    let mut shared = 0;
    for spring in &springs {
        if shared_endpoints(spring) {
            assert!((spring.weight.unwrap() - both).abs() < 1e-9);
            shared += 1;
        }
    }
    assert_eq!(shared, 3);
}

#[test]
fn degenerate_cell_is_rejected() {
    // Four coplanar points have zero volume.
    let positions = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
    ];
    let particles = ParticleSet::with_uniform_mass(positions, 1.0).unwrap();
    let result = Tetrahedron::new(
        TetraId(0),
        [ParticleId(0), ParticleId(1), ParticleId(2), ParticleId(3)],
        &particles,
    );
    assert!(result.is_err());
}

#[test]
fn repeated_corner_is_rejected() {
    let (positions, _) = single_tetrahedron();
    let particles = ParticleSet::with_uniform_mass(positions, 1.0).unwrap();
    let result = Tetrahedron::new(
        TetraId(0),
        [ParticleId(0), ParticleId(1), ParticleId(1), ParticleId(3)],
        &particles,
    );
    assert!(result.is_err());
}

// ─── Mass distribution ────────────────────────────────────────

#[test]
fn mass_splits_volume_evenly_over_corners() {
    let (positions, cell) = single_tetrahedron();
    let (mut particles, tets) = make_tets(&positions, &cell);

    distribute_mass(&tets, 2.0, &mut particles);

    let expected = 1.0 + 2.0 * tets[0].volume / 4.0;
    for &m in &particles.masses {
        assert!((m - expected).abs() < 1e-7);
    }
}

#[test]
fn mass_accumulation_is_order_independent() {
    let positions = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.5, 1.0, 0.0),
        Vec3::new(0.5, 0.5, 1.0),
        Vec3::new(1.5, 1.0, 1.0),
    ];
    let cells = [0, 1, 2, 3, 1, 2, 3, 4];
    let reversed = [1, 2, 3, 4, 0, 1, 2, 3];

    let (mut forward, tets_fwd) = make_tets(&positions, &cells);
    let (mut backward, tets_bwd) = make_tets(&positions, &reversed);

    distribute_mass(&tets_fwd, 3.0, &mut forward);
    distribute_mass(&tets_bwd, 3.0, &mut backward);

    assert_eq!(forward.masses, backward.masses);
}
