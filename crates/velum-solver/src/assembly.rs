//! Assembly — builds a [`Simulation`] from raw topology sources.
//!
//! The cloth path consumes a triangle render mesh directly (one particle
//! per vertex, direct render coupling). The solid path consumes node/
//! tetrahedron/surface-face arrays (typically parsed from `.node`/
//! `.ele`/`.face` files) plus an optional dense render mesh that tracks
//! the simulation through the barycentric embedder.

use velum_math::{Mat4, Vec3};
use velum_mesh::TriangleMesh;
use velum_types::{ParticleId, TetraId, VelumError, VelumResult};

use crate::config::SimulationConfig;
use crate::embedding::{Embedding, RenderCoupling};
use crate::integrator::Simulation;
use crate::particle::ParticleSet;
use crate::tetra::{self, Tetrahedron};
use crate::topology;

/// Builds a cloth simulation from a triangle mesh.
///
/// Mesh vertices become particles at their world positions
/// (`local_to_world * position`) with the uniform configured node mass.
/// The mesh's own triangles are both the spring topology source and the
/// wind-bearing face set.
pub fn assemble_cloth(
    mesh: &TriangleMesh,
    local_to_world: Mat4,
    config: SimulationConfig,
) -> VelumResult<Simulation> {
    config.validate()?;
    mesh.validate()?;

    let world_positions: Vec<Vec3> = mesh
        .positions
        .iter()
        .map(|&p| local_to_world.transform_point3(p))
        .collect();

    let particles = ParticleSet::with_uniform_mass(world_positions, config.node_mass)?;
    let springs = topology::cloth_springs(
        &mesh.indices,
        &particles,
        config.traction_stiffness,
        config.bending_stiffness,
    )?;

    Ok(Simulation::new(
        particles,
        springs,
        Vec::new(),
        mesh.indices.clone(),
        RenderCoupling::Direct,
        config,
    ))
}

/// Raw topology for the solid path.
pub struct SolidInput<'a> {
    /// Node positions (world space).
    pub nodes: &'a [Vec3],
    /// Flat tetrahedron index buffer, 4 entries per cell, 0-based.
    pub cells: &'a [u32],
    /// Flat surface triangle buffer for wind, 3 entries per face.
    /// Independent of the tetrahedral interior topology.
    pub surface: &'a [u32],
}

/// Builds a solid simulation from tetrahedral topology.
///
/// Nodes become particles at the configured base mass; each cell then
/// adds `density * volume / 4` to its four corners. Springs come from
/// the volume-weighted edge deduplication. When a render mesh is given,
/// its vertices are bound barycentrically (in world space, via
/// `render_local_to_world`); otherwise the render coupling is direct.
pub fn assemble_solid(
    input: SolidInput<'_>,
    render: Option<(&TriangleMesh, Mat4)>,
    config: SimulationConfig,
) -> VelumResult<Simulation> {
    config.validate()?;

    if input.cells.len() % 4 != 0 {
        return Err(VelumError::InvalidMesh(
            "tetrahedron index count is not divisible by 4".into(),
        ));
    }
    if input.surface.len() % 3 != 0 {
        return Err(VelumError::InvalidMesh(
            "surface face index count is not divisible by 3".into(),
        ));
    }
    let node_count = input.nodes.len();
    for &idx in input.cells.iter().chain(input.surface.iter()) {
        if idx as usize >= node_count {
            return Err(VelumError::InvalidMesh(format!(
                "node index {idx} out of range (node count: {node_count})"
            )));
        }
    }

    let mut particles = ParticleSet::with_uniform_mass(input.nodes.to_vec(), config.node_mass)?;

    let mut tetrahedra = Vec::with_capacity(input.cells.len() / 4);
    for (t, cell) in input.cells.chunks_exact(4).enumerate() {
        let corners = [
            ParticleId(cell[0]),
            ParticleId(cell[1]),
            ParticleId(cell[2]),
            ParticleId(cell[3]),
        ];
        tetrahedra.push(Tetrahedron::new(TetraId(t as u32), corners, &particles)?);
    }

    tetra::distribute_mass(&tetrahedra, config.density, &mut particles);

    let springs = topology::solid_springs(&tetrahedra, &particles, config.traction_stiffness)?;

    let coupling = match render {
        Some((mesh, render_local_to_world)) => {
            mesh.validate()?;
            let render_world: Vec<Vec3> = mesh
                .positions
                .iter()
                .map(|&p| render_local_to_world.transform_point3(p))
                .collect();
            RenderCoupling::Embedded(Embedding::bind(&render_world, &tetrahedra, &particles))
        }
        None => RenderCoupling::Direct,
    };

    Ok(Simulation::new(
        particles,
        springs,
        tetrahedra,
        input.surface.to_vec(),
        coupling,
        config,
    ))
}
