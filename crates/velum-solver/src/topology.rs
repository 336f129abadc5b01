//! Topology builder — turns raw triangle or tetrahedron index buffers
//! into a deduplicated spring network.
//!
//! Both paths use the same shape: enumerate every edge of every
//! face/cell with a payload, canonicalize the endpoints, sort by the
//! canonical key, then scan runs of equal edges. Deduplication is by
//! edge identity only; run multiplicity decides bending emission (cloth)
//! or sums volume weight (solids), never duplicate springs.

use std::cmp::Ordering;

use velum_math::Vec3;
use velum_types::{ParticleId, VelumError, VelumResult};

use crate::particle::ParticleSet;
use crate::spring::{Spring, SpringKind};
use crate::tetra::Tetrahedron;

/// A triangle edge tagged with its opposite ("wing") vertex.
///
/// Endpoints are canonicalized by numeric index order so that the same
/// geometric edge, however discovered, compares equal.
#[derive(Debug, Clone, Copy)]
struct ClothEdge {
    a: u32,
    b: u32,
    opposite: u32,
}

impl ClothEdge {
    fn new(v0: u32, v1: u32, opposite: u32) -> Self {
        if v0 < v1 {
            Self { a: v0, b: v1, opposite }
        } else {
            Self { a: v1, b: v0, opposite }
        }
    }
}

/// Builds the cloth spring network from a triangle index buffer.
///
/// Every unique edge yields one traction spring. An edge shared by
/// exactly two triangles additionally yields one bending spring between
/// the two opposite vertices. Any other multiplicity (boundary edge, or
/// a non-manifold edge shared by more than two triangles) yields only
/// the traction spring — the exactly-2 rule is a preserved policy, not
/// an accident.
pub fn cloth_springs(
    indices: &[u32],
    particles: &ParticleSet,
    traction_stiffness: f32,
    bending_stiffness: f32,
) -> VelumResult<Vec<Spring>> {
    if indices.len() % 3 != 0 {
        return Err(VelumError::InvalidMesh(
            "triangle index count is not divisible by 3".into(),
        ));
    }

    let mut edges = Vec::with_capacity(indices.len());
    for tri in indices.chunks_exact(3) {
        let [i0, i1, i2] = [tri[0], tri[1], tri[2]];
        edges.push(ClothEdge::new(i0, i1, i2));
        edges.push(ClothEdge::new(i1, i2, i0));
        edges.push(ClothEdge::new(i2, i0, i1));
    }

    edges.sort_unstable_by_key(|e| (e.a, e.b));

    let mut springs = Vec::new();
    let mut index = 0;
    while index < edges.len() {
        let edge = edges[index];
        let mut run = 1;
        while index + run < edges.len()
            && edges[index + run].a == edge.a
            && edges[index + run].b == edge.b
        {
            run += 1;
        }

        springs.push(Spring::new(
            ParticleId(edge.a),
            ParticleId(edge.b),
            SpringKind::Traction,
            traction_stiffness,
            None,
            particles,
        )?);

        if run == 2 {
            springs.push(Spring::new(
                ParticleId(edge.opposite),
                ParticleId(edges[index + 1].opposite),
                SpringKind::Bending,
                bending_stiffness,
                None,
                particles,
            )?);
        }

        index += run;
    }

    Ok(springs)
}

/// A tetrahedron edge carrying its rest-volume share.
///
/// Endpoints are canonicalized by lexicographic position order (x, then
/// y, then z), matching how the solid path identifies edges by geometry
/// rather than by index.
#[derive(Debug, Clone, Copy)]
struct SolidEdge {
    a: ParticleId,
    b: ParticleId,
    share: f32,
}

fn cmp_position(p: Vec3, q: Vec3) -> Ordering {
    p.x.total_cmp(&q.x)
        .then(p.y.total_cmp(&q.y))
        .then(p.z.total_cmp(&q.z))
}

/// Builds the solid spring network from tetrahedral cells.
///
/// Each cell contributes its six edges, each tagged with one sixth of
/// the cell's rest volume. After the sort, every occurrence within a run
/// adds its share to a single accumulator before one volume-weighted
/// traction spring is emitted per canonical edge — the fan-in sum over
/// however many tetrahedra share the edge.
pub fn solid_springs(
    tetrahedra: &[Tetrahedron],
    particles: &ParticleSet,
    stiffness: f32,
) -> VelumResult<Vec<Spring>> {
    const CELL_EDGES: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

    let mut edges = Vec::with_capacity(tetrahedra.len() * 6);
    for tet in tetrahedra {
        let share = tet.volume / 6.0;
        for (i, j) in CELL_EDGES {
            let (mut a, mut b) = (tet.corners[i], tet.corners[j]);
            if cmp_position(particles.position(a), particles.position(b)) == Ordering::Greater {
                std::mem::swap(&mut a, &mut b);
            }
            edges.push(SolidEdge { a, b, share });
        }
    }

    edges.sort_unstable_by(|e1, e2| {
        cmp_position(particles.position(e1.a), particles.position(e2.a))
            .then_with(|| cmp_position(particles.position(e1.b), particles.position(e2.b)))
    });

    let same_edge = |e1: &SolidEdge, e2: &SolidEdge| {
        cmp_position(particles.position(e1.a), particles.position(e2.a)) == Ordering::Equal
            && cmp_position(particles.position(e1.b), particles.position(e2.b)) == Ordering::Equal
    };

    let mut springs = Vec::new();
    let mut index = 0;
    while index < edges.len() {
        let edge = edges[index];
        let mut weight = edge.share;
        let mut run = 1;
        while index + run < edges.len() && same_edge(&edge, &edges[index + run]) {
            weight += edges[index + run].share;
            run += 1;
        }

        springs.push(Spring::new(
            edge.a,
            edge.b,
            SpringKind::Traction,
            stiffness,
            Some(weight),
            particles,
        )?);

        index += run;
    }

    Ok(springs)
}
