//! Procedural mesh generators for scenarios and testing.
//!
//! Deterministic, resolution-configurable meshes with fixed winding
//! order. The quad grid doubles as the edge-deduplication test fixture.

use velum_math::Vec3;

use crate::mesh::TriangleMesh;

/// Generates a flat rectangular quad grid in the XY plane.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]`
/// in Y, centered at the origin at Z=0. Each quad is split into two
/// triangles along the same diagonal.
///
/// # Arguments
/// - `cols` — Number of quads along X (vertex count = cols + 1).
/// - `rows` — Number of quads along Y (vertex count = rows + 1).
/// - `width` — Total width in meters.
/// - `height` — Total height in meters.
///
/// # Example
/// ```
/// use velum_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> TriangleMesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;

    let mut positions = Vec::with_capacity(verts_x * verts_y);
    let mut indices = Vec::with_capacity(cols * rows * 6);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f32 / cols as f32;
            let v = j as f32 / rows as f32;
            // Top to bottom so vertex 0 is the top-left corner.
            positions.push(Vec3::new(-half_w + u * width, half_h - v * height, 0.0));
        }
    }

    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            // Upper-left triangle
            indices.push(top_left);
            indices.push(bot_left);
            indices.push(top_right);

            // Lower-right triangle
            indices.push(top_right);
            indices.push(bot_left);
            indices.push(bot_right);
        }
    }

    TriangleMesh { positions, indices }
}

/// Generates a single tetrahedron's node positions and cell, for tests
/// and the smallest possible solid scenario.
///
/// Returns `(positions, tetrahedra)` where `tetrahedra` holds one flat
/// cell `[0, 1, 2, 3]`.
pub fn single_tetrahedron() -> (Vec<Vec3>, Vec<u32>) {
    let positions = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.5, 1.0, 0.0),
        Vec3::new(0.5, 0.5, 1.0),
    ];
    (positions, vec![0, 1, 2, 3])
}
