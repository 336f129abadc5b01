//! Triangle and tetrahedron geometry helpers.
//!
//! These are the primitives shared by the force model (face normals and
//! areas for aerodynamic drag), the topology builder (rest volumes), and
//! the barycentric embedder (signed-volume ratios).

use glam::Vec3;

/// Unit normal of the triangle `(p0, p1, p2)`.
///
/// Computed as `normalize(cross(p1 - p0, p2 - p0))`; the winding order of
/// the input determines the facing direction. Returns `Vec3::ZERO` for a
/// degenerate (collinear) triangle.
#[inline]
pub fn triangle_normal(p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    (p1 - p0).cross(p2 - p0).normalize_or_zero()
}

/// Area of the triangle `(p0, p1, p2)`: half the cross product magnitude.
#[inline]
pub fn triangle_area(p0: Vec3, p1: Vec3, p2: Vec3) -> f32 {
    0.5 * (p1 - p0).cross(p2 - p0).length()
}

/// Signed volume of the tetrahedron `(a, b, c, d)`.
///
/// One sixth of the scalar triple product `(b-a) · ((c-a) × (d-a))`.
/// The sign encodes the orientation of the corner ordering.
#[inline]
pub fn tetra_signed_volume(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> f32 {
    (b - a).dot((c - a).cross(d - a)) / 6.0
}

/// Rest volume of the tetrahedron `(a, b, c, d)` — always non-negative.
#[inline]
pub fn tetra_volume(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> f32 {
    tetra_signed_volume(a, b, c, d).abs()
}
