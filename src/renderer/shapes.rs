//! Mesh generation for 2D primitives
//!
//! Meshes are indexed (vertex + index lists) and centered on the origin; the
//! per-instance offset/size attributes place them in the field.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::error::GeometryError;

/// Indexed triangle mesh
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec2>,
    /// Triangle list, three indices per triangle
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Triangle-fan disc around the origin
///
/// Vertex 0 is the center; vertex `i + 1` sits at angle `i * 2π / n` on the rim.
/// Triangle `i` is `(0, i + 1, i + 2)`, with the last one wrapping back to
/// vertex 1 to close the fan.
pub fn generate_disc(triangle_count: u32, radius: f32) -> Result<Mesh, GeometryError> {
    if triangle_count < 3 {
        return Err(GeometryError::TooFewTriangles(triangle_count));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GeometryError::InvalidRadius(radius));
    }

    let n = triangle_count as usize;
    let step = TAU / triangle_count as f32;

    let mut vertices = Vec::with_capacity(n + 1);
    vertices.push(Vec2::ZERO);
    for i in 0..n {
        let theta = i as f32 * step;
        vertices.push(Vec2::new(radius * theta.cos(), radius * theta.sin()));
    }

    let mut indices = Vec::with_capacity(n * 3);
    for i in 0..triangle_count {
        let next = if i + 1 == triangle_count { 1 } else { i + 2 };
        indices.extend_from_slice(&[0, i + 1, next]);
    }

    Ok(Mesh { vertices, indices })
}

/// Unit quad (corners at ±0.5), scaled to paddle size per instance
pub fn unit_quad() -> Mesh {
    Mesh {
        vertices: vec![
            Vec2::new(0.5, 0.5),
            Vec2::new(-0.5, 0.5),
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
        ],
        indices: vec![0, 1, 2, 2, 3, 0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_disc_layout() {
        let mesh = generate_disc(4, 2.0).unwrap();

        assert_eq!(mesh.vertices.len(), 5);
        assert_eq!(mesh.vertices[0], Vec2::ZERO);
        assert!((mesh.vertices[1] - Vec2::new(2.0, 0.0)).length() < 1e-5);
        assert!((mesh.vertices[2] - Vec2::new(0.0, 2.0)).length() < 1e-5);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 1]);
    }

    #[test]
    fn test_disc_rejects_degenerate_input() {
        assert_eq!(generate_disc(2, 1.0), Err(GeometryError::TooFewTriangles(2)));
        assert_eq!(generate_disc(0, 1.0), Err(GeometryError::TooFewTriangles(0)));
        assert!(matches!(
            generate_disc(8, 0.0),
            Err(GeometryError::InvalidRadius(_))
        ));
        assert!(matches!(
            generate_disc(8, f32::NAN),
            Err(GeometryError::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_unit_quad_spans_one_unit() {
        let quad = unit_quad();
        assert_eq!(quad.triangle_count(), 2);
        let min = quad.vertices.iter().fold(Vec2::MAX, |a, v| a.min(*v));
        let max = quad.vertices.iter().fold(Vec2::MIN, |a, v| a.max(*v));
        assert_eq!(max - min, Vec2::ONE);
    }

    proptest! {
        #[test]
        fn prop_disc_is_closed_fan(n in 3u32..512, radius in 0.01f32..1000.0) {
            let mesh = generate_disc(n, radius).unwrap();

            prop_assert_eq!(mesh.vertices.len(), n as usize + 1);
            prop_assert_eq!(mesh.triangle_count(), n as usize);
            prop_assert!(mesh.indices.iter().all(|&i| i <= n));
            prop_assert_eq!(*mesh.indices.last().unwrap(), 1);
            for tri in mesh.indices.chunks(3) {
                prop_assert_eq!(tri[0], 0);
            }
            for v in &mesh.vertices[1..] {
                prop_assert!((v.length() - radius).abs() <= radius * 1e-4);
            }
        }
    }
}
