//! Cuboid mesh generation.

use super::GeometryData;

/// Generate an axis-aligned cuboid spanning `[0, width] x [0, height] x
/// [0, depth]`.
///
/// Anchoring at the origin corner instead of the center lets the scene place
/// a cuboid by translating to its cell's corner. Each face gets its own four
/// vertices with outward winding and a full 0..1 texture quad.
pub fn generate_cuboid(width: f32, height: f32, depth: f32) -> GeometryData {
    let mut data = GeometryData::new();

    let (w, h, d) = (width, height, depth);
    let positions = [
        // Front face (positive Z)
        [0.0, 0.0, d], [w, 0.0, d], [w, h, d], [0.0, h, d],
        // Back face (negative Z)
        [0.0, 0.0, 0.0], [0.0, h, 0.0], [w, h, 0.0], [w, 0.0, 0.0],
        // Left face (negative X)
        [0.0, 0.0, 0.0], [0.0, 0.0, d], [0.0, h, d], [0.0, h, 0.0],
        // Right face (positive X)
        [w, 0.0, d], [w, 0.0, 0.0], [w, h, 0.0], [w, h, d],
        // Top face (positive Y)
        [0.0, h, d], [w, h, d], [w, h, 0.0], [0.0, h, 0.0],
        // Bottom face (negative Y)
        [0.0, 0.0, 0.0], [w, 0.0, 0.0], [w, 0.0, d], [0.0, 0.0, d],
    ];

    data.positions = positions.to_vec();

    // Same 0..1 quad on every face.
    for _ in 0..6 {
        data.tex_coords.extend_from_slice(&[
            [0.0, 1.0],
            [1.0, 1.0],
            [1.0, 0.0],
            [0.0, 0.0],
        ]);
    }

    // Two counter-clockwise triangles per face.
    for face in 0..6u32 {
        let base = face * 4;
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuboid_has_four_vertices_per_face() {
        let cuboid = generate_cuboid(2.0, 8.0, 2.0);
        assert_eq!(cuboid.vertex_count(), 24); // 6 faces * 4 vertices
        assert_eq!(cuboid.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cuboid.triangle_count(), 12);
        assert_eq!(cuboid.positions.len(), cuboid.tex_coords.len());
    }

    #[test]
    fn cuboid_spans_its_dimensions_from_the_origin() {
        let cuboid = generate_cuboid(6.0, 8.0, 20.0);
        for axis in 0..3 {
            let min = cuboid
                .positions
                .iter()
                .map(|p| p[axis])
                .fold(f32::INFINITY, f32::min);
            let max = cuboid
                .positions
                .iter()
                .map(|p| p[axis])
                .fold(f32::NEG_INFINITY, f32::max);
            assert_eq!(min, 0.0);
            assert_eq!(max, [6.0, 8.0, 20.0][axis]);
        }
    }

    #[test]
    fn indices_stay_in_range() {
        let cuboid = generate_cuboid(1.0, 1.0, 1.0);
        assert!(cuboid
            .indices
            .iter()
            .all(|&i| (i as usize) < cuboid.vertex_count()));
    }
}
