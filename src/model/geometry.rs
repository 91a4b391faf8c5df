use super::mesh::{Mesh, Vertex};

/// Cube spanning -1..1 on each axis, six faces of two triangles each.
pub fn cube() -> Mesh {
    const POSITIONS: [[f32; 3]; 36] = [
        // bottom
        [-1.0, -1.0, -1.0],
        [1.0, -1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [1.0, -1.0, -1.0],
        [1.0, -1.0, 1.0],
        [-1.0, -1.0, 1.0],
        // top
        [-1.0, 1.0, -1.0],
        [-1.0, 1.0, 1.0],
        [1.0, 1.0, -1.0],
        [1.0, 1.0, -1.0],
        [-1.0, 1.0, 1.0],
        [1.0, 1.0, 1.0],
        // front
        [-1.0, -1.0, 1.0],
        [1.0, -1.0, 1.0],
        [-1.0, 1.0, 1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, 1.0],
        [-1.0, 1.0, 1.0],
        // back
        [-1.0, -1.0, -1.0],
        [-1.0, 1.0, -1.0],
        [1.0, -1.0, -1.0],
        [1.0, -1.0, -1.0],
        [-1.0, 1.0, -1.0],
        [1.0, 1.0, -1.0],
        // left
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, -1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, 1.0],
        [-1.0, 1.0, -1.0],
        // right
        [1.0, -1.0, 1.0],
        [1.0, -1.0, -1.0],
        [1.0, 1.0, -1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, -1.0],
        [1.0, 1.0, 1.0],
    ];

    Mesh::unindexed(POSITIONS.iter().map(|&pos| Vertex { pos }).collect())
}

/// 12x12 floor plane at y = 0.
pub fn floor() -> Mesh {
    const POSITIONS: [[f32; 3]; 6] = [
        [-6.0, 0.0, -6.0],
        [-6.0, 0.0, 6.0],
        [6.0, 0.0, 6.0],
        [-6.0, 0.0, -6.0],
        [6.0, 0.0, 6.0],
        [6.0, 0.0, -6.0],
    ];

    Mesh::unindexed(POSITIONS.iter().map(|&pos| Vertex { pos }).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_has_twelve_triangles() {
        assert_eq!(cube().triangle_count(), 12);
    }

    #[test]
    fn test_floor_has_two_triangles() {
        assert_eq!(floor().triangle_count(), 2);
    }

    #[test]
    fn test_floor_is_flat() {
        assert!(floor().vertices.iter().all(|v| v.pos[1] == 0.0));
    }
}
