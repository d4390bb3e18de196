use glam::IVec3;

/// One of the 6 axis-aligned face directions of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    NegX = 0,
    PosX = 1,
    NegY = 2,
    PosY = 3,
    NegZ = 4,
    PosZ = 5,
}

/// All 6 faces in mesh emission order. Meshing and tests rely on this
/// order being fixed.
pub const ALL_FACES: [Face; 6] = [
    Face::NegX,
    Face::PosX,
    Face::NegY,
    Face::PosY,
    Face::NegZ,
    Face::PosZ,
];

impl Face {
    /// Offset vector toward the neighbor this face looks at.
    pub fn offset(self) -> IVec3 {
        match self {
            Face::NegX => IVec3::new(-1, 0, 0),
            Face::PosX => IVec3::new(1, 0, 0),
            Face::NegY => IVec3::new(0, -1, 0),
            Face::PosY => IVec3::new(0, 1, 0),
            Face::NegZ => IVec3::new(0, 0, -1),
            Face::PosZ => IVec3::new(0, 0, 1),
        }
    }

    /// Axis index: 0 = x, 1 = y, 2 = z.
    pub fn axis(self) -> usize {
        (self as usize) / 2
    }

    /// Whether this face points in the positive direction of its axis.
    pub fn is_positive(self) -> bool {
        (self as u8) % 2 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_count() {
        assert_eq!(ALL_FACES.len(), 6);
    }

    #[test]
    fn test_offsets_unique_and_unit() {
        for (i, a) in ALL_FACES.iter().enumerate() {
            let off = a.offset();
            assert_eq!(off.abs().element_sum(), 1, "{a:?} is not a unit offset");
            for (j, b) in ALL_FACES.iter().enumerate() {
                if i != j {
                    assert_ne!(off, b.offset(), "faces {i} and {j} share offset");
                }
            }
        }
    }

    #[test]
    fn test_axis_and_sign() {
        assert_eq!(Face::NegX.axis(), 0);
        assert_eq!(Face::PosY.axis(), 1);
        assert_eq!(Face::PosZ.axis(), 2);
        assert!(!Face::NegZ.is_positive());
        assert!(Face::PosX.is_positive());
    }

    #[test]
    fn test_emission_order() {
        // Negative face precedes positive face per axis, x then y then z.
        assert_eq!(ALL_FACES[0], Face::NegX);
        assert_eq!(ALL_FACES[1], Face::PosX);
        assert_eq!(ALL_FACES[4], Face::NegZ);
        assert_eq!(ALL_FACES[5], Face::PosZ);
    }
}
