//! Face direction tables.
//!
//! Corner `i` of the unit brick sits at `((i >> 2) & 1, (i >> 1) & 1, i & 1)`.
//! Each face lists four corners counter-clockwise as seen from outside the
//! brick, so `(v1 - v0) x (v2 - v0)` points along the outward normal for
//! both triangles of the quad.

/// One of the six axis-aligned face directions, in canonical order.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FaceDirection {
    /// -X
    NegX = 0,
    /// +X
    PosX = 1,
    /// -Y
    NegY = 2,
    /// +Y
    PosY = 3,
    /// -Z
    NegZ = 4,
    /// +Z
    PosZ = 5,
}

/// Number of face directions.
pub const FACE_COUNT: usize = 6;

/// Maps face index to outward normal.
const FACE_NORMALS: [[i32; 3]; FACE_COUNT] = [
    [-1, 0, 0],
    [1, 0, 0],
    [0, -1, 0],
    [0, 1, 0],
    [0, 0, -1],
    [0, 0, 1],
];

/// Maps face index and face vertex slot to brick corner index.
const FACE_CORNERS: [[u8; 4]; FACE_COUNT] = [
    [0, 1, 3, 2], // -X
    [6, 7, 5, 4], // +X
    [4, 5, 1, 0], // -Y
    [2, 3, 7, 6], // +Y
    [0, 2, 6, 4], // -Z
    [5, 7, 3, 1], // +Z
];

/// Two triangles fanned from the first vertex of a face quad.
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Maps a brick corner index to its offset from the brick's minimum corner.
#[inline]
#[must_use]
pub const fn corner_offset(corner: u8) -> [u8; 3] {
    [(corner >> 2) & 1, (corner >> 1) & 1, corner & 1]
}

impl FaceDirection {
    /// All directions in canonical order (-X, +X, -Y, +Y, -Z, +Z).
    pub const ALL: [Self; FACE_COUNT] = [
        Self::NegX,
        Self::PosX,
        Self::NegY,
        Self::PosY,
        Self::NegZ,
        Self::PosZ,
    ];

    /// Canonical index (0..6).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Outward unit normal.
    #[inline]
    #[must_use]
    pub const fn normal(self) -> [i32; 3] {
        FACE_NORMALS[self.index()]
    }

    /// The four brick corners of this face, in winding order.
    #[inline]
    #[must_use]
    pub const fn corners(self) -> [u8; 4] {
        FACE_CORNERS[self.index()]
    }

    /// Offsets of the four face corners from the brick's minimum corner.
    #[inline]
    #[must_use]
    pub const fn corner_offsets(self) -> [[u8; 3]; 4] {
        let c = self.corners();
        [
            corner_offset(c[0]),
            corner_offset(c[1]),
            corner_offset(c[2]),
            corner_offset(c[3]),
        ]
    }
}
