//! Per-direction tangent bases.
//!
//! Every face of a given direction shares one tangent frame, so the table
//! has six entries and is uploaded once per chunk. The GPU reads it as a
//! per-instance stream, broadcasting one entry to every vertex of a draw.

use bytemuck::{Pod, Zeroable};

use super::face::{FaceDirection, FACE_COUNT};

/// Reference tangent projected onto each face plane: `normalize(1, -1, 0)`.
const UNPROJECTED_TANGENT_X: [f32; 3] = [
    std::f32::consts::FRAC_1_SQRT_2,
    -std::f32::consts::FRAC_1_SQRT_2,
    0.0,
];

/// Reference bitangent deciding the handedness sign.
const UNPROJECTED_TANGENT_Y: [f32; 3] = [-1.0, -1.0, -1.0];

fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Normalizes `v`, or returns zero for a degenerate vector.
fn safe_normal(v: [f32; 3]) -> [f32; 3] {
    let len_sq = dot(v, v);
    if len_sq < 1e-8 {
        return [0.0; 3];
    }
    let inv = len_sq.sqrt().recip();
    v.map(|c| c * inv)
}

/// -1, 0 or +1.
fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Tangent frame shared by all faces of one direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TangentBasis {
    /// Unit tangent lying in the face plane.
    pub tangent_x: [f32; 3],
    /// Face normal in `xyz`, bitangent sign in `w`.
    pub tangent_z: [f32; 4],
}

impl TangentBasis {
    /// Computes the basis for one face direction.
    #[must_use]
    pub fn for_face(face: FaceDirection) -> Self {
        let normal = face.normal().map(|c| c as f32);
        let projected = safe_normal({
            let along = dot(UNPROJECTED_TANGENT_X, normal);
            [
                UNPROJECTED_TANGENT_X[0] - normal[0] * along,
                UNPROJECTED_TANGENT_X[1] - normal[1] * along,
                UNPROJECTED_TANGENT_X[2] - normal[2] * along,
            ]
        });
        let handedness = sign(dot(UNPROJECTED_TANGENT_Y, cross(normal, projected)));
        Self {
            tangent_x: projected,
            tangent_z: [normal[0], normal[1], normal[2], handedness],
        }
    }

    /// Face normal.
    #[inline]
    #[must_use]
    pub fn normal(&self) -> [f32; 3] {
        [self.tangent_z[0], self.tangent_z[1], self.tangent_z[2]]
    }

    /// Bitangent reconstructed the way shaders do: `(N x T) * w`.
    #[must_use]
    pub fn tangent_y(&self) -> [f32; 3] {
        cross(self.normal(), self.tangent_x).map(|c| c * self.tangent_z[3])
    }

    /// Packs the basis for upload.
    #[must_use]
    pub fn packed(&self) -> PackedTangentBasis {
        let [x, y, z] = self.tangent_x;
        PackedTangentBasis {
            tangent_x: PackedNormal::pack([x, y, z, 0.0]),
            tangent_z: PackedNormal::pack(self.tangent_z),
        }
    }
}

/// The six bases in canonical face order.
#[must_use]
pub fn tangent_bases() -> [TangentBasis; FACE_COUNT] {
    FaceDirection::ALL.map(TangentBasis::for_face)
}

/// A unit vector packed into four unsigned bytes (`Unorm8x4`, remapped to
/// `[-1, 1]` in the shader).
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct PackedNormal(pub [u8; 4]);

impl PackedNormal {
    /// Packs each component from `[-1, 1]` to `0..=255`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pack(v: [f32; 4]) -> Self {
        Self(v.map(|c| (c * 127.5 + 127.5).clamp(0.0, 255.0) as u8))
    }

    /// Inverse of [`PackedNormal::pack`], up to quantization.
    #[must_use]
    pub fn unpack(self) -> [f32; 4] {
        self.0.map(|b| f32::from(b) / 127.5 - 1.0)
    }
}

/// Tangent frame as uploaded: one 8-byte entry per face direction.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct PackedTangentBasis {
    /// Packed tangent.
    pub tangent_x: PackedNormal,
    /// Packed normal and handedness.
    pub tangent_z: PackedNormal,
}

impl PackedTangentBasis {
    /// Vertex buffer layout for WGPU.
    pub const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        1 => Unorm8x4,  // tangent_x
        2 => Unorm8x4,  // tangent_z
    ];

    /// Stepped per instance: a draw with instance range `face..face + 1`
    /// sees the same basis on every vertex.
    #[must_use]
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PackedTangentBasis>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn test_tangent_lies_in_face_plane() {
        for basis in tangent_bases() {
            assert!(dot(basis.tangent_x, basis.normal()).abs() < 1e-6);
            assert!((dot(basis.tangent_x, basis.tangent_x) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_known_tangents() {
        let bases = tangent_bases();
        assert!(approx(bases[FaceDirection::PosX.index()].tangent_x, [0.0, -1.0, 0.0]));
        assert!(approx(bases[FaceDirection::NegX.index()].tangent_x, [0.0, -1.0, 0.0]));
        assert!(approx(bases[FaceDirection::PosY.index()].tangent_x, [1.0, 0.0, 0.0]));
        let r = std::f32::consts::FRAC_1_SQRT_2;
        assert!(approx(bases[FaceDirection::PosZ.index()].tangent_x, [r, -r, 0.0]));
    }

    #[test]
    fn test_handedness_signs() {
        let signs: Vec<f32> = tangent_bases().iter().map(|b| b.tangent_z[3]).collect();
        assert_eq!(signs, vec![-1.0, 1.0, -1.0, 1.0, 1.0, -1.0]);
    }

    #[test]
    fn test_bitangent_agrees_with_reference() {
        for basis in tangent_bases() {
            let b = basis.tangent_y();
            assert!(dot(b, UNPROJECTED_TANGENT_Y) > 0.0);
            assert!(dot(b, basis.normal()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_packing() {
        let packed = TangentBasis::for_face(FaceDirection::PosX).packed();
        assert_eq!(packed.tangent_x, PackedNormal([127, 0, 127, 127]));
        assert_eq!(packed.tangent_z, PackedNormal([255, 127, 127, 255]));
        assert_eq!(std::mem::size_of::<PackedTangentBasis>(), 8);

        let unpacked = packed.tangent_z.unpack();
        assert!((unpacked[0] - 1.0).abs() < 1e-6);
        assert!(unpacked[1].abs() < 0.01);
    }
}
