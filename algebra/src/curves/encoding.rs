//! Byte encodings of curve points.
//!
//! Uncompressed points are `x || y` with both coordinates big endian; the identity
//! is all zeros with the infinity flag set. Compressed points are `x` alone, big
//! endian, with the two most significant bits of the first byte used as flags:
//! `0x80` when `y` is the lexicographically largest of `{y, -y}` and `0x40` for
//! the identity. Extension field coordinates are written highest coefficient first.
//!
//! The raw little endian Montgomery forms mirror the in-memory representation: an
//! affine point is `x || y`, a Jacobian point `x || y || z`, and the identity is
//! encoded as zeros.

use crate::{
    curves::{
        models::{GroupAffine, GroupProjective, SWModelParameters},
        AffineCurve, ProjectiveCurve,
    },
    error::AlgebraError,
    fields::{Field, FieldEncoding, SquareRootField},
};

pub const COMPRESSION_FLAG: u8 = 0x80;
pub const INFINITY_FLAG: u8 = 0x40;
const FLAG_MASK: u8 = COMPRESSION_FLAG | INFINITY_FLAG;

/// Conversions between curve points and their byte encodings.
pub trait PointEncoding: Sized {
    /// Length of an uncompressed encoding.
    fn uncompressed_size() -> usize;

    /// Length of a compressed encoding.
    fn compressed_size() -> usize;

    fn to_uncompressed(&self) -> Vec<u8>;

    /// Decodes an uncompressed point, checking that it lies on the curve.
    fn from_uncompressed(bytes: &[u8]) -> Result<Self, AlgebraError>;

    fn to_compressed(&self) -> Vec<u8>;

    /// Decodes a compressed point by recovering `y` from the curve equation.
    fn from_compressed(bytes: &[u8]) -> Result<Self, AlgebraError>;

    /// Length of the little endian Montgomery encoding.
    fn le_montgomery_size() -> usize;

    fn to_le_montgomery(&self) -> Vec<u8>;

    fn from_le_montgomery(bytes: &[u8]) -> Result<Self, AlgebraError>;
}

fn split_flags(bytes: &[u8]) -> (u8, Vec<u8>) {
    let mut bytes = bytes.to_vec();
    let flags = bytes[0] & FLAG_MASK;
    bytes[0] &= !FLAG_MASK;
    (flags, bytes)
}

fn check_identity(bytes: &[u8]) -> Result<(), AlgebraError> {
    if bytes.iter().all(|b| *b == 0) {
        Ok(())
    } else {
        Err(AlgebraError::InvalidEncoding(
            "the identity must have all coordinate bytes zero".to_owned(),
        ))
    }
}

impl<P: SWModelParameters> PointEncoding for GroupAffine<P> {
    fn uncompressed_size() -> usize {
        2 * P::BaseField::encoded_size()
    }

    fn compressed_size() -> usize {
        P::BaseField::encoded_size()
    }

    fn to_uncompressed(&self) -> Vec<u8> {
        if self.is_zero() {
            let mut bytes = vec![0u8; Self::uncompressed_size()];
            bytes[0] = INFINITY_FLAG;
            return bytes;
        }
        let mut bytes = self.x.to_be_bytes();
        bytes.extend(self.y.to_be_bytes());
        bytes
    }

    fn from_uncompressed(bytes: &[u8]) -> Result<Self, AlgebraError> {
        AlgebraError::check_buffer_length(Self::uncompressed_size(), bytes.len())?;
        let (flags, bytes) = split_flags(bytes);
        match flags {
            INFINITY_FLAG => {
                check_identity(&bytes)?;
                Ok(Self::zero())
            }
            0 => {
                let (x, y) = bytes.split_at(P::BaseField::encoded_size());
                let point = Self::new(
                    P::BaseField::from_be_bytes(x)?,
                    P::BaseField::from_be_bytes(y)?,
                    false,
                );
                if point.is_on_curve() {
                    Ok(point)
                } else {
                    Err(AlgebraError::NotOnCurve)
                }
            }
            _ => Err(AlgebraError::InvalidEncoding(format!(
                "unexpected flags {:#04x} on an uncompressed point",
                flags
            ))),
        }
    }

    fn to_compressed(&self) -> Vec<u8> {
        if self.is_zero() {
            let mut bytes = vec![0u8; Self::compressed_size()];
            bytes[0] = INFINITY_FLAG;
            return bytes;
        }
        let mut bytes = self.x.to_be_bytes();
        if self.y.is_lexicographically_largest() {
            bytes[0] |= COMPRESSION_FLAG;
        }
        bytes
    }

    fn from_compressed(bytes: &[u8]) -> Result<Self, AlgebraError> {
        AlgebraError::check_buffer_length(Self::compressed_size(), bytes.len())?;
        let (flags, bytes) = split_flags(bytes);
        match flags {
            INFINITY_FLAG => {
                check_identity(&bytes)?;
                Ok(Self::zero())
            }
            0 | COMPRESSION_FLAG => {
                let x = P::BaseField::from_be_bytes(&bytes)?;
                Self::get_point_from_x(x, flags == COMPRESSION_FLAG).ok_or(AlgebraError::NotOnCurve)
            }
            _ => Err(AlgebraError::InvalidEncoding(
                "both the compression and the infinity flag are set".to_owned(),
            )),
        }
    }

    fn le_montgomery_size() -> usize {
        2 * P::BaseField::encoded_size()
    }

    fn to_le_montgomery(&self) -> Vec<u8> {
        if self.is_zero() {
            return vec![0u8; Self::le_montgomery_size()];
        }
        let mut bytes = self.x.to_le_bytes_montgomery();
        bytes.extend(self.y.to_le_bytes_montgomery());
        bytes
    }

    fn from_le_montgomery(bytes: &[u8]) -> Result<Self, AlgebraError> {
        AlgebraError::check_buffer_length(Self::le_montgomery_size(), bytes.len())?;
        if bytes.iter().all(|b| *b == 0) {
            return Ok(Self::zero());
        }
        let (x, y) = bytes.split_at(P::BaseField::encoded_size());
        let point = Self::new(
            P::BaseField::from_le_bytes_montgomery(x)?,
            P::BaseField::from_le_bytes_montgomery(y)?,
            false,
        );
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(AlgebraError::NotOnCurve)
        }
    }
}

impl<P: SWModelParameters> PointEncoding for GroupProjective<P> {
    fn uncompressed_size() -> usize {
        GroupAffine::<P>::uncompressed_size()
    }

    fn compressed_size() -> usize {
        GroupAffine::<P>::compressed_size()
    }

    fn to_uncompressed(&self) -> Vec<u8> {
        self.into_affine().to_uncompressed()
    }

    fn from_uncompressed(bytes: &[u8]) -> Result<Self, AlgebraError> {
        GroupAffine::<P>::from_uncompressed(bytes).map(|p| p.into_projective())
    }

    fn to_compressed(&self) -> Vec<u8> {
        self.into_affine().to_compressed()
    }

    fn from_compressed(bytes: &[u8]) -> Result<Self, AlgebraError> {
        GroupAffine::<P>::from_compressed(bytes).map(|p| p.into_projective())
    }

    fn le_montgomery_size() -> usize {
        3 * P::BaseField::encoded_size()
    }

    fn to_le_montgomery(&self) -> Vec<u8> {
        if self.is_zero() {
            return vec![0u8; Self::le_montgomery_size()];
        }
        let mut bytes = self.x.to_le_bytes_montgomery();
        bytes.extend(self.y.to_le_bytes_montgomery());
        bytes.extend(self.z.to_le_bytes_montgomery());
        bytes
    }

    fn from_le_montgomery(bytes: &[u8]) -> Result<Self, AlgebraError> {
        AlgebraError::check_buffer_length(Self::le_montgomery_size(), bytes.len())?;
        let size = P::BaseField::encoded_size();
        let z = P::BaseField::from_le_bytes_montgomery(&bytes[2 * size..])?;
        if z.is_zero() {
            return Ok(Self::zero());
        }
        let point = Self::new(
            P::BaseField::from_le_bytes_montgomery(&bytes[..size])?,
            P::BaseField::from_le_bytes_montgomery(&bytes[size..2 * size])?,
            z,
        );
        if point.into_affine().is_on_curve() {
            Ok(point)
        } else {
            Err(AlgebraError::NotOnCurve)
        }
    }
}
