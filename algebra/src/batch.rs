//! Routines over flat byte buffers holding `count` equally sized elements.
//!
//! Every routine checks that `input` and `output` have exactly the length implied
//! by `count` and the element encodings before touching them. With the `parallel`
//! feature the buffers are split into chunks of `CHUNK_SIZE` elements that are
//! processed independently.

use crate::{
    curves::{
        encoding::PointEncoding,
        models::{GroupAffine, GroupProjective, SWModelParameters},
        AffineCurve, ProjectiveCurve,
    },
    error::AlgebraError,
    fields::{try_batch_inversion, FieldEncoding, PrimeField},
    msm::VariableBaseMSM,
};

/// Number of elements handled by one unit of work.
pub const CHUNK_SIZE: usize = 1 << 12;

/// The byte representation of the points in a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointFormat {
    /// `x || y || z`, little endian Montgomery coordinates.
    LeMontgomeryJacobian,
    /// `x || y`, little endian Montgomery coordinates, the identity is all zeros.
    LeMontgomeryAffine,
    /// `x || y`, big endian coordinates with the infinity flag.
    Uncompressed,
    /// `x`, big endian with the sign and infinity flags.
    Compressed,
}

impl PointFormat {
    /// Size in bytes of one point of the curve `P` in this format.
    pub fn size<P: SWModelParameters>(&self) -> usize {
        match self {
            PointFormat::LeMontgomeryJacobian => GroupProjective::<P>::le_montgomery_size(),
            PointFormat::LeMontgomeryAffine => GroupAffine::<P>::le_montgomery_size(),
            PointFormat::Uncompressed => GroupAffine::<P>::uncompressed_size(),
            PointFormat::Compressed => GroupAffine::<P>::compressed_size(),
        }
    }

    fn decode<P: SWModelParameters>(&self, bytes: &[u8]) -> Result<GroupProjective<P>, AlgebraError> {
        match self {
            PointFormat::LeMontgomeryJacobian => GroupProjective::<P>::from_le_montgomery(bytes),
            PointFormat::LeMontgomeryAffine => {
                GroupAffine::<P>::from_le_montgomery(bytes).map(|p| p.into_projective())
            }
            PointFormat::Uncompressed => {
                GroupAffine::<P>::from_uncompressed(bytes).map(|p| p.into_projective())
            }
            PointFormat::Compressed => {
                GroupAffine::<P>::from_compressed(bytes).map(|p| p.into_projective())
            }
        }
    }

    fn encode<P: SWModelParameters>(&self, p: &GroupAffine<P>) -> Vec<u8> {
        match self {
            PointFormat::LeMontgomeryJacobian => p.into_projective().to_le_montgomery(),
            PointFormat::LeMontgomeryAffine => p.to_le_montgomery(),
            PointFormat::Uncompressed => p.to_uncompressed(),
            PointFormat::Compressed => p.to_compressed(),
        }
    }
}

fn check_sizes(
    input: &[u8],
    in_size: usize,
    output: &[u8],
    out_size: usize,
    count: usize,
) -> Result<(), AlgebraError> {
    AlgebraError::check_buffer_length(in_size * count, input.len())?;
    AlgebraError::check_buffer_length(out_size * count, output.len())
}

/// Applies `op` to matching chunks of `input` and `output`.
fn for_each_chunk<Op>(
    input: &[u8],
    in_size: usize,
    output: &mut [u8],
    out_size: usize,
    op: Op,
) -> Result<(), AlgebraError>
where
    Op: Fn(&[u8], &mut [u8]) -> Result<(), AlgebraError> + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        input
            .par_chunks(in_size * CHUNK_SIZE)
            .zip(output.par_chunks_mut(out_size * CHUNK_SIZE))
            .try_for_each(|(i, o)| op(i, o))
    }

    #[cfg(not(feature = "parallel"))]
    {
        input
            .chunks(in_size * CHUNK_SIZE)
            .zip(output.chunks_mut(out_size * CHUNK_SIZE))
            .try_for_each(|(i, o)| op(i, o))
    }
}

/// Inverts `count` little endian Montgomery field elements. A zero element fails
/// the whole batch with `DivisionByZero`.
pub fn batch_inverse<F: PrimeField>(
    input: &[u8],
    count: usize,
    output: &mut [u8],
) -> Result<(), AlgebraError> {
    let n8 = F::encoded_size();
    check_sizes(input, n8, output, n8, count)?;

    let timer = start_timer!(|| format!("Batch inversion of {} elements", count));
    let result = for_each_chunk(input, n8, output, n8, |input, output| {
        let mut elements = input
            .chunks(n8)
            .map(F::from_le_bytes_montgomery)
            .collect::<Result<Vec<_>, _>>()?;
        try_batch_inversion(&mut elements)?;
        for (e, out) in elements.iter().zip(output.chunks_mut(n8)) {
            out.copy_from_slice(&e.to_le_bytes_montgomery());
        }
        Ok(())
    });
    end_timer!(timer);
    result
}

/// Re-encodes `count` points from the format `from` into the format `to`.
pub fn batch_convert<P: SWModelParameters>(
    from: PointFormat,
    to: PointFormat,
    input: &[u8],
    count: usize,
    output: &mut [u8],
) -> Result<(), AlgebraError> {
    let in_size = from.size::<P>();
    let out_size = to.size::<P>();
    check_sizes(input, in_size, output, out_size, count)?;

    let timer = start_timer!(|| format!("Convert {} points from {:?} to {:?}", count, from, to));
    let result = for_each_chunk(input, in_size, output, out_size, |input, output| {
        let points = input
            .chunks(in_size)
            .map(|bytes| from.decode::<P>(bytes))
            .collect::<Result<Vec<_>, _>>()?;
        let points = GroupProjective::<P>::batch_normalization_into_affine(&points);
        for (p, out) in points.iter().zip(output.chunks_mut(out_size)) {
            out.copy_from_slice(&to.encode(p));
        }
        Ok(())
    });
    end_timer!(timer);
    result
}

/// Normalizes `count` Jacobian points to affine, both little endian Montgomery.
pub fn batch_to_affine<P: SWModelParameters>(
    input: &[u8],
    count: usize,
    output: &mut [u8],
) -> Result<(), AlgebraError> {
    batch_convert::<P>(
        PointFormat::LeMontgomeryJacobian,
        PointFormat::LeMontgomeryAffine,
        input,
        count,
        output,
    )
}

/// Computes `sum_i s_i * B_i` over `count` little endian Montgomery affine bases
/// and little endian scalars.
pub fn multiexp_chunk<P: SWModelParameters>(
    bases: &[u8],
    scalars: &[u8],
    count: usize,
) -> Result<GroupProjective<P>, AlgebraError> {
    let point_size = GroupAffine::<P>::le_montgomery_size();
    let n8r = P::ScalarField::encoded_size();
    AlgebraError::check_buffer_length(point_size * count, bases.len())?;
    AlgebraError::check_buffer_length(n8r * count, scalars.len())?;

    let bases = bases
        .chunks(point_size)
        .map(GroupAffine::<P>::from_le_montgomery)
        .collect::<Result<Vec<_>, _>>()?;
    let scalars = scalars
        .chunks(n8r)
        .map(|bytes| P::ScalarField::from_le_bytes(bytes).map(|s| s.into_repr()))
        .collect::<Result<Vec<_>, _>>()?;

    VariableBaseMSM::multi_scalar_mul(&bases, &scalars)
}

#[cfg(all(test, feature = "bn254", feature = "bls12_381"))]
mod test {
    use super::*;
    use crate::{
        curves::{
            bls12_381::{g2::Bls12_381G2Parameters, G2Projective as Bls12_381G2},
            bn254::{g1::Bn254G1Parameters, G1Affine as Bn254G1Affine, G1Projective as Bn254G1},
        },
        fields::{bn254::Fq, bn254::Fr, Field},
        UniformRand,
    };
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn test_batch_inverse() {
        let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
        let elements = (0..10).map(|_| Fq::rand(&mut rng)).collect::<Vec<_>>();
        let input = elements
            .iter()
            .flat_map(|e| e.to_le_bytes_montgomery())
            .collect::<Vec<_>>();

        let mut output = vec![0u8; input.len()];
        batch_inverse::<Fq>(&input, 10, &mut output).unwrap();
        for (e, out) in elements.iter().zip(output.chunks(32)) {
            let inv = Fq::from_le_bytes_montgomery(out).unwrap();
            assert_eq!(inv, e.inverse().unwrap());
        }

        // A zero element anywhere fails the batch.
        let mut with_zero = input.clone();
        for b in with_zero[64..96].iter_mut() {
            *b = 0;
        }
        assert!(matches!(
            batch_inverse::<Fq>(&with_zero, 10, &mut output),
            Err(AlgebraError::DivisionByZero)
        ));

        // Buffers must match the element count.
        assert!(matches!(
            batch_inverse::<Fq>(&input, 9, &mut output),
            Err(AlgebraError::InvalidBufferLength { expected: 288, found: 320 })
        ));
        let mut short = vec![0u8; 31];
        assert!(batch_inverse::<Fq>(&input[..32], 1, &mut short).is_err());

        assert!(batch_inverse::<Fq>(&[], 0, &mut []).is_ok());
    }

    #[test]
    fn test_batch_to_affine() {
        let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
        let mut points = (0..8).map(|_| Bn254G1::rand(&mut rng)).collect::<Vec<_>>();
        points.push(Bn254G1::zero());

        let input = points
            .iter()
            .flat_map(|p| p.to_le_montgomery())
            .collect::<Vec<_>>();
        assert_eq!(input.len(), 9 * 96);

        let mut output = vec![0u8; 9 * 64];
        batch_to_affine::<Bn254G1Parameters>(&input, 9, &mut output).unwrap();
        for (p, out) in points.iter().zip(output.chunks(64)) {
            assert_eq!(out, p.into_affine().to_le_montgomery().as_slice());
        }
        assert!(output[8 * 64..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_batch_convert() {
        let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
        let mut points = (0..5)
            .map(|_| Bls12_381G2::rand(&mut rng).into_affine())
            .collect::<Vec<_>>();
        points.push(GroupAffine::zero());
        let count = points.len();

        let lem = points
            .iter()
            .flat_map(|p| p.to_le_montgomery())
            .collect::<Vec<_>>();

        let mut compressed = vec![0u8; count * 96];
        batch_convert::<Bls12_381G2Parameters>(
            PointFormat::LeMontgomeryAffine,
            PointFormat::Compressed,
            &lem,
            count,
            &mut compressed,
        )
        .unwrap();
        for (p, c) in points.iter().zip(compressed.chunks(96)) {
            assert_eq!(c, p.to_compressed().as_slice());
        }

        let mut uncompressed = vec![0u8; count * 192];
        batch_convert::<Bls12_381G2Parameters>(
            PointFormat::Compressed,
            PointFormat::Uncompressed,
            &compressed,
            count,
            &mut uncompressed,
        )
        .unwrap();
        for (p, u) in points.iter().zip(uncompressed.chunks(192)) {
            assert_eq!(GroupAffine::<Bls12_381G2Parameters>::from_uncompressed(u).unwrap(), *p);
        }

        let mut back = vec![0u8; lem.len()];
        batch_convert::<Bls12_381G2Parameters>(
            PointFormat::Uncompressed,
            PointFormat::LeMontgomeryAffine,
            &uncompressed,
            count,
            &mut back,
        )
        .unwrap();
        assert_eq!(back, lem);

        let mut jacobian = vec![0u8; count * 288];
        batch_convert::<Bls12_381G2Parameters>(
            PointFormat::Compressed,
            PointFormat::LeMontgomeryJacobian,
            &compressed,
            count,
            &mut jacobian,
        )
        .unwrap();
        for (p, j) in points.iter().zip(jacobian.chunks(288)) {
            assert_eq!(GroupProjective::<Bls12_381G2Parameters>::from_le_montgomery(j).unwrap(), *p);
        }

        // A corrupted point fails the batch.
        let mut bad = compressed.clone();
        bad[0] |= 0x40;
        assert!(batch_convert::<Bls12_381G2Parameters>(
            PointFormat::Compressed,
            PointFormat::Uncompressed,
            &bad,
            count,
            &mut uncompressed,
        )
        .is_err());
    }

    #[test]
    fn test_multiexp_chunk() {
        let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
        let count = 20;

        let bases = (0..count)
            .map(|_| Bn254G1::rand(&mut rng).into_affine())
            .collect::<Vec<Bn254G1Affine>>();
        let scalars = (0..count).map(|_| Fr::rand(&mut rng)).collect::<Vec<_>>();

        let expected = bases
            .iter()
            .zip(scalars.iter())
            .map(|(b, s)| b.mul(*s))
            .sum::<Bn254G1>();

        let base_bytes = bases
            .iter()
            .flat_map(|b| b.to_le_montgomery())
            .collect::<Vec<_>>();
        let scalar_bytes = scalars
            .iter()
            .flat_map(|s| s.to_le_bytes())
            .collect::<Vec<_>>();

        let result =
            multiexp_chunk::<Bn254G1Parameters>(&base_bytes, &scalar_bytes, count).unwrap();
        assert_eq!(result, expected);

        assert!(matches!(
            multiexp_chunk::<Bn254G1Parameters>(&base_bytes, &scalar_bytes[..32], count),
            Err(AlgebraError::InvalidBufferLength { .. })
        ));

        // Scalars must be reduced.
        let mut unreduced = scalar_bytes.clone();
        for b in unreduced[..32].iter_mut() {
            *b = 0xff;
        }
        assert!(multiexp_chunk::<Bn254G1Parameters>(&base_bytes, &unreduced, count).is_err());
    }
}
