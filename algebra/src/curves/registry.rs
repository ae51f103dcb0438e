//! Runtime lookup of the supported curves by name or by the moduli of their
//! base and scalar fields.

use crate::{
    biginteger::biguint,
    curves::{encoding::PointEncoding, AffineCurve, PairingEngine},
    error::AlgebraError,
    fields::{Field, FieldEncoding},
};
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CurveId {
    Bn254,
    Bls12_381,
}

/// Constants describing one supported pairing-friendly curve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParameters {
    pub id: CurveId,
    pub name: &'static str,
    /// Modulus of the base field.
    pub q: BigUint,
    /// Order of G1, G2 and GT.
    pub r: BigUint,
    /// Byte length of a base field element.
    pub n8q: usize,
    /// Byte length of a scalar field element.
    pub n8r: usize,
    /// Uncompressed encoding of the G1 generator.
    pub g1_generator: Vec<u8>,
    /// Uncompressed encoding of the G2 generator.
    pub g2_generator: Vec<u8>,
}

impl CurveParameters {
    fn of<E: PairingEngine>(id: CurveId, name: &'static str) -> Self
    where
        E::G1Affine: PointEncoding,
        E::G2Affine: PointEncoding,
        E::Fq: FieldEncoding,
        E::Fr: FieldEncoding,
    {
        Self {
            id,
            name,
            q: biguint::from_limbs(<E::Fq as Field>::characteristic()),
            r: biguint::from_limbs(<E::Fr as Field>::characteristic()),
            n8q: E::Fq::encoded_size(),
            n8r: E::Fr::encoded_size(),
            g1_generator: E::G1Affine::prime_subgroup_generator().to_uncompressed(),
            g2_generator: E::G2Affine::prime_subgroup_generator().to_uncompressed(),
        }
    }
}

#[cfg(feature = "bn254")]
pub static BN254: Lazy<CurveParameters> = Lazy::new(|| {
    CurveParameters::of::<crate::curves::bn254::Bn254>(CurveId::Bn254, "bn128")
});

#[cfg(feature = "bls12_381")]
pub static BLS12_381: Lazy<CurveParameters> = Lazy::new(|| {
    CurveParameters::of::<crate::curves::bls12_381::Bls12_381>(CurveId::Bls12_381, "bls12381")
});

#[allow(unused_mut)]
fn supported_curves() -> Vec<&'static CurveParameters> {
    let mut curves: Vec<&'static CurveParameters> = vec![];
    #[cfg(feature = "bn254")]
    curves.push(&*BN254);
    #[cfg(feature = "bls12_381")]
    curves.push(&*BLS12_381);
    curves
}

/// Uppercases and strips everything but ASCII letters and digits.
fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn aliases(id: CurveId) -> &'static [&'static str] {
    match id {
        CurveId::Bn254 => &["BN128", "BN254", "ALTBN128"],
        CurveId::Bls12_381 => &["BLS12381"],
    }
}

pub fn get_curve_from_name(name: &str) -> Result<&'static CurveParameters, AlgebraError> {
    let normalized = normalize_name(name);
    let curve = supported_curves()
        .into_iter()
        .find(|c| aliases(c.id).contains(&normalized.as_str()));
    debug!("curve lookup by name {:?}: {:?}", name, curve.map(|c| c.id));
    curve.ok_or_else(|| AlgebraError::CurveNotSupported(name.to_owned()))
}

pub fn get_curve_from_q(q: &BigUint) -> Result<&'static CurveParameters, AlgebraError> {
    let curve = supported_curves().into_iter().find(|c| &c.q == q);
    debug!("curve lookup by base field modulus: {:?}", curve.map(|c| c.id));
    curve.ok_or_else(|| AlgebraError::CurveNotSupported(format!("q = {}", q)))
}

pub fn get_curve_from_r(r: &BigUint) -> Result<&'static CurveParameters, AlgebraError> {
    let curve = supported_curves().into_iter().find(|c| &c.r == r);
    debug!("curve lookup by group order: {:?}", curve.map(|c| c.id));
    curve.ok_or_else(|| AlgebraError::CurveNotSupported(format!("r = {}", r)))
}
