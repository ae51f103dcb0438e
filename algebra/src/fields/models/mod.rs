//! Montgomery arithmetic for large integers and models of extension fields.
//!
//! - Fp256 and Fp384 capturing moduli of length 4 and 6 words of 64 bits,
//! - quadratic extensions of prime fields, degree 6 and 12 extensions by towering.

#[macro_use]
mod fp_macros;

pub mod fp_256;
pub use self::fp_256::*;

pub mod fp_384;
pub use self::fp_384::*;

pub mod fp2;
pub use self::fp2::*;

pub mod fp6_3over2;

pub mod fp12_2over3over2;
