//! Base field Fq, scalar field Fr, and embedding field Fq12 for the BLS12-381.
//!
//! The construction of the degree 12 extension of Fq (with q=1 mod 6) is based on a
//! non-square and non-cube from a quadratic extension:
//! Fq2 = Fq[u]/(u^2 + 1), Fq6 = Fq2[v]/(v^3 - (1 + u)), Fq12 = Fq6[w]/(w^2 - v).

pub mod fr;
pub use self::fr::*;

pub mod fq;
pub use self::fq::*;

pub mod fq2;
pub use self::fq2::*;

pub mod fq6;
pub use self::fq6::*;

pub mod fq12;
pub use self::fq12::*;
