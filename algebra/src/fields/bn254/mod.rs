//! Base field Fq, scalar field Fr, and the tower Fq2, Fq6, Fq12 of the BN254 curve.
//!
//! Fq2 = Fq[u]/(u^2 + 1), Fq6 = Fq2[v]/(v^3 - (9 + u)), Fq12 = Fq6[w]/(w^2 - v).

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

#[cfg(test)]
mod tests;
