//! Finite fields, short Weierstrass curves and optimal-Ate pairings for BN254 and
//! BLS12-381, together with multi-scalar multiplication, radix-2 FFTs and the
//! byte-buffer batch routines built on top of them.
#![forbid(unsafe_code)]
#![allow(clippy::op_ref, clippy::suspicious_op_assign_impl, clippy::many_single_char_names)]

#[macro_use]
extern crate derivative;

#[macro_use]
extern crate bench_utils;

#[macro_use]
extern crate log;

// Iterator constructors that switch to rayon under the `parallel` feature. Call
// sites import `rayon::prelude::*` behind the same feature.
#[cfg(feature = "parallel")]
macro_rules! cfg_iter_mut {
    ($e: expr) => {
        $e.par_iter_mut()
    };
}

#[cfg(not(feature = "parallel"))]
macro_rules! cfg_iter_mut {
    ($e: expr) => {
        $e.iter_mut()
    };
}

#[cfg(feature = "parallel")]
macro_rules! cfg_into_iter {
    ($e: expr) => {
        $e.into_par_iter()
    };
}

#[cfg(not(feature = "parallel"))]
macro_rules! cfg_into_iter {
    ($e: expr) => {
        $e.into_iter()
    };
}

#[cfg(feature = "parallel")]
macro_rules! cfg_chunks_mut {
    ($e: expr, $size: expr) => {
        $e.par_chunks_mut($size)
    };
}

#[cfg(not(feature = "parallel"))]
macro_rules! cfg_chunks_mut {
    ($e: expr, $size: expr) => {
        $e.chunks_mut($size)
    };
}

#[macro_use]
pub mod bytes;
pub use self::bytes::*;

pub mod error;
pub use self::error::*;

pub mod rand;
pub use self::rand::*;

#[macro_use]
pub mod biginteger;
pub use self::biginteger::*;

#[macro_use]
pub mod fields;
pub use self::fields::*;

pub mod curves;
pub use self::curves::*;

pub mod msm;
pub use self::msm::*;

pub mod fft;
pub use self::fft::*;

pub mod batch;

#[cfg(test)]
mod tests;
