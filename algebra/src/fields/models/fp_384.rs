use crate::{
    biginteger::{arithmetic as fa, BigInteger as _BigInteger, BigInteger384 as BigInteger},
    bytes::{FromBytes, ToBytes},
    error::AlgebraError,
    fields::{Field, FieldEncoding, FpParameters, LegendreSymbol, PrimeField, SqrtAlgorithm, SquareRootField},
};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
    io::{Read, Result as IoResult, Write},
    marker::PhantomData,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};
use unroll::unroll_for_loops;

impl_Fp!(Fp384, Fp384Parameters, BigInteger, 6);
