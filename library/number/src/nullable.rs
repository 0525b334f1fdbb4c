use core::cmp::Ordering;
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_traits::Zero;

use crate::{DivisionError, Int};

/// An arbitrary-precision integer which may be absent.
///
/// Absence is a value in its own right and is distinct from zero. The arithmetic operators
/// treat it in one of two ways:
///
/// * `+` and `-` treat an absent operand as zero, so a running total which has not yet seen
///   a value stays absent, and `Absent - x` is `-x`
/// * `*` and `/` absorb it, an unknown factor makes the product or quotient unknown
///
/// For ordering, `Absent` sorts before every present value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum MaybeInt {
    #[default]
    Absent,
    Present(Int),
}
impl MaybeInt {
    #[inline]
    pub fn new(i: i64) -> Self {
        Self::Present(Int::new(i))
    }

    /// Parses a base-10 literal, reporting success through the returned flag.
    ///
    /// Malformed input yields `(MaybeInt::Absent, false)`.
    pub fn parse(s: &str) -> (Self, bool) {
        match s.parse::<Int>() {
            Ok(i) => (Self::Present(i), true),
            Err(_) => (Self::Absent, false),
        }
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrow the present value, if any
    #[inline]
    pub fn as_int(&self) -> Option<&Int> {
        match self {
            Self::Present(i) => Some(i),
            Self::Absent => None,
        }
    }

    #[inline]
    pub fn into_option(self) -> Option<Int> {
        self.into()
    }

    pub fn unwrap_or_zero(self) -> Int {
        match self {
            Self::Present(i) => i,
            Self::Absent => Int::zero(),
        }
    }

    /// Same as [`Int::to_u64_wrapping`], with an absent value mapping to 0
    pub fn to_u64_wrapping(&self) -> u64 {
        match self {
            Self::Present(i) => i.to_u64_wrapping(),
            Self::Absent => 0,
        }
    }

    /// Compares two values, returning -1, 0 or +1
    pub fn cmp_sign(&self, other: &Self) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl fmt::Display for MaybeInt {
    /// An absent value renders as the empty string
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Present(i) => fmt::Display::fmt(i, f),
            Self::Absent => Ok(()),
        }
    }
}

impl Ord for MaybeInt {
    fn cmp(&self, rhs: &Self) -> Ordering {
        match (self, rhs) {
            (Self::Absent, Self::Absent) => Ordering::Equal,
            (Self::Absent, Self::Present(_)) => Ordering::Less,
            (Self::Present(_), Self::Absent) => Ordering::Greater,
            (Self::Present(lhs), Self::Present(rhs)) => lhs.cmp(rhs),
        }
    }
}
impl PartialOrd for MaybeInt {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Add for MaybeInt {
    type Output = MaybeInt;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Absent, Self::Absent) => Self::Absent,
            (Self::Absent, rhs) => rhs,
            (lhs, Self::Absent) => lhs,
            (Self::Present(lhs), Self::Present(rhs)) => Self::Present(lhs + rhs),
        }
    }
}
impl Add<&MaybeInt> for MaybeInt {
    type Output = MaybeInt;

    fn add(self, rhs: &Self) -> Self::Output {
        match (self, rhs) {
            (Self::Absent, Self::Absent) => Self::Absent,
            (Self::Absent, rhs) => rhs.clone(),
            (lhs, Self::Absent) => lhs,
            (Self::Present(lhs), Self::Present(rhs)) => Self::Present(lhs + rhs),
        }
    }
}
impl Add<&MaybeInt> for &MaybeInt {
    type Output = MaybeInt;

    fn add(self, rhs: &MaybeInt) -> Self::Output {
        match (self, rhs) {
            (MaybeInt::Absent, MaybeInt::Absent) => MaybeInt::Absent,
            (MaybeInt::Absent, rhs) => rhs.clone(),
            (lhs, MaybeInt::Absent) => lhs.clone(),
            (MaybeInt::Present(lhs), MaybeInt::Present(rhs)) => MaybeInt::Present(lhs + rhs),
        }
    }
}

impl Sub for MaybeInt {
    type Output = MaybeInt;

    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Absent, Self::Absent) => Self::Absent,
            (Self::Absent, Self::Present(rhs)) => Self::Present(-rhs),
            (lhs, Self::Absent) => lhs,
            (Self::Present(lhs), Self::Present(rhs)) => Self::Present(lhs - rhs),
        }
    }
}
impl Sub<&MaybeInt> for MaybeInt {
    type Output = MaybeInt;

    fn sub(self, rhs: &Self) -> Self::Output {
        match (self, rhs) {
            (Self::Absent, Self::Absent) => Self::Absent,
            (Self::Absent, Self::Present(rhs)) => Self::Present(-rhs),
            (lhs, Self::Absent) => lhs,
            (Self::Present(lhs), Self::Present(rhs)) => Self::Present(lhs - rhs),
        }
    }
}
impl Sub<&MaybeInt> for &MaybeInt {
    type Output = MaybeInt;

    fn sub(self, rhs: &MaybeInt) -> Self::Output {
        match (self, rhs) {
            (MaybeInt::Absent, MaybeInt::Absent) => MaybeInt::Absent,
            (MaybeInt::Absent, MaybeInt::Present(rhs)) => MaybeInt::Present(-rhs),
            (lhs, MaybeInt::Absent) => lhs.clone(),
            (MaybeInt::Present(lhs), MaybeInt::Present(rhs)) => MaybeInt::Present(lhs - rhs),
        }
    }
}

impl Mul for MaybeInt {
    type Output = MaybeInt;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Present(lhs), Self::Present(rhs)) => Self::Present(lhs * rhs),
            _ => Self::Absent,
        }
    }
}
impl Mul<&MaybeInt> for MaybeInt {
    type Output = MaybeInt;

    fn mul(self, rhs: &Self) -> Self::Output {
        match (self, rhs) {
            (Self::Present(lhs), Self::Present(rhs)) => Self::Present(lhs * rhs),
            _ => Self::Absent,
        }
    }
}
impl Mul<&MaybeInt> for &MaybeInt {
    type Output = MaybeInt;

    fn mul(self, rhs: &MaybeInt) -> Self::Output {
        match (self, rhs) {
            (MaybeInt::Present(lhs), MaybeInt::Present(rhs)) => MaybeInt::Present(lhs * rhs),
            _ => MaybeInt::Absent,
        }
    }
}

/// Truncating division; a zero divisor is only an error when both sides are present
impl Div for MaybeInt {
    type Output = Result<MaybeInt, DivisionError>;

    fn div(self, rhs: Self) -> Self::Output {
        self.div(&rhs)
    }
}
impl Div<&MaybeInt> for MaybeInt {
    type Output = Result<MaybeInt, DivisionError>;

    fn div(self, rhs: &Self) -> Self::Output {
        match (self, rhs) {
            (Self::Present(lhs), Self::Present(rhs)) => (lhs / rhs).map(Self::Present),
            _ => Ok(Self::Absent),
        }
    }
}
impl Div<&MaybeInt> for &MaybeInt {
    type Output = Result<MaybeInt, DivisionError>;

    fn div(self, rhs: &MaybeInt) -> Self::Output {
        match (self, rhs) {
            (MaybeInt::Present(lhs), MaybeInt::Present(rhs)) => {
                (lhs / rhs).map(MaybeInt::Present)
            }
            _ => Ok(MaybeInt::Absent),
        }
    }
}

impl Neg for MaybeInt {
    type Output = MaybeInt;

    fn neg(self) -> Self::Output {
        match self {
            Self::Present(i) => Self::Present(-i),
            Self::Absent => Self::Absent,
        }
    }
}
impl Neg for &MaybeInt {
    type Output = MaybeInt;

    fn neg(self) -> Self::Output {
        match self {
            MaybeInt::Present(i) => MaybeInt::Present(-i),
            MaybeInt::Absent => MaybeInt::Absent,
        }
    }
}

impl Sum for MaybeInt {
    fn sum<I: Iterator<Item = MaybeInt>>(iter: I) -> Self {
        iter.fold(Self::Absent, |acc, i| acc + i)
    }
}
impl<'a> Sum<&'a MaybeInt> for MaybeInt {
    fn sum<I: Iterator<Item = &'a MaybeInt>>(iter: I) -> Self {
        iter.fold(Self::Absent, |acc, i| acc + i)
    }
}

impl From<Int> for MaybeInt {
    #[inline]
    fn from(i: Int) -> Self {
        Self::Present(i)
    }
}
impl From<Option<Int>> for MaybeInt {
    #[inline]
    fn from(i: Option<Int>) -> Self {
        match i {
            Some(i) => Self::Present(i),
            None => Self::Absent,
        }
    }
}
impl From<MaybeInt> for Option<Int> {
    #[inline]
    fn from(i: MaybeInt) -> Self {
        match i {
            MaybeInt::Present(i) => Some(i),
            MaybeInt::Absent => None,
        }
    }
}
impl From<i64> for MaybeInt {
    #[inline]
    fn from(i: i64) -> Self {
        Self::new(i)
    }
}
impl From<BigInt> for MaybeInt {
    #[inline]
    fn from(i: BigInt) -> Self {
        Self::Present(i.into())
    }
}
