use core::cmp::Ordering;
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Div, Mul, Neg, Sub};
use core::str::FromStr;

pub use num_bigint::ToBigInt;
pub use num_traits::{One, ToPrimitive, Zero};

use num_bigint::{BigInt, BigUint, Sign};

use crate::{DivisionError, ParseIntError};

/// An arbitrary-precision signed integer which is always present.
///
/// This is the concrete half of [`MaybeInt`](crate::MaybeInt); the raw `BigInt` accessors
/// live here so that they can only be reached once absence has been ruled out.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Int(BigInt);
impl Int {
    #[inline]
    pub fn new(i: i64) -> Self {
        Self(BigInt::from(i))
    }

    pub fn abs(&self) -> Self {
        match self.0.sign() {
            Sign::Minus => Self(-&self.0),
            _ => self.clone(),
        }
    }

    /// Returns -1, 0 or 1 depending on the sign of this integer
    pub fn signum(&self) -> i32 {
        match self.0.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Determines the fewest bits necessary to express this integer value, not including the sign
    pub fn bits(&self) -> u64 {
        self.0.bits()
    }

    /// Converts to `u64` by keeping the low 64 bits of the two's complement representation.
    ///
    /// This never fails: `-1` becomes `u64::MAX` and `2^64 + 5` becomes `5`. Use
    /// [`ToPrimitive::to_u64`] when an out-of-range value must be detected.
    pub fn to_u64_wrapping(&self) -> u64 {
        let (sign, digits) = self.0.to_u64_digits();
        let low = digits.first().copied().unwrap_or(0);
        match sign {
            Sign::Minus => low.wrapping_neg(),
            _ => low,
        }
    }

    /// Lossy conversion to the nearest `f64`, saturating to infinity
    pub fn to_float(&self) -> f64 {
        self.0.to_f64().unwrap_or(match self.0.sign() {
            Sign::Minus => f64::NEG_INFINITY,
            _ => f64::INFINITY,
        })
    }

    /// Borrow the underlying arbitrary-precision integer
    #[inline(always)]
    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    #[inline(always)]
    pub fn into_bigint(self) -> BigInt {
        self.0
    }

    /// Returns this integer as an exact arbitrary-precision decimal with a scale of zero
    #[cfg(feature = "bigfloat")]
    pub fn to_bigdecimal(&self) -> bigdecimal::BigDecimal {
        bigdecimal::BigDecimal::new(self.0.clone(), 0)
    }
}

fn is_decimal_literal(digits: &str) -> bool {
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for Int {
    type Err = ParseIntError;

    /// Parses `[+-]?[0-9]+` in base 10; whitespace and digit separators are rejected
    fn from_str(s: &str) -> Result<Self, ParseIntError> {
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Self::new(i));
        }

        let (sign, digits) = match s.as_bytes().first() {
            Some(b'-') => (Sign::Minus, &s[1..]),
            Some(b'+') => (Sign::Plus, &s[1..]),
            _ => (Sign::Plus, s),
        };
        if !is_decimal_literal(digits) {
            return Err(ParseIntError::new(s));
        }
        let magnitude =
            BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(|| ParseIntError::new(s))?;
        Ok(Self(BigInt::from_biguint(sign, magnitude)))
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl PartialEq<i64> for Int {
    fn eq(&self, rhs: &i64) -> bool {
        match self.0.to_i64() {
            Some(lhs) => lhs.eq(rhs),
            None => false,
        }
    }
}
impl PartialEq<Int> for i64 {
    fn eq(&self, rhs: &Int) -> bool {
        rhs.eq(self)
    }
}
impl PartialOrd<i64> for Int {
    fn partial_cmp(&self, rhs: &i64) -> Option<Ordering> {
        match self.0.to_i64() {
            Some(lhs) => lhs.partial_cmp(rhs),
            None => Some(self.0.sign().cmp(&Sign::NoSign)),
        }
    }
}
impl PartialOrd<Int> for i64 {
    fn partial_cmp(&self, rhs: &Int) -> Option<Ordering> {
        rhs.partial_cmp(self).map(|v| v.reverse())
    }
}

impl Add for Int {
    type Output = Int;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
impl Add<&Int> for Int {
    type Output = Int;

    fn add(self, rhs: &Self) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}
impl Add<&Int> for &Int {
    type Output = Int;

    fn add(self, rhs: &Int) -> Self::Output {
        Int(&self.0 + &rhs.0)
    }
}

impl Sub for Int {
    type Output = Int;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}
impl Sub<&Int> for Int {
    type Output = Int;

    fn sub(self, rhs: &Self) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}
impl Sub<&Int> for &Int {
    type Output = Int;

    fn sub(self, rhs: &Int) -> Self::Output {
        Int(&self.0 - &rhs.0)
    }
}

impl Mul for Int {
    type Output = Int;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}
impl Mul<&Int> for Int {
    type Output = Int;

    fn mul(self, rhs: &Self) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}
impl Mul<&Int> for &Int {
    type Output = Int;

    fn mul(self, rhs: &Int) -> Self::Output {
        Int(&self.0 * &rhs.0)
    }
}

/// Truncating division, rounding toward zero
impl Div for Int {
    type Output = Result<Int, DivisionError>;

    fn div(self, rhs: Self) -> Self::Output {
        self.div(&rhs)
    }
}
impl Div<&Int> for Int {
    type Output = Result<Int, DivisionError>;

    fn div(self, rhs: &Self) -> Self::Output {
        if rhs.0.is_zero() {
            return Err(DivisionError);
        }
        Ok(Self(self.0 / &rhs.0))
    }
}
impl Div<&Int> for &Int {
    type Output = Result<Int, DivisionError>;

    fn div(self, rhs: &Int) -> Self::Output {
        if rhs.0.is_zero() {
            return Err(DivisionError);
        }
        Ok(Int(&self.0 / &rhs.0))
    }
}

impl Neg for Int {
    type Output = Int;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
impl Neg for &Int {
    type Output = Int;

    fn neg(self) -> Self::Output {
        Int(-&self.0)
    }
}

impl Sum for Int {
    fn sum<I: Iterator<Item = Int>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, i| acc + i)
    }
}
impl<'a> Sum<&'a Int> for Int {
    fn sum<I: Iterator<Item = &'a Int>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, i| acc + i)
    }
}

impl Zero for Int {
    #[inline]
    fn zero() -> Self {
        Self(BigInt::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}
impl One for Int {
    #[inline]
    fn one() -> Self {
        Self(BigInt::one())
    }
}

impl ToBigInt for Int {
    fn to_bigint(&self) -> Option<BigInt> {
        Some(self.0.clone())
    }
}

impl ToPrimitive for Int {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.0.to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        self.0.to_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Int {
                #[inline(always)]
                fn from(i: $ty) -> Self {
                    Self(BigInt::from(i))
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Int {
    #[inline]
    fn from(i: BigInt) -> Self {
        Self(i)
    }
}
impl From<BigUint> for Int {
    #[inline]
    fn from(i: BigUint) -> Self {
        Self(i.into())
    }
}
impl From<Int> for BigInt {
    #[inline]
    fn from(i: Int) -> Self {
        i.0
    }
}
impl TryFrom<Int> for i64 {
    type Error = ();
    fn try_from(i: Int) -> Result<i64, Self::Error> {
        i.0.to_i64().ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn int(s: &str) -> Int {
        s.parse().unwrap()
    }

    #[test]
    fn integer_parse_accepts_signed_decimal_literals() {
        assert_eq!(int("123"), Int::new(123));
        assert_eq!(int("+7"), Int::new(7));
        assert_eq!(int("-42"), Int::new(-42));
        assert_eq!(int("-0"), Int::zero());
        assert_eq!(int("007"), Int::new(7));

        let big = int("123456789012345678901234567890");
        assert_eq!(big.to_string(), "123456789012345678901234567890");
        let negative_big = int("-123456789012345678901234567890");
        assert_eq!(negative_big.to_string(), "-123456789012345678901234567890");
        let signed_big = int("+99999999999999999999");
        assert_eq!(signed_big.to_string(), "99999999999999999999");
    }

    #[test]
    fn integer_parse_rejects_malformed_literals() {
        for input in [
            "",
            "-",
            "+",
            "12x",
            "--1",
            "+-1",
            "-+1",
            " 1",
            "1 ",
            "1_000",
            "1_000_000_000_000_000_000_000",
            "0x10",
            "1.5",
            "99999999999999999999a",
        ] {
            let err = input.parse::<Int>().unwrap_err();
            assert_eq!(err.text(), input);
        }
    }

    #[test]
    fn integer_arithmetic() {
        assert_eq!(Int::new(1) + Int::new(2), Int::new(3));
        assert_eq!(Int::new(5) - Int::new(2), Int::new(3));
        assert_eq!(&Int::new(2) - &Int::new(5), Int::new(-3));
        assert_eq!(Int::new(5) * Int::new(2), Int::new(10));
        assert_eq!(Int::new(10) / Int::new(2), Ok(Int::new(5)));
        assert_eq!(-Int::new(4), Int::new(-4));

        let max = Int::from(u64::MAX);
        assert_eq!((&max + &Int::one()).to_string(), "18446744073709551616");
        assert_eq!((&max * &max).to_string(), "340282366920938463426481119284349108225");
    }

    #[test]
    fn integer_division_truncates_toward_zero() {
        assert_eq!(Int::new(7) / Int::new(2), Ok(Int::new(3)));
        assert_eq!(Int::new(-7) / Int::new(2), Ok(Int::new(-3)));
        assert_eq!(Int::new(7) / Int::new(-2), Ok(Int::new(-3)));
        assert_eq!(&Int::new(-7) / &Int::new(-2), Ok(Int::new(3)));
    }

    #[test]
    fn integer_division_by_zero_is_an_error() {
        assert_eq!(Int::new(1) / Int::zero(), Err(DivisionError));
        assert_eq!(&Int::zero() / &Int::zero(), Err(DivisionError));
    }

    #[test]
    fn integer_ordering() {
        assert!(Int::new(-1) < Int::new(0));
        assert!(int("100000000000000000000") > Int::new(i64::MAX));
        assert!(int("-100000000000000000000") < Int::new(i64::MIN));
        assert_eq!(Int::new(3), 3i64);
        assert!(int("100000000000000000000") > 0i64);
        assert!(int("-100000000000000000000") < i64::MIN);
        assert!(5i64 > Int::new(4));
    }

    #[test]
    fn integer_to_u64_wrapping() {
        assert_eq!(Int::new(123).to_u64_wrapping(), 123);
        assert_eq!(Int::zero().to_u64_wrapping(), 0);
        assert_eq!(Int::new(-1).to_u64_wrapping(), u64::MAX);
        assert_eq!(Int::new(i64::MIN).to_u64_wrapping(), 1 << 63);
        assert_eq!(int("18446744073709551621").to_u64_wrapping(), 5);
        assert_eq!(int("-18446744073709551617").to_u64_wrapping(), u64::MAX);

        assert_eq!(Int::new(-1).to_u64(), None);
        assert_eq!(int("18446744073709551616").to_u64(), None);
        assert_eq!(Int::new(9).to_u64(), Some(9));
    }

    #[test]
    fn integer_helpers() {
        assert_eq!(Int::new(-5).abs(), Int::new(5));
        assert_eq!(Int::new(-5).signum(), -1);
        assert_eq!(Int::zero().signum(), 0);
        assert_eq!(Int::new(8).bits(), 4);
        assert!(Int::zero().is_zero());
        assert_eq!(Int::new(-2).to_float(), -2.0);
        assert_eq!(Int::new(12).as_bigint(), &BigInt::from(12));
        assert_eq!(i64::try_from(Int::new(12)), Ok(12));
        assert_eq!(i64::try_from(int("100000000000000000000")), Err(()));
    }

    #[test]
    fn integer_sum() {
        let values = [Int::new(1), Int::new(2), Int::new(3)];
        assert_eq!(values.iter().sum::<Int>(), Int::new(6));
        assert_eq!(Vec::<Int>::new().into_iter().sum::<Int>(), Int::zero());
    }

    #[cfg(feature = "bigfloat")]
    #[test]
    fn integer_to_bigdecimal_is_exact() {
        let value = int("123456789012345678901234567890");
        let decimal = value.to_bigdecimal();
        assert!(decimal.is_integer());
        assert_eq!(
            decimal.into_bigint_and_exponent(),
            (value.into_bigint(), 0)
        );
    }
}
