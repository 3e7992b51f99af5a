//! Arbitrary-precision signed integer.
//!
//! A value is a sign flag plus a little-endian sequence of 64-bit words.
//! Operations never mutate their operands; each returns a new `BigInt`.

use std::cmp::Ordering;

use crate::error::{BigIntError, Result};
use crate::limbs::{
    add_magnitudes, cmp_magnitudes, div_magnitudes, is_zero_magnitude, mul_magnitudes,
    shl_magnitude, sub_magnitudes,
};

/// Arbitrary-precision signed integer.
///
/// The magnitude is stored least significant word first and is not kept in
/// canonical form: subtraction may leave high zero words behind. Comparison,
/// equality, hashing, bit tests and formatting all ignore them.
///
/// Zero is never negative.
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "crate::repr::BigIntRepr", into = "crate::repr::BigIntRepr")
)]
pub struct BigInt {
    pub(crate) magnitude: Vec<u64>,
    pub(crate) negative: bool,
}

// ============================================================================
// Construction and accessors
// ============================================================================

impl BigInt {
    /// Create a zero BigInt: a single zero word, non-negative.
    pub fn new() -> Self {
        Self {
            magnitude: vec![0],
            negative: false,
        }
    }

    /// Alias for [`BigInt::new`].
    #[inline]
    pub fn zero() -> Self {
        Self::new()
    }

    /// Create a single-word BigInt.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let b = BigInt::from_u64(9, true);
    /// assert_eq!(b.get_bit_vector(), &[9]);
    /// assert!(b.is_negative());
    /// assert!(!BigInt::from_u64(0, true).is_negative());
    /// ```
    pub fn from_u64(val: u64, negative: bool) -> Self {
        Self::from_parts(vec![val], negative)
    }

    /// Create a BigInt from raw words (least significant first).
    ///
    /// The words are stored exactly as given, including any high zero words.
    /// An empty list is stored as a single zero word.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let two_pow_64 = BigInt::from_words(vec![0, 1], false);
    /// assert_eq!(two_pow_64.get_bits(1), 1);
    /// assert_eq!(two_pow_64.to_hex(), "10000000000000000");
    /// ```
    pub fn from_words(words: impl Into<Vec<u64>>, negative: bool) -> Self {
        let mut magnitude = words.into();
        if magnitude.is_empty() {
            magnitude.push(0);
        }
        Self::from_parts(magnitude, negative)
    }

    /// Every value is built here so that a zero magnitude is never negative.
    #[inline]
    pub(crate) fn from_parts(magnitude: Vec<u64>, negative: bool) -> Self {
        let negative = negative && !is_zero_magnitude(&magnitude);
        Self {
            magnitude,
            negative,
        }
    }

    /// The word at `index`, or 0 past the end of the stored words.
    #[inline]
    pub fn get_bits(&self, index: usize) -> u64 {
        self.magnitude.get(index).copied().unwrap_or(0)
    }

    /// The stored words, least significant first, as they are held
    /// internally (high zero words included).
    #[inline]
    pub fn get_bit_vector(&self) -> &[u64] {
        &self.magnitude
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Whether every word of the magnitude is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        is_zero_magnitude(&self.magnitude)
    }

    /// Test bit `n` of the magnitude. Positions past the stored words are
    /// clear.
    pub fn is_bit_set(&self, n: u64) -> bool {
        let Ok(index) = usize::try_from(n / 64) else {
            return false;
        };
        let bit = n % 64;
        match self.magnitude.get(index) {
            Some(word) => (word >> bit) & 1 == 1,
            None => false,
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl BigInt {
    /// Flip the sign. Zero is returned unchanged.
    pub fn negate(&self) -> Self {
        Self::from_parts(self.magnitude.clone(), !self.negative)
    }

    /// Signed addition.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let r = BigInt::from_u64(3, false).add(&BigInt::from_u64(9, true));
    /// assert_eq!(r.get_bit_vector(), &[6]);
    /// assert!(r.is_negative());
    /// ```
    pub fn add(&self, rhs: &Self) -> Self {
        match (self.negative, rhs.negative) {
            // a + (-b) = a - |b|
            (false, true) => Self::difference(&self.magnitude, &rhs.magnitude),
            // (-a) + b = b - |a|
            (true, false) => Self::difference(&rhs.magnitude, &self.magnitude),
            (negative, _) => Self::sum(&self.magnitude, &rhs.magnitude, negative),
        }
    }

    /// Signed subtraction: `self + (-rhs)`.
    pub fn subtract(&self, rhs: &Self) -> Self {
        match (self.negative, rhs.negative) {
            (false, false) => Self::difference(&self.magnitude, &rhs.magnitude),
            // -a - (-b) = b - a
            (true, true) => Self::difference(&rhs.magnitude, &self.magnitude),
            (negative, _) => Self::sum(&self.magnitude, &rhs.magnitude, negative),
        }
    }

    fn sum(left: &[u64], right: &[u64], negative: bool) -> Self {
        Self::from_parts(add_magnitudes(left, right), negative)
    }

    /// `left - right` on magnitudes, negative when `left < right`.
    fn difference(left: &[u64], right: &[u64]) -> Self {
        let (magnitude, negative) = sub_magnitudes(left, right);
        Self::from_parts(magnitude, negative)
    }

    /// Signed multiplication. A zero operand gives non-negative zero.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let max = BigInt::from_u64(u64::MAX, false);
    /// let sq = max.multiply(&max);
    /// assert_eq!(sq.get_bit_vector(), &[1, 0xFFFF_FFFF_FFFF_FFFE]);
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::new();
        }
        Self::from_parts(
            mul_magnitudes(&self.magnitude, &rhs.magnitude),
            self.negative != rhs.negative,
        )
    }

    /// Truncating division (rounds toward zero).
    ///
    /// The quotient is `floor(|self| / |rhs|)` with sign `sign(self) XOR
    /// sign(rhs)`; a zero quotient is non-negative.
    ///
    /// ```
    /// use bigint::{BigInt, BigIntError};
    ///
    /// let q = BigInt::from_u64(9, true).divide(&BigInt::from_u64(2, false)).unwrap();
    /// assert_eq!(q.get_bit_vector(), &[4]);
    /// assert!(q.is_negative());
    ///
    /// let err = BigInt::from_u64(9, false).divide(&BigInt::zero());
    /// assert_eq!(err, Err(BigIntError::DivisionByZero));
    /// ```
    pub fn divide(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        Ok(Self::from_parts(
            div_magnitudes(&self.magnitude, &rhs.magnitude),
            self.negative != rhs.negative,
        ))
    }

    /// Shift left by `n` bits. Only defined for non-negative values.
    ///
    /// ```
    /// use bigint::{BigInt, BigIntError};
    ///
    /// let r = BigInt::from_u64(3, false).shift_left(63).unwrap();
    /// assert_eq!(r.get_bit_vector(), &[0x8000_0000_0000_0000, 1]);
    ///
    /// let err = BigInt::from_u64(9, true).shift_left(42);
    /// assert_eq!(err, Err(BigIntError::InvalidShift));
    /// ```
    pub fn shift_left(&self, n: usize) -> Result<Self> {
        if self.negative {
            return Err(BigIntError::InvalidShift);
        }
        Ok(Self::from_parts(shl_magnitude(&self.magnitude, n), false))
    }

    /// Total order: negatives below non-negatives, then by magnitude
    /// (reversed when both are negative).
    pub fn compare(&self, rhs: &Self) -> Ordering {
        match (self.negative, rhs.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => cmp_magnitudes(&self.magnitude, &rhs.magnitude),
            (true, true) => cmp_magnitudes(&self.magnitude, &rhs.magnitude).reverse(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
