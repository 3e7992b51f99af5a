//! Operator, ordering and conversion trait impls.
//!
//! Only the infallible operations get operator traits. Division and left
//! shift can fail and stay as [`BigInt::divide`] and [`BigInt::shift_left`].

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use crate::bigint::BigInt;
use crate::limbs::significant_len;

// ============================================================================
// Equality, ordering, hashing
// ============================================================================

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // High zero words are not part of the value.
        self.negative.hash(state);
        self.magnitude[..significant_len(&self.magnitude)].hash(state);
    }
}

// ============================================================================
// Arithmetic operators
// ============================================================================

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negate()
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negate()
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $inherent:ident) => {
        impl $trait<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::$inherent(self, rhs)
            }
        }

        impl $trait<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::$inherent(self, &rhs)
            }
        }

        impl $trait<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::$inherent(&self, rhs)
            }
        }

        impl $trait<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::$inherent(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, subtract);
forward_binop!(Mul, mul, multiply);

// ============================================================================
// Conversions
// ============================================================================

impl From<u64> for BigInt {
    fn from(val: u64) -> Self {
        BigInt::from_u64(val, false)
    }
}

impl From<i64> for BigInt {
    fn from(val: i64) -> Self {
        BigInt::from_u64(val.unsigned_abs(), val < 0)
    }
}

// ============================================================================
// Tests
// ============================================================================
