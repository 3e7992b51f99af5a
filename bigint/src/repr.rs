//! Serialized form of [`BigInt`].
//!
//! Values serialize as `{ "negative": bool, "magnitude": [u64, ...] }` with
//! the words least significant first. Deserialization goes through
//! [`BigInt::from_words`], so a zero magnitude never comes back negative.

use serde::{Deserialize, Serialize};

use crate::bigint::BigInt;

#[derive(Serialize, Deserialize)]
pub(crate) struct BigIntRepr {
    negative: bool,
    magnitude: Vec<u64>,
}

impl From<BigInt> for BigIntRepr {
    fn from(value: BigInt) -> Self {
        Self {
            negative: value.negative,
            magnitude: value.magnitude,
        }
    }
}

impl From<BigIntRepr> for BigInt {
    fn from(repr: BigIntRepr) -> Self {
        BigInt::from_words(repr.magnitude, repr.negative)
    }
}
