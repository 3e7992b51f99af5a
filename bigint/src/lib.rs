//! Arbitrary-precision signed integers.
//!
//! [`BigInt`] stores a sign flag and a little-endian sequence of 64-bit words
//! and supports exact addition, subtraction, multiplication, truncating
//! division, left shift, comparison, bit inspection and hex/decimal output.
//!
//! ```
//! use bigint::BigInt;
//!
//! let max = BigInt::from_u64(u64::MAX, false);
//! let sum = &max + &BigInt::from(1u64);
//! assert_eq!(sum.get_bit_vector(), &[0, 1]);
//! assert_eq!(sum.to_dec(), "18446744073709551616");
//! ```

mod bigint;
pub mod error;
mod format;
mod limbs;
mod ops;
#[cfg(feature = "serde")]
mod repr;

pub use bigint::BigInt;
pub use error::{BigIntError, Result};
