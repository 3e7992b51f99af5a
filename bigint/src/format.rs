//! Hexadecimal and decimal text conversion.

use std::fmt;
use std::fmt::Write as _;

use crate::bigint::BigInt;
use crate::limbs::{
    div_magnitudes, is_zero_magnitude, mul_magnitudes, significant_len, sub_magnitudes,
};

const TEN: [u64; 1] = [10];

impl BigInt {
    /// Lowercase hex digits of the magnitude, no prefix, no padding.
    fn hex_digits(&self) -> String {
        let len = significant_len(&self.magnitude);
        if len == 0 {
            return "0".to_string();
        }
        let mut hex = String::with_capacity(len * 16);
        let mut words = self.magnitude[..len].iter().rev();
        if let Some(top) = words.next() {
            let _ = write!(hex, "{top:x}");
        }
        for word in words {
            let _ = write!(hex, "{word:016x}");
        }
        hex
    }

    /// Decimal digits of the magnitude by repeated division by ten.
    fn dec_digits(&self) -> String {
        let _span = tracing::trace_span!("to_dec", words = self.magnitude.len()).entered();
        if self.is_zero() {
            return "0".to_string();
        }

        // Digits come out least significant first.
        let mut value = self.magnitude.clone();
        let mut digits = String::new();
        while !is_zero_magnitude(&value) {
            let quotient = div_magnitudes(&value, &TEN);
            let (remainder, _) = sub_magnitudes(&value, &mul_magnitudes(&quotient, &TEN));
            digits.push(char::from(b'0' + remainder[0] as u8));
            value = quotient;
        }
        digits.chars().rev().collect()
    }

    /// Format as hex: most significant word first, first word unpadded, the
    /// rest zero-padded to 16 digits, `-` prefix when negative.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert_eq!(BigInt::zero().to_hex(), "0");
    /// assert_eq!(BigInt::from_u64(9, true).to_hex(), "-9");
    /// assert_eq!(BigInt::from_words(vec![0, 1, 0], false).to_hex(), "10000000000000000");
    /// ```
    pub fn to_hex(&self) -> String {
        let digits = self.hex_digits();
        if self.negative {
            format!("-{digits}")
        } else {
            digits
        }
    }

    /// Format as decimal.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from_u64(123456789, false).to_dec(), "123456789");
    /// assert_eq!(BigInt::from_u64(u64::MAX, true).to_dec(), "-18446744073709551615");
    /// ```
    pub fn to_dec(&self) -> String {
        let digits = self.dec_digits();
        if self.negative {
            format!("-{digits}")
        } else {
            digits
        }
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.dec_digits())
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0x", &self.hex_digits())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "BigInt(-0x{})", self.hex_digits())
        } else {
            write!(f, "BigInt(0x{})", self.hex_digits())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
