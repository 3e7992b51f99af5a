//! Word-level arithmetic on magnitudes.
//!
//! A magnitude is a little-endian slice of 64-bit words (`mag[0]` is least
//! significant). Magnitudes are not required to be canonical: high zero words
//! may be present and every helper here behaves as if they were absent.

use std::cmp::Ordering;

// ============================================================================
// Low-level helpers
// ============================================================================

/// Add with carry: (result, carry) = a + b + carry_in
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let tmp = a as u128 + b as u128 + carry as u128;
    (tmp as u64, (tmp >> 64) as u64)
}

/// Subtract with borrow: (result, borrow) = a - b - borrow_in
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let tmp = (a as u128)
        .wrapping_sub(b as u128)
        .wrapping_sub(borrow as u128);
    (tmp as u64, (tmp >> 127) as u64)
}

/// Multiply-accumulate: (lo, carry) = a * b + c + carry_in
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let tmp = a as u128 * b as u128 + c as u128 + carry as u128;
    (tmp as u64, (tmp >> 64) as u64)
}

// ============================================================================
// Inspection
// ============================================================================

/// Number of words up to and including the most significant non-zero word.
#[inline]
pub(crate) fn significant_len(mag: &[u64]) -> usize {
    mag.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1)
}

#[inline]
pub(crate) fn is_zero_magnitude(mag: &[u64]) -> bool {
    mag.iter().all(|&w| w == 0)
}

/// Drop high zero words, keeping at least one word.
pub(crate) fn trim(mut mag: Vec<u64>) -> Vec<u64> {
    mag.truncate(significant_len(&mag).max(1));
    if mag.is_empty() {
        mag.push(0);
    }
    mag
}

/// Compare two magnitudes numerically, ignoring high zero words.
pub(crate) fn cmp_magnitudes(a: &[u64], b: &[u64]) -> Ordering {
    let la = significant_len(a);
    let lb = significant_len(b);
    la.cmp(&lb)
        .then_with(|| a[..la].iter().rev().cmp(b[..lb].iter().rev()))
}

// ============================================================================
// Arithmetic
// ============================================================================

/// `a + b`. The shorter operand is treated as zero-padded; a final carry
/// appends one word.
pub(crate) fn add_magnitudes(a: &[u64], b: &[u64]) -> Vec<u64> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut sum = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u64;
    for (i, &word) in long.iter().enumerate() {
        let (r, c) = adc(word, short.get(i).copied().unwrap_or(0), carry);
        sum.push(r);
        carry = c;
    }
    if carry != 0 {
        sum.push(carry);
    }
    sum
}

/// `|left - right|`, plus whether `left < right`.
///
/// The result has the numerically larger operand's length and is not
/// trimmed, so an exact cancellation leaves zero words behind.
pub(crate) fn sub_magnitudes(left: &[u64], right: &[u64]) -> (Vec<u64>, bool) {
    let left_smaller = cmp_magnitudes(left, right) == Ordering::Less;
    let (large, small) = if left_smaller {
        (right, left)
    } else {
        (left, right)
    };

    let mut diff = Vec::with_capacity(large.len());
    let mut borrow = 0u64;
    for (i, &word) in large.iter().enumerate() {
        let (r, b) = sbb(word, small.get(i).copied().unwrap_or(0), borrow);
        diff.push(r);
        borrow = b;
    }
    debug_assert_eq!(borrow, 0, "larger magnitude must absorb every borrow");
    (diff, left_smaller)
}

/// `floor(mag / 2)`: shift right by one bit, moving each dropped low bit into
/// the top of the next less significant word. Length is preserved.
pub(crate) fn halve(mag: &[u64]) -> Vec<u64> {
    let mut res = mag.to_vec();
    let mut carry = 0u64;
    for word in res.iter_mut().rev() {
        let next_carry = *word & 1;
        *word = (*word >> 1) | (carry << 63);
        carry = next_carry;
    }
    res
}

/// Schoolbook product, trimmed to its significant words.
pub(crate) fn mul_magnitudes(a: &[u64], b: &[u64]) -> Vec<u64> {
    let a = &a[..significant_len(a)];
    let b = &b[..significant_len(b)];
    if a.is_empty() || b.is_empty() {
        return vec![0];
    }

    let mut wide = vec![0u64; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &y) in b.iter().enumerate() {
            let (lo, hi) = mac(x, y, wide[i + j], carry);
            wide[i + j] = lo;
            carry = hi;
        }
        wide[i + b.len()] = carry;
    }
    trim(wide)
}

/// `mag << n`. Whole words are prepended as zeros, the remaining bits are
/// carried upward word by word and a non-zero final carry appends one word.
pub(crate) fn shl_magnitude(mag: &[u64], n: usize) -> Vec<u64> {
    let word_shift = n / 64;
    let bit_shift = (n % 64) as u32;

    let mut shifted = Vec::with_capacity(mag.len() + word_shift + 1);
    shifted.resize(word_shift, 0);
    if bit_shift == 0 {
        shifted.extend_from_slice(mag);
        return shifted;
    }

    let mut carry = 0u64;
    for &word in mag {
        shifted.push((word << bit_shift) | carry);
        carry = word >> (64 - bit_shift);
    }
    if carry != 0 {
        shifted.push(carry);
    }
    shifted
}

/// `floor(dividend / divisor)` by binary search over `[0, dividend + 1)`.
///
/// The caller guarantees `divisor` is non-zero. Each iteration either narrows
/// the interval or stops: on an exact product, or when `mid` equals `low` and
/// no further progress is possible.
pub(crate) fn div_magnitudes(dividend: &[u64], divisor: &[u64]) -> Vec<u64> {
    debug_assert!(!is_zero_magnitude(divisor));
    const ONE: [u64; 1] = [1];

    let mut low = vec![0u64];
    let mut high = add_magnitudes(dividend, &ONE);
    let mut iterations = 0usize;
    let mut exact = false;

    while cmp_magnitudes(&add_magnitudes(&low, &ONE), &high) == Ordering::Less {
        iterations += 1;
        let mid = trim(halve(&add_magnitudes(&low, &high)));
        let product = mul_magnitudes(divisor, &mid);

        match cmp_magnitudes(&product, dividend) {
            Ordering::Greater => high = mid,
            Ordering::Less => {
                if cmp_magnitudes(&low, &mid) == Ordering::Equal {
                    break;
                }
                low = mid;
            }
            Ordering::Equal => {
                low = mid;
                exact = true;
                break;
            }
        }
    }

    tracing::trace!(iterations, exact, "quotient search finished");
    trim(low)
}

// ============================================================================
// Tests
// ============================================================================
