//! Property-based tests for BigInt arithmetic.
//!
//! Algebraic properties are checked directly, and every operation is checked
//! differentially against `num-bigint` on random multi-word operands.

use std::cmp::Ordering;

use bigint::{BigInt, BigIntError};
use num_bigint::{BigUint, Sign};
use num_traits::Zero;
use proptest::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

fn to_reference(value: &BigInt) -> num_bigint::BigInt {
    let bytes: Vec<u8> = value
        .get_bit_vector()
        .iter()
        .flat_map(|w| w.to_le_bytes())
        .collect();
    let magnitude = BigUint::from_bytes_le(&bytes);
    let sign = if value.is_negative() {
        Sign::Minus
    } else {
        Sign::Plus
    };
    num_bigint::BigInt::from_biguint(sign, magnitude)
}

/// Equal to the reference value, with the sign flag set exactly when the
/// reference is negative.
fn assert_matches(value: &BigInt, expected: &num_bigint::BigInt) {
    assert_eq!(&to_reference(value), expected);
    assert_eq!(value.is_negative(), expected.sign() == Sign::Minus);
}

/// Strategy: 1-3 random words, a random sign, and sometimes high zero words.
fn bigint_strategy() -> impl Strategy<Value = BigInt> {
    (
        prop::collection::vec(any::<u64>(), 1..=3),
        any::<bool>(),
        0usize..2,
    )
        .prop_map(|(mut words, negative, padding)| {
            words.extend(std::iter::repeat(0).take(padding));
            BigInt::from_words(words, negative)
        })
}

/// Strategy: small values, including zero, to hit the sign edge cases often.
fn small_strategy() -> impl Strategy<Value = BigInt> {
    (0u64..4, any::<bool>()).prop_map(|(v, negative)| BigInt::from_u64(v, negative))
}

fn any_bigint() -> impl Strategy<Value = BigInt> {
    prop_oneof![bigint_strategy(), small_strategy()]
}

fn non_negative() -> impl Strategy<Value = BigInt> {
    any_bigint().prop_map(|b| if b.is_negative() { b.negate() } else { b })
}

// ============================================================================
// Differential tests
// ============================================================================

proptest! {
    #[test]
    fn add_matches_reference(a in any_bigint(), b in any_bigint()) {
        assert_matches(&a.add(&b), &(to_reference(&a) + to_reference(&b)));
    }

    #[test]
    fn subtract_matches_reference(a in any_bigint(), b in any_bigint()) {
        assert_matches(&a.subtract(&b), &(to_reference(&a) - to_reference(&b)));
    }

    #[test]
    fn multiply_matches_reference(a in any_bigint(), b in any_bigint()) {
        assert_matches(&a.multiply(&b), &(to_reference(&a) * to_reference(&b)));
    }

    #[test]
    fn divide_matches_reference(a in any_bigint(), b in any_bigint()) {
        let expected_b = to_reference(&b);
        if expected_b.is_zero() {
            prop_assert_eq!(a.divide(&b), Err(BigIntError::DivisionByZero));
        } else {
            // num-bigint division truncates toward zero.
            assert_matches(&a.divide(&b).unwrap(), &(to_reference(&a) / expected_b));
        }
    }

    #[test]
    fn shift_left_matches_reference(a in non_negative(), n in 0usize..200) {
        assert_matches(&a.shift_left(n).unwrap(), &(to_reference(&a) << n));
    }

    #[test]
    fn compare_matches_reference(a in any_bigint(), b in any_bigint()) {
        prop_assert_eq!(a.compare(&b), to_reference(&a).cmp(&to_reference(&b)));
    }

    #[test]
    fn to_hex_matches_reference(a in any_bigint()) {
        prop_assert_eq!(a.to_hex(), format!("{:x}", to_reference(&a)));
    }

    #[test]
    fn is_bit_set_matches_reference(a in non_negative(), n in 0u64..256) {
        let expected = (to_reference(&a) >> n) & num_bigint::BigInt::from(1u8);
        prop_assert_eq!(a.is_bit_set(n), !expected.is_zero());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn to_dec_matches_reference(a in any_bigint()) {
        prop_assert_eq!(a.to_dec(), to_reference(&a).to_string());
        prop_assert_eq!(a.to_string(), a.to_dec());
    }
}

// ============================================================================
// Algebraic properties
// ============================================================================

proptest! {
    #[test]
    fn sign_inverse(a in any_bigint()) {
        let sum = a.add(&a.negate());
        prop_assert!(sum.is_zero());
        prop_assert!(!sum.is_negative());
        prop_assert_eq!(a.negate().negate(), a);
    }

    #[test]
    fn subtraction_is_addition_of_negation(a in any_bigint(), b in any_bigint()) {
        prop_assert_eq!(a.subtract(&b), a.add(&b.negate()));
    }

    #[test]
    fn multiplicative_zero_and_one(a in any_bigint()) {
        let zero = a.multiply(&BigInt::zero());
        prop_assert!(zero.is_zero());
        prop_assert!(!zero.is_negative());
        prop_assert_eq!(a.multiply(&BigInt::from(1u64)), a);
    }

    #[test]
    fn product_sign(a in any_bigint(), b in any_bigint()) {
        let product = a.multiply(&b);
        if a.is_zero() || b.is_zero() {
            prop_assert!(!product.is_negative());
        } else {
            prop_assert_eq!(product.is_negative(), a.is_negative() != b.is_negative());
        }
    }

    #[test]
    fn division_bound(a in non_negative(), b in non_negative()) {
        prop_assume!(!b.is_zero());
        let q = a.divide(&b).unwrap();
        let one = BigInt::from(1u64);
        prop_assert!(q.multiply(&b) <= a);
        prop_assert!(a < q.add(&one).multiply(&b));
    }

    #[test]
    fn shift_is_multiply_by_power_of_two(a in non_negative(), n in 0usize..150) {
        let power = BigInt::from(1u64).shift_left(n).unwrap();
        prop_assert_eq!(a.shift_left(n).unwrap(), a.multiply(&power));
    }

    #[test]
    fn compare_is_antisymmetric(a in any_bigint(), b in any_bigint()) {
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        prop_assert_eq!(a == b, a.compare(&b) == Ordering::Equal);
    }

    #[test]
    fn out_of_range_reads(a in any_bigint(), extra in 0usize..1000) {
        let len = a.get_bit_vector().len();
        prop_assert_eq!(a.get_bits(len + extra), 0);
        prop_assert!(!a.is_bit_set((len as u64 + extra as u64) * 64));
        prop_assert!(!a.is_bit_set(u64::MAX));
    }
}

// ============================================================================
// Order totality across value classes
// ============================================================================

#[test]
fn test_order_totality_across_classes() {
    let values = [
        BigInt::zero(),
        BigInt::from_words(vec![0, 0], false),
        BigInt::from_u64(7, false),
        BigInt::from_words(vec![3, 9], false),
        BigInt::from_words(vec![3, 9, 0], false),
        BigInt::from_u64(7, true),
        BigInt::from_words(vec![3, 9], true),
    ];
    for a in &values {
        for b in &values {
            assert_eq!(a.compare(b), b.compare(a).reverse(), "{a:?} vs {b:?}");
            for c in &values {
                if a.compare(b) != Ordering::Greater && b.compare(c) != Ordering::Greater {
                    assert_ne!(a.compare(c), Ordering::Greater, "{a:?} <= {b:?} <= {c:?}");
                }
            }
        }
    }

    let mut sorted = values.to_vec();
    sorted.sort();
    let expected = [
        "-166020696663385964547",
        "-7",
        "0",
        "0",
        "7",
        "166020696663385964547",
        "166020696663385964547",
    ];
    let rendered: Vec<String> = sorted.iter().map(BigInt::to_dec).collect();
    assert_eq!(rendered, expected);
}
