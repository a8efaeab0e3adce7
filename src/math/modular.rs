//! Modular exponentiation over arbitrary-precision integers.

use num_bigint_dig::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Computes `base^exponent mod modulus` by square-and-multiply.
///
/// Bits of the exponent are consumed from least to most significant: the
/// accumulator picks up the running power whenever the bit is set, then the
/// running power is squared.
///
/// # Panics
/// Panics if `modulus` is zero.
pub fn power_mod(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    assert!(!modulus.is_zero(), "modulus must be at least 1");

    let mut acc = BigUint::one() % modulus;
    let mut power = base % modulus;
    let mut e = exponent.clone();

    while !e.is_zero() {
        if e.is_odd() {
            acc = (&acc * &power) % modulus;
        }
        power = (&power * &power) % modulus;
        e = e >> 1usize;
    }

    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint_dig::RandBigInt;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_small_values() {
        assert_eq!(power_mod(&big(4), &big(13), &big(497)), big(445));
        assert_eq!(power_mod(&big(2), &big(10), &big(1_000_000)), big(1024));
        assert_eq!(power_mod(&big(3), &big(1), &big(7)), big(3));
    }

    #[test]
    fn test_zero_exponent_is_one() {
        for a in [0u64, 1, 2, 17, 65537] {
            for n in [2u64, 3, 10, 65521] {
                assert_eq!(power_mod(&big(a), &BigUint::zero(), &big(n)), BigUint::one());
            }
        }
    }

    #[test]
    fn test_unit_modulus_is_zero() {
        for a in [0u64, 1, 5, 1 << 40] {
            for b in [0u64, 1, 3, 1000] {
                assert_eq!(power_mod(&big(a), &big(b), &BigUint::one()), BigUint::zero());
            }
        }
    }

    #[test]
    fn test_base_larger_than_modulus() {
        // 1000 ≡ 6 (mod 11)
        assert_eq!(power_mod(&big(1000), &big(5), &big(11)), power_mod(&big(6), &big(5), &big(11)));
    }

    #[test]
    fn test_agrees_with_modpow() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..50 {
            let base = rng.gen_biguint(300);
            let exponent = rng.gen_biguint(200);
            let modulus = rng.gen_biguint(256) + BigUint::one();
            assert_eq!(
                power_mod(&base, &exponent, &modulus),
                base.modpow(&exponent, &modulus)
            );
        }
    }

    #[test]
    #[should_panic]
    fn test_zero_modulus_panics() {
        power_mod(&big(2), &big(3), &BigUint::zero());
    }
}
