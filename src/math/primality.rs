//! Miller-Rabin probabilistic primality testing.
//!
//! A composite input survives a single round with probability at most 1/4, so
//! `rounds` independent witnesses bound the false-positive rate by `4^-rounds`.
//! Primes are never rejected.
//!
//! DISCLAIMER: the witnesses come from whatever `Rng` the caller supplies. This
//! is not a vetted primality prover and makes no constant-time guarantees.

use num_bigint_dig::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

use super::modular::power_mod;

/// Number of Miller-Rabin rounds used by the prime searches.
pub const PRIMALITY_ROUNDS: usize = 100;

/// Returns `true` when `n` is probably prime after `rounds` random witnesses.
pub fn is_prime<R: Rng + ?Sized>(n: &BigUint, rounds: usize, rng: &mut R) -> bool {
    let two = BigUint::from(2u32);

    if *n < two {
        return false;
    }
    if n.is_even() {
        return *n == two;
    }
    if *n < BigUint::from(4u32) {
        return true;
    }

    // witnesses are drawn from [2, n-2]
    let upper = n - BigUint::one();
    for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &upper);
        if witness(&a, n) {
            return false;
        }
    }

    true
}

/// Returns `true` when `a` proves that the odd number `n` is composite.
///
/// Writes `n - 1 = u * 2^t` with `u` odd, then squares `a^u` `t` times looking
/// for a non-trivial square root of 1 and finally checks Fermat's condition.
///
/// `n` must be odd and at least 3; [`is_prime`] screens everything else out
/// before calling this.
///
/// # Panics
/// Panics if `n` is zero.
pub fn witness(a: &BigUint, n: &BigUint) -> bool {
    let one = BigUint::one();
    let n_minus_one = n - &one;

    let mut u = n_minus_one.clone();
    let mut t = 0usize;
    while !u.is_zero() && u.is_even() {
        u = u >> 1usize;
        t += 1;
    }

    let mut x = power_mod(a, &u, n);
    for _ in 0..t {
        let y = (&x * &x) % n;
        if y == one && x != one && x != n_minus_one {
            return true;
        }
        x = y;
    }

    x != one
}
