//! Generator search for the multiplicative group of a safe prime field.
//!
//! For a safe prime `p = 2q + 1` the group `Z_p^*` has order `2q`, so the only
//! possible element orders are 1, 2, q and 2q. An element has full order
//! exactly when neither `g^2` nor `g^q` is 1.

use num_bigint_dig::BigUint;
use num_traits::{One, Zero};

use super::modular::power_mod;
use super::prime_search::SearchBudget;
use crate::error::Result;

/// First candidate tried by key generation: `2^16 + 1`.
pub const GENERATOR_SEED: u32 = 65_537;

/// Which candidates the generator scan accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GeneratorRule {
    /// Accept `g` only when it has order `2q`: reject when `g ≡ 0`, `g^2 ≡ 1`
    /// or `g^q ≡ 1 (mod p)`.
    #[default]
    FullOrder,
    /// Reject `g` only when `g^2 ≡ 1` and `g^q ≡ 1 (mod p)` both hold.
    ///
    /// Only `g ≡ 1 (mod p)` satisfies both, so this accepts elements of order
    /// 2 or q as well. Kept for parity with older key material.
    SourceParity,
}

impl GeneratorRule {
    /// Returns `true` when `g` is accepted as a generator modulo the safe prime `p`.
    pub fn accepts(&self, g: &BigUint, p: &BigUint, q: &BigUint) -> bool {
        let one = BigUint::one();
        let two = BigUint::from(2u32);
        let square_is_one = power_mod(g, &two, p) == one;
        let q_power_is_one = power_mod(g, q, p) == one;

        match self {
            GeneratorRule::FullOrder => {
                !(g % p).is_zero() && !square_is_one && !q_power_is_one
            }
            GeneratorRule::SourceParity => !(square_is_one && q_power_is_one),
        }
    }
}

/// Scans `seed, seed + 1, ...` and returns the first candidate `rule` accepts
/// modulo the safe prime `p`.
///
/// The returned value is the scanned integer itself and is not reduced mod `p`.
pub fn find_generator(
    seed: &BigUint,
    p: &BigUint,
    rule: GeneratorRule,
    budget: SearchBudget,
) -> Result<BigUint> {
    let q = (p - BigUint::one()) >> 1usize;
    let mut g = seed.clone();
    let mut attempts = 0usize;

    while budget.allows(attempts) {
        attempts += 1;
        if rule.accepts(&g, p, &q) {
            log::debug!("{:?} generator {} accepted after {} candidates", rule, g, attempts);
            return Ok(g);
        }
        log::trace!("rejected generator candidate {}", g);
        g += BigUint::one();
    }

    Err(budget.exhausted(attempts, "generator"))
}
