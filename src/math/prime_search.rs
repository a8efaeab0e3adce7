//! Random prime and safe prime search.
//!
//! Both searches resample uniformly until a candidate passes Miller-Rabin. The
//! expected number of draws is about `ln(high)` for `random_prime`, but there is
//! no hard cap unless the caller sets one through [`SearchBudget`].

use num_bigint_dig::{BigUint, RandBigInt};
use num_traits::One;
use rand::Rng;

use super::primality::{is_prime, PRIMALITY_ROUNDS};
use crate::error::{Error, Result};

/// Upper bound on how many candidates a search may draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchBudget {
    /// `None` keeps drawing until a candidate is found.
    pub max_attempts: Option<usize>,
}

impl SearchBudget {
    /// A search that never gives up.
    pub fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    /// A search that fails with [`Error::SearchExhausted`] after `n` candidates.
    pub fn attempts(n: usize) -> Self {
        Self {
            max_attempts: Some(n),
        }
    }

    pub(crate) fn allows(&self, attempts: usize) -> bool {
        self.max_attempts.map_or(true, |max| attempts < max)
    }

    pub(crate) fn exhausted(&self, attempts: usize, what: &str) -> Error {
        log::warn!("{} search exhausted after {} candidates", what, attempts);
        Error::SearchExhausted { attempts }
    }
}

/// Draws uniform integers in `[low, high]` until one is prime.
///
/// Fails with [`Error::EmptyRange`] when the range contains no integer >= 2.
pub fn random_prime<R: Rng + ?Sized>(
    low: &BigUint,
    high: &BigUint,
    budget: SearchBudget,
    rng: &mut R,
) -> Result<BigUint> {
    let upper = exclusive_upper(low, high)?;
    let mut attempts = 0usize;
    match draw_prime(low, &upper, budget, &mut attempts, rng) {
        Some(candidate) => {
            log::debug!(
                "found {}-bit prime after {} candidates",
                candidate.bits(),
                attempts
            );
            Ok(candidate)
        }
        None => Err(budget.exhausted(attempts, "prime")),
    }
}

/// Returns a safe prime `2q + 1` where `q` is a prime drawn from `[low, high]`.
///
/// Every draw of a `q` candidate counts against the budget, including the
/// composite draws made while looking for the next prime `q`.
pub fn safe_prime<R: Rng + ?Sized>(
    low: &BigUint,
    high: &BigUint,
    budget: SearchBudget,
    rng: &mut R,
) -> Result<BigUint> {
    let upper = exclusive_upper(low, high)?;
    let two = BigUint::from(2u32);
    let mut attempts = 0usize;

    while let Some(q) = draw_prime(low, &upper, budget, &mut attempts, rng) {
        let p = &q * &two + BigUint::one();
        if is_prime(&p, PRIMALITY_ROUNDS, rng) {
            log::debug!(
                "found {}-bit safe prime after {} candidates",
                p.bits(),
                attempts
            );
            return Ok(p);
        }
        log::trace!("2q + 1 is composite for q = {}", q);
    }

    Err(budget.exhausted(attempts, "safe prime"))
}

/// Validates `[low, high]` and returns `high + 1` for `gen_biguint_range`,
/// which excludes its upper bound.
fn exclusive_upper(low: &BigUint, high: &BigUint) -> Result<BigUint> {
    if low > high || *high < BigUint::from(2u32) {
        return Err(Error::EmptyRange {
            low: low.clone(),
            high: high.clone(),
        });
    }
    Ok(high + BigUint::one())
}

/// Draws from `[low, upper)` until a prime turns up or `attempts` reaches the budget.
fn draw_prime<R: Rng + ?Sized>(
    low: &BigUint,
    upper: &BigUint,
    budget: SearchBudget,
    attempts: &mut usize,
    rng: &mut R,
) -> Option<BigUint> {
    while budget.allows(*attempts) {
        *attempts += 1;
        let candidate = rng.gen_biguint_range(low, upper);
        if is_prime(&candidate, PRIMALITY_ROUNDS, rng) {
            return Some(candidate);
        }
        log::trace!("rejected composite candidate {}", candidate);
    }
    None
}
