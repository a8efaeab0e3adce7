//! DISCLAIMER: This library is a toy example of ElGamal Encryption over a prime field in pure Rust.
//! It is *EXCLUSIVELY* for demonstration and educational purposes.
//! Absolutely DO NOT use it for real cryptographic or security-sensitive operations.
//! It is not audited, has no side-channel protections, no padding, and a message must fit in
//! a single field element.
//!
//! If you need ElGamal or any cryptographic operations in production, please use a
//! vetted, well-reviewed cryptography library.

use std::fmt;

use num_bigint_dig::{BigUint, RandBigInt};
use num_traits::One;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::math::{
    find_generator, power_mod, safe_prime, GeneratorRule, SearchBudget, GENERATOR_SEED,
};

/// Smallest bit length accepted by key generation.
pub const MIN_BIT_LENGTH: usize = 4;

/// A structure holding the ElGamal public key:
/// - `p`, a safe prime modulus,
/// - `r`, a generator found by scanning upward from `2^16 + 1`,
/// - `b = r^a mod p`, where `a` is the secret exponent.
///
/// *This is for demonstration only. DO NOT use in real systems.*
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElGamalPublicKey {
    pub p: BigUint,
    pub r: BigUint,
    pub b: BigUint,
}

/// A structure holding the ElGamal private key: the modulus `p` and the
/// secret exponent `a`, with `(p - 1) / 2 <= a < p - 1`.
///
/// *This is for demonstration only. DO NOT use in real systems.*
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElGamalPrivateKey {
    pub p: BigUint,
    pub a: BigUint,
}

/// Combined keypair, storing both halves produced by one key generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElGamalKeyPair {
    pub public: ElGamalPublicKey,
    pub private: ElGamalPrivateKey,
}

/// A ciphertext in ElGamal encryption consists of two values `(γ, δ)`, both in `[0, p)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElGamalCiphertext {
    pub gamma: BigUint,
    pub delta: BigUint,
}

/// Configuration for key generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElGamalKeyGenConfig {
    /// Bit length of the Sophie Germain prime `q`; the modulus `p = 2q + 1`
    /// has one bit more.
    pub bit_length: usize,
    /// Acceptance rule for the generator scan.
    pub generator_rule: GeneratorRule,
    /// Cap applied separately to the safe prime search (every `q` candidate
    /// drawn) and to the generator scan.
    pub search_budget: SearchBudget,
    /// Optional RNG seed used by [`ElGamalKeyPair::generate`].
    pub seed: Option<u64>,
}

impl ElGamalKeyGenConfig {
    pub fn new(bit_length: usize) -> Self {
        Self {
            bit_length,
            ..Self::default()
        }
    }
}

impl Default for ElGamalKeyGenConfig {
    fn default() -> Self {
        Self {
            bit_length: 128,
            generator_rule: GeneratorRule::default(),
            search_budget: SearchBudget::unbounded(),
            seed: None,
        }
    }
}

impl ElGamalKeyPair {
    /// Generate a keypair with an RNG seeded from `config.seed`, or from
    /// entropy when no seed is given.
    pub fn generate(config: &ElGamalKeyGenConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        generate_keys(config, &mut rng)
    }

    pub fn public(&self) -> &ElGamalPublicKey {
        &self.public
    }

    pub fn private(&self) -> &ElGamalPrivateKey {
        &self.private
    }

    /// Split into `(private, public)`.
    pub fn into_parts(self) -> (ElGamalPrivateKey, ElGamalPublicKey) {
        (self.private, self.public)
    }
}

/// Generate an ElGamal keypair drawing all randomness from `rng`.
///
/// - `p = safe_prime(2^(bits-1), 2^bits - 1)`
/// - `r = find_generator(2^16 + 1, p)`
/// - `a` uniform in `[(p-1)/2, p-2]`
/// - `b = r^a mod p`
///
/// Fails with [`Error::InvalidRange`] before drawing anything when the bit
/// length is below [`MIN_BIT_LENGTH`].
pub fn generate_keys<R: Rng + ?Sized>(
    config: &ElGamalKeyGenConfig,
    rng: &mut R,
) -> Result<ElGamalKeyPair> {
    let bits = config.bit_length;
    if bits < MIN_BIT_LENGTH {
        return Err(Error::InvalidRange {
            min: MIN_BIT_LENGTH,
            actual: bits,
        });
    }

    let one = BigUint::one();
    let low = &one << (bits - 1);
    let high = (&one << bits) - &one;
    let p = safe_prime(&low, &high, config.search_budget, rng)?;

    let r = find_generator(
        &BigUint::from(GENERATOR_SEED),
        &p,
        config.generator_rule,
        config.search_budget,
    )?;

    // a in [(p-1)/2, p-2]; gen_biguint_range excludes its upper bound
    let p_minus_one = &p - &one;
    let a = rng.gen_biguint_range(&(&p_minus_one >> 1usize), &p_minus_one);
    let b = power_mod(&r, &a, &p);

    log::debug!("generated ElGamal keypair with {}-bit modulus", p.bits());

    let public = ElGamalPublicKey {
        p: p.clone(),
        r,
        b,
    };
    let private = ElGamalPrivateKey { p, a };

    Ok(ElGamalKeyPair { public, private })
}

/// Encrypt a message `m` using the ElGamal public key and a fresh ephemeral exponent `k`.
///
/// # Returns
/// An `ElGamalCiphertext` (γ, δ) where:
/// γ = r^k mod p
/// δ = m * b^k mod p
///
/// `k` is drawn uniformly from `[1, p-2]` inside every call and never reused.
///
/// # Errors
/// - [`Error::InvalidPublicKey`] when `p < 3`, which leaves no room for `k`.
/// - [`Error::MessageTooLarge`] when `m >= p`.
///
/// Both are checked before `k` is drawn.
pub fn elgamal_encrypt<R: Rng + ?Sized>(
    public_key: &ElGamalPublicKey,
    message: &BigUint,
    rng: &mut R,
) -> Result<ElGamalCiphertext> {
    let p = &public_key.p;
    if *p < BigUint::from(3u32) {
        return Err(Error::InvalidPublicKey { modulus: p.clone() });
    }
    if message >= p {
        return Err(Error::MessageTooLarge);
    }

    // ephemeral exponent k in [1, p-2]
    let one = BigUint::one();
    let k = rng.gen_biguint_range(&one, &(p - &one));

    // γ = r^k mod p
    let gamma = power_mod(&public_key.r, &k, p);
    // δ = m * b^k mod p
    let bk = power_mod(&public_key.b, &k, p);
    let delta = (message * &bk) % p;

    Ok(ElGamalCiphertext { gamma, delta })
}

/// Decrypt an ElGamal ciphertext (γ, δ) using the private exponent `a`.
///
/// # Returns
/// The message `γ^(p-1-a) * δ mod p`; `γ^(p-1-a)` is the inverse of `γ^a` by
/// Fermat's little theorem.
pub fn elgamal_decrypt(private_key: &ElGamalPrivateKey, ciphertext: &ElGamalCiphertext) -> BigUint {
    let p = &private_key.p;
    let exponent = p - BigUint::one() - &private_key.a;
    let s_inv = power_mod(&ciphertext.gamma, &exponent, p);

    (&s_inv * &ciphertext.delta) % p
}

impl fmt::Display for ElGamalPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.p, self.r, self.b)
    }
}

impl fmt::Display for ElGamalPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.p, self.a)
    }
}

impl fmt::Display for ElGamalCiphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.gamma, self.delta)
    }
}
