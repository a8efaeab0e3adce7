use num_bigint_dig::BigUint;

/// Errors reported by key generation, the text codec and encryption.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid bit length: must be at least {min} bits, got {actual}")]
    InvalidRange { min: usize, actual: usize },

    #[error("No prime candidates in [{low}, {high}]")]
    EmptyRange { low: BigUint, high: BigUint },

    #[error("Character {character:?} at position {position} does not fit in one byte")]
    EncodingOverflow { character: char, position: usize },

    #[error("Invalid public key: modulus {modulus} is smaller than 3")]
    InvalidPublicKey { modulus: BigUint },

    #[error("Message must be smaller than the modulus")]
    MessageTooLarge,

    #[error("Search gave up after {attempts} candidates")]
    SearchExhausted { attempts: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
