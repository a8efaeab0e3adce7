pub mod elgamal;

// Re-export ElGamal functionality
pub use elgamal::{
    elgamal_decrypt, elgamal_encrypt, generate_keys, ElGamalCiphertext, ElGamalKeyGenConfig,
    ElGamalKeyPair, ElGamalPrivateKey, ElGamalPublicKey, MIN_BIT_LENGTH,
};
