// RSA Lesson Errors
// Every rejection the lesson core can report to the UI layer

use thiserror::Error;

/// Errors raised by key derivation and the encrypt/decrypt demonstration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RsaError {
    /// One of the supplied primes failed the primality test
    #[error("{0} is not prime")]
    InvalidPrime(u64),

    /// Plaintext does not fit below the modulus
    #[error("message {message} must be smaller than the modulus {modulus}")]
    MessageTooLarge {
        /// Rejected plaintext
        message: u64,
        /// Current modulus n
        modulus: u64,
    },

    /// Ciphertext does not fit below the modulus
    #[error("ciphertext {ciphertext} must be smaller than the modulus {modulus}")]
    CiphertextOutOfRange {
        /// Rejected ciphertext
        ciphertext: u64,
        /// Current modulus n
        modulus: u64,
    },

    /// No public exponent candidate is coprime with the totient
    #[error("no public exponent is coprime with totient {totient}")]
    NoSuitableExponent {
        /// Totient the search ran against
        totient: u64,
    },

    /// e has no multiplicative inverse modulo phi
    #[error("{e} has no inverse modulo {phi}")]
    NotInvertible {
        /// Exponent being inverted
        e: u64,
        /// Modulus of the inversion
        phi: u64,
    },

    /// Result does not fit in 64 bits
    #[error("integer overflow computing {operation}")]
    Overflow {
        /// Operation that overflowed
        operation: &'static str,
    },

    /// Modular arithmetic requested with modulus 0
    #[error("modulus must be at least 1")]
    ZeroModulus,

    /// Decrypt requested before any message was encrypted
    #[error("no ciphertext to decrypt, encrypt a message first")]
    NothingToDecrypt,
}

/// Result type for lesson operations
pub type Result<T> = std::result::Result<T, RsaError>;
