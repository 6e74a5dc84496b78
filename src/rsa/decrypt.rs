// RSA Decryption
// Recovers m = c^d mod n, directly or through the Chinese Remainder Theorem

use tracing::debug;

use super::arith::{mod_pow, mul_mod};
use super::keygen::{CrtParams, RsaPrivateKey};
use crate::error::{Result, RsaError};

/// Decrypt an integer ciphertext with the private key
pub fn decrypt_u64(ciphertext: u64, private_key: &RsaPrivateKey) -> Result<u64> {
    if ciphertext >= private_key.n {
        return Err(RsaError::CiphertextOutOfRange {
            ciphertext,
            modulus: private_key.n,
        });
    }

    let plaintext = mod_pow(ciphertext, private_key.d, private_key.n)?;
    debug!(ciphertext, plaintext, n = private_key.n, "decrypted");

    Ok(plaintext)
}

/// Decrypt using the Chinese Remainder Theorem (CRT)
/// Works with the two primes separately instead of the full modulus
pub fn decrypt_crt_u64(ciphertext: u64, params: &CrtParams) -> Result<u64> {
    let n = params
        .p
        .checked_mul(params.q)
        .ok_or(RsaError::Overflow { operation: "p * q" })?;
    if ciphertext >= n {
        return Err(RsaError::CiphertextOutOfRange {
            ciphertext,
            modulus: n,
        });
    }

    // m1 = c^d_p mod p
    let m1 = mod_pow(ciphertext, params.d_p, params.p)?;

    // m2 = c^d_q mod q
    let m2 = mod_pow(ciphertext, params.d_q, params.q)?;

    // h = (m1 - m2) * q_inv mod p
    let diff = (m1 + params.p - m2 % params.p) % params.p;
    let h = mul_mod(diff, params.q_inv, params.p)?;

    // m = m2 + q * h, always below n
    Ok(m2 + params.q * h)
}
