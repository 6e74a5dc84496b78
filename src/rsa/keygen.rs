// RSA Key Derivation
// Turns two user-chosen primes into a complete toy RSA keypair

use tracing::debug;

use super::arith::{gcd, is_prime, mod_inverse};
use crate::config::{ExponentSearch, KeygenConfig};
use crate::error::{Result, RsaError};

/// RSA Public Key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub n: u64, // Modulus
    pub e: u64, // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub n: u64, // Modulus (same as public)
    pub d: u64, // Private exponent
}

/// Pre-computed values for CRT decryption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrtParams {
    pub p: u64,
    pub q: u64,
    pub d_p: u64,   // d mod (p-1)
    pub d_q: u64,   // d mod (q-1)
    pub q_inv: u64, // q^(-1) mod p
}

/// Everything the lesson derives from a pair of primes
///
/// Only [`derive_keypair`] and [`derive_keypair_with`] build one, so a
/// `KeyMaterial` always has prime factors, `gcd(e, totient) == 1` and
/// `e * d ≡ 1 (mod totient)`.
///
/// `p == q` is accepted, but (p-1)^2 is not phi(p^2), so decrypting only
/// returns the original message when the primes are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMaterial {
    p: u64,
    q: u64,
    n: u64,
    totient: u64,
    e: u64,
    d: u64,
}

impl KeyMaterial {
    pub fn prime_p(&self) -> u64 {
        self.p
    }

    pub fn prime_q(&self) -> u64 {
        self.q
    }

    pub fn modulus_n(&self) -> u64 {
        self.n
    }

    /// phi(n) = (p-1)(q-1)
    pub fn totient(&self) -> u64 {
        self.totient
    }

    pub fn public_exponent(&self) -> u64 {
        self.e
    }

    pub fn private_exponent(&self) -> u64 {
        self.d
    }

    pub fn public_key(&self) -> RsaPublicKey {
        RsaPublicKey {
            n: self.n,
            e: self.e,
        }
    }

    pub fn private_key(&self) -> RsaPrivateKey {
        RsaPrivateKey {
            n: self.n,
            d: self.d,
        }
    }

    /// CRT parameters, or `None` when p == q
    pub fn crt_params(&self) -> Option<CrtParams> {
        if self.p == self.q {
            return None;
        }

        let q_inv = mod_inverse(self.q % self.p, self.p).ok()?;
        Some(CrtParams {
            p: self.p,
            q: self.q,
            d_p: crt_exponent(self.d, self.p),
            d_q: crt_exponent(self.d, self.q),
            q_inv,
        })
    }
}

/// d mod (prime-1), kept non-zero so a zero residue stays zero
fn crt_exponent(d: u64, prime: u64) -> u64 {
    match d % (prime - 1) {
        0 => prime - 1,
        r => r,
    }
}

/// Derive a keypair from `p` and `q` with the default exponent candidates
pub fn derive_keypair(p: u64, q: u64) -> Result<KeyMaterial> {
    derive_keypair_with(p, q, &KeygenConfig::default())
}

/// Derive a keypair from `p` and `q`
///
/// Fails with [`RsaError::InvalidPrime`] naming the first non-prime input,
/// [`RsaError::Overflow`] when `p * q` does not fit in 64 bits, and
/// [`RsaError::NoSuitableExponent`] when no public exponent can be chosen.
pub fn derive_keypair_with(p: u64, q: u64, config: &KeygenConfig) -> Result<KeyMaterial> {
    for value in [p, q] {
        if !is_prime(value) {
            return Err(RsaError::InvalidPrime(value));
        }
    }

    let n = p
        .checked_mul(q)
        .ok_or(RsaError::Overflow { operation: "p * q" })?;
    // (p-1)(q-1) < pq, so this cannot overflow once n fits
    let totient = (p - 1) * (q - 1);

    let e = select_public_exponent(totient, config)?;
    // mod_inverse checks e * d ≡ 1 (mod totient) before returning
    let d = mod_inverse(e, totient)?;

    debug!(p, q, n, totient, e, d, "derived keypair");

    Ok(KeyMaterial {
        p,
        q,
        n,
        totient,
        e,
        d,
    })
}

/// Pick the public exponent for `totient`
///
/// The first configured candidate with `1 < e < totient` and
/// `gcd(e, totient) == 1` wins. With [`ExponentSearch::Widened`] the
/// smallest such value in `2..totient` is used when no candidate fits.
pub fn select_public_exponent(totient: u64, config: &KeygenConfig) -> Result<u64> {
    let fits = |e: u64| 1 < e && e < totient && gcd(e, totient) == 1;

    if let Some(e) = config.exponent_candidates.iter().copied().find(|&e| fits(e)) {
        return Ok(e);
    }

    if config.exponent_search == ExponentSearch::Widened {
        if let Some(e) = (2..totient).find(|&e| fits(e)) {
            debug!(totient, e, "no candidate exponent fits, widened search");
            return Ok(e);
        }
    }

    Err(RsaError::NoSuitableExponent { totient })
}
