// RSA Number Theory
// Primality, gcd, modular inverse and modular exponentiation on u64 values
//
// Everything here is sized for the lesson: primes in the tens to low
// thousands. Trial division and 64-bit moduli are nowhere near safe for
// real keys.

use num_integer::Integer;

use crate::error::{Result, RsaError};

/// Check whether `n` is prime by trial division
///
/// Runs in O(sqrt(n)). Fine for tutorial-sized numbers, useless for
/// cryptographic-scale primes.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n.is_even() {
        return false;
    }

    let limit = num_integer::sqrt(n);
    let mut divisor = 3u64;
    while divisor <= limit {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }

    true
}

/// Greatest common divisor (Euclid)
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Multiply two residues modulo `modulus` without overflow
///
/// The product is taken in 128 bits so `(modulus - 1)^2` always fits.
pub fn mul_mod(a: u64, b: u64, modulus: u64) -> Result<u64> {
    if modulus == 0 {
        return Err(RsaError::ZeroModulus);
    }
    let product = u128::from(a) * u128::from(b);
    Ok((product % u128::from(modulus)) as u64)
}

/// Modular exponentiation: base^exponent mod modulus
/// Uses square-and-multiply
///
/// `exponent == 0` yields 1 for every base and modulus, `0^0` included.
pub fn mod_pow(base: u64, exponent: u64, modulus: u64) -> Result<u64> {
    if modulus == 0 {
        return Err(RsaError::ZeroModulus);
    }

    let mut result = 1u64;
    let mut base = base % modulus;
    let mut exponent = exponent;

    while exponent > 0 {
        if exponent.is_odd() {
            result = mul_mod(result, base, modulus)?;
        }
        base = mul_mod(base, base, modulus)?;
        exponent >>= 1;
    }

    Ok(result)
}

/// Compute the inverse of `e` modulo `phi` with the extended Euclidean
/// algorithm
///
/// The result lies in `[0, phi)`. Fails with [`RsaError::NotInvertible`]
/// when `gcd(e, phi) != 1`.
pub fn mod_inverse(e: u64, phi: u64) -> Result<u64> {
    let not_invertible = RsaError::NotInvertible { e, phi };
    if phi == 0 {
        return Err(not_invertible);
    }

    // Only the coefficient of e is tracked; |s| never exceeds phi.
    let (mut old_r, mut r) = (i128::from(phi), i128::from(e));
    let (mut old_s, mut s) = (0i128, 1i128);

    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
    }

    if old_r != 1 {
        return Err(not_invertible);
    }

    let inverse = u64::try_from(old_s.rem_euclid(i128::from(phi))).map_err(|_| {
        RsaError::Overflow {
            operation: "modular inverse",
        }
    })?;
    verify_inverse(e, inverse, phi)?;

    Ok(inverse)
}

/// Confirm that `e * d ≡ 1 (mod phi)`
pub fn verify_inverse(e: u64, d: u64, phi: u64) -> Result<()> {
    if phi == 0 || mul_mod(e, d, phi)? != 1 % phi {
        return Err(RsaError::NotInvertible { e, phi });
    }
    Ok(())
}
