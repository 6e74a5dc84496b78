// RSA Encryption
// Textbook RSA on a single integer: c = m^e mod n

use tracing::debug;

use super::arith::mod_pow;
use super::keygen::RsaPublicKey;
use crate::error::{Result, RsaError};

/// Encrypt an integer message with the public key
///
/// The message must be smaller than the modulus.
pub fn encrypt_u64(message: u64, public_key: &RsaPublicKey) -> Result<u64> {
    if message >= public_key.n {
        return Err(RsaError::MessageTooLarge {
            message,
            modulus: public_key.n,
        });
    }

    let ciphertext = mod_pow(message, public_key.e, public_key.n)?;
    debug!(message, ciphertext, n = public_key.n, e = public_key.e, "encrypted");

    Ok(ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::keygen::derive_keypair;

    #[test]
    fn test_encrypt_textbook() {
        let key = derive_keypair(7, 11).unwrap();
        // 5^7 = 78125 = 1014 * 77 + 47
        assert_eq!(encrypt_u64(5, &key.public_key()), Ok(47));
    }

    #[test]
    fn test_encrypt_fixed_points() {
        let public_key = derive_keypair(61, 53).unwrap().public_key();
        assert_eq!(encrypt_u64(0, &public_key), Ok(0));
        assert_eq!(encrypt_u64(1, &public_key), Ok(1));
        assert_eq!(encrypt_u64(3232, &public_key), Ok(3232));
    }

    #[test]
    fn test_encrypt_too_large() {
        let public_key = derive_keypair(7, 11).unwrap().public_key();
        for message in [77, 80, u64::MAX] {
            assert_eq!(
                encrypt_u64(message, &public_key),
                Err(RsaError::MessageTooLarge {
                    message,
                    modulus: 77
                })
            );
        }
    }

    #[test]
    fn test_encrypt_largest_message() {
        let public_key = derive_keypair(7, 11).unwrap().public_key();
        // 76 ≡ -1 and e is odd
        assert_eq!(encrypt_u64(76, &public_key), Ok(76));
    }
}
