// RSA Key Generation Lesson Session
// Holds the current keypair and message exchange for one lesson screen

use tracing::{debug, warn};

use crate::config::LessonConfig;
use crate::error::{Result, RsaError};
use crate::rsa::{decrypt_u64, derive_keypair_with, encrypt_u64, KeyMaterial};

/// The plaintext/ciphertext pair shown in the encrypt-decrypt step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageExchange {
    plaintext: u64,
    ciphertext: u64,
    recovered: Option<u64>,
}

impl MessageExchange {
    pub fn plaintext(&self) -> u64 {
        self.plaintext
    }

    pub fn ciphertext(&self) -> u64 {
        self.ciphertext
    }

    /// Decrypted value, once decrypt has run
    pub fn recovered(&self) -> Option<u64> {
        self.recovered
    }
}

/// State of one key-generation lesson, from mount to unmount
///
/// A failed request never changes the session: the previous keypair and
/// exchange stay in place and the caller gets the error.
#[derive(Debug, Clone)]
pub struct KeyGenerationLesson {
    config: LessonConfig,
    initial_key: KeyMaterial,
    key: KeyMaterial,
    exchange: Option<MessageExchange>,
}

impl KeyGenerationLesson {
    /// Start a lesson from the configured initial primes
    pub fn new(config: LessonConfig) -> Result<Self> {
        let (p, q) = config.initial_primes;
        let initial_key = derive_keypair_with(p, q, &config.keygen)?;

        Ok(Self {
            config,
            initial_key,
            key: initial_key,
            exchange: None,
        })
    }

    pub fn config(&self) -> &LessonConfig {
        &self.config
    }

    pub fn key_material(&self) -> &KeyMaterial {
        &self.key
    }

    pub fn exchange(&self) -> Option<&MessageExchange> {
        self.exchange.as_ref()
    }

    /// Replace the keypair with one derived from `p` and `q`
    ///
    /// On success the previous message exchange is discarded.
    pub fn set_custom_primes(&mut self, p: u64, q: u64) -> Result<&KeyMaterial> {
        let key = derive_keypair_with(p, q, &self.config.keygen).map_err(|e| {
            warn!(p, q, error = %e, "keypair request rejected");
            e
        })?;

        self.key = key;
        self.exchange = None;
        Ok(&self.key)
    }

    /// Encrypt `message` with the current public key
    pub fn encrypt_message(&mut self, message: u64) -> Result<u64> {
        let ciphertext = encrypt_u64(message, &self.key.public_key()).map_err(|e| {
            warn!(message, error = %e, "encrypt request rejected");
            e
        })?;

        self.exchange = Some(MessageExchange {
            plaintext: message,
            ciphertext,
            recovered: None,
        });
        Ok(ciphertext)
    }

    /// Decrypt the ciphertext from the last successful encrypt
    pub fn decrypt_message(&mut self) -> Result<u64> {
        let exchange = self.exchange.as_mut().ok_or(RsaError::NothingToDecrypt);
        let exchange = exchange.map_err(|e| {
            warn!(error = %e, "decrypt request rejected");
            e
        })?;
        let recovered = decrypt_u64(exchange.ciphertext, &self.key.private_key())?;

        exchange.recovered = Some(recovered);
        Ok(recovered)
    }

    /// Back to the initial keypair with no exchange
    pub fn reset(&mut self) {
        debug!("lesson reset");
        self.key = self.initial_key;
        self.exchange = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExponentSearch, KeygenConfig};

    fn lesson() -> KeyGenerationLesson {
        KeyGenerationLesson::new(LessonConfig::default()).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let lesson = lesson();
        let key = lesson.key_material();
        assert_eq!(key.prime_p(), 7);
        assert_eq!(key.prime_q(), 11);
        assert_eq!(key.modulus_n(), 77);
        assert_eq!(key.totient(), 60);
        assert_eq!(key.public_exponent(), 7);
        assert_eq!(key.private_exponent(), 43);
        assert!(lesson.exchange().is_none());
    }

    #[test]
    fn test_encrypt_then_decrypt() {
        let mut lesson = lesson();

        assert_eq!(lesson.encrypt_message(5), Ok(47));
        let exchange = lesson.exchange().unwrap();
        assert_eq!(exchange.plaintext(), 5);
        assert_eq!(exchange.ciphertext(), 47);
        assert_eq!(exchange.recovered(), None);

        assert_eq!(lesson.decrypt_message(), Ok(5));
        assert_eq!(lesson.exchange().unwrap().recovered(), Some(5));
    }

    #[test]
    fn test_invalid_primes_keep_previous_key() {
        let mut lesson = lesson();
        lesson.set_custom_primes(61, 53).unwrap();
        lesson.encrypt_message(65).unwrap();
        let before = *lesson.key_material();
        let exchange = lesson.exchange().copied();

        assert_eq!(
            lesson.set_custom_primes(8, 11).unwrap_err(),
            RsaError::InvalidPrime(8)
        );
        assert_eq!(*lesson.key_material(), before);
        assert_eq!(lesson.exchange().copied(), exchange);
    }

    #[test]
    fn test_new_primes_replace_key_and_clear_exchange() {
        let mut lesson = lesson();
        lesson.encrypt_message(5).unwrap();

        let key = *lesson.set_custom_primes(61, 53).unwrap();
        assert_eq!(key.modulus_n(), 3233);
        assert_eq!(*lesson.key_material(), key);
        assert!(lesson.exchange().is_none());
    }

    #[test]
    fn test_message_too_large_keeps_exchange() {
        let mut lesson = lesson();
        lesson.encrypt_message(5).unwrap();

        assert_eq!(
            lesson.encrypt_message(80),
            Err(RsaError::MessageTooLarge {
                message: 80,
                modulus: 77
            })
        );
        assert_eq!(lesson.exchange().unwrap().plaintext(), 5);
        assert_eq!(lesson.exchange().unwrap().ciphertext(), 47);
    }

    #[test]
    fn test_decrypt_before_encrypt() {
        let mut lesson = lesson();
        assert_eq!(lesson.decrypt_message(), Err(RsaError::NothingToDecrypt));
    }

    #[test]
    fn test_new_encrypt_overwrites_exchange() {
        let mut lesson = lesson();
        lesson.encrypt_message(5).unwrap();
        lesson.decrypt_message().unwrap();

        let ciphertext = lesson.encrypt_message(2).unwrap();
        let exchange = lesson.exchange().unwrap();
        assert_eq!(exchange.plaintext(), 2);
        assert_eq!(exchange.ciphertext(), ciphertext);
        assert_eq!(exchange.recovered(), None);
    }

    #[test]
    fn test_reset() {
        let mut lesson = lesson();
        lesson.set_custom_primes(61, 53).unwrap();
        lesson.encrypt_message(100).unwrap();

        lesson.reset();
        assert_eq!(lesson.key_material().modulus_n(), 77);
        assert!(lesson.exchange().is_none());
    }

    #[test]
    fn test_bad_initial_primes() {
        let config = LessonConfig::default().with_initial_primes(4, 11);
        assert_eq!(
            KeyGenerationLesson::new(config).unwrap_err(),
            RsaError::InvalidPrime(4)
        );
    }

    #[test]
    fn test_session_uses_configured_search() {
        let config = LessonConfig::default()
            .with_keygen(KeygenConfig::default().with_search(ExponentSearch::Widened));
        let mut lesson = KeyGenerationLesson::new(config).unwrap();

        let key = lesson.set_custom_primes(3571, 3).unwrap();
        assert_eq!(key.public_exponent(), 11);
    }
}
