//! Number theory behind the RSA key-generation lesson.
//!
//! The lesson lets a learner pick two small primes, watch the keypair being
//! derived from them and push a number through encryption and decryption.
//! [`KeyGenerationLesson`] holds that session state. The arithmetic lives in
//! [`rsa`].
//!
//! All values are `u64` with 128-bit intermediate products. These are toy
//! keys for teaching, not for protecting anything.

pub mod config;
pub mod error;
pub mod lesson;
pub mod rsa;

pub use config::{ExponentSearch, KeygenConfig, LessonConfig};
pub use error::{Result, RsaError};
pub use lesson::{KeyGenerationLesson, MessageExchange};
pub use rsa::{derive_keypair, is_prime, KeyMaterial};
