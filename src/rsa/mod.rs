// RSA Module - Main module file
// Exports the number theory and the keypair/encrypt/decrypt primitives

pub mod arith;
pub mod decrypt;
pub mod encrypt;
pub mod keygen;

pub use arith::{gcd, is_prime, mod_inverse, mod_pow};
pub use decrypt::{decrypt_crt_u64, decrypt_u64};
pub use encrypt::encrypt_u64;
pub use keygen::{
    derive_keypair, derive_keypair_with, CrtParams, KeyMaterial, RsaPrivateKey, RsaPublicKey,
};
