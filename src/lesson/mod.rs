// Lesson Module
// Session state the RSA key-generation lesson screens read and drive

pub mod session;

pub use session::{KeyGenerationLesson, MessageExchange};
