// Lesson Configuration
// Knobs for exponent selection and the lesson's starting keypair

/// Public exponent candidates, tried in order
pub const PUBLIC_EXPONENT_CANDIDATES: [u64; 5] = [3, 5, 7, 17, 65537];

/// Textbook primes the lesson opens with
pub const DEFAULT_PRIMES: (u64, u64) = (7, 11);

/// What to do when no candidate exponent fits the totient
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExponentSearch {
    /// Only the configured candidates are considered
    #[default]
    Candidates,
    /// Fall back to the smallest coprime value in `2..totient`
    Widened,
}

/// Configuration for keypair derivation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeygenConfig {
    pub exponent_candidates: Vec<u64>,
    pub exponent_search: ExponentSearch,
}

impl Default for KeygenConfig {
    fn default() -> Self {
        Self {
            exponent_candidates: PUBLIC_EXPONENT_CANDIDATES.to_vec(),
            exponent_search: ExponentSearch::Candidates,
        }
    }
}

impl KeygenConfig {
    pub fn with_candidates(mut self, candidates: impl Into<Vec<u64>>) -> Self {
        self.exponent_candidates = candidates.into();
        self
    }

    pub fn with_search(mut self, search: ExponentSearch) -> Self {
        self.exponent_search = search;
        self
    }
}

/// Configuration for a key-generation lesson session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonConfig {
    /// Primes the session derives its first keypair from, and resets to
    pub initial_primes: (u64, u64),
    pub keygen: KeygenConfig,
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            initial_primes: DEFAULT_PRIMES,
            keygen: KeygenConfig::default(),
        }
    }
}

impl LessonConfig {
    pub fn with_initial_primes(mut self, p: u64, q: u64) -> Self {
        self.initial_primes = (p, q);
        self
    }

    pub fn with_keygen(mut self, keygen: KeygenConfig) -> Self {
        self.keygen = keygen;
        self
    }
}
