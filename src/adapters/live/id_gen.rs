//! Live adapter for the `IdGenerator` port.

use rand::rngs::ThreadRng;

use crate::identifier::generate_identifier;
use crate::ports::IdGenerator;

/// Live ID generator backed by the unseeded thread-local RNG.
///
/// Output differs from run to run.
pub struct LiveIdGenerator {
    rng: ThreadRng,
}

impl LiveIdGenerator {
    /// Creates a new live ID generator.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for LiveIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for LiveIdGenerator {
    fn generate_id(&mut self, alphabet: &[u8], len: usize) -> String {
        generate_identifier(&mut self.rng, alphabet, len)
    }
}
