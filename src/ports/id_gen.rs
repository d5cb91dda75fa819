//! ID generator port for producing random identifiers.

/// Generates random identifiers.
///
/// Abstracting the random source lets tests and fixtures substitute a
/// seeded sequence for the unseeded one used by normal runs.
pub trait IdGenerator {
    /// Generates one identifier of `len` symbols drawn from `alphabet`.
    ///
    /// Implementations must sample each symbol independently and uniformly.
    fn generate_id(&mut self, alphabet: &[u8], len: usize) -> String;
}
