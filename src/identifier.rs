//! Identifier shape and random sampling.

use rand::Rng;

/// Symbols an identifier is drawn from: `A-Z` followed by `0-9`.
pub const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of characters in one identifier.
pub const IDENTIFIER_LEN: usize = 128;

/// Builds one identifier of `len` symbols, each sampled independently and
/// uniformly from `alphabet`.
///
/// # Panics
///
/// Panics if `alphabet` is empty and `len` is non-zero.
pub fn generate_identifier<R>(rng: &mut R, alphabet: &[u8], len: usize) -> String
where
    R: Rng + ?Sized,
{
    (0..len)
        .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
        .collect()
}

/// Describes why `line` is not a well-formed identifier, or `None` if it is.
#[must_use]
pub fn identifier_defect(line: &str, alphabet: &[u8], len: usize) -> Option<String> {
    let outside = |ch: char| u8::try_from(ch).map_or(true, |b| !alphabet.contains(&b));
    if let Some((column, ch)) = line.char_indices().find(|&(_, ch)| outside(ch)) {
        return Some(format!("character {ch:?} at column {} is outside the alphabet", column + 1));
    }
    if line.len() != len {
        return Some(format!("expected {len} characters, found {}", line.len()));
    }
    None
}

/// Returns `true` if `line` has exactly `len` symbols, all from `alphabet`.
#[must_use]
pub fn is_valid_identifier(line: &str, alphabet: &[u8], len: usize) -> bool {
    identifier_defect(line, alphabet, len).is_none()
}
