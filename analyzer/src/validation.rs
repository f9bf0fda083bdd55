use crate::error::{EngineError, EngineResult};

/// Accepted nucleotide alphabet. `N` is the standard ambiguity code.
pub const ALPHABET: [char; 5] = ['A', 'C', 'G', 'T', 'N'];

/// Normalize a raw nucleotide string: trim, uppercase, and reject anything
/// outside the accepted alphabet. Pure; no side effects.
///
/// # Errors
///
/// * `Validation` if the sequence is empty after trimming or contains an
///   invalid character (the error names the character and its position).
pub fn normalize_sequence(raw: &str) -> EngineResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EngineError::validation("sequence", "sequence is empty"));
    }

    let mut normalized = String::with_capacity(trimmed.len());
    for (position, ch) in trimmed.chars().enumerate() {
        let upper = ch.to_ascii_uppercase();
        if !ALPHABET.contains(&upper) {
            return Err(EngineError::validation(
                "sequence",
                format!("invalid character '{ch}' at position {position}; only A, C, G, T, N are accepted"),
            ));
        }
        normalized.push(upper);
    }
    Ok(normalized)
}
