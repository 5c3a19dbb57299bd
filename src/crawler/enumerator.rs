//! Combination enumerator
//!
//! Maps a zero-based progress index to the keyword combination processed at
//! that step. For two-letter suffixes the index is read as a two-digit
//! base-32 number, so the first suffix character varies slowest, the same
//! order as two nested loops over the alphabet.

use crate::state::SuffixLength;
use crate::{SessionError, SessionResult};

/// The Persian alphabet, in enumeration order
pub const ALPHABET: [char; 32] = [
    'ا', 'ب', 'پ', 'ت', 'ث', 'ج', 'چ', 'ح', 'خ', 'د', 'ذ', 'ر', 'ز', 'ژ', 'س', 'ش', 'ص', 'ض', 'ط',
    'ظ', 'ع', 'غ', 'ف', 'ق', 'ک', 'گ', 'ل', 'م', 'ن', 'و', 'ه', 'ی',
];

/// Returns the combination at `index`
///
/// # Returns
///
/// * `Ok(String)` - `seed_text`, a space, then the suffix
/// * `Err(SessionError::OutOfRange)` - `index` is past the combination space
///
/// # Examples
///
/// ```
/// use keyword_ripple::{combination_at, SuffixLength};
///
/// assert_eq!(combination_at("x", SuffixLength::One, 1).unwrap(), "x ب");
/// assert_eq!(combination_at("x", SuffixLength::Two, 33).unwrap(), "x بب");
/// ```
pub fn combination_at(
    seed_text: &str,
    suffix_length: SuffixLength,
    index: usize,
) -> SessionResult<String> {
    let total = suffix_length.total_combinations();
    if index >= total {
        return Err(SessionError::OutOfRange { index, total });
    }

    let base = ALPHABET.len();
    let mut combination = String::with_capacity(seed_text.len() + 1 + 2 * 4);
    combination.push_str(seed_text);
    combination.push(' ');

    match suffix_length {
        SuffixLength::One => combination.push(ALPHABET[index]),
        SuffixLength::Two => {
            combination.push(ALPHABET[index / base]);
            combination.push(ALPHABET[index % base]);
        }
    }

    Ok(combination)
}
