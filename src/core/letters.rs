// File: src/core/letters.rs
use crate::core::types::LetterSet;
use std::collections::BTreeSet;

/// Extracts the unique letters of `input`, lowercased and sorted.
/// Spaces, punctuation and digits are dropped; text without letters yields an empty set.
/// Letters with no lowercase form (`ℂ`, mathematical capitals) are dropped too.
pub fn extract_letters(input: &str) -> LetterSet {
    let unique: BTreeSet<char> = input
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphabetic() && !c.is_uppercase())
        .collect();
    LetterSet::from_sorted(unique.into_iter().collect())
}
