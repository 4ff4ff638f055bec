// File: src/core/filter.rs
use crate::core::dictionary::Dictionary;
use crate::core::types::GenerationParams;
use std::collections::HashMap;
use tracing::debug;

/// Selects dictionary words that can be spelled from `letters`.
///
/// Words are visited in dictionary order and the first `result_count` that pass
/// every constraint are returned. `letters` is the pool as the caller supplies it:
/// with repeats disallowed each letter may be used as often as it occurs in the pool,
/// so a deduplicated `LetterSet` only admits words without doubled letters.
pub fn generate_words(dictionary: &Dictionary, letters: &[char], params: &GenerationParams) -> Vec<String> {
    let pool = count_chars(letters.iter().copied());
    let lengths = params.length_range();

    let words: Vec<String> = dictionary
        .words()
        .filter(|word| lengths.contains(&word.chars().count()))
        .filter(|word| can_form_word(word, &pool, params.allow_repeats))
        .filter(|word| params.allow_stopwords || !dictionary.is_stopword(word))
        .filter(|word| !params.blacklist.contains(*word))
        .take(params.result_count)
        .map(str::to_string)
        .collect();

    debug!(
        letters = letters.len(),
        found = words.len(),
        limit = params.result_count,
        "Generated candidate words"
    );
    words
}

/// Checks whether `word` can be built from the letter counts in `pool`.
/// With repeats allowed only membership matters; otherwise per-letter counts are capped.
pub fn can_form_word(word: &str, pool: &HashMap<char, usize>, allow_repeats: bool) -> bool {
    let needed = count_chars(word.chars());
    if allow_repeats {
        needed.keys().all(|c| pool.contains_key(c))
    } else {
        needed
            .iter()
            .all(|(c, &count)| pool.get(c).is_some_and(|&available| count <= available))
    }
}

pub fn count_chars(chars: impl Iterator<Item = char>) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in chars {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}
