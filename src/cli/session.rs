//! The interactive generation session: prompts, generation, context filtering.

use crate::cli::display::{Pace, TextDisplay};
use crate::cli::prompt::Prompter;
use crate::core::engine::WordEngine;
use crate::core::types::{GenerationParams, LetterSet};
use crate::error::Result;
use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use tracing::info;

/// Answers offered when the user just presses Enter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDefaults {
    pub allow_repeats: bool,
    pub allow_stopwords: bool,
    pub min_letters: usize,
    pub max_letters: usize,
    pub word_count: usize,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            allow_repeats: true,
            allow_stopwords: false,
            min_letters: 5,
            max_letters: 7,
            word_count: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub letters: LetterSet,
    pub candidates: Vec<String>,
    pub related: Vec<String>,
}

/// Runs one session from first prompt to the filtered words.
///
/// A context filter failure is returned after the candidate words have been
/// shown, so the user keeps the part of the result that did succeed.
pub fn run_session<R, W>(
    engine: &WordEngine,
    prompter: &mut Prompter<R, W>,
    display: &mut dyn TextDisplay,
    defaults: &SessionDefaults,
    blacklist: &BTreeSet<String>,
) -> Result<SessionOutcome>
where
    R: BufRead,
    W: Write,
{
    let text = prompter.text("Please enter the words you want to use?")?;
    let letters = engine.letters(&text);
    display.show(&format!("Unique letters are: {}", letters), Pace::Fast)?;

    let context = prompter.text("Please enter the context you'd like to use?")?;
    let allow_repeats = prompter.yes_no("Allow repeated letters?", defaults.allow_repeats)?;
    let allow_stopwords = prompter.yes_no("Allow stop words?", defaults.allow_stopwords)?;
    let min_length = prompter.number("Min Letters?", defaults.min_letters)?;
    let max_length = prompter.number("Max Letters?", defaults.max_letters)?;
    let result_count = prompter.number("Word Count?", defaults.word_count)?;

    let params = GenerationParams {
        min_length,
        max_length,
        result_count,
        allow_repeats,
        allow_stopwords,
        blacklist: blacklist.clone(),
    };

    display.show("GENERATING", Pace::Slow)?;
    for line in [
        format!("Context: {}", context),
        format!("Repeat Letters: {}", params.allow_repeats),
        format!("Min Letters: {}", params.min_length),
        format!("Max Letters: {}", params.max_length),
        format!("Word Count: {}", params.result_count),
        format!("Allow Stop Words: {}", params.allow_stopwords),
    ] {
        display.show(&line, Pace::Fast)?;
    }

    let candidates = engine.generate(&letters, &params);
    info!(candidates = candidates.len(), "Generated words");
    display.show(&format!("Generated words: {:?}", candidates), Pace::Fast)?;

    display.show("FINDING CONTEXTUAL RELATED WORDS", Pace::Slow)?;
    let related = engine.filter_by_context(&candidates, &context)?;
    display.show(&format!("{:?}", related), Pace::Normal)?;

    Ok(SessionOutcome {
        letters,
        candidates,
        related,
    })
}
