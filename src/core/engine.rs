use crate::config::Config;
use crate::context::{ContextFilter, OllamaContextFilter};
use crate::core::dictionary::Dictionary;
use crate::core::filter::generate_words;
use crate::core::letters::extract_letters;
use crate::core::types::{GenerationParams, LetterSet};
use crate::error::{ContextError, Result};
use tracing::{debug, error};

// The engine owns the read-only corpus and the context backend.
// Every pipeline step borrows it immutably; nothing is kept between requests.
pub struct WordEngine {
    pub dictionary: Dictionary,
    context_filter: Box<dyn ContextFilter>,
}

impl WordEngine {
    pub fn new(dictionary: Dictionary, context_filter: Box<dyn ContextFilter>) -> Self {
        Self {
            dictionary,
            context_filter,
        }
    }

    /// The explicit initialization step: loads the corpus and builds the chat client.
    /// Fails when the corpus files are missing; nothing is loaded lazily afterwards.
    pub fn from_config(config: &Config) -> Result<Self> {
        let dictionary = Dictionary::load(&config.corpus.words_path, &config.corpus.stopwords_path)?;
        let context_filter = OllamaContextFilter::new(&config.llm)?;
        Ok(Self::new(dictionary, Box::new(context_filter)))
    }

    pub fn letters(&self, text: &str) -> LetterSet {
        extract_letters(text)
    }

    pub fn generate(&self, letters: &[char], params: &GenerationParams) -> Vec<String> {
        generate_words(&self.dictionary, letters, params)
    }

    /// Asks the context backend to narrow `words`. Failures are returned, not retried.
    pub fn filter_by_context(
        &self,
        words: &[String],
        context: &str,
    ) -> std::result::Result<Vec<String>, ContextError> {
        debug!(context, candidates = words.len(), "Filtering by context");
        self.context_filter.filter(words, context).map_err(|e| {
            error!("Context filter failed: {}", e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::MockContextFilter;

    fn dictionary() -> Dictionary {
        Dictionary::new(["cat", "act", "tact", "dog", "god", "the"], ["the"])
    }

    #[test]
    fn pipeline_passes_candidates_to_context_filter() {
        let mut mock = MockContextFilter::new();
        mock.expect_filter()
            .withf(|words, context| {
                words.iter().map(String::as_str).eq(["act", "cat", "tact"]) && context == "animals"
            })
            .times(1)
            .returning(|_, _| Ok(vec!["cat".to_string()]));

        let engine = WordEngine::new(dictionary(), Box::new(mock));
        let letters = engine.letters("Cat, Ta!");
        let words = engine.generate(&letters, &GenerationParams::default());
        let related = engine.filter_by_context(&words, "animals").unwrap();

        assert_eq!(letters.as_slice(), &['a', 'c', 't']);
        assert_eq!(related, vec!["cat"]);
    }

    #[test]
    fn context_failure_is_surfaced() {
        let mut mock = MockContextFilter::new();
        mock.expect_filter().returning(|_, _| {
            Err(ContextError::Api {
                status: 503,
                message: "model not loaded".to_string(),
            })
        });

        let engine = WordEngine::new(dictionary(), Box::new(mock));
        let err = engine.filter_by_context(&["dog".to_string()], "pets").unwrap_err();
        assert!(matches!(err, ContextError::Api { status: 503, .. }));
    }

    #[test]
    fn from_config_requires_corpus() {
        let mut config = Config::default();
        config.corpus.words_path = "/nonexistent/words/en".into();
        assert!(WordEngine::from_config(&config).is_err());
    }
}
