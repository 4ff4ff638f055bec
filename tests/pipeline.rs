//! End-to-end generation over a fixed on-disk corpus.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use word_core::config::Config;
use word_core::error::ContextError;
use word_core::{extract_letters, ContextFilter, Dictionary, GenerationParams, WordEngine};

/// Keeps the candidates that contain any of the context's words.
struct KeywordFilter;

impl ContextFilter for KeywordFilter {
    fn filter(&self, words: &[String], context: &str) -> Result<Vec<String>, ContextError> {
        Ok(words
            .iter()
            .filter(|w| context.split_whitespace().any(|k| w.contains(k)))
            .cloned()
            .collect())
    }
}

struct Corpus {
    _dir: TempDir,
    words: PathBuf,
    stopwords: PathBuf,
}

fn corpus() -> Corpus {
    let dir = TempDir::new().unwrap();
    let words = dir.path().join("words").join("en");
    let stopwords = dir.path().join("stopwords").join("english");
    fs::create_dir_all(words.parent().unwrap()).unwrap();
    fs::create_dir_all(stopwords.parent().unwrap()).unwrap();
    fs::write(
        &words,
        "A\nAmir\namin\nan\nauntie\nmain\nmanus\nmarina\nmask\nmina\nmurk\nsari\nsun\nsunk\ntsar\nus\n",
    )
    .unwrap();
    fs::write(&stopwords, "an\nus\nmain\n").unwrap();
    Corpus {
        _dir: dir,
        words,
        stopwords,
    }
}

#[test]
fn name_letters_generate_dictionary_words() {
    let corpus = corpus();
    let dictionary = Dictionary::load(&corpus.words, &corpus.stopwords).unwrap();
    let engine = WordEngine::new(dictionary, Box::new(KeywordFilter));

    let letters = engine.letters("Simran Kaur");
    assert_eq!(letters.as_slice(), &['a', 'i', 'k', 'm', 'n', 'r', 's', 'u']);

    let params = GenerationParams {
        min_length: 3,
        max_length: 5,
        allow_repeats: true,
        allow_stopwords: false,
        ..Default::default()
    };
    let words = engine.generate(&letters, &params);
    assert_eq!(words, vec!["amin", "manus", "mask", "mina", "murk", "sari", "sun", "sunk"]);

    let related = engine.filter_by_context(&words, "sun").unwrap();
    assert_eq!(related, vec!["sun", "sunk"]);
}

#[test]
fn stopwords_and_blacklist_from_the_original_example() {
    let corpus = corpus();
    let dictionary = Dictionary::load(&corpus.words, &corpus.stopwords).unwrap();
    let letters = extract_letters("Simran Kaur Jason Joseph Nathan");

    let params = GenerationParams {
        min_length: 2,
        max_length: 7,
        allow_stopwords: true,
        ..Default::default()
    }
    .with_blacklist(["auntie", "stoat"]);

    let words = word_core::generate_words(&dictionary, &letters, &params);
    assert!(words.contains(&"an".to_string()));
    assert!(words.contains(&"tsar".to_string()));
    assert!(!words.contains(&"auntie".to_string()));
    // Proper nouns keep their capital letter and can never be formed.
    assert!(!words.contains(&"Amir".to_string()));
}

#[test]
fn engine_loads_corpus_named_in_config() {
    let corpus = corpus();
    let mut config = Config::default();
    config.corpus.words_path = corpus.words.clone();
    config.corpus.stopwords_path = corpus.stopwords.clone();

    let engine = WordEngine::from_config(&config).unwrap();
    assert_eq!(engine.dictionary.words().count(), 16);
    assert!(engine.dictionary.is_stopword("main"));
}

#[test]
fn missing_corpus_fails_initialization() {
    let mut config = Config::default();
    config.corpus.words_path = PathBuf::from("/nonexistent/nltk_data/corpora/words/en");

    let err = WordEngine::from_config(&config).err().unwrap();
    assert!(err.to_string().contains("/nonexistent/nltk_data/corpora/words/en"));
}
