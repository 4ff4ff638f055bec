use crate::config::Config;
use clap::Args;
use std::path::PathBuf;

/// Flags understood by every binary. Each one overrides the matching config field.
#[derive(Args, Debug, Default, Clone)]
pub struct CommonArgs {
    /// Path to a JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Language model used for context filtering
    #[arg(short, long)]
    pub model: Option<String>,

    /// Base URL of the Ollama server
    #[arg(long)]
    pub ollama_url: Option<String>,

    /// Request timeout for the language model, in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Word list, one word per line
    #[arg(long)]
    pub words: Option<PathBuf>,

    /// Stopword list, one word per line
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// Comma-separated words to exclude from the results
    #[arg(short, long, value_delimiter = ',')]
    pub blacklist: Vec<String>,

    /// Print output at once instead of typing it out
    #[arg(long)]
    pub no_delay: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl CommonArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(model) = &self.model {
            config.llm.model = model.clone();
        }
        if let Some(url) = &self.ollama_url {
            config.llm.base_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.llm.timeout_secs = timeout;
        }
        if let Some(words) = &self.words {
            config.corpus.words_path = words.clone();
        }
        if let Some(stopwords) = &self.stopwords {
            config.corpus.stopwords_path = stopwords.clone();
        }
        if self.no_delay {
            config.display.typewriter = false;
        }
        if let Some(log_file) = &self.log_file {
            config.log_path = Some(log_file.clone());
        }
        config.blacklist.extend(
            self.blacklist
                .iter()
                .map(|w| w.trim().to_string())
                .filter(|w| !w.is_empty()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        common: CommonArgs,
    }

    #[test]
    fn flags_override_config() {
        let cli = TestCli::parse_from([
            "word_maker",
            "--model",
            "llama3.2",
            "--blacklist",
            "auntie, stoat",
            "--no-delay",
            "--timeout",
            "5",
        ]);
        let mut config = Config::default();
        config.blacklist.push("rain".to_string());
        cli.common.apply(&mut config);

        assert_eq!(config.llm.model, "llama3.2");
        assert_eq!(config.llm.timeout_secs, 5);
        assert!(!config.display.typewriter);
        assert_eq!(config.blacklist, vec!["rain", "auntie", "stoat"]);
    }

    #[test]
    fn no_flags_leave_config_untouched() {
        let cli = TestCli::parse_from(["word_maker"]);
        let mut config = Config::default();
        cli.common.apply(&mut config);
        assert_eq!(config, Config::default());
    }
}
