// One-shot generation without prompts.
// Run with: cargo run --bin generate -- --text "Simran Kaur" --context "words related to AI"
use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use word_core::cli::args::CommonArgs;
use word_core::config::Config;
use word_core::{logging, GenerationParams, WordEngine};

#[derive(Parser, Debug)]
#[command(name = "generate")]
#[command(about = "Generate words from the letters of a text and optionally filter them by context")]
struct Args {
    /// Text whose letters are used
    #[arg(short, long)]
    text: String,

    /// Topic used to narrow the generated words
    #[arg(long)]
    context: Option<String>,

    /// Minimum word length
    #[arg(long, default_value_t = 3)]
    min: usize,

    /// Maximum word length
    #[arg(long, default_value_t = 7)]
    max: usize,

    /// Number of words to generate
    #[arg(long, default_value_t = 50)]
    count: usize,

    /// Use each available letter at most once per word
    #[arg(long)]
    no_repeats: bool,

    /// Leave out stop words
    #[arg(long)]
    no_stopwords: bool,

    /// Print the generated words without asking the model
    #[arg(long)]
    skip_context: bool,

    #[command(flatten)]
    common: CommonArgs,
}

impl Args {
    fn params(&self, blacklist: &[String]) -> GenerationParams {
        GenerationParams {
            min_length: self.min,
            max_length: self.max,
            result_count: self.count,
            allow_repeats: !self.no_repeats,
            allow_stopwords: !self.no_stopwords,
            ..Default::default()
        }
        .with_blacklist(blacklist.iter().cloned())
    }

    /// The context to filter by, unless filtering was skipped or no context given.
    fn context(&self) -> Option<&str> {
        if self.skip_context {
            return None;
        }
        self.context.as_deref().filter(|c| !c.trim().is_empty())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut config = Config::resolve(args.common.config.as_deref())?;
    args.common.apply(&mut config);
    logging::init(config.log_path.as_deref()).context("could not open log file")?;

    let engine = WordEngine::from_config(&config).context("could not load the word corpus")?;

    let letters = engine.letters(&args.text);
    println!("Unique letters: {}", letters);

    let params = args.params(&config.blacklist);

    let words = engine.generate(&letters, &params);
    println!("Generated valid words: {:?}", words);

    if let Some(context) = args.context() {
        let related = engine
            .filter_by_context(&words, context)
            .context("context filtering failed")?;
        println!("Filtered words based on context '{}': {:?}", context, related);
    }
    Ok(())
}
