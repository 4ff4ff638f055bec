use anyhow::Context;
use clap::Parser;
use crossterm::style::Stylize;
use std::collections::BTreeSet;
use std::io::{stdin, stdout};
use std::process::ExitCode;
use word_core::cli::args::CommonArgs;
use word_core::cli::display::terminal_display;
use word_core::cli::prompt::Prompter;
use word_core::cli::session::{run_session, SessionDefaults};
use word_core::config::Config;
use word_core::{logging, WordEngine};

#[derive(Parser, Debug)]
#[command(name = "word_maker")]
#[command(about = "Interactively build words from letters and filter them by context")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "[ERROR]".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut config = Config::resolve(args.common.config.as_deref())?;
    args.common.apply(&mut config);
    logging::init(config.log_path.as_deref()).context("could not open log file")?;

    let engine = WordEngine::from_config(&config).context(
        "could not load the word corpus (check corpus.words_path and corpus.stopwords_path)",
    )?;

    let stdin = stdin();
    let mut prompter = Prompter::new(stdin.lock(), stdout());
    let mut display = terminal_display(&config.display);
    let blacklist: BTreeSet<String> = config.blacklist.iter().cloned().collect();

    run_session(
        &engine,
        &mut prompter,
        display.as_mut(),
        &SessionDefaults::default(),
        &blacklist,
    )?;
    Ok(())
}
