use anyhow::{Context, Result};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::tty::IsTty;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, stdin},
    path::PathBuf,
};
use typer::{
    config::{
        parse_max_word_length, parse_num_words, Config, ConfigStore, FileConfigStore, WordSource,
    },
    runtime::{CrosstermEventSource, LoopExit, Runner},
    session::Session,
    terminal::{self, TerminalGuard, INTERRUPT_EXIT_CODE},
    typing_policy::TypingPolicy,
    word_generator::{WordGenConfig, WordGenerator},
};

/// typing practice in the terminal with live feedback and wpm/accuracy results
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type a run of random words as fast and accurately as you can. Correct characters turn green, mistakes turn red, and words per minute and accuracy are printed when you finish."
)]
pub struct Cli {
    /// number of words to type, from 5 to 100 (default: 15)
    #[clap(short = 'n', long, value_parser = parse_num_words)]
    num_words: Option<usize>,

    /// maximum length of each word, from 1 to 100 (default: 8)
    #[clap(short = 'm', long, value_parser = parse_max_word_length)]
    max_word_length: Option<usize>,

    /// where words come from (default: builtin, or file when --word-list is given)
    #[clap(short = 's', long, value_enum)]
    source: Option<WordSource>,

    /// newline separated word list read by `--source file`
    #[clap(long, value_name = "PATH")]
    word_list: Option<PathBuf>,

    /// enable strict mode: mistakes must be corrected before the test can end
    #[clap(long, overrides_with = "no_strict")]
    strict: bool,

    /// disable strict mode even when the config file enables it
    #[clap(long, overrides_with = "strict")]
    no_strict: bool,

    /// read settings from this file instead of the default config location
    #[clap(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// store the resulting settings in the config file before starting
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Layer command line flags over settings loaded from the config file.
    fn resolve(&self, base: Config) -> Config {
        let source = self
            .source
            .or_else(|| self.word_list.as_ref().map(|_| WordSource::File))
            .unwrap_or(base.source);

        Config {
            num_words: self.num_words.unwrap_or(base.num_words),
            max_word_length: self.max_word_length.unwrap_or(base.max_word_length),
            source,
            word_list: self.word_list.clone().unwrap_or(base.word_list),
            strict: match (self.strict, self.no_strict) {
                (true, _) => true,
                (_, true) => false,
                _ => base.strict,
            },
        }
    }

    fn config_store(&self) -> FileConfigStore {
        self.config
            .as_ref()
            .map(FileConfigStore::with_path)
            .unwrap_or_default()
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = cli.config_store();
    let config = cli.resolve(store.load());
    config
        .validate()
        .with_context(|| format!("invalid settings in {}", store.path().display()))?;
    log::debug!("resolved settings: {config:?}");

    if cli.save_config {
        store
            .save(&config)
            .with_context(|| format!("failed to write {}", store.path().display()))?;
    }

    let words = WordGenerator::new(&WordGenConfig::from(&config))?.generate();
    let mut session = Session::new(words, TypingPolicy::from_strict(config.strict));

    terminal::install_interrupt_handler().context("failed to install signal handler")?;

    let exit = {
        let _guard = TerminalGuard::acquire().context("failed to prepare terminal")?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let mut runner = Runner::new(CrosstermEventSource);
        runner.run(&mut session, |s| {
            terminal.draw(|f| f.render_widget(s, f.area()))?;
            Ok(())
        })?
    };

    // stderr is usable again only once the guard has restored the terminal
    log::debug!(
        "session {exit:?}: {}/{} chars correct",
        session.correct_chars,
        session.total_chars
    );

    match exit {
        LoopExit::Completed => println!("{}", session.report()),
        LoopExit::Interrupted => eprintln!("Exiting typer..."),
    }

    match exit_code(exit) {
        0 => Ok(()),
        code => std::process::exit(code),
    }
}

fn exit_code(exit: LoopExit) -> i32 {
    match exit {
        LoopExit::Completed => 0,
        LoopExit::Interrupted => INTERRUPT_EXIT_CODE,
    }
}
