use balatro_rs::config::RoundConfig;
use balatro_rs::round::Round;
use balatro_rs::text;
use balatro_rs::tui::{app::AppState, controller};
use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::error::Error;
use std::fs::File;
use std::io::{self, IsTerminal, Stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Simplified Balatro: score five-card poker hands", long_about = None)]
struct Args {
    /// Line-oriented mode instead of the full-screen UI
    #[arg(long)]
    text: bool,
    /// Seed for reproducible shuffles
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 8)]
    hand_size: usize,
    #[arg(long, default_value_t = 5)]
    plays: u32,
    #[arg(long, default_value_t = 5)]
    discards: u32,
    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&Path>, text_mode: bool) -> Result<(), Box<dyn Error>> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = Vec::new();
    if let Some(path) = log_file {
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config.clone(),
            File::create(path)?,
        ));
    }
    // The full-screen UI owns the terminal, so only text mode logs to stderr.
    if text_mode {
        loggers.push(simplelog::TermLogger::new(
            log::LevelFilter::Warn,
            config,
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        ));
    }
    if !loggers.is_empty() {
        simplelog::CombinedLogger::init(loggers)?;
    }
    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let text_mode = args.text || !io::stdout().is_terminal();
    init_logging(args.log_file.as_deref(), text_mode)?;

    let config = RoundConfig::default()
        .with_hand_size(args.hand_size)
        .with_max_plays(args.plays)
        .with_max_discards(args.discards);
    let round = match args.seed {
        Some(seed) => Round::seeded(config, seed)?,
        None => Round::new(config)?,
    };
    log::info!("balatro-rs {} starting, text mode: {text_mode}", balatro_rs::VERSION);

    if text_mode {
        let mut round = round;
        let stdin = io::stdin();
        let mut stdout = io::stdout().lock();
        text::run(&mut round, stdin.lock(), &mut stdout)?;
        return Ok(());
    }

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::with_round(round, args.seed);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    Ok(res?)
}
