//! `mnemo-term` - the memory game in a terminal
//!
//! The engine runs on the system clock; the loop below waits for a key or the
//! next scheduled step, whichever comes first.

mod board;
mod draw;
mod input;

use std::fs::{self, File};
use std::io::{stdout, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use mnemo_core::EndReason;
use mnemo_engine::{EngineConfig, Host, Screen, ScoringKind, SequenceEngine};
use mnemo_time::Clock;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::board::Board;
use crate::input::{action_for, Action};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// Play Mnemo in the terminal
#[derive(Parser, Debug)]
#[command(name = "mnemo-term", version, about)]
struct Cli {
    /// TOML engine config (levels, scoring, reveal timing, seed)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scoring formula: linear, weighted or capped
    #[arg(short, long)]
    scoring: Option<ScoringKind>,

    /// Fixed RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// How long round feedback stays up, in ms (0 disables it)
    #[arg(long, default_value_t = 600)]
    feedback_ms: u64,
}

impl Cli {
    fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => EngineConfig::default(),
        };

        if let Some(scoring) = self.scoring {
            config.scoring = scoring;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

/// Raw mode and the alternate screen, restored on drop
struct TerminalSession {
    out: Stdout,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, cursor::Hide) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        Ok(TerminalSession { out })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Log to the file named by `MNEMO_LOG`; stay silent otherwise
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("MNEMO_LOG") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("creating log file {}", PathBuf::from(&path).display()))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();
    Ok(())
}

fn run(session: &mut TerminalSession, engine: &mut SequenceEngine<Board>) -> Result<()> {
    loop {
        engine.tick();

        if engine.host_mut().take_dirty() {
            draw::draw(&mut session.out, engine.host())?;
        }

        let wait = engine
            .next_due()
            .map(|due| due - engine.clock().now())
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL);

        if !event::poll(wait)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            // Resize or focus change: repaint
            draw::draw(&mut session.out, engine.host())?;
            continue;
        };

        match action_for(key) {
            Action::Choose(position) => {
                let outcome = board::press(engine, position);
                debug!(position, ?outcome, "choice");
            }
            Action::NewGame => engine.start_game(),
            Action::Reset => {
                engine.reset_game();
                engine.host_mut().switch_screen(Screen::Start);
            }
            Action::ShowResult => {
                engine.show_result(EndReason::Manual);
            }
            Action::Quit => return Ok(()),
            Action::None => {}
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let config = cli.engine_config()?;
    info!(scoring = %config.scoring, levels = config.levels.len(), "starting");

    let board = Board::new(Duration::from_millis(cli.feedback_ms));
    let mut engine = SequenceEngine::new(config, board);

    let mut session = TerminalSession::new()?;
    let result = run(&mut session, &mut engine);
    drop(session);

    if let Some(summary) = engine.last_result() {
        println!(
            "Last game: {} points, {} correct, {}",
            summary.score,
            summary.correct_sequences,
            summary.elapsed_label()
        );
    }
    result
}
