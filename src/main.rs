use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter};

use grid_games::config::{AppConfig, Opponent, StrategyKind};
use grid_games::console::Console;
use grid_games::game::{GameKind, RuleEngine};
use grid_games::ui::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Console,
    Tui,
}

/// Play Connect Four or Tic-Tac-Toe in the terminal.
#[derive(Parser)]
#[command(name = "grid-games", about = "Play Connect Four or Tic-Tac-Toe in the terminal")]
struct Cli {
    /// Game to play
    #[arg(long)]
    game: Option<GameKind>,

    /// Front-end: line console or full-screen terminal UI
    #[arg(long, value_enum, default_value = "console")]
    mode: Mode,

    /// Second player; the console asks when neither this nor the config sets it
    #[arg(long)]
    opponent: Option<Opponent>,

    /// How the computer samples its moves
    #[arg(long)]
    strategy: Option<StrategyKind>,

    /// Seed for a reproducible computer opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "grid-games.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; the filter is narrowed once the config is known
    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let (filter, filter_handle) =
        reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new("warn")));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(game) = cli.game {
        config.game.kind = game;
    }
    if let Some(opponent) = cli.opponent {
        config.game.opponent = Some(opponent);
    }
    if let Some(strategy) = cli.strategy {
        config.computer.strategy = strategy;
    }
    if let Some(seed) = cli.seed {
        config.computer.seed = Some(seed);
    }
    config.validate().context("invalid configuration")?;

    // The terminal UI owns the screen, so it never logs
    let level = if cli.mode == Mode::Tui {
        Some(EnvFilter::new("off"))
    } else if from_env {
        None
    } else {
        Some(EnvFilter::default().add_directive(config.log_level()?.into()))
    };
    if let Some(level) = level {
        filter_handle
            .reload(level)
            .context("applying log level")?;
    }

    let engine = RuleEngine::new(config.rules()?);
    info!(game = config.game.kind.title(), mode = ?cli.mode, "starting");
    match cli.mode {
        Mode::Console => run_console(engine, &config),
        Mode::Tui => run_tui(engine, &config).context("terminal UI failed"),
    }
}

fn run_console(engine: RuleEngine, config: &AppConfig) -> Result<()> {
    let mut console = Console::new(engine, io::stdin().lock(), io::stdout().lock());

    let opponent = match config.game.opponent {
        Some(opponent) => opponent,
        None => match console.choose_opponent()? {
            Some(opponent) => opponent,
            None => return Ok(()),
        },
    };
    if opponent == Opponent::Computer {
        console = console.with_computer(config.computer.plays, config.computer_agent());
    }

    let outcome = console.run()?;
    info!(?outcome, turns = console.engine().turn_count(), "session finished");
    Ok(())
}

fn run_tui(engine: RuleEngine, config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(engine);
    if config.game.opponent == Some(Opponent::Computer) {
        app = app.with_computer(config.computer.plays, config.computer_agent());
    }
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
