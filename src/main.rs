use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{Settings, Style, GRID_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH, THEME};
use grid_snake::error::{AppError, SpawnError};
use grid_snake::game::GameState;
use grid_snake::geometry::GridGeometry;
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::renderer::{self, RenderOptions};
use grid_snake::terminal_runtime::{install_panic_hook, TerminalSession};
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Poll interval once the board is cleared and no more ticks run.
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Visual preset; `classic` runs at 20 ticks/s, `detailed` at 10 ticks/s.
    #[arg(long, value_enum, default_value_t = Style::Classic)]
    style: Style,

    /// Seed for food placement, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    /// Write a debug log to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            style: cli.style,
            seed: cli.seed,
            log_file: cli.log_file,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy)]
struct SessionSummary {
    final_length: usize,
    board_cleared: bool,
}

fn main() -> Result<(), AppError> {
    let settings = Settings::from(Cli::parse());

    init_logging(&settings)?;
    install_panic_hook();

    let summary = run(&settings)?;
    if summary.board_cleared {
        println!("Board cleared! Final length: {}", summary.final_length);
    }

    Ok(())
}

fn init_logging(settings: &Settings) -> Result<(), AppError> {
    let Some(path) = &settings.log_file else {
        return Ok(());
    };

    WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(path)?)?;
    Ok(())
}

fn run(settings: &Settings) -> Result<SessionSummary, AppError> {
    let geometry = GridGeometry::new(SCREEN_WIDTH, SCREEN_HEIGHT, GRID_SIZE)?;
    let mut state = match settings.seed {
        Some(seed) => GameState::new_with_seed(geometry, seed)?,
        None => GameState::new(geometry)?,
    };

    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();

    let interval = settings.style.tick_interval();
    let mut next_tick = Instant::now() + interval;
    let mut board_cleared = false;

    info!(
        "starting {}x{} board, {:?} style, {} ticks/s",
        geometry.columns(),
        geometry.rows(),
        settings.style,
        settings.style.ticks_per_second()
    );

    'session: loop {
        for game_input in input.drain_inputs()? {
            if game_input == GameInput::Quit {
                info!("quit after {} ticks", state.tick_count);
                break 'session;
            }

            state.apply_input(game_input);
        }

        let now = Instant::now();
        if !board_cleared && now >= next_tick {
            match state.tick() {
                Ok(report) if report.new_best => session.show_best(state.best_length)?,
                Ok(_) => {}
                Err(SpawnError::NoFreeCell { total_cells }) => {
                    info!("board of {total_cells} cells cleared at length {}", state.score());
                    board_cleared = true;
                }
            }

            next_tick += interval;
            if next_tick < now {
                warn!("tick overran by {:?}; skipping ahead", now - next_tick);
                next_tick = now + interval;
            }
        }

        let options = RenderOptions {
            style: settings.style,
            theme: &THEME,
            board_cleared,
        };
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, options))?;

        let timeout = if board_cleared {
            IDLE_POLL_INTERVAL
        } else {
            next_tick.saturating_duration_since(Instant::now())
        };
        input.wait(timeout)?;
    }

    Ok(SessionSummary {
        final_length: state.score(),
        board_cleared,
    })
}
