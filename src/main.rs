use std::io;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use gridsnake::config::{self, GridBounds, Theme};
use gridsnake::game::{Game, GameStatus};
use gridsnake::input::{self, GameInput};
use gridsnake::renderer;
use gridsnake::score::{load_high_score, save_high_score};
use gridsnake::terminal_runtime::{TerminalSession, install_panic_hook};
use gridsnake::ui::hud::HudInfo;

#[derive(Debug, Parser)]
#[command(version, about = "Deterministic tick-driven terminal snake")]
struct Cli {
    /// Largest playable x coordinate (the board spans 0..=MAX_X).
    #[arg(long, default_value_t = config::DEFAULT_MAX_X,
          value_parser = clap::value_parser!(i32).range(1..))]
    max_x: i32,

    /// Largest playable y coordinate (the board spans 0..=MAX_Y).
    #[arg(long, default_value_t = config::DEFAULT_MAX_Y,
          value_parser = clap::value_parser!(i32).range(1..))]
    max_y: i32,

    /// Seed for food placement; omit for a different run every time.
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme name.
    #[arg(long, default_value = "classic")]
    theme: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(theme) = config::theme_named(&cli.theme) else {
        let names: Vec<&str> = config::THEMES.iter().map(|theme| theme.name).collect();
        eprintln!(
            "unknown theme {:?}; available themes: {}",
            cli.theme,
            names.join(", ")
        );
        return ExitCode::from(2);
    };

    // Read before raw mode so a corrupt score file warns on a sane screen.
    let high_score = match load_high_score() {
        Ok(score) => score,
        Err(error) => {
            eprintln!("ignoring unreadable high score: {error}");
            0
        }
    };

    install_panic_hook();

    if let Err(error) = run(&cli, theme, high_score) {
        eprintln!("terminal error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli, theme: &Theme, mut high_score: u32) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;

    let bounds = GridBounds {
        max_x: cli.max_x,
        max_y: cli.max_y,
    };
    let mut game = new_game(bounds, cli.seed);
    game.status = GameStatus::Paused;

    let tick_interval = Duration::from_millis(config::TICK_INTERVAL_MS);
    let poll_timeout = Duration::from_millis(config::INPUT_POLL_MS);
    let mut last_tick = Instant::now();

    loop {
        session.terminal_mut().draw(|frame| {
            renderer::render(frame, &game, &HudInfo { high_score, theme });
        })?;

        if let Some(event) = input::poll_input(poll_timeout)? {
            match event {
                GameInput::Quit => break,
                GameInput::Confirm if game.is_start_screen() => {
                    game.status = GameStatus::Playing;
                    last_tick = Instant::now();
                }
                GameInput::Confirm if game.status == GameStatus::GameOver => {
                    game = new_game(bounds, cli.seed);
                    game.status = GameStatus::Paused;
                }
                other => game.apply_input(other),
            }
        }

        if last_tick.elapsed() >= tick_interval {
            game.tick();
            last_tick = Instant::now();
        }

        if game.status == GameStatus::GameOver && game.score > high_score {
            high_score = game.score;
            if let Err(error) = save_high_score(high_score) {
                eprintln!("failed to save high score: {error}");
            }
        }
    }

    Ok(())
}

fn new_game(bounds: GridBounds, seed: Option<u64>) -> Game {
    match seed {
        Some(seed) => Game::new_with_seed(bounds, seed),
        None => Game::new(bounds),
    }
}
