use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use gridpath::{render_gif, solution_string, Board, RenderConfig};
use pathfind::{generate_board, read_board};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info", global = true)]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Command {
    /// Find a path through a board and animate it as a GIF
    Solve {
        /// Path to the board file. Reads stdin if omitted
        board: Option<PathBuf>,

        /// Where to write the GIF, "-" for stdout
        #[arg(short, long, default_value = "pathfinding.gif")]
        output: PathBuf,

        /// Path to a JSON render config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the board with the path marked by '*' to stderr
        #[arg(short, long, default_value_t = false)]
        print_solution: bool,

        /// Print the search outcome as JSON to stdout
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print a random board
    Generate {
        #[arg(long, default_value_t = 24)]
        width: usize,

        #[arg(long, default_value_t = 8)]
        height: usize,

        /// Probability of a cell being a wall
        #[arg(long, default_value_t = 0.25)]
        wall_density: f64,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    match args.command {
        Command::Solve {
            board,
            output,
            config,
            print_solution,
            json,
        } => solve(board.as_deref(), &output, config.as_deref(), print_solution, json),
        Command::Generate {
            width,
            height,
            wall_density,
            seed,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            info!(seed);
            let mut rng = StdRng::seed_from_u64(seed);
            println!("{}", generate_board(&mut rng, width, height, wall_density)?);
            Ok(())
        }
    }
}

fn solve(
    board_path: Option<&Path>,
    output: &Path,
    config_path: Option<&Path>,
    print_solution: bool,
    json: bool,
) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    let text = read_board(board_path)?;

    let board = Board::parse(&text).map_err(report)?;
    let outcome = board.solve();
    if outcome.reached_goal {
        info!(steps = outcome.path.len(), cost = %outcome.cost, "Found a path");
    } else {
        warn!(
            steps = outcome.path.len(),
            "The goal is unreachable, showing the path to the closest cell"
        );
    }
    if print_solution {
        eprint!("{}", solution_string(&board.grid, &outcome.path));
    }

    let gif = render_gif(&board, &outcome.path, &config)
        .map_err(|err| report(gridpath::PathfindingError::from(err)))?;

    let to_stdout = output == Path::new("-");
    if to_stdout {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&gif)?;
        stdout.flush()?;
    } else {
        std::fs::write(output, &gif)
            .with_context(|| format!("Could not write GIF to '{}'", output.display()))?;
        info!(path = %output.display(), "Wrote GIF");
    }

    if json && !to_stdout {
        println!("{}", serde_json::to_string(&outcome)?);
    }
    Ok(())
}

/// Logs the causes of a board or rendering error and keeps only its
/// user-facing message for the returned error.
fn report(err: gridpath::PathfindingError) -> anyhow::Error {
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        info!("{}", cause);
        source = cause.source();
    }
    anyhow::anyhow!("{}", err)
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
