use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use clap::Parser;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

use maze_solver::{
    MazeConfig, Trace,
    generators::generate_maze,
    observer::Paced,
    render::{Canvas, TerminalView},
    solvers::solve_maze,
};

/// Generate a perfect maze and walk it from the entrance to the exit
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of cell rows
    #[arg(long, default_value_t = 12)]
    rows: usize,

    /// Number of cell columns
    #[arg(long, default_value_t = 16)]
    cols: usize,

    /// Random seed, for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Terminal column of the maze's left edge
    #[arg(long, default_value_t = 0)]
    origin_x: u16,

    /// Terminal row of the maze's top edge
    #[arg(long, default_value_t = 0)]
    origin_y: u16,

    /// Draw carving and solving step by step
    #[arg(long)]
    animate: bool,

    /// Pause after each animation step, in milliseconds
    #[arg(long, default_value_t = 2)]
    delay_ms: u64,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Install the global subscriber. The returned guard must stay alive for
/// file logs to be flushed.
fn init_logging(args: &Args) -> anyhow::Result<Option<WorkerGuard>> {
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    match &args.log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("log file path {} has no file name", path.display()))?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_logging(&args)?;

    let config = MazeConfig {
        rows: args.rows,
        cols: args.cols,
        seed: args.seed,
        origin: (args.origin_x, args.origin_y),
    };
    let mut maze = config.build_maze().context("cannot create maze")?;
    tracing::info!(?config, "Starting maze run");

    let start = maze.entrance();
    let solved = if args.animate {
        let view = TerminalView::new(std::io::stdout(), &maze, config.origin)
            .context("cannot draw on the terminal")?;
        let mut view = Paced::new(view, Duration::from_millis(args.delay_ms));
        generate_maze(&mut maze, start, config.seed, &mut view)?;
        let solved = solve_maze(&mut maze, &mut view);
        view.into_inner()
            .finish()
            .context("cannot draw on the terminal")?;
        solved
    } else {
        generate_maze(&mut maze, start, config.seed, &mut ())?;
        let mut trace = Trace::new();
        let solved = solve_maze(&mut maze, &mut trace);
        tracing::info!(
            forward = trace.forward_moves().count(),
            undone = trace.undo_moves().count(),
            "Solver finished"
        );

        let mut canvas = Canvas::new(&maze);
        trace.events().iter().for_each(|event| canvas.apply(event));
        canvas
            .print(&mut std::io::stdout(), config.origin)
            .context("cannot print maze")?;
        solved
    };

    if solved {
        println!("Maze solved! Exit reached.");
    } else {
        tracing::warn!("Solver could not reach the exit");
        println!("No path found to the exit.");
    }
    Ok(())
}
