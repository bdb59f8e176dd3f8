//! Maze-runner CLI.
//!
//! Solves character-grid mazes by left-hand wall following, validates maze
//! files, and renders parsed mazes back to text.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use maze_runner::coords::parse_coord;
use maze_runner::core::parse::build_grid;
use maze_runner::core::render::render;
use maze_runner::core::types::Coord;
use maze_runner::explore::ExploreError;
use maze_runner::io::config::load_config;
use maze_runner::io::maze_file::read_maze_text;
use maze_runner::solve::{SolveRequest, solve};
use maze_runner::{exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "maze-runner",
    version,
    about = "Left-hand wall-following maze solver"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Explore a maze and print the loop-trimmed path to the goal.
    Solve {
        /// Maze text file.
        maze: PathBuf,
        /// Starting cell as "x, y" (default: bottom-left corner).
        #[arg(long)]
        starting: Option<String>,
        /// Goal cell as "x, y" (default: top-right corner).
        #[arg(long)]
        goal: Option<String>,
        /// Config file (TOML). Defaults apply when the file is missing.
        #[arg(long, default_value = "maze-runner.toml")]
        config: PathBuf,
    },
    /// Parse a maze file and print its dimensions.
    Check {
        /// Maze text file.
        maze: PathBuf,
    },
    /// Parse a maze file and print it back as text.
    Render {
        /// Maze text file.
        maze: PathBuf,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_code_for(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Solve {
            maze,
            starting,
            goal,
            config,
        } => cmd_solve(maze, starting.as_deref(), goal.as_deref(), &config),
        Command::Check { maze } => cmd_check(&maze),
        Command::Render { maze } => cmd_render(&maze),
    }
}

fn cmd_solve(
    maze: PathBuf,
    starting: Option<&str>,
    goal: Option<&str>,
    config_path: &Path,
) -> Result<()> {
    let config = load_config(config_path)?;
    let request = SolveRequest {
        maze_path: maze,
        starting: parse_endpoint(starting, "--starting")?,
        goal: parse_endpoint(goal, "--goal")?,
    };

    let outcome = solve(&request, &config)?;
    let pairs = outcome
        .path
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!("{pairs}");
    Ok(())
}

fn parse_endpoint(arg: Option<&str>, flag: &'static str) -> Result<Option<Coord>> {
    arg.map(|raw| parse_coord(raw).with_context(|| format!("parse {flag}")))
        .transpose()
}

fn cmd_check(maze: &Path) -> Result<()> {
    let text = read_maze_text(maze)?;
    let grid =
        build_grid(&text).with_context(|| format!("parse maze file {}", maze.display()))?;
    println!("{}x{}", grid.width(), grid.height());
    Ok(())
}

fn cmd_render(maze: &Path) -> Result<()> {
    let text = read_maze_text(maze)?;
    let grid =
        build_grid(&text).with_context(|| format!("parse maze file {}", maze.display()))?;
    println!("{}", render(&grid));
    Ok(())
}

/// Map an error chain to the process exit code.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ExploreError>() {
        Some(ExploreError::GoalUnreachable { .. }) => exit_codes::UNREACHABLE,
        _ => exit_codes::INVALID,
    }
}
