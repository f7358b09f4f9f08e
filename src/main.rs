//! Interactive maze shell

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use log::info;
use maze_carver::maze_generator::MazeGenerator;
use maze_carver::Maze;

const RULE: &str = "=====================================================================";

/// Generate mazes and reveal their solution on request
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Fixed number of rows, instead of a random one
    #[arg(long, requires = "cols")]
    rows: Option<usize>,

    /// Fixed number of columns, instead of a random one
    #[arg(long, requires = "rows")]
    cols: Option<usize>,
}

/// What the user asked for on one input line
enum Command {
    Regenerate,
    Solve,
    Quit,
    Unknown,
}

impl Command {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "" => Command::Regenerate,
            "1" => Command::Solve,
            "q" | "Q" | "\x1b" => Command::Quit,
            _ => Command::Unknown,
        }
    }
}

fn print_maze(out: &mut impl Write, maze: &Maze, header: &str) -> io::Result<()> {
    writeln!(out, "\n{RULE}\n{header}\n\n{RULE}")?;
    writeln!(out, "{maze}")?;
    out.flush()
}

/// Show a maze, then regenerate or solve it as keys are entered
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut gen = MazeGenerator::new(args.seed);
    if let (Some(rows), Some(cols)) = (args.rows, args.cols) {
        gen = gen.with_dimensions(rows, cols)?;
    }

    let prompt = "Press Enter to generate a new maze, '1' to solve it, or 'q' to quit.";
    let solved = "This is the solved maze. Press Enter to generate a new maze, or 'q' to quit.";

    let mut out = io::stdout().lock();
    let mut maze = gen.new_maze();
    print_maze(&mut out, &maze, prompt)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input")?;
        match Command::parse(&line) {
            Command::Regenerate => {
                maze = gen.new_maze();
                print_maze(&mut out, &maze, prompt)?;
            }
            Command::Solve => {
                maze.reset_visited();
                if maze.solve() {
                    info!("Path length {} cells", maze.path_len());
                    print_maze(&mut out, &maze, solved)?;
                } else {
                    writeln!(out, "No path found from entry to exit.")?;
                }
            }
            Command::Quit => break,
            Command::Unknown => writeln!(out, "{prompt}")?,
        }
    }

    writeln!(out, "Thanks for playing!")?;
    Ok(())
}
