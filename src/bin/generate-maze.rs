//! CLI for one-off maze generation

use clap::Parser;
use maze_carver::maze_generator::MazeGenerator;

/// Print a random perfect maze
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated field height
    #[arg(long, requires = "cols")]
    rows: Option<usize>,

    /// Generated field width
    #[arg(long, requires = "rows")]
    cols: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Also print the solved maze
    #[arg(short, long)]
    solve: bool,
}

/// Generate maze, print output
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut gen = MazeGenerator::new(args.seed);
    if let (Some(rows), Some(cols)) = (args.rows, args.cols) {
        gen = gen.with_dimensions(rows, cols)?;
    }

    let mut maze = gen.new_maze();
    println!("{maze}");

    if args.solve {
        maze.reset_visited();
        if maze.solve() {
            println!("\n{maze}");
            println!("The shortest path is {} steps.", maze.path_len() - 1);
        } else {
            anyhow::bail!("No path from entry to exit");
        }
    }
    Ok(())
}
