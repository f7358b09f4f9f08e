//! Generate perfect mazes and find the way through them
//!
//! A maze is a rectangular grid of cells whose passages form a spanning
//! tree: every cell can be reached, and between any two cells there is
//! exactly one route. Entry and exit sit on the outer boundary.
//!
//! # Examples
//! ```
//! use maze_carver::maze_generator::MazeGenerator;
//!
//! let mut gen = MazeGenerator::new(Some(13));
//! let mut maze = gen.new_maze();
//! println!("{maze}");
//!
//! maze.reset_visited();
//! assert!(maze.solve());
//! assert!(maze.path_len() >= 2);
//! println!("{maze}");
//! ```
//!
//! ## Rendering
//! Walls are drawn with `+---+` and `|`, entry and exit with `#` and the
//! solved route with `x`.
//! ```
//! use maze_carver::maze_generator::MazeGenerator;
//!
//! let mut gen = MazeGenerator::new(Some(0)).with_dimensions(5, 5).unwrap();
//! let maze = gen.new_maze();
//! let text = maze.to_string();
//!
//! assert_eq!(text.lines().count(), 2 * 5 + 1);
//! assert_eq!(text.lines().last(), Some("+---+---+---+---+---+"));
//! assert_eq!(text.matches(" # ").count(), 2);
//! ```

use std::fmt;

use itertools::Itertools;

pub mod grid;
pub mod maze_generator;
pub mod solver;

use grid::{Direction, Grid, Point};

/// Carved maze with its entry and exit
///
/// Created by [maze_generator::MazeGenerator::new_maze]; regenerating
/// produces a new instance rather than changing this one.
#[derive(Clone, Debug)]
pub struct Maze {
    grid: Grid,
    entry: Point,
    exit: Point,
}

impl Maze {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn entry(&self) -> Point {
        self.entry
    }

    pub fn exit(&self) -> Point {
        self.exit
    }

    pub fn is_entry(&self, p: Point) -> bool {
        p == self.entry
    }

    pub fn is_exit(&self, p: Point) -> bool {
        p == self.exit
    }

    /// Clear visited flags left over from generation or an earlier solve.
    ///
    /// Must be called before [Self::solve].
    pub fn reset_visited(&mut self) {
        self.grid.reset_visited();
    }

    /// Solve maze
    ///
    /// Find the shortest path from entry to exit and mark its cells. Returns
    /// `false`, if the exit cannot be reached.
    pub fn solve(&mut self) -> bool {
        solver::shortest_path(&mut self.grid, self.entry, self.exit)
    }

    /// Number of cells marked on the solved route, ends included
    pub fn path_len(&self) -> usize {
        self.grid
            .points()
            .filter(|&p| self.grid.is_on_path(p))
            .count()
    }

    /// Glyphs drawn inside a cell
    fn cell_body(&self, p: Point) -> &'static str {
        if self.grid.cell(p).is_on_path() {
            " x "
        } else if self.is_entry(p) || self.is_exit(p) {
            " # "
        } else {
            "   "
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = &self.grid;
        for row in 0..grid.rows() {
            let points = (0..grid.cols()).map(|col| Point::new(row, col));

            let top = points
                .clone()
                .map(|p| {
                    if grid.has_wall(p, Direction::Up) {
                        "+---"
                    } else {
                        "+   "
                    }
                })
                .join("");
            writeln!(f, "{top}+")?;

            let sides = points
                .map(|p| {
                    let left = if grid.has_wall(p, Direction::Left) {
                        "|"
                    } else {
                        " "
                    };
                    format!("{left}{}", self.cell_body(p))
                })
                .join("");
            writeln!(f, "{sides}|")?;
        }
        write!(f, "{}+", (0..grid.cols()).map(|_| "+---").join(""))
    }
}
