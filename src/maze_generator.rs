//! Maze generation

use anyhow::bail;
use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::grid::{Direction, Grid, Point};
use crate::Maze;

/// Smallest supported side length
pub const MIN_SIDE: usize = 5;
/// Largest supported side length
pub const MAX_SIDE: usize = 20;

/// Map draw `k` to a cell on the outer ring of a `rows` x `cols` grid.
///
/// The ring is walked clockwise from the top left corner: top row left to
/// right, right column top to bottom, bottom row right to left, left column
/// bottom to top. Each perimeter cell appears once on the walk. The four
/// draws past the end of the walk pick the corners again, clockwise from the
/// top left, so `2 * rows + 2 * cols` draws give every corner two chances and
/// every other perimeter cell one. Larger `k` wraps around.
///
/// # Examples
/// ```
/// use maze_carver::grid::Point;
/// use maze_carver::maze_generator::perimeter_point;
///
/// assert_eq!(perimeter_point(0, 7, 7), Point::new(0, 0));
/// assert_eq!(perimeter_point(6, 7, 7), Point::new(0, 6));
/// assert_eq!(perimeter_point(7, 7, 7), Point::new(1, 6));
/// ```
pub fn perimeter_point(k: usize, rows: usize, cols: usize) -> Point {
    let ring = 2 * (rows - 1) + 2 * (cols - 1);
    let k = k % (ring + 4);

    if k >= ring {
        let corners = [
            Point::new(0, 0),
            Point::new(0, cols - 1),
            Point::new(rows - 1, cols - 1),
            Point::new(rows - 1, 0),
        ];
        corners[k - ring]
    } else if k < cols {
        Point::new(0, k)
    } else if k < cols + rows - 1 {
        Point::new(k - cols + 1, cols - 1)
    } else if k < 2 * cols + rows - 2 {
        Point::new(rows - 1, 2 * cols + rows - 3 - k)
    } else {
        Point::new(ring - k, 0)
    }
}

/// Generator of perfect mazes
///
/// Holds the random state shared by every draw: dimensions, boundary
/// placement and the carving order.
pub struct MazeGenerator {
    random: StdRng,
    dimensions: Option<(usize, usize)>,
}

impl MazeGenerator {
    /// New generator. Without `seed`, the random state comes from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
            dimensions: None,
        }
    }

    /// Always generate `rows` x `cols` mazes instead of random sizes.
    ///
    /// Returns error, if either side is outside `MIN_SIDE..=MAX_SIDE`.
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> anyhow::Result<Self> {
        for (name, side) in [("rows", rows), ("cols", cols)] {
            if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
                bail!("`{name}` must be between {MIN_SIDE} and {MAX_SIDE}, got {side}");
            }
        }
        self.dimensions = Some((rows, cols));
        Ok(self)
    }

    /// Generate a fresh, fully carved maze
    ///
    /// Dimensions are drawn from `MIN_SIDE..=MAX_SIDE` unless fixed with
    /// [Self::with_dimensions]. Entry and exit are placed on the perimeter,
    /// then passages are carved starting from the entry.
    pub fn new_maze(&mut self) -> Maze {
        let (rows, cols) = match self.dimensions {
            Some(dims) => dims,
            None => (
                self.random.gen_range(MIN_SIDE..=MAX_SIDE),
                self.random.gen_range(MIN_SIDE..=MAX_SIDE),
            ),
        };
        let mut grid = Grid::new(rows, cols);
        let (entry, exit) = self.place_entry_exit(rows, cols);
        debug!("Generating {rows}x{cols} maze, entry {entry:?}, exit {exit:?}");

        self.carve(&mut grid, entry);

        Maze { grid, entry, exit }
    }

    /// Draw a random perimeter cell
    fn perimeter_draw(&mut self, rows: usize, cols: usize) -> Point {
        let k = self.random.gen_range(0..(2 * rows + 2 * cols));
        perimeter_point(k, rows, cols)
    }

    /// Choose entry and exit, redrawing the exit until the two differ
    pub fn place_entry_exit(&mut self, rows: usize, cols: usize) -> (Point, Point) {
        let entry = self.perimeter_draw(rows, cols);
        let exit = loop {
            let candidate = self.perimeter_draw(rows, cols);
            if candidate != entry {
                break candidate;
            }
        };
        (entry, exit)
    }

    /// Carve a spanning tree into `grid` by randomized depth-first search.
    ///
    /// Each cell on the stack keeps its own shuffled direction list and the
    /// index of the next direction to try, so the walk backtracks exactly as
    /// the recursive formulation would. All cells must be unvisited on entry;
    /// all are visited on return.
    pub fn carve(&mut self, grid: &mut Grid, start: Point) {
        let mut stack = vec![self.enter(grid, start)];

        while let Some((current, directions, next)) = stack.last_mut() {
            if *next == directions.len() {
                stack.pop();
                continue;
            }
            let dir = directions[*next];
            *next += 1;
            let current = *current;

            if let Some(neighbour) = grid.neighbour(current, dir) {
                if !grid.is_visited(neighbour) {
                    grid.carve(current, dir);
                    let frame = self.enter(grid, neighbour);
                    stack.push(frame);
                }
            }
        }
    }

    /// Mark `p` visited and shuffle the order its neighbours are tried in
    fn enter(&mut self, grid: &mut Grid, p: Point) -> (Point, [Direction; 4], usize) {
        grid.set_visited(p);
        let mut directions = Direction::ALL;
        directions.shuffle(&mut self.random);
        (p, directions, 0)
    }
}
