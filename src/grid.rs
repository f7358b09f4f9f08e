//! Cells, walls and the rectangular grid they live in

/// Location in the grid
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Movement from one cell to an adjacent one
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    /// All directions, in the order the algorithms consider them
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }

    /// Row and column delta
    fn offset(self) -> (isize, isize) {
        match self {
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
        }
    }
}

/// Single square of the maze
///
/// A wall flag is `true` when the wall is standing and blocks movement in
/// that direction.
#[derive(Clone, Debug)]
pub struct Cell {
    top: bool,
    bottom: bool,
    left: bool,
    right: bool,
    /// Carving progress during generation, BFS discovery during solving
    visited: bool,
    /// Cell is part of the solved route
    on_path: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
            visited: false,
            on_path: false,
        }
    }
}

impl Cell {
    pub fn has_wall(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn remove_wall(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.top = false,
            Direction::Down => self.bottom = false,
            Direction::Left => self.left = false,
            Direction::Right => self.right = false,
        }
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn is_on_path(&self) -> bool {
        self.on_path
    }
}

/// Rectangular array of cells, `rows` x `cols`
///
/// Cell accessors expect coordinates inside the grid and panic otherwise;
/// use [Grid::neighbour] to step safely.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// New grid with every wall standing and all flags cleared
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: (0..rows)
                .map(|_| (0..cols).map(|_| Cell::default()).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, p: Point) -> &Cell {
        &self.cells[p.row][p.col]
    }

    fn cell_mut(&mut self, p: Point) -> &mut Cell {
        &mut self.cells[p.row][p.col]
    }

    pub fn contains(&self, p: Point) -> bool {
        p.row < self.rows && p.col < self.cols
    }

    /// Adjacent coordinate in direction `dir`, or `None` when it would fall
    /// outside the grid.
    pub fn neighbour(&self, p: Point, dir: Direction) -> Option<Point> {
        let (dr, dc) = dir.offset();
        let row = p.row.checked_add_signed(dr)?;
        let col = p.col.checked_add_signed(dc)?;
        let next = Point { row, col };
        self.contains(next).then_some(next)
    }

    pub fn has_wall(&self, p: Point, dir: Direction) -> bool {
        self.cell(p).has_wall(dir)
    }

    /// Remove the wall between `p` and its neighbour in direction `dir`.
    ///
    /// Both facing walls go together, keeping the two cells in agreement.
    /// The neighbour must exist.
    pub fn carve(&mut self, p: Point, dir: Direction) {
        let (dr, dc) = dir.offset();
        let next = Point {
            row: p.row.wrapping_add_signed(dr),
            col: p.col.wrapping_add_signed(dc),
        };
        self.cell_mut(p).remove_wall(dir);
        self.cell_mut(next).remove_wall(dir.opposite());
    }

    pub fn is_visited(&self, p: Point) -> bool {
        self.cell(p).is_visited()
    }

    pub fn set_visited(&mut self, p: Point) {
        self.cell_mut(p).visited = true;
    }

    /// Clear the visited flag of every cell
    pub fn reset_visited(&mut self) {
        self.cells
            .iter_mut()
            .flatten()
            .for_each(|cell| cell.visited = false);
    }

    pub fn is_on_path(&self, p: Point) -> bool {
        self.cell(p).is_on_path()
    }

    pub fn set_on_path(&mut self, p: Point) {
        self.cell_mut(p).on_path = true;
    }

    pub fn clear_path(&mut self) {
        self.cells
            .iter_mut()
            .flatten()
            .for_each(|cell| cell.on_path = false);
    }

    /// All coordinates, row by row
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Point { row, col }))
    }

    /// Number of interior walls that have been carved open
    ///
    /// Each shared wall is counted once, looking right and down from every
    /// cell.
    pub fn open_passages(&self) -> usize {
        self.points()
            .flat_map(|p| [(p, Direction::Right), (p, Direction::Down)])
            .filter(|&(p, dir)| self.neighbour(p, dir).is_some() && !self.has_wall(p, dir))
            .count()
    }

    /// Coordinate lies on the outer ring of the grid
    pub fn on_perimeter(&self, p: Point) -> bool {
        self.contains(p)
            && (p.row == 0 || p.col == 0 || p.row == self.rows - 1 || p.col == self.cols - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, Grid, Point};

    #[test]
    fn new_grid_is_closed() {
        let grid = Grid::new(5, 6);
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cols(), 6);
        for p in grid.points() {
            for dir in Direction::ALL {
                assert!(grid.has_wall(p, dir));
            }
            assert!(!grid.is_visited(p));
            assert!(!grid.is_on_path(p));
        }
        assert_eq!(grid.open_passages(), 0);
    }

    #[test]
    fn carve_opens_both_sides() {
        let mut grid = Grid::new(5, 5);
        let a = Point::new(2, 2);

        grid.carve(a, Direction::Right);
        assert!(!grid.has_wall(a, Direction::Right));
        assert!(!grid.has_wall(Point::new(2, 3), Direction::Left));

        grid.carve(a, Direction::Up);
        assert!(!grid.has_wall(a, Direction::Up));
        assert!(!grid.has_wall(Point::new(1, 2), Direction::Down));

        // Untouched walls stay put
        assert!(grid.has_wall(a, Direction::Left));
        assert!(grid.has_wall(a, Direction::Down));
        assert_eq!(grid.open_passages(), 2);
    }

    #[test]
    fn neighbour_stays_inside() {
        let grid = Grid::new(5, 7);
        let corner = Point::new(0, 0);
        assert_eq!(grid.neighbour(corner, Direction::Up), None);
        assert_eq!(grid.neighbour(corner, Direction::Left), None);
        assert_eq!(
            grid.neighbour(corner, Direction::Down),
            Some(Point::new(1, 0))
        );

        let far = Point::new(4, 6);
        assert_eq!(grid.neighbour(far, Direction::Down), None);
        assert_eq!(grid.neighbour(far, Direction::Right), None);
        assert_eq!(grid.neighbour(far, Direction::Left), Some(Point::new(4, 5)));
    }

    #[test]
    fn reset_visited_twice() {
        let mut grid = Grid::new(6, 5);
        let all: Vec<Point> = grid.points().collect();
        for p in all {
            grid.set_visited(p);
        }

        grid.reset_visited();
        assert!(grid.points().all(|p| !grid.is_visited(p)));
        grid.reset_visited();
        assert!(grid.points().all(|p| !grid.is_visited(p)));
    }

    #[test]
    fn perimeter_membership() {
        let grid = Grid::new(5, 8);
        assert!(grid.on_perimeter(Point::new(0, 3)));
        assert!(grid.on_perimeter(Point::new(4, 3)));
        assert!(grid.on_perimeter(Point::new(2, 0)));
        assert!(grid.on_perimeter(Point::new(2, 7)));
        assert!(!grid.on_perimeter(Point::new(2, 3)));
        assert!(!grid.on_perimeter(Point::new(5, 0)));
    }
}
