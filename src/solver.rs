//! Shortest path search

use std::collections::VecDeque;

use log::debug;

use crate::grid::{Direction, Grid, Point};

/// Find the shortest route from `entry` to `exit` with breadth-first search.
///
/// Visited flags of `grid` must be cleared beforehand; they are used to keep
/// track of discovered cells. A move is allowed when the mover's own wall in
/// that direction is open.
///
/// On success, every cell on the route, both ends included, is marked as a
/// path member and `true` is returned. When `exit` cannot be reached, returns
/// `false` and no cell is left marked.
pub fn shortest_path(grid: &mut Grid, entry: Point, exit: Point) -> bool {
    grid.clear_path();

    // Cell each discovered cell was reached from
    let mut prev: Vec<Vec<Option<Point>>> = (0..grid.rows())
        .map(|_| (0..grid.cols()).map(|_| None).collect())
        .collect();

    let mut frontier = VecDeque::from([entry]);
    grid.set_visited(entry);

    while let Some(current) = frontier.pop_front() {
        if current == exit {
            let steps = mark_path(grid, &prev, entry, exit);
            debug!("Found path from {entry:?} to {exit:?} in {steps} steps");
            return true;
        }

        for dir in Direction::ALL {
            let Some(next) = grid.neighbour(current, dir) else {
                continue;
            };
            if !grid.is_visited(next) && !grid.has_wall(current, dir) {
                grid.set_visited(next);
                prev[next.row][next.col] = Some(current);
                frontier.push_back(next);
            }
        }
    }

    debug!("No path from {entry:?} to {exit:?}");
    false
}

/// Walk predecessor links back from `exit`, marking cells down to `entry`.
///
/// Returns the number of steps on the route.
fn mark_path(grid: &mut Grid, prev: &[Vec<Option<Point>>], entry: Point, exit: Point) -> usize {
    let mut steps = 0;
    let mut current = exit;
    while current != entry {
        grid.set_on_path(current);
        match prev[current.row][current.col] {
            Some(p) => current = p,
            None => break,
        }
        steps += 1;
    }
    grid.set_on_path(entry);
    steps
}
