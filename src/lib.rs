//! # grid_astar
//!
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) pathfinding over a fixed-size grid of
//! free and blocked nodes, with optional diagonal movement. Diagonal steps may pass between two
//! blocked cells (no corner-cutting restriction). Step costs are integers: [C] for a cardinal step
//! and [D] for a diagonal one, roughly `C * sqrt(2)`. The heuristic is the octile distance when
//! diagonals are allowed and the Manhattan distance otherwise, so returned paths are optimal.
//!
//! Among open nodes with equal estimated total cost, the one closest to the goal by the heuristic
//! is expanded first, which makes the shape of returned paths deterministic.
//!
//! Search bookkeeping lives in a [SearchContext] owned by each search rather than on the nodes,
//! so a [NodeGrid] can be shared between threads and searched concurrently. Connected components
//! are pre-computed to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use grid_astar::{build_grid, find};
//! use grid_util::point::Point;
//!
//! let grid = build_grid(3, 3, [Point::new(1, 1)]).unwrap();
//! let start = grid.get(0, 0).unwrap();
//! let end = grid.get(2, 2).unwrap();
//! let path = find(start, end, &grid, true).unwrap().unwrap();
//! assert_eq!(path.len(), 4);
//! ```
pub mod astar;
pub mod error;
pub mod node;
pub mod node_grid;
pub mod solver;

pub use astar::SearchContext;
pub use error::{EndpointIssue, GridError};
pub use node::{Node, Terrain};
pub use node_grid::NodeGrid;
pub use solver::astar::AstarSolver;
pub use solver::dijkstra::DijkstraSolver;
pub use solver::{GridSolver, SearchConfig};

use grid_util::point::Point;

/// Cost of a cardinal step.
pub const C: i32 = 99;
/// Cost of a diagonal step.
pub const D: i32 = 140;
/// What a diagonal step saves over two cardinal steps, used in the octile distance.
pub const E: i32 = 2 * C - D;

pub const N_SMALLVEC_SIZE: usize = 8;

/// Builds a `width` by `height` grid in which the listed cells are blocked and all others free.
pub fn build_grid<I>(width: usize, height: usize, blocked: I) -> Result<NodeGrid, GridError>
where
    I: IntoIterator<Item = Point>,
{
    NodeGrid::build(width, height, blocked)
}

/// Finds a shortest path from `start` to `end` using A*. The returned path begins with `start`,
/// ends with `end` and only visits free nodes; `Ok(None)` means `end` cannot be reached. Endpoints
/// outside the grid, blocked, or not taken from `grid` are rejected with a [GridError].
pub fn find(
    start: &Node,
    end: &Node,
    grid: &NodeGrid,
    diagonal_allowed: bool,
) -> Result<Option<Vec<Node>>, GridError> {
    AstarSolver::new(diagonal_allowed).get_path_single_goal(grid, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_shareable_between_threads() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<NodeGrid>();
        assert_sync::<Node>();
    }

    #[test]
    fn find_on_open_grid() {
        let grid = build_grid(4, 4, Vec::<Point>::new()).unwrap();
        let start = grid.get(0, 0).unwrap();
        let end = grid.get(3, 3).unwrap();
        assert_eq!(find(start, end, &grid, true).unwrap().unwrap().len(), 4);
        assert_eq!(find(start, end, &grid, false).unwrap().unwrap().len(), 7);
    }
}
