use grid_util::point::Point;
use smallvec::SmallVec;

use crate::{node_grid::NodeGrid, solver::GridSolver, SearchConfig, N_SMALLVEC_SIZE};

#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub allow_diagonal: bool,
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new(allow_diagonal: bool) -> AstarSolver {
        AstarSolver {
            allow_diagonal,
            heuristic_factor: 1.0,
        }
    }
    pub fn from_config(config: &SearchConfig) -> AstarSolver {
        AstarSolver {
            allow_diagonal: config.allow_diagonal,
            heuristic_factor: config.heuristic_factor,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::from_config(&SearchConfig::default())
    }
}

impl GridSolver for AstarSolver {
    type Successors = SmallVec<[(Point, i32); N_SMALLVEC_SIZE]>;

    fn allow_diagonal(&self) -> bool {
        self.allow_diagonal
    }

    fn successors(&self, grid: &NodeGrid, node: &Point) -> Self::Successors {
        grid.neighbours_and_cost(node, self.allow_diagonal)
    }

    /// Octile distance when diagonals are allowed, Manhattan distance otherwise, times the
    /// heuristic factor.
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        (self.cost(p1, p2) as f32 * self.heuristic_factor) as i32
    }
}
