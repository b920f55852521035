use grid_util::point::Point;
use smallvec::SmallVec;

use crate::{node_grid::NodeGrid, solver::GridSolver, N_SMALLVEC_SIZE};

/// A* without a heuristic, expanding nodes strictly by cost from the start.
#[derive(Clone, Debug)]
pub struct DijkstraSolver {
    pub allow_diagonal: bool,
}

impl GridSolver for DijkstraSolver {
    type Successors = SmallVec<[(Point, i32); N_SMALLVEC_SIZE]>;

    fn allow_diagonal(&self) -> bool {
        self.allow_diagonal
    }

    fn successors(&self, grid: &NodeGrid, node: &Point) -> Self::Successors {
        grid.neighbours_and_cost(node, self.allow_diagonal)
    }

    fn heuristic(&self, _: &Point, _: &Point) -> i32 {
        0
    }
}
