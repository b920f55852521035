use crate::astar::SearchContext;
use crate::error::GridError;
use crate::node::Node;
use crate::node_grid::{adjacent, NodeGrid};
use crate::{C, D, E};
use grid_util::point::Point;
use itertools::Itertools;
use log::info;

pub mod astar;
pub mod dijkstra;

/// Converts the integer cost to an approximate floating point equivalent where cardinal directions have cost 1.0.
pub fn convert_cost_to_unit_cost_float(cost: i32) -> f64 {
    (cost as f64) / (C as f64)
}

/// Options shared by the solvers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchConfig {
    /// Whether the eight-neighbourhood is searched instead of the four cardinal directions.
    pub allow_diagonal: bool,
    /// Scales the heuristic. Values above 1.0 make the search greedier at the expense of
    /// optimality.
    pub heuristic_factor: f32,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            allow_diagonal: true,
            heuristic_factor: 1.0,
        }
    }
}

/// A search strategy over a [NodeGrid]. Implementors supply the heuristic; the provided methods
/// validate the endpoints, run the search in a [SearchContext] and map the result back to grid
/// nodes.
pub trait GridSolver {
    type Successors: IntoIterator<Item = (Point, i32)>;

    fn allow_diagonal(&self) -> bool;

    fn heuristic(&self, p1: &Point, p2: &Point) -> i32;

    fn successors(&self, grid: &NodeGrid, node: &Point) -> Self::Successors;

    /// Uses C as cost for cardinal (straight) moves and D for diagonal moves.
    fn cost(&self, p1: &Point, p2: &Point) -> i32 {
        let delta_x = (p1.x - p2.x).abs();
        let delta_y = (p1.y - p2.y).abs();
        if self.allow_diagonal() {
            // Formula from https://github.com/riscy/a_star_on_grids
            // to efficiently compute the cost of a path taking the maximal amount
            // of diagonal steps before going straight
            (E * (delta_x - delta_y).abs() + D * (delta_x + delta_y)) / 2
        } else {
            (delta_x + delta_y) * C
        }
    }

    fn get_path_cost(&self, path: &[Node]) -> i32 {
        path.iter()
            .tuple_windows()
            .map(|(a, b)| self.cost(&a.point(), &b.point()))
            .sum()
    }

    fn get_path_cost_float(&self, path: &[Node]) -> f64 {
        convert_cost_to_unit_cost_float(self.get_path_cost(path))
    }

    /// Computes a path from `start` to `goal`, reusing the allocations held by `context`.
    fn get_path_single_goal_with_context(
        &self,
        context: &mut SearchContext<Point, i32>,
        grid: &NodeGrid,
        start: &Node,
        goal: &Node,
    ) -> Result<Option<Vec<Node>>, GridError> {
        grid.validate_endpoint(start)?;
        grid.validate_endpoint(goal)?;
        let diagonal = self.allow_diagonal();
        let (start, goal) = (start.point(), goal.point());
        // Check if start and goal are on the same connected component.
        if grid.unreachable(&start, &goal, diagonal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(None);
        }
        Ok(context
            .astar(
                &start,
                |node| self.successors(grid, node),
                |point| self.heuristic(point, &goal),
                |point| *point == goal,
            )
            .map(|(path, _cost)| to_nodes(grid, path)))
    }

    /// Computes a path from `start` to `goal`. The path includes both endpoints; [None] means no
    /// path exists.
    fn get_path_single_goal(
        &self,
        grid: &NodeGrid,
        start: &Node,
        goal: &Node,
    ) -> Result<Option<Vec<Node>>, GridError> {
        self.get_path_single_goal_with_context(&mut SearchContext::new(), grid, start, goal)
    }

    /// Computes a path from `start` to `goal` or, failing that, to a node adjacent to `goal`.
    /// This is useful when the goal itself is blocked. The search stops at the first such node it
    /// reaches.
    fn get_path_single_goal_approximate(
        &self,
        grid: &NodeGrid,
        start: &Node,
        goal: Point,
    ) -> Result<Option<Vec<Node>>, GridError> {
        grid.validate_endpoint(start)?;
        if !grid.in_bounds(goal) {
            return Err(GridError::InvalidCoordinate {
                x: goal.x,
                y: goal.y,
                width: grid.width(),
                height: grid.height(),
            });
        }
        let diagonal = self.allow_diagonal();
        let start = start.point();
        // Check if start and one of the goal neighbours are on the same connected component.
        if grid.unreachable(&start, &goal, diagonal)
            && grid.neighbours_unreachable(&start, &goal, diagonal)
        {
            info!("No neighbours of {} are reachable from {}", goal, start);
            return Ok(None);
        }
        // Reaching any neighbour saves at most one step.
        let slack = if diagonal { D } else { C };
        let near_goal = |point: &Point| *point == goal || adjacent(point, &goal, diagonal);
        Ok(SearchContext::new()
            .astar(
                &start,
                |node| self.successors(grid, node),
                |point| (self.heuristic(point, &goal) - slack).max(0),
                near_goal,
            )
            .map(|(path, _cost)| to_nodes(grid, path)))
    }

    /// Computes a path from the start to one of the given goals and returns the selected goal in
    /// addition to the found path. Otherwise behaves similar to
    /// [get_path_single_goal](Self::get_path_single_goal).
    fn get_path_multiple_goals(
        &self,
        grid: &NodeGrid,
        start: &Node,
        goals: &[Node],
    ) -> Result<Option<(Node, Vec<Node>)>, GridError> {
        grid.validate_endpoint(start)?;
        for goal in goals {
            grid.validate_endpoint(goal)?;
        }
        let diagonal = self.allow_diagonal();
        let start = start.point();
        let goals: Vec<Point> = goals
            .iter()
            .map(Node::point)
            .filter(|goal| grid.reachable(&start, goal, diagonal))
            .collect();
        if goals.is_empty() {
            info!("None of the goals are reachable from {}", start);
            return Ok(None);
        }
        let result = SearchContext::new().astar(
            &start,
            |node| self.successors(grid, node),
            |point| {
                goals
                    .iter()
                    .map(|goal| self.heuristic(point, goal))
                    .min()
                    .unwrap_or(0)
            },
            |point| goals.contains(point),
        );
        Ok(result.and_then(|(path, _cost)| {
            let path = to_nodes(grid, path);
            path.last().copied().map(|goal| (goal, path))
        }))
    }
}

fn to_nodes(grid: &NodeGrid, path: Vec<Point>) -> Vec<Node> {
    path.into_iter()
        .filter_map(|p| grid.node(p).copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::astar::AstarSolver;
    use super::*;

    #[test]
    fn unit_cost_conversion() {
        assert_eq!(convert_cost_to_unit_cost_float(3 * C), 3.0);
        let diagonal = convert_cost_to_unit_cost_float(D);
        assert!((diagonal - std::f64::consts::SQRT_2).abs() < 0.01);
    }

    #[test]
    fn octile_cost_takes_diagonals_first() {
        let solver = AstarSolver::new(true);
        let origin = Point::new(0, 0);
        assert_eq!(solver.cost(&origin, &Point::new(1, 1)), D);
        assert_eq!(solver.cost(&origin, &Point::new(0, 1)), C);
        assert_eq!(solver.cost(&origin, &Point::new(3, 1)), D + 2 * C);
        assert_eq!(solver.cost(&origin, &Point::new(-2, 5)), 2 * D + 3 * C);
        let solver = AstarSolver::new(false);
        assert_eq!(solver.cost(&origin, &Point::new(3, 1)), 4 * C);
    }

    #[test]
    fn diagonal_never_cheaper_than_orthogonal_pair() {
        assert!(D > C);
        assert!(D < 2 * C);
        assert!(E > 0);
    }
}
