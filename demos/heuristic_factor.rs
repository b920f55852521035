use grid_astar::{build_grid, AstarSolver, GridSolver, SearchConfig, SearchContext};
use grid_util::point::Point;

// Compares the number of expanded nodes and the path cost on a 64x64 grid with a long wall for
// increasing heuristic factors. Factors above 1.0 expand fewer nodes but may return longer paths.

fn main() {
    env_logger::init();
    const N: usize = 64;
    let wall = (0..N as i32 - 1).map(|y| Point::new(N as i32 / 2, y));
    let grid = build_grid(N, N, wall).unwrap();
    let start = grid.get(0, 0).unwrap();
    let end = grid.get(N as i32 - 1, 0).unwrap();
    for heuristic_factor in [0.0, 1.0, 1.5, 3.0] {
        let solver = AstarSolver::from_config(&SearchConfig {
            allow_diagonal: true,
            heuristic_factor,
        });
        let mut context = SearchContext::new();
        let path = solver
            .get_path_single_goal_with_context(&mut context, &grid, start, end)
            .unwrap()
            .unwrap();
        println!(
            "factor {heuristic_factor}: {} nodes closed, cost {:.2}",
            context.closed_count(),
            solver.get_path_cost_float(&path)
        );
    }
}
