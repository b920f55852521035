use grid_astar::{build_grid, AstarSolver, GridSolver};
use grid_util::point::Point;

// In this example a path is found to the closest of two goals on a 5x5 grid with shape
//  _____
// |S    |
// | #   |
// |     |
// |   G |
// |    G|
//  _____

fn main() {
    env_logger::init();
    let grid = build_grid(5, 5, [Point::new(1, 1)]).unwrap();
    let solver = AstarSolver::new(true);
    let start = grid.get(0, 0).unwrap();
    let goals = [*grid.get(4, 4).unwrap(), *grid.get(3, 3).unwrap()];
    match solver.get_path_multiple_goals(&grid, start, &goals).unwrap() {
        Some((goal, path)) => {
            println!("Selected goal: {}", goal);
            println!("Path: {:?}", path);
            println!("Cost: {}", solver.get_path_cost_float(&path));
        }
        None => println!("No goal is reachable"),
    }
}
