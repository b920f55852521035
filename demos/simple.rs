use grid_astar::{build_grid, find};
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have an 8-neighborhood

fn main() {
    env_logger::init();
    let grid = build_grid(3, 3, [Point::new(1, 1)]).unwrap();
    println!("{}", grid);
    let start = grid.get(0, 0).unwrap();
    let end = grid.get(2, 2).unwrap();
    let path = find(start, end, &grid, true).unwrap().unwrap();
    println!("Path:");
    for node in path {
        println!("{}", node);
    }
}
