use grid_astar::{build_grid, find};
use grid_util::point::Point;

// The snake-shaped corridor below forces a detour. With diagonal moves the path takes 19 nodes,
// with only cardinal moves it takes 23.
//  _______
// |      E|
// | ######|
// |       |
// |###### |
// |S      |
//  _______

fn main() {
    env_logger::init();
    let mut blocked = Vec::new();
    for x in 1..7 {
        blocked.push(Point::new(x, 1));
    }
    for x in 0..6 {
        blocked.push(Point::new(x, 3));
    }
    let grid = build_grid(7, 5, blocked).unwrap();
    println!("{}", grid);
    let start = grid.get(0, 4).unwrap();
    let end = grid.get(6, 0).unwrap();
    for diagonal in [true, false] {
        match find(start, end, &grid, diagonal).unwrap() {
            Some(path) => {
                let steps: Vec<String> = path.iter().map(|n| n.to_string()).collect();
                println!("diagonal: {diagonal}; {} nodes", path.len());
                println!("{}", steps.join(" -> "));
            }
            None => println!("diagonal: {diagonal}; no path"),
        }
    }
}
