/// Fixed 7x5 layouts checking path lengths and the shape of returned paths. In the layouts `S`
/// marks the start, `G` the goal and `#` a blocked cell.
use grid_astar::{build_grid, find, node_grid::adjacent, Node, NodeGrid};
use grid_util::point::Point;

fn layout(rows: &[&str]) -> (NodeGrid, Node, Node) {
    let mut blocked = Vec::new();
    let mut start = None;
    let mut goal = None;
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            let p = Point::new(x as i32, y as i32);
            match c {
                '#' => blocked.push(p),
                'S' => start = Some(p),
                'G' => goal = Some(p),
                _ => {}
            }
        }
    }
    let grid = build_grid(rows[0].len(), rows.len(), blocked).unwrap();
    let start = *grid.node(start.unwrap()).unwrap();
    let goal = *grid.node(goal.unwrap()).unwrap();
    (grid, start, goal)
}

fn assert_valid_path(path: &[Node], start: &Node, goal: &Node, diagonal: bool) {
    assert_eq!(path.first(), Some(start));
    assert_eq!(path.last(), Some(goal));
    assert!(path.iter().all(Node::is_free));
    for pair in path.windows(2) {
        assert!(adjacent(&pair[0].point(), &pair[1].point(), diagonal));
    }
}

#[test]
fn zig_zag_corridor() {
    let (grid, start, goal) = layout(&[
        ".......",
        ".#.#.#.",
        ".#.#G#.",
        "...##..",
        "S#.....",
    ]);
    let path = find(&start, &goal, &grid, true).unwrap().unwrap();
    assert_eq!(path.len(), 7);
    assert_valid_path(&path, &start, &goal, true);
}

#[test]
fn wall_without_gap() {
    let (grid, start, goal) = layout(&[
        ".##....",
        "..#..#.",
        "..#.G#.",
        ".####..",
        "S#.....",
    ]);
    assert_eq!(find(&start, &goal, &grid, true), Ok(None));
    assert_eq!(find(&start, &goal, &grid, false), Ok(None));
}

#[test]
fn adjacent_endpoints() {
    let (grid, start, goal) = layout(&[
        ".##....",
        "..#..#.",
        "..#..#.",
        "G####..",
        "S#.....",
    ]);
    let path = find(&start, &goal, &grid, true).unwrap().unwrap();
    assert_eq!(path, vec![start, goal]);
}

#[test]
fn snake_with_and_without_diagonals() {
    let (grid, start, goal) = layout(&[
        "......G",
        ".######",
        ".......",
        "######.",
        "S......",
    ]);
    let path = find(&start, &goal, &grid, true).unwrap().unwrap();
    assert_eq!(path.len(), 19);
    assert_valid_path(&path, &start, &goal, true);

    let path = find(&start, &goal, &grid, false).unwrap().unwrap();
    assert_eq!(path.len(), 23);
    assert_valid_path(&path, &start, &goal, false);
}

#[test]
fn all_free() {
    let (grid, start, goal) = layout(&[
        "......G",
        ".......",
        ".......",
        ".......",
        "S......",
    ]);
    let path = find(&start, &goal, &grid, true).unwrap().unwrap();
    // Chebyshev distance of 6 steps.
    assert_eq!(path.len(), 7);
    assert_valid_path(&path, &start, &goal, true);

    let path = find(&start, &goal, &grid, false).unwrap().unwrap();
    // Manhattan distance of 10 steps.
    assert_eq!(path.len(), 11);
    assert_valid_path(&path, &start, &goal, false);
}

#[test]
fn repeated_searches_agree() {
    let (grid, start, goal) = layout(&[
        ".......",
        ".#.#...",
        ".#.###.",
        ".#.#G#.",
        "S#.....",
    ]);
    let first = find(&start, &goal, &grid, true).unwrap().unwrap();
    for _ in 0..100 {
        assert_eq!(find(&start, &goal, &grid, true).unwrap().unwrap(), first);
    }
    assert_eq!(first.len(), 10);
}

#[test]
fn concurrent_searches_share_a_grid() {
    let (grid, start, goal) = layout(&[
        "......G",
        ".######",
        ".......",
        "######.",
        "S......",
    ]);
    std::thread::scope(|s| {
        let handles: Vec<_> = [true, false, true, false]
            .into_iter()
            .map(|diagonal| {
                let grid = &grid;
                s.spawn(move || find(&start, &goal, grid, diagonal).unwrap().unwrap().len())
            })
            .collect();
        let lengths: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(lengths, vec![19, 23, 19, 23]);
    });
}
