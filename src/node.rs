use core::fmt;
use grid_util::point::Point;
use std::hash::{Hash, Hasher};

/// Traversal classification of a grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Terrain {
    #[default]
    Free,
    Blocked,
}

impl Terrain {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Terrain::Blocked)
    }
    /// Multiplier applied to the base step cost when entering a cell of this terrain, or [None]
    /// if the cell cannot be entered at all.
    pub fn cost_multiplier(&self) -> Option<i32> {
        match self {
            Terrain::Free => Some(1),
            Terrain::Blocked => None,
        }
    }
}

impl From<bool> for Terrain {
    fn from(blocked: bool) -> Self {
        if blocked {
            Terrain::Blocked
        } else {
            Terrain::Free
        }
    }
}

/// A single cell of a [NodeGrid](crate::node_grid::NodeGrid). Identity is given by the coordinates
/// alone: two nodes are equal iff they sit on the same [Point]. Nodes hold no search state, which
/// lives in a [SearchContext](crate::astar::SearchContext) for the duration of one search.
#[derive(Clone, Copy, Debug)]
pub struct Node {
    point: Point,
    terrain: Terrain,
}

impl Node {
    pub fn new(point: Point, terrain: Terrain) -> Node {
        Node { point, terrain }
    }
    pub fn point(&self) -> Point {
        self.point
    }
    pub fn x(&self) -> i32 {
        self.point.x
    }
    pub fn y(&self) -> i32 {
        self.point.y
    }
    pub fn terrain(&self) -> Terrain {
        self.terrain
    }
    pub fn is_free(&self) -> bool {
        !self.terrain.is_blocked()
    }
    pub(crate) fn set_terrain(&mut self, terrain: Terrain) {
        self.terrain = terrain;
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.point.hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.point.x, self.point.y)
    }
}
