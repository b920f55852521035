use crate::error::{EndpointIssue, GridError};
use crate::node::{Node, Terrain};
use crate::{C, D, N_SMALLVEC_SIZE};
use core::fmt;
use grid_util::point::Point;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Offsets of the neighbourhood of a cell: the four cardinal directions (N, E, S, W) followed by
/// the four diagonals (NE, SE, SW, NW). Taking the first four gives the von Neumann
/// neighbourhood, all eight the Moore neighbourhood.
static NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, 0),
    (1, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
];

/// Checks whether `p2` is one step away from `p1` under the given movement model.
pub fn adjacent(p1: &Point, p2: &Point, diagonal_allowed: bool) -> bool {
    let dx = (p1.x - p2.x).abs();
    let dy = (p1.y - p2.y).abs();
    if diagonal_allowed {
        dx.max(dy) == 1
    } else {
        dx + dy == 1
    }
}

/// Base cost of a single step between two adjacent cells.
fn step_cost(p1: &Point, p2: &Point) -> i32 {
    if p1.x != p2.x && p1.y != p2.y {
        D
    } else {
        C
    }
}

/// [NodeGrid] owns one [Node] per cell of a `width` by `height` rectangle, stored row-major. In
/// addition it maintains connected components for both movement models using [UnionFind]
/// structures, so that unreachable goals are detected without flood-filling the grid.
#[derive(Clone, Debug)]
pub struct NodeGrid {
    width: usize,
    height: usize,
    nodes: Vec<Node>,
    components: UnionFind<usize>,
    orthogonal_components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for NodeGrid {
    fn default() -> NodeGrid {
        NodeGrid::new(0, 0, false)
    }
}

impl NodeGrid {
    /// Creates a grid where every cell is blocked if `blocked` is [true] and free otherwise.
    pub fn new(width: usize, height: usize, blocked: bool) -> NodeGrid {
        let terrain = Terrain::from(blocked);
        let nodes = (0..height as i32)
            .flat_map(|y| (0..width as i32).map(move |x| Node::new(Point::new(x, y), terrain)))
            .collect();
        let mut grid = NodeGrid {
            width,
            height,
            nodes,
            components: UnionFind::new(width * height),
            orthogonal_components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    /// Builds a grid with the listed cells blocked and all others free. Fails if a listed cell
    /// lies outside the grid.
    pub fn build<I>(width: usize, height: usize, blocked: I) -> Result<NodeGrid, GridError>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut grid = NodeGrid::new(width, height, false);
        for point in blocked {
            let ix = grid.checked_ix(point)?;
            grid.nodes[ix].set_terrain(Terrain::Blocked);
        }
        grid.generate_components();
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }
    fn ix(&self, point: Point) -> Option<usize> {
        if self.in_bounds(point) {
            Some(point.y as usize * self.width + point.x as usize)
        } else {
            None
        }
    }
    fn checked_ix(&self, point: Point) -> Result<usize, GridError> {
        self.ix(point).ok_or(GridError::InvalidCoordinate {
            x: point.x,
            y: point.y,
            width: self.width,
            height: self.height,
        })
    }

    /// The node at the given coordinate, if it lies within the grid.
    pub fn node(&self, point: Point) -> Option<&Node> {
        self.ix(point).map(|ix| &self.nodes[ix])
    }
    pub fn get(&self, x: i32, y: i32) -> Option<&Node> {
        self.node(Point::new(x, y))
    }
    /// All nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }
    pub fn can_move_to(&self, point: Point) -> bool {
        self.node(point).map_or(false, Node::is_free)
    }

    /// Lazily enumerates the free in-bound neighbours of `point`. Diagonal steps are not
    /// restricted by blocked orthogonal cells, so a diagonal may squeeze between two obstacles.
    /// The returned iterator can be cloned to restart the enumeration.
    pub fn neighbours(
        &self,
        point: Point,
        diagonal_allowed: bool,
    ) -> impl Iterator<Item = &Node> + Clone + '_ {
        let count = if diagonal_allowed { 8 } else { 4 };
        NEIGHBOUR_OFFSETS[..count]
            .iter()
            .filter_map(move |&(dx, dy)| self.node(Point::new(point.x + dx, point.y + dy)))
            .filter(|node| node.is_free())
    }

    /// The neighbours of `point` paired with the cost of stepping onto them. Cardinal steps cost
    /// [C] and diagonal steps [D], scaled by the terrain of the entered cell.
    pub fn neighbours_and_cost(
        &self,
        point: &Point,
        diagonal_allowed: bool,
    ) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        self.neighbours(*point, diagonal_allowed)
            .filter_map(|node| {
                node.terrain()
                    .cost_multiplier()
                    .map(|m| (node.point(), step_cost(point, &node.point()) * m))
            })
            .collect()
    }

    /// Checks that `node` can serve as a search endpoint: it must lie in the grid, match the
    /// grid's node at its coordinate and be free.
    pub fn validate_endpoint(&self, node: &Node) -> Result<(), GridError> {
        let ix = self.checked_ix(node.point())?;
        let own = &self.nodes[ix];
        let reason = if own.terrain() != node.terrain() {
            EndpointIssue::NotInGrid
        } else if !own.is_free() {
            EndpointIssue::Blocked
        } else {
            return Ok(());
        };
        Err(GridError::InvalidEndpoint {
            x: node.x(),
            y: node.y(),
            reason,
        })
    }

    /// Updates the terrain of a cell. Opening a cell joins it with the components of its free
    /// neighbours; blocking one may split a component, which only flags the components as dirty
    /// until [update](Self::update) is called. Until then the components may claim a goal is
    /// reachable when it is not, but never the other way around.
    pub fn set_terrain(&mut self, point: Point, terrain: Terrain) -> Result<(), GridError> {
        let ix = self.checked_ix(point)?;
        let was_blocked = self.nodes[ix].terrain().is_blocked();
        self.nodes[ix].set_terrain(terrain);
        if terrain.is_blocked() {
            if !was_blocked {
                self.components_dirty = true;
            }
        } else {
            self.join_neighbours(point, ix);
        }
        Ok(())
    }

    fn join_neighbours(&mut self, point: Point, ix: usize) {
        for (i, &(dx, dy)) in NEIGHBOUR_OFFSETS.iter().enumerate() {
            let n = Point::new(point.x + dx, point.y + dy);
            if !self.can_move_to(n) {
                continue;
            }
            if let Some(n_ix) = self.ix(n) {
                self.components.union(ix, n_ix);
                if i < 4 {
                    self.orthogonal_components.union(ix, n_ix);
                }
            }
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates new [UnionFind] structures and links up free grid neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        debug!(
            "Generating connected components for {}x{} grid",
            self.width, self.height
        );
        let n = self.width * self.height;
        self.components = UnionFind::new(n);
        self.orthogonal_components = UnionFind::new(n);
        self.components_dirty = false;
        for ix in 0..n {
            let node = self.nodes[ix];
            if !node.is_free() {
                continue;
            }
            let p = node.point();
            // Looking forward (east, south and both forward diagonals) covers every pair once.
            for (dx, dy) in [(1, 0), (0, 1), (1, 1), (1, -1)] {
                let n = Point::new(p.x + dx, p.y + dy);
                if !self.can_move_to(n) {
                    continue;
                }
                if let Some(n_ix) = self.ix(n) {
                    self.components.union(ix, n_ix);
                    if dx == 0 || dy == 0 {
                        self.orthogonal_components.union(ix, n_ix);
                    }
                }
            }
        }
    }

    fn components(&self, diagonal_allowed: bool) -> &UnionFind<usize> {
        if diagonal_allowed {
            &self.components
        } else {
            &self.orthogonal_components
        }
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point, diagonal_allowed: bool) -> Option<usize> {
        self.ix(*point)
            .map(|ix| self.components(diagonal_allowed).find(ix))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point, diagonal_allowed: bool) -> bool {
        !self.unreachable(start, goal, diagonal_allowed)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point, diagonal_allowed: bool) -> bool {
        match (self.ix(*start), self.ix(*goal)) {
            (Some(start_ix), Some(goal_ix)) => !self
                .components(diagonal_allowed)
                .equiv(start_ix, goal_ix),
            _ => true,
        }
    }

    /// Checks if every free neighbour of the goal is on a different component than the start.
    pub fn neighbours_unreachable(
        &self,
        start: &Point,
        goal: &Point,
        diagonal_allowed: bool,
    ) -> bool {
        match self.ix(*start) {
            Some(start_ix) => {
                let components = self.components(diagonal_allowed);
                self.neighbours(*goal, diagonal_allowed)
                    .filter_map(|n| self.ix(n.point()))
                    .all(|n_ix| !components.equiv(start_ix, n_ix))
            }
            None => true,
        }
    }
}

impl fmt::Display for NodeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.nodes.chunks(self.width.max(1)) {
            let line: String = row
                .iter()
                .map(|n| if n.is_free() { '.' } else { '#' })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
