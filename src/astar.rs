//! A generic A* search in the style of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
//! keeping all per-node bookkeeping in a side table owned by a [SearchContext] instead of on the
//! nodes themselves. This keeps the searched graph read-only, so searches can run concurrently
//! over a shared grid as long as each uses its own context.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

const NO_PARENT: usize = usize::MAX;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.index == other.index
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first. Among equal estimates the larger cost so far wins, which
        // is the node with the smaller heuristic. Remaining ties go to the most recently
        // discovered node.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| self.index.cmp(&other.index))
    }
}

/// Search bookkeeping for one discovered node.
#[derive(Clone, Copy, Debug)]
struct Visit<C> {
    parent: usize,
    cost: C,
    closed: bool,
}

/// Open and closed sets of a single search. A context can be kept around and handed to several
/// consecutive searches to reuse its allocations; it is cleared whenever a new search starts.
pub struct SearchContext<N, C> {
    to_see: BinaryHeap<SmallestCostHolder<C>>,
    visits: FxIndexMap<N, Visit<C>>,
}

impl<N, C> Default for SearchContext<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    fn default() -> Self {
        SearchContext::new()
    }
}

impl<N, C> SearchContext<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    pub fn new() -> SearchContext<N, C> {
        SearchContext {
            to_see: BinaryHeap::new(),
            visits: FxIndexMap::default(),
        }
    }

    /// Number of nodes whose cost was finalized by the last search.
    pub fn closed_count(&self) -> usize {
        self.visits.values().filter(|v| v.closed).count()
    }

    /// Number of nodes discovered by the last search, closed or still open.
    pub fn discovered_count(&self) -> usize {
        self.visits.len()
    }

    /// The best known cost from the start of the last search to `node`, if it was discovered.
    pub fn cost_to(&self, node: &N) -> Option<C> {
        self.visits.get(node).map(|v| v.cost)
    }

    fn reverse_path(&self, end: usize) -> Vec<N> {
        let mut path: Vec<N> = std::iter::successors(Some(end), |&i| {
            self.visits
                .get_index(i)
                .map(|(_, visit)| visit.parent)
                .filter(|&p| p != NO_PARENT)
        })
        .filter_map(|i| self.visits.get_index(i).map(|(node, _)| node.clone()))
        .collect();
        path.reverse();
        path
    }

    /// Runs A* from `start` until a node satisfying `success` is popped from the open set.
    /// Returns the path including both endpoints together with its cost, or [None] once the open
    /// set runs dry.
    ///
    /// `heuristic` must be consistent for the returned path to be optimal, since closed nodes are
    /// never reopened.
    pub fn astar<FN, IN, FH, FS>(
        &mut self,
        start: &N,
        mut successors: FN,
        mut heuristic: FH,
        mut success: FS,
    ) -> Option<(Vec<N>, C)>
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, C)>,
        FH: FnMut(&N) -> C,
        FS: FnMut(&N) -> bool,
    {
        self.to_see.clear();
        self.visits.clear();

        self.to_see.push(SmallestCostHolder {
            estimated_cost: heuristic(start),
            cost: Zero::zero(),
            index: 0,
        });
        self.visits.insert(
            start.clone(),
            Visit {
                parent: NO_PARENT,
                cost: Zero::zero(),
                closed: false,
            },
        );

        while let Some(SmallestCostHolder { cost, index, .. }) = self.to_see.pop() {
            let successors = {
                let Some((node, visit)) = self.visits.get_index(index) else {
                    continue;
                };
                // A node may have been pushed several times if a cheaper way to it was found
                // later; only the entry matching the recorded cost is live.
                if visit.closed || cost > visit.cost {
                    continue;
                }
                if success(node) {
                    return Some((self.reverse_path(index), cost));
                }
                successors(node)
            };
            if let Some((_, visit)) = self.visits.get_index_mut(index) {
                visit.closed = true;
            }

            for (successor, move_cost) in successors {
                let new_cost = cost + move_cost;
                let h;
                let n;
                match self.visits.entry(successor) {
                    Vacant(e) => {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert(Visit {
                            parent: index,
                            cost: new_cost,
                            closed: false,
                        });
                    }
                    Occupied(mut e) => {
                        let visit = e.get();
                        if !visit.closed && visit.cost > new_cost {
                            h = heuristic(e.key());
                            n = e.index();
                            e.insert(Visit {
                                parent: index,
                                cost: new_cost,
                                closed: false,
                            });
                        } else {
                            continue;
                        }
                    }
                }

                self.to_see.push(SmallestCostHolder {
                    estimated_cost: new_cost + h,
                    cost: new_cost,
                    index: n,
                });
            }
        }
        debug!(
            "Open set exhausted after closing {} of {} discovered nodes",
            self.closed_count(),
            self.discovered_count()
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Line graph 0 - 1 - 2 - ... - 9 with unit edges.
    fn line_successors(n: &i32) -> Vec<(i32, u32)> {
        [n - 1, n + 1]
            .into_iter()
            .filter(|m| (0..10).contains(m))
            .map(|m| (m, 1))
            .collect()
    }

    #[test]
    fn finds_path_on_a_line() {
        let mut ctx = SearchContext::new();
        let (path, cost) = ctx
            .astar(&2, line_successors, |n| (7 - n).unsigned_abs(), |n| *n == 7)
            .unwrap();
        assert_eq!(path, vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(cost, 5);
        assert_eq!(ctx.cost_to(&7), Some(5));
    }

    #[test]
    fn start_equal_to_goal() {
        let mut ctx = SearchContext::new();
        let (path, cost) = ctx.astar(&4, line_successors, |_| 0, |n| *n == 4).unwrap();
        assert_eq!(path, vec![4]);
        assert_eq!(cost, 0);
    }

    #[test]
    fn exhausts_when_goal_is_missing() {
        let mut ctx = SearchContext::new();
        assert!(ctx.astar(&0, line_successors, |_| 0, |n| *n == 42).is_none());
        assert_eq!(ctx.closed_count(), 10);
    }

    #[test]
    fn context_is_reset_between_searches() {
        let mut ctx = SearchContext::new();
        assert!(ctx.astar(&0, line_successors, |_| 0, |n| *n == 42).is_none());
        let (path, _) = ctx.astar(&9, line_successors, |_| 0, |n| *n == 8).unwrap();
        assert_eq!(path, vec![9, 8]);
        assert_eq!(ctx.cost_to(&0), None);
    }

    #[test]
    fn cheaper_route_replaces_recorded_cost() {
        // 0 -> 2 directly costs 10, via 1 it costs 2.
        let successors = |n: &u8| -> Vec<(u8, u32)> {
            match *n {
                0 => vec![(2, 10), (1, 1)],
                1 => vec![(2, 1)],
                2 => vec![(3, 1)],
                _ => vec![],
            }
        };
        let mut ctx = SearchContext::new();
        let (path, cost) = ctx.astar(&0, successors, |_| 0, |n| *n == 3).unwrap();
        assert_eq!(path, vec![0, 1, 2, 3]);
        assert_eq!(cost, 3);
    }

    #[test]
    fn equal_estimates_prefer_smaller_heuristic() {
        let a = SmallestCostHolder {
            estimated_cost: 10,
            cost: 8,
            index: 1,
        };
        let b = SmallestCostHolder {
            estimated_cost: 10,
            cost: 3,
            index: 2,
        };
        let c = SmallestCostHolder {
            estimated_cost: 9,
            cost: 0,
            index: 0,
        };
        let mut heap = BinaryHeap::from(vec![b, a, c]);
        assert_eq!(heap.pop().map(|h| h.index), Some(0));
        assert_eq!(heap.pop().map(|h| h.index), Some(1));
        assert_eq!(heap.pop().map(|h| h.index), Some(2));
    }
}
