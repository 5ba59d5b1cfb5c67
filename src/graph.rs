use std::{
    collections::{HashSet, VecDeque},
    hash::Hash,
};

pub struct BreadthFirstSearchState<V> {
    queue: VecDeque<V>,
    explored: HashSet<V>,
    neighbors: Vec<V>,
}

impl<V> BreadthFirstSearchState<V> {
    fn clear(&mut self) {
        self.queue.clear();
        self.explored.clear();
        self.neighbors.clear();
    }
}

impl<V> Default for BreadthFirstSearchState<V> {
    fn default() -> Self {
        Self {
            queue: Default::default(),
            explored: Default::default(),
            neighbors: Default::default(),
        }
    }
}

/// An implementation of https://en.wikipedia.org/wiki/Breadth-first_search
///
/// The queue is expanded one full level at a time: every vertex reachable in `level` moves is
/// dequeued, tested against `is_end`, and has its neighbors enqueued before any vertex at
/// `level + 1` is examined, so the first vertex matching `is_end` lies at minimal distance from
/// the start. Vertices enter `explored` as they are enqueued and are never revisited.
pub trait BreadthFirstSearch {
    type Vertex: Clone + Eq + Hash;

    fn start(&self) -> &Self::Vertex;
    fn is_end(&self, vertex: &Self::Vertex) -> bool;
    fn path_to(&self, vertex: &Self::Vertex) -> Vec<Self::Vertex>;
    fn neighbors(&mut self, vertex: &Self::Vertex, neighbors: &mut Vec<Self::Vertex>);
    fn update_parent(&mut self, from: &Self::Vertex, to: &Self::Vertex);
    fn reset(&mut self);

    /// Hard cap on the expansion level. Finishing a level deeper than this aborts the search with
    /// no result, bounding runaway expansion if the caller's invariants are broken.
    fn max_level(&self) -> Option<usize> {
        None
    }

    fn run_internal(
        &mut self,
        state: &mut BreadthFirstSearchState<Self::Vertex>,
    ) -> Option<Vec<Self::Vertex>> {
        self.reset();
        state.clear();

        let start: Self::Vertex = self.start().clone();

        state.explored.insert(start.clone());
        state.queue.push_back(start);

        let mut level: usize = 0_usize;

        while !state.queue.is_empty() {
            if self
                .max_level()
                .map_or(false, |max_level| level > max_level)
            {
                return None;
            }

            for _ in 0_usize..state.queue.len() {
                let Some(current) = state.queue.pop_front() else {
                    break;
                };

                if self.is_end(&current) {
                    return Some(self.path_to(&current));
                }

                self.neighbors(&current, &mut state.neighbors);

                for neighbor in state.neighbors.drain(..) {
                    if state.explored.insert(neighbor.clone()) {
                        self.update_parent(&current, &neighbor);
                        state.queue.push_back(neighbor);
                    }
                }
            }

            level += 1_usize;
        }

        None
    }

    fn run(&mut self) -> Option<Vec<Self::Vertex>> {
        self.run_internal(&mut BreadthFirstSearchState::default())
    }
}
