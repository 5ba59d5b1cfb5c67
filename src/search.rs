use {
    crate::*,
    std::collections::{HashMap, VecDeque},
};

/// Ways the search can fail to produce a move count.
#[derive(Debug, Eq, PartialEq)]
pub enum SearchError {
    /// A generated move changed the building's item set. That is a move-generation bug, and the
    /// search aborts rather than correct it.
    InvariantViolation,

    /// The frontier emptied, or hit the level cap, without reaching the goal.
    UnreachableGoal,
}

/// Level-ordered shortest-path search from a start state to a goal state. Every elevator move
/// costs one level, so the level of the first goal hit is the minimum move count.
pub struct Search<const N: usize = FLOOR_COUNT> {
    start_state: State<N>,
    end_state: State<N>,
    item_set: Floor,
    max_level: Option<usize>,
    previous_map: HashMap<State<N>, State<N>>,
    conservation_breach: bool,
}

impl<const N: usize> Search<N> {
    /// Search toward the assembly goal of the start state's own items.
    pub fn new(start_state: State<N>) -> Self {
        Self::with_end_state(start_state, start_state.assembly_goal())
    }

    pub fn with_end_state(start_state: State<N>, end_state: State<N>) -> Self {
        let item_set: Floor = start_state.building.item_set();

        Self {
            start_state,
            end_state,
            item_set,
            max_level: None,
            previous_map: HashMap::new(),
            conservation_breach: false,
        }
    }

    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = Some(max_level);

        self
    }

    /// Minimum number of elevator moves from the start state to the goal state.
    pub fn min_moves(&mut self) -> Result<usize, SearchError> {
        self.path().map(|path| path.len() - 1_usize)
    }

    /// The move-by-move state sequence, start and goal inclusive.
    pub fn path(&mut self) -> Result<Vec<State<N>>, SearchError> {
        let path: Option<Vec<State<N>>> = self.run();

        if self.conservation_breach {
            Err(SearchError::InvariantViolation)
        } else {
            path.ok_or(SearchError::UnreachableGoal)
        }
    }
}

impl<const N: usize> BreadthFirstSearch for Search<N> {
    type Vertex = State<N>;

    fn start(&self) -> &State<N> {
        &self.start_state
    }

    fn is_end(&self, vertex: &State<N>) -> bool {
        *vertex == self.end_state
    }

    fn path_to(&self, vertex: &State<N>) -> Vec<State<N>> {
        let mut path: VecDeque<State<N>> = VecDeque::new();
        let mut state: State<N> = *vertex;

        while state != self.start_state {
            path.push_front(state);
            state = self.previous_map[&state];
        }

        path.push_front(self.start_state);

        path.into()
    }

    fn neighbors(&mut self, vertex: &State<N>, neighbors: &mut Vec<State<N>>) {
        neighbors.clear();

        if self.conservation_breach {
            return;
        }

        for neighbor in vertex.iter_neighbors() {
            if neighbor.building.item_set() != self.item_set {
                self.conservation_breach = true;
                neighbors.clear();

                return;
            }

            neighbors.push(neighbor);
        }
    }

    fn update_parent(&mut self, from: &State<N>, to: &State<N>) {
        self.previous_map.insert(*to, *from);
    }

    fn max_level(&self) -> Option<usize> {
        self.max_level
    }

    fn reset(&mut self) {
        self.previous_map.clear();
        self.conservation_breach = false;
    }
}
