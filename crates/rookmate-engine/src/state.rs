//! Search states and the per-search arena that owns them.
//!
//! A [`State`] never owns its predecessor: it stores the [`StateId`] of its
//! parent inside the [`StateArena`] of the search that created it. Costs
//! strictly increase along predecessor links, so the links always form a
//! tree rooted at the initial state.

use std::ops::Index;

use rookmate_core::{Position, Transition};

/// Index of a [`State`] inside a [`StateArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(usize);

impl StateId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A node of the search graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    position: Position,
    terminal: bool,
    cost: u32,
    predecessor: Option<StateId>,
}

impl State {
    /// The initial state of a search: cost 0, no predecessor.
    pub const fn root(position: Position) -> State {
        State {
            position,
            terminal: false,
            cost: 0,
            predecessor: None,
        }
    }

    fn child(parent_id: StateId, parent: &State, transition: Transition) -> State {
        State {
            position: transition.position(),
            terminal: transition.is_checkmate(),
            cost: parent.cost + 1,
            predecessor: Some(parent_id),
        }
    }

    #[inline]
    pub const fn position(&self) -> &Position {
        &self.position
    }

    /// `true` if this state is checkmate.
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Plies from the initial state.
    #[inline]
    pub const fn cost(&self) -> u32 {
        self.cost
    }

    #[inline]
    pub const fn predecessor(&self) -> Option<StateId> {
        self.predecessor
    }

    /// Visited-set key, see [`Position::fingerprint`].
    #[inline]
    pub fn fingerprint(&self) -> u32 {
        self.position.fingerprint()
    }

    /// Successor states in White move catalog order. `id` is this state's
    /// own slot in the arena and becomes each successor's predecessor.
    ///
    /// Terminal states have no successors.
    pub fn successors(&self, id: StateId) -> Vec<State> {
        if self.terminal {
            return Vec::new();
        }
        self.position
            .transitions()
            .map(|t| State::child(id, self, t))
            .collect()
    }
}

/// Append-only storage for the states of one search.
#[derive(Debug, Default)]
pub struct StateArena {
    states: Vec<State>,
}

impl StateArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `state` and return its id.
    pub fn push(&mut self, state: State) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(state);
        id
    }

    /// Return the state with the given id, if it belongs to this arena.
    pub fn get(&self, id: StateId) -> Option<&State> {
        self.states.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// States from the root to `id`, following predecessor links.
    pub fn path(&self, id: StateId) -> Vec<State> {
        let mut path = Vec::new();
        let mut next = Some(id);
        while let Some(state) = next.and_then(|id| self.get(id)) {
            path.push(*state);
            next = state.predecessor;
        }
        path.reverse();
        path
    }
}

impl Index<StateId> for StateArena {
    type Output = State;

    fn index(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }
}
