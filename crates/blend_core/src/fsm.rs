//! Flat state machines for component phases
//!
//! Components that react to layout and input events over several frames
//! (e.g. the overflow controller in `blend_cn`) model their phases as a
//! small table of `(state, event) -> state` edges. Events without an edge
//! from the current state are ignored.

use rustc_hash::FxHashMap;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// Identifier for an event type
pub type EventId = u32;

pub struct StateMachineBuilder {
    initial_state: StateId,
    edges: FxHashMap<(StateId, EventId), StateId>,
}

impl StateMachineBuilder {
    pub fn new(initial_state: StateId) -> Self {
        Self {
            initial_state,
            edges: FxHashMap::default(),
        }
    }

    /// Add the edge `from --event--> to`. A later edge for the same state
    /// and event replaces the earlier one.
    pub fn on(mut self, from: StateId, event: EventId, to: StateId) -> Self {
        self.edges.insert((from, event), to);
        self
    }

    /// The same event edge from several states
    pub fn on_any(self, from: &[StateId], event: EventId, to: StateId) -> Self {
        from.iter()
            .fold(self, |builder, &state| builder.on(state, event, to))
    }

    pub fn build(self) -> StateMachine {
        StateMachine {
            current_state: self.initial_state,
            edges: self.edges,
        }
    }
}

/// A running state machine
#[derive(Clone, Debug)]
pub struct StateMachine {
    current_state: StateId,
    edges: FxHashMap<(StateId, EventId), StateId>,
}

impl StateMachine {
    pub fn builder(initial_state: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(initial_state)
    }

    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    pub fn is_in(&self, state: StateId) -> bool {
        self.current_state == state
    }

    /// Whether `event` would move the machine from its current state
    pub fn can_send(&self, event: EventId) -> bool {
        self.edges.contains_key(&(self.current_state, event))
    }

    /// Send an event, returning the state the machine ends up in
    pub fn send(&mut self, event: EventId) -> StateId {
        if let Some(&to) = self.edges.get(&(self.current_state, event)) {
            self.current_state = to;
        }
        self.current_state
    }
}
