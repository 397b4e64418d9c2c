use crate::index::{new_index, AsIndex, IndexedVec};
use crate::sets::StateSet;
use crate::Set;

new_index!(pub index StateId);

/// Kripke structure: a finite transition relation over states `[0, n)`,
/// the atomic labels holding at each state, and the designated initial
/// states. Immutable once built.
pub struct TransitionSystem {
    num_states: usize,
    transitions: Vec<(StateId, StateId)>,
    labeling: IndexedVec<StateId, Set<String>>,
    init: Vec<StateId>,
}

impl TransitionSystem {
    /// Transition endpoints must lie in `[0, num_states)` and `labeling`
    /// must have one entry per state. Init ids are not checked here: an
    /// out-of-range initial state makes the satisfaction verdict false
    /// rather than the construction fail.
    pub fn new(
        num_states: usize,
        transitions: Vec<(StateId, StateId)>,
        labeling: IndexedVec<StateId, Set<String>>,
        init: Vec<StateId>,
    ) -> Self {
        assert_eq!(labeling.len(), num_states);
        for &(from, to) in &transitions {
            assert!(from.to_usize() < num_states && to.to_usize() < num_states);
        }
        Self { num_states, transitions, labeling, init }
    }

    pub fn num_states(&self) -> usize {
        self.num_states
    }

    pub fn init(&self) -> &[StateId] {
        &self.init
    }

    /// States whose label set contains `label`.
    pub fn labeled(&self, label: &str) -> StateSet {
        let mut res = StateSet::empty(self.num_states);
        for (state, labels) in self.labeling.enumerate() {
            if labels.contains(label) {
                res.insert(state);
            }
        }
        res
    }

    /// Pre-image: states with at least one transition into `target`. One
    /// scan of the transition list per call.
    pub fn pre(&self, target: &StateSet) -> StateSet {
        let mut res = StateSet::empty(self.num_states);
        for &(from, to) in &self.transitions {
            if target.contains(to) {
                res.insert(from);
            }
        }
        res
    }
}
