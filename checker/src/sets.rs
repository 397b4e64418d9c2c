use crate::index::IndexedVec;
use crate::kripke::StateId;

/// Set of states over a fixed domain `[0, n)`, one membership flag per
/// state. Binary operations require both operands to share the domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateSet {
    members: IndexedVec<StateId, bool>,
}

impl StateSet {
    pub fn empty(domain: usize) -> Self {
        Self { members: vec![false; domain].into() }
    }

    pub fn full(domain: usize) -> Self {
        Self { members: vec![true; domain].into() }
    }

    pub fn domain(&self) -> usize {
        self.members.len()
    }

    pub fn contains(&self, state: StateId) -> bool {
        self.members[state]
    }

    pub fn insert(&mut self, state: StateId) {
        self.members[state] = true;
    }

    pub fn union(&self, other: &StateSet) -> StateSet {
        self.zip_with(other, |a, b| a || b)
    }

    pub fn intersection(&self, other: &StateSet) -> StateSet {
        self.zip_with(other, |a, b| a && b)
    }

    pub fn complement(&self) -> StateSet {
        Self { members: self.members.iter().map(|&m| !m).collect() }
    }

    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.members.enumerate().filter(|&(_, &m)| m).map(|(state, _)| state)
    }

    fn zip_with(&self, other: &StateSet, f: impl Fn(bool, bool) -> bool) -> StateSet {
        assert_eq!(self.domain(), other.domain(), "state sets over different domains");
        let members = self.members.iter().zip(&*other.members).map(|(&a, &b)| f(a, b)).collect();
        Self { members }
    }
}
