use log::{debug, trace};

use crate::formula::Ctl;
use crate::index::AsIndex;
use crate::kripke::TransitionSystem;
use crate::sets::StateSet;

/// Computes the set of states satisfying `formula`.
///
/// Recursive and memo-free: each subformula is evaluated once per
/// occurrence. Temporal operators are resolved by fixpoint iteration over
/// the subset lattice; the transformers are monotone, so iteration from
/// the empty (least) or full (greatest) set converges within `n + 1`
/// rounds.
pub fn evaluate(ts: &TransitionSystem, formula: &Ctl) -> StateSet {
    match formula {
        Ctl::Atom(label) => ts.labeled(label),
        Ctl::Not(e) => evaluate(ts, e).complement(),
        Ctl::And(l, r) => evaluate(ts, l).intersection(&evaluate(ts, r)),
        Ctl::Or(l, r) => evaluate(ts, l).union(&evaluate(ts, r)),
        Ctl::EX(e) => ts.pre(&evaluate(ts, e)),
        Ctl::AX(e) => pre_all(ts, &evaluate(ts, e)),
        Ctl::EF(e) => {
            let goal = evaluate(ts, e);
            least_fix(ts, |y| goal.union(&ts.pre(y)))
        }
        Ctl::AF(e) => {
            let goal = evaluate(ts, e);
            least_fix(ts, |y| goal.union(&pre_all(ts, y)))
        }
        Ctl::EG(e) => {
            let hold = evaluate(ts, e);
            greatest_fix(ts, |y| hold.intersection(&ts.pre(y)))
        }
        Ctl::AG(e) => {
            let hold = evaluate(ts, e);
            greatest_fix(ts, |y| hold.intersection(&pre_all(ts, y)))
        }
        Ctl::EU(l, r) => {
            let (hold, goal) = (evaluate(ts, l), evaluate(ts, r));
            least_fix(ts, |y| goal.union(&hold.intersection(&ts.pre(y))))
        }
        Ctl::AU(l, r) => {
            let (hold, goal) = (evaluate(ts, l), evaluate(ts, r));
            least_fix(ts, |y| goal.union(&hold.intersection(&pre_all(ts, y))))
        }
    }
}

/// A structure satisfies a formula iff every initial state does. An init
/// id outside `[0, n)` can satisfy nothing, so it flips the verdict to
/// false instead of raising an error.
pub fn satisfies(ts: &TransitionSystem, formula: &Ctl) -> bool {
    let sat = evaluate(ts, formula);
    debug!("{} of {} states satisfy the formula", sat.iter().count(), ts.num_states());
    ts.init().iter().all(|&s| s.to_usize() < ts.num_states() && sat.contains(s))
}

// Universal dual of `pre`: states all of whose successors lie in `target`.
// States without successors qualify vacuously.
fn pre_all(ts: &TransitionSystem, target: &StateSet) -> StateSet {
    ts.pre(&target.complement()).complement()
}

fn least_fix(ts: &TransitionSystem, step: impl Fn(&StateSet) -> StateSet) -> StateSet {
    fix(StateSet::empty(ts.num_states()), step)
}

fn greatest_fix(ts: &TransitionSystem, step: impl Fn(&StateSet) -> StateSet) -> StateSet {
    fix(StateSet::full(ts.num_states()), step)
}

fn fix(mut current: StateSet, step: impl Fn(&StateSet) -> StateSet) -> StateSet {
    let mut rounds = 0usize;
    loop {
        // The previous iterate is dropped as soon as it is superseded.
        let next = step(&current);
        rounds += 1;
        if next == current {
            trace!("fixpoint converged after {rounds} rounds");
            return current;
        }
        current = next;
    }
}
