use anyhow::{bail, Context, Result};
use checker::index::IndexedVec;
use checker::kripke::{StateId, TransitionSystem};
use checker::Set;

use crate::parser::MAX_ATOM_LEN;

// states <n>
// init <k> <id_1> ... <id_k>
// transitions <m>
// <from_1> <to_1>
// ...
// labels <l>
// <state_1> <count_1> <label_1_1> ...
// ...
// <formula — the line after the labels block, verbatim>
pub fn parse_kripke(source: &str) -> Result<(TransitionSystem, String)> {
    let mut cursor = Cursor { rest: source };

    cursor.keyword("states")?;
    let num_states = cursor.number().context("Expected state count")?;

    cursor.keyword("init")?;
    let init_count = cursor.number().context("Expected init count")?;
    let mut init = Vec::with_capacity(init_count);
    for _ in 0..init_count {
        // Not validated against the state count: an out-of-range init id
        // fails the satisfaction check, not the load.
        init.push(StateId(cursor.number().context("Expected init state id")?));
    }

    cursor.keyword("transitions")?;
    let trans_count = cursor.number().context("Expected transition count")?;
    let mut transitions = Vec::with_capacity(trans_count);
    for _ in 0..trans_count {
        let from: usize = cursor.number().context("Expected transition source")?;
        let to: usize = cursor.number().context("Expected transition target")?;
        if from >= num_states {
            bail!("Transition source {from} doesn't exist");
        }
        if to >= num_states {
            bail!("Transition target {to} doesn't exist");
        }
        transitions.push((StateId(from), StateId(to)));
    }

    cursor.keyword("labels")?;
    let label_rows = cursor.number().context("Expected label row count")?;
    let mut labeling: IndexedVec<StateId, Set<String>> =
        (0..num_states).map(|_| Set::default()).collect();
    for _ in 0..label_rows {
        let state: usize = cursor.number().context("Expected labelled state id")?;
        if state >= num_states {
            bail!("Label row for state {state} which doesn't exist");
        }
        let count = cursor.number().context("Expected label count")?;
        for _ in 0..count {
            let label = cursor.word().context("Expected label")?;
            if label.len() > MAX_ATOM_LEN {
                bail!("Label '{label}' exceeds the {MAX_ATOM_LEN}-byte limit");
            }
            labeling[StateId(state)].insert(label.to_string());
        }
    }

    let formula = cursor.formula_line()?;

    Ok((TransitionSystem::new(num_states, transitions, labeling, init), formula.to_string()))
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    // Tokens are whitespace-delimited; newlines carry no meaning until the
    // formula line.
    fn word(&mut self) -> Result<&'a str> {
        self.rest = self.rest.trim_start();
        if self.rest.is_empty() {
            bail!("Unexpected end of input");
        }
        let end = self.rest.find(char::is_whitespace).unwrap_or(self.rest.len());
        let (word, rest) = self.rest.split_at(end);
        self.rest = rest;
        Ok(word)
    }

    fn keyword(&mut self, expected: &'static str) -> Result<()> {
        let word = self.word().with_context(|| format!("Expected '{expected}' section"))?;
        if word != expected {
            bail!("Expected '{expected}', found '{word}'");
        }
        Ok(())
    }

    fn number(&mut self) -> Result<usize> {
        let word = self.word()?;
        word.parse().with_context(|| format!("'{word}' is not a number"))
    }

    // The remainder of the current line is discarded; the next line is the
    // formula, taken verbatim without its trailing newline.
    fn formula_line(&mut self) -> Result<&'a str> {
        let after = match self.rest.find('\n') {
            Some(i) => &self.rest[i + 1..],
            None => bail!("Expected a formula line after the labels block"),
        };
        let line = match after.find('\n') {
            Some(i) => &after[..i],
            None => after,
        };
        Ok(line)
    }
}
