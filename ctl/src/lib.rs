mod input;
mod parser;

#[cfg(test)]
mod test;

pub use checker::eval::{evaluate, satisfies};
pub use checker::formula::Ctl;
pub use checker::kripke::{StateId, TransitionSystem};
pub use input::parse_kripke;
pub use parser::{parse_ctl, FormulaError, Token, MAX_ATOM_LEN};
