/// CTL formula over string-named atomic propositions.
///
/// Children are exclusively owned; the tree is built once by the parser
/// and never mutated afterwards.
#[derive(Debug, PartialEq, Eq)]
pub enum Ctl {
    Atom(String),
    Not(Box<Ctl>),
    And(Box<Ctl>, Box<Ctl>),
    Or(Box<Ctl>, Box<Ctl>),
    EX(Box<Ctl>),
    AX(Box<Ctl>),
    EF(Box<Ctl>),
    AF(Box<Ctl>),
    EG(Box<Ctl>),
    AG(Box<Ctl>),
    EU(Box<Ctl>, Box<Ctl>),
    AU(Box<Ctl>, Box<Ctl>),
}
