use crate::{parse_ctl, parse_kripke, satisfies, Ctl, FormulaError, MAX_ATOM_LEN};

fn atom(name: &str) -> Ctl {
    Ctl::Atom(name.to_string())
}

#[test]
fn parses_nested_boolean_and_temporal_operators() {
    let parsed = parse_ctl("AG (NOT p OR EF (q AND r))").unwrap();
    let expected = Ctl::AG(Box::new(Ctl::Or(
        Box::new(Ctl::Not(Box::new(atom("p")))),
        Box::new(Ctl::EF(Box::new(Ctl::And(Box::new(atom("q")), Box::new(atom("r")))))),
    )));
    assert_eq!(parsed, expected);
}

#[test]
fn parses_until_forms() {
    assert_eq!(parse_ctl("E[p U r]").unwrap(), Ctl::EU(Box::new(atom("p")), Box::new(atom("r"))));
    assert_eq!(
        parse_ctl("A[ p U r ]").unwrap(),
        Ctl::AU(Box::new(atom("p")), Box::new(atom("r")))
    );
}

#[test]
fn and_binds_tighter_than_or() {
    assert_eq!(
        parse_ctl("a OR b AND c").unwrap(),
        Ctl::Or(Box::new(atom("a")), Box::new(Ctl::And(Box::new(atom("b")), Box::new(atom("c")))))
    );
}

#[test]
fn trailing_input_is_rejected() {
    assert_eq!(parse_ctl("p extra"), Err(FormulaError::TrailingInput { pos: 2 }));
    assert_eq!(parse_ctl("(p) )"), Err(FormulaError::TrailingInput { pos: 4 }));
}

#[test]
fn unexpected_characters_are_reported_with_their_offset() {
    assert_eq!(parse_ctl("p & q"), Err(FormulaError::UnexpectedCharacter { pos: 2 }));
    assert_eq!(parse_ctl("¬p"), Err(FormulaError::UnexpectedCharacter { pos: 0 }));
}

#[test]
fn keywords_are_never_atoms() {
    assert!(matches!(parse_ctl("AND"), Err(FormulaError::UnexpectedToken { .. })));
    assert!(matches!(parse_ctl("E"), Err(FormulaError::UnexpectedToken { .. })));
    assert!(matches!(parse_ctl("p AND U"), Err(FormulaError::UnexpectedToken { .. })));
}

#[test]
fn keyword_matching_is_case_sensitive() {
    assert_eq!(parse_ctl("not").unwrap(), atom("not"));
    assert_eq!(
        parse_ctl("ex AND af").unwrap(),
        Ctl::And(Box::new(atom("ex")), Box::new(atom("af")))
    );
    // maximal munch: a keyword prefix does not split off
    assert_eq!(parse_ctl("EXX").unwrap(), atom("EXX"));
}

#[test]
fn deeply_nested_parentheses_parse() {
    let depth = 256;
    let source = format!("{}p{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse_ctl(&source).unwrap(), atom("p"));
}

#[test]
fn overlong_atoms_are_rejected() {
    let name = "a".repeat(MAX_ATOM_LEN);
    assert_eq!(parse_ctl(&name).unwrap(), atom(&name));

    let name = "a".repeat(MAX_ATOM_LEN + 1);
    assert_eq!(parse_ctl(&name), Err(FormulaError::AtomTooLong { pos: 0 }));
}

#[test]
fn empty_input_is_an_error() {
    assert!(matches!(parse_ctl(""), Err(FormulaError::UnexpectedToken { .. })));
    assert!(matches!(parse_ctl("   "), Err(FormulaError::UnexpectedToken { .. })));
}

#[test]
fn missing_until_brackets_are_reported() {
    assert!(matches!(parse_ctl("E p U q"), Err(FormulaError::UnexpectedToken { .. })));
    assert!(matches!(parse_ctl("E[p q]"), Err(FormulaError::UnexpectedToken { .. })));
}

const SIMPLE: &str = "\
states 2
init 1 0
transitions 2
0 1
1 1
labels 1
1 1 p
AF p
";

#[test]
fn loads_the_model_and_formula() {
    let (ts, formula) = parse_kripke(SIMPLE).unwrap();
    assert_eq!(ts.num_states(), 2);
    assert_eq!(formula, "AF p");
    assert!(satisfies(&ts, &parse_ctl(&formula).unwrap()));
}

#[test]
fn formula_line_is_taken_verbatim() {
    let input = "states 1\ninit 1 0\ntransitions 1\n0 0\nlabels 0\n  AG (p OR NOT p)  \n";
    let (_, formula) = parse_kripke(input).unwrap();
    assert_eq!(formula, "  AG (p OR NOT p)  ");
}

#[test]
fn malformed_headers_are_load_errors() {
    assert!(parse_kripke("nope 2").is_err());
    assert!(parse_kripke("states two").is_err());
    assert!(parse_kripke("states 2\ninit 1").is_err());
}

#[test]
fn out_of_range_transitions_are_load_errors() {
    let input = "states 2\ninit 1 0\ntransitions 1\n0 7\nlabels 0\np\n";
    assert!(parse_kripke(input).is_err());
}

#[test]
fn out_of_range_label_rows_are_load_errors() {
    let input = "states 2\ninit 1 0\ntransitions 0\nlabels 1\n9 1 p\np\n";
    assert!(parse_kripke(input).is_err());
}

#[test]
fn out_of_range_init_states_load_but_never_satisfy() {
    let input = "states 2\ninit 2 0 9\ntransitions 2\n0 1\n1 1\nlabels 2\n0 1 p\n1 1 p\nAG p\n";
    let (ts, formula) = parse_kripke(input).unwrap();
    assert!(!satisfies(&ts, &parse_ctl(&formula).unwrap()));
}

fn run_test(path: &str, expected: bool) {
    let input = std::fs::read_to_string(path).unwrap();
    let (ts, formula) = parse_kripke(&input).unwrap();
    let formula = parse_ctl(&formula).unwrap();

    assert_eq!(satisfies(&ts, &formula), expected);
}

macro_rules! declare_test {
    ($($name:ident: $expected:literal),* $(,)?) => { $(
        #[test]
        fn $name() {
            let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/", stringify!($name), ".kripke");
            run_test(path, $expected);
        }
    )* };
}

declare_test! {
    af_goal: true,
    ag_goal: false,
    eu_linear: true,
    au_linear: true,
    shared_init: false,
    mutex_safety: true,
    mutex_liveness: true,
    mutex_starvation: false,
}
