pub mod eval;
pub mod formula;
pub mod index;
pub mod kripke;
pub mod sets;


pub type Set<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
