pub mod eval;
pub mod repl;
