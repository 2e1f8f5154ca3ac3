// crates/quadcode-cli/src/io/mod.rs

pub mod pbm;
