// crates/quadcode-cli/src/cmd/mod.rs

pub mod encode;
pub mod manual;
pub mod stats;
