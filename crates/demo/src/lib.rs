// File: crates/demo/src/lib.rs
// Summary: Input resolution for the demo binary (local dataset files or remote URLs).

pub mod fetch;
pub mod input;
