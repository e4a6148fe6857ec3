//! Command-line workflow, kept separate from argument parsing in `main.rs`

pub mod orchestration;
