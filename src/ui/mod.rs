//! User interface module - terminal output.
//!
//! Everything printed for the user goes through [`formatter`]; library code only logs.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_status, display_success,
    display_workflow_result,
};
