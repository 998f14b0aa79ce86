//! Utilities for a blog project's directory layout: scaffold the fixed
//! stylesheet skeleton under a base path, and render an existing directory
//! tree as an indented text report, honoring an exclusion set.

pub mod api;
pub mod errors;
pub mod prompt;
pub mod scaffold;
pub mod structure;
pub mod tree;
pub mod utils;
