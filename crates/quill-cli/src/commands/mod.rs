//! CLI command implementations

pub mod completions;
pub mod exec;
pub mod schema;
pub mod serve;
