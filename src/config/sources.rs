//! Configuration sources, lowest to highest precedence.

pub mod env_vars;
pub mod explicit_file;
pub mod global_file;
