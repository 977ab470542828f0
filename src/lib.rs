//! Sessionctl: Session Backend Spawning
//!
//! Client-side validation, request construction, and reporting for spawning
//! session-scoped backends through a remote orchestration API.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod spawn;
