//! Integration tests for the sessionctl spawn client

mod cli_parse;
mod config_integration;
mod spawn_flow;
