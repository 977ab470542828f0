//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

use crate::config::{default_base_url, default_connect_timeout_secs, default_request_timeout_secs};

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("api.base_url", default_base_url())?
        .set_default(
            "api.connect_timeout_secs",
            default_connect_timeout_secs() as i64,
        )?
        .set_default(
            "api.request_timeout_secs",
            default_request_timeout_secs() as i64,
        )
}
