//! Config loader facade: assembles sources in precedence order and validates.

use std::path::Path;

use crate::config::merge::merge_policy;
use crate::config::sources::{env_vars, explicit_file, global_file};
use crate::config::CliConfig;
use crate::error::SpawnError;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the global config file, then environment variables.
    pub fn load() -> Result<CliConfig, SpawnError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = env_vars::add_to_builder(builder);
        Self::finish(builder)
    }

    /// Defaults, then the given file (in place of the global one), then environment variables.
    pub fn load_from_file(path: &Path) -> Result<CliConfig, SpawnError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = explicit_file::add_to_builder(builder, path)?;
        let builder = env_vars::add_to_builder(builder);
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<CliConfig, SpawnError> {
        let config: CliConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
