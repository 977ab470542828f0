//! Platform paths for configuration and state.

use directories::ProjectDirs;
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "sessionctl";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Path to the global config file: `$XDG_CONFIG_HOME/sessionctl/config.toml`
/// (or the platform equivalent).
pub fn global_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Default log file location under the platform data directory.
pub(crate) fn default_log_file_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join(format!("{}.log", APP_NAME)))
}
