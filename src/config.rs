use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analyzer::VersionBumper;
use crate::domain::ReleaseType;
use crate::error::{Result, SemverBumpError};

/// Environment variable holding the repository location
pub const GIT_PATH_ENV: &str = "GIT_PATH";

/// Environment variable holding the bump applied when no commit carries a signal
pub const NO_RELEASE_BUMP_ENV: &str = "NO_RELEASE_BUMP";

/// Default for `no_release_bump`: keep the version as is
pub const DEFAULT_NO_RELEASE_BUMP: &str = "norelease";

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "semver-bump.toml";

/// Settings for one semver-bump invocation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_git_path")]
    pub git_path: PathBuf,

    /// `major`, `minor` or `patch`; anything else means no bump
    #[serde(default = "default_no_release_bump")]
    pub no_release_bump: String,
}

fn default_git_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_no_release_bump() -> String {
    DEFAULT_NO_RELEASE_BUMP.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            git_path: default_git_path(),
            no_release_bump: default_no_release_bump(),
        }
    }
}

impl Config {
    /// Override settings from the process environment
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Override settings from `lookup`, which maps a variable name to its value
    pub fn with_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(GIT_PATH_ENV) {
            debug!("{}={}", GIT_PATH_ENV, path);
            self.git_path = PathBuf::from(path);
        }
        if let Some(bump) = lookup(NO_RELEASE_BUMP_ENV) {
            debug!("{}={}", NO_RELEASE_BUMP_ENV, bump);
            self.no_release_bump = bump;
        }
        self
    }

    /// Release type applied when no commit carries a signal
    pub fn no_release_bump(&self) -> Option<ReleaseType> {
        parse_no_release_bump(&self.no_release_bump)
    }

    /// Version bumper configured with this policy
    pub fn bumper(&self) -> VersionBumper {
        VersionBumper::new(self.no_release_bump())
    }
}

/// Permissive parse of a `no_release_bump` value.
///
/// Unrecognized values fall back to no bump instead of failing.
pub fn parse_no_release_bump(value: &str) -> Option<ReleaseType> {
    match value.parse::<ReleaseType>() {
        Ok(release_type) => Some(release_type),
        Err(_) => {
            let value = value.trim();
            if !value.is_empty()
                && !value.eq_ignore_ascii_case(DEFAULT_NO_RELEASE_BUMP)
                && !value.eq_ignore_ascii_case("none")
            {
                warn!(
                    "unrecognized no_release_bump '{}', versions without a release signal are kept as is",
                    value
                );
            }
            None
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver-bump.toml` in current directory
/// 3. `.semver-bump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// Environment overrides are applied separately with [Config::with_env].
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err(Io)` - If the file exists but cannot be read
/// * `Err(Config)` - If the file is not valid TOML or holds unknown keys
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(path) = dirs::config_dir()
        .map(|dir| dir.join(format!(".{}", CONFIG_FILE_NAME)))
        .filter(|path| path.exists())
    {
        path
    } else {
        return Ok(Config::default());
    };

    debug!("loading configuration from {}", path.display());
    let config_str = fs::read_to_string(&path)?;
    toml::from_str(&config_str).map_err(|e| {
        SemverBumpError::config(format!("invalid config file '{}': {}", path.display(), e))
    })
}
