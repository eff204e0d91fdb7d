use std::path::PathBuf;

use snafu::prelude::*;

use crate::che::{build_client, WorkspaceClient};
use crate::common::{key_file_or_string, ConfigSnafu, MissingEnvSnafu, Result};

pub const ENV_PREFIX: &str = "CHE";

/// Settings read from the `CHE_*` environment variables.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// `CHE_API`, the workspace API base URL.
    pub api: Option<String>,
    /// `CHE_WORKSPACE_ID`
    pub workspace_id: Option<String>,
    /// `CHE_MACHINE_TOKEN`, or `@path` to a file holding it.
    pub machine_token: Option<String>,
    /// `CHE_PROJECTS_ROOT`. Not used when listing endpoints.
    pub projects_root: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::load(::config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Same as [`Config::from_env`] but reads `vars` instead of the process environment.
    pub fn from_source(vars: ::config::Map<String, String>) -> Result<Self> {
        Self::load(::config::Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn load(source: ::config::Environment) -> Result<Self> {
        ::config::Config::builder()
            .add_source(source)
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|err| {
                ConfigSnafu {
                    message: err.to_string(),
                    prefix: ENV_PREFIX,
                }
                .build()
            })
    }

    pub fn workspace_id(&self) -> Result<&str> {
        let id = self.workspace_id.as_deref().unwrap_or_default();
        ensure!(
            !id.is_empty(),
            MissingEnvSnafu {
                name: "CHE_WORKSPACE_ID",
            }
        );
        Ok(id)
    }

    pub fn machine_token(&self) -> Result<Option<String>> {
        match self.machine_token.clone().filter(|t| !t.is_empty()) {
            Some(token) => Ok(Some(key_file_or_string(token, "CHE_MACHINE_TOKEN")?)),
            None => Ok(None),
        }
    }

    pub fn client(&self) -> Result<WorkspaceClient> {
        Ok(build_client(self.api.clone(), self.machine_token()?))
    }
}
