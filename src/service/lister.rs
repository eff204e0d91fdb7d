use std::io::Write;

use snafu::prelude::*;

use crate::che::{list_endpoints, Workspace};
use crate::common::{OutputSnafu, RemoteApi, Result};

/// Fetches one workspace and reports what it exposes.
pub struct EndpointLister<A: RemoteApi> {
    api: A,
    workspace_id: String,
}

impl<A: RemoteApi> EndpointLister<A> {
    pub fn new(api: A, workspace_id: impl Into<String>) -> Self {
        Self {
            api,
            workspace_id: workspace_id.into(),
        }
    }

    pub fn fetch(&self) -> Result<Workspace> {
        let workspace: Workspace = self.api.get_by_id(&self.workspace_id)?;

        tracing::info!(
            workspace = self.workspace_id.as_str(),
            status = workspace.status.as_deref().unwrap_or("UNKNOWN"),
            "Fetched workspace",
        );

        Ok(workspace)
    }

    /// Print the endpoints of the workspace, returning how many were printed.
    pub fn run(&self, out: &mut impl Write) -> Result<usize> {
        let workspace = self.fetch()?;
        list_endpoints(&workspace, out)
    }

    /// Print the raw workspace document instead of its endpoints.
    pub fn dump(&self, out: &mut impl Write) -> Result<()> {
        let workspace: serde_json::Value = self.api.get_by_id(&self.workspace_id)?;

        serde_json::to_writer_pretty(&mut *out, &workspace)
            .map_err(std::io::Error::from)
            .context(OutputSnafu)?;
        writeln!(out).context(OutputSnafu)
    }
}
