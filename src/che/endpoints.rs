use std::io::Write;

use snafu::prelude::*;

use super::models::Workspace;
use crate::common::{OutputSnafu, Result, ServerInfo, StructureSnafu};

/// Flatten the servers of every machine in the workspace runtime.
///
/// Machines without a `servers` map are skipped. A missing `runtime` or
/// `machines` map, a null machine or server entry, or an empty or missing
/// server `url` fails the whole listing.
pub fn collect_endpoints(workspace: &Workspace) -> Result<Vec<ServerInfo>> {
    let runtime = workspace.runtime.as_ref().context(StructureSnafu {
        message: "runtime not found",
    })?;
    let machines = runtime.machines.as_ref().context(StructureSnafu {
        message: "machines not found",
    })?;

    let mut endpoints = Vec::new();
    for (machine_name, machine) in machines {
        let machine = machine.as_ref().context(StructureSnafu {
            message: format!("machine {machine_name} not found"),
        })?;
        let Some(servers) = machine.servers.as_ref() else {
            continue;
        };

        for (name, server) in servers {
            let url = server
                .as_ref()
                .and_then(|server| server.url.as_deref())
                .filter(|url| !url.is_empty())
                .context(StructureSnafu {
                    message: format!("url not found for server {name}"),
                })?;
            endpoints.push(ServerInfo::new(name, url));
        }
    }

    Ok(endpoints)
}

/// Write one `<name>: <url>` line per endpoint.
///
/// Nothing is written unless the whole workspace could be traversed.
pub fn list_endpoints(workspace: &Workspace, out: &mut impl Write) -> Result<usize> {
    let endpoints = collect_endpoints(workspace)?;

    for endpoint in &endpoints {
        writeln!(out, "{endpoint}").context(OutputSnafu)?;
    }

    tracing::info!(endpoints = endpoints.len(), "Listed endpoints");

    Ok(endpoints.len())
}
