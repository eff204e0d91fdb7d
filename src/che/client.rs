use std::collections::HashMap;

use serde::de::DeserializeOwned;
use snafu::prelude::*;

use crate::common::{RemoteApi, RequestSnafu, ResponseSnafu, Result, UrlSnafu};

pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Settings for the workspace REST API.
///
/// `headers` stays `None` when no token is configured. An empty map and no
/// map are not the same thing to callers inspecting the config.
#[derive(Clone, Default)]
pub struct RestApiConfig {
    pub base_url: Option<String>,
    pub headers: Option<HashMap<String, String>>,
}

pub struct WorkspaceClient {
    config: RestApiConfig,
}

/// Assemble a client for the workspace API.
///
/// Nothing is validated here; a bad base URL surfaces on the first call.
pub fn build_client(base_url: Option<String>, bearer_token: Option<String>) -> WorkspaceClient {
    let mut config = RestApiConfig {
        base_url,
        headers: None,
    };

    if let Some(token) = bearer_token.filter(|t| !t.is_empty()) {
        config.headers = Some(HashMap::from([(
            AUTHORIZATION_HEADER.to_string(),
            format!("Bearer {token}"),
        )]));
    }

    WorkspaceClient::from(config)
}

impl WorkspaceClient {
    pub fn config(&self) -> &RestApiConfig {
        &self.config
    }

    fn workspace_url(&self, id: &str) -> Result<url::Url> {
        let base = self.config.base_url.as_deref().unwrap_or_default();
        let mut url = url::Url::parse(base).context(UrlSnafu { url: base })?;

        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)
            .context(UrlSnafu { url: base })?
            .pop_if_empty()
            .extend(&["workspace", id]);

        Ok(url)
    }
}

impl RemoteApi for WorkspaceClient {
    fn get_by_id<T: DeserializeOwned>(&self, id: &str) -> Result<T> {
        let url = self.workspace_url(id)?;

        tracing::debug!(
            url = url.as_str(),
            method = "GET",
            authenticated = self.config.headers.is_some(),
            "Sending request"
        );

        let mut request = ureq::get(url.as_str()).set("Accept", "application/json");
        if let Some(headers) = &self.config.headers {
            for (name, value) in headers {
                request = request.set(name, value);
            }
        }

        request
            .call()
            .context(RequestSnafu {
                url: url.as_str(),
                method: "GET",
            })?
            .into_json()
            .boxed_local()
            .context(ResponseSnafu {
                message: "Failed to deserialize response",
            })
    }
}

impl From<RestApiConfig> for WorkspaceClient {
    fn from(config: RestApiConfig) -> Self {
        Self { config }
    }
}
