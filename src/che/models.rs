use indexmap::IndexMap;

// Maps keep the key order of the API response, which is the order
// endpoints are listed in.

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Workspace {
    pub id: Option<String>,
    pub status: Option<String>,
    pub runtime: Option<Runtime>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Runtime {
    #[serde(rename = "activeEnv")]
    pub active_env: Option<String>,
    pub machines: Option<IndexMap<String, Option<Machine>>>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Machine {
    pub status: Option<String>,
    pub attributes: Option<IndexMap<String, serde_json::Value>>,
    pub servers: Option<IndexMap<String, Option<Server>>>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Server {
    pub url: Option<String>,
    pub status: Option<String>,
    pub attributes: Option<IndexMap<String, serde_json::Value>>,
}
