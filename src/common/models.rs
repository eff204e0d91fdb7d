use serde::de::DeserializeOwned;

/// A named endpoint exposed by a workspace machine.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub url: String,
}

impl ServerInfo {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

impl std::fmt::Display for ServerInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.url)
    }
}

pub trait RemoteApi {
    /// Fetch a workspace by its id or key and decode it into `T`.
    fn get_by_id<T: DeserializeOwned>(&self, id: &str) -> super::Result<T>;
}
