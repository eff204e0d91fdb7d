use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{prefix}: {message}"))]
    ConfigError { message: String, prefix: String },
    #[snafu(display("{name} is not found."))]
    MissingEnvError { name: String },
    #[snafu(display("Invalid base URL {url:?}: {source}"))]
    UrlError {
        url: String,
        source: url::ParseError,
    },
    #[snafu(display("{method} {url} failed: {source}"))]
    RequestError {
        url: String,
        method: String,
        #[snafu(source(from(ureq::Error, Box::new)))]
        source: Box<ureq::Error>,
    },
    #[snafu(display("{message}: {source}"))]
    ResponseError {
        message: String,
        source: Box<dyn std::error::Error>,
    },
    #[snafu(display("{message}"))]
    StructureError { message: String },
    #[snafu(display("Failed to write output: {source}"))]
    OutputError { source: std::io::Error },
}

impl Error {
    /// The environment does not describe a usable configuration.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::ConfigError { .. } | Error::MissingEnvError { .. })
    }

    /// The workspace could not be fetched or decoded.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Error::UrlError { .. } | Error::RequestError { .. } | Error::ResponseError { .. }
        )
    }

    /// The fetched workspace is missing a field the endpoint listing needs.
    pub fn is_structure(&self) -> bool {
        matches!(self, Error::StructureError { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
