use reqwest::header::InvalidHeaderValue;
use reqwest::StatusCode;
use thiserror::Error;

type DecodeError = serde_path_to_error::Error<serde_json::Error>;

/// No bearer token could be obtained for the catalog provider.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No script with a bearer token found in the page")]
    NoScript,

    #[error("No bearer token found in the page scripts")]
    NotFound,

    #[error("Could not resolve the script url: {0}")]
    Url(#[from] url::ParseError),

    #[error("Error while fetching the page: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Page request returned non-success status {status}")]
    Status { status: StatusCode },
}

/// The primary catalog lookup failed.
#[derive(Error, Debug)]
pub enum CatalogFetchError {
    #[error("Could not build catalog url: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid header value: {0}")]
    Header(#[from] InvalidHeaderValue),

    #[error("Error while contacting the catalog: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Catalog request returned non-success status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Error while decoding JSON at path {}: {}", .0.path(), .0)]
    Decode(#[from] DecodeError),
}

/// Registry failures. These never leave the registry client: they are logged
/// and the lookup reports an unresolved release instead.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Could not build registry url: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid user agent: {0}")]
    UserAgent(#[from] InvalidHeaderValue),

    #[error("Error while contacting the registry: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Registry request returned non-success status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Error while decoding JSON at path {}: {}", .0.path(), .0)]
    Decode(#[from] DecodeError),
}

/// Errors fatal to a whole check run.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Error getting the catalog token: {0}")]
    Auth(#[from] AuthError),

    #[error("Error fetching album data: {0}")]
    Catalog(#[from] CatalogFetchError),
}
