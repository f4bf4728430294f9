use thiserror::Error;

use crate::api::ApiError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unexpected error from the http client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("Cannot instantiate a GetResponse client without credentials!")]
    CredentialsRequired,
    #[error("Unknown GetResponse MAX server '{0}', expected 'US' or 'PL'")]
    UnknownMaxServer(String),
    #[error(transparent)]
    UrlParserError(#[from] url::ParseError),
    #[error("Returned JSON does not conform to protocol: {0}")]
    ProtocolError(#[from] serde_json::Error),
    #[error("The service rejected the call: {0}")]
    Api(#[from] ApiError),
}
