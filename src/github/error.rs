//! Error type for the GitHub client

use serde::Deserialize;
use std::borrow::Cow;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("reqwest error")]
    Reqwest(#[from] reqwest::Error),

    #[error("json error")]
    Json(#[from] serde_json::Error),

    #[error("`{0}`")]
    Message(Cow<'static, str>),

    #[error("graphql error: {0:?}")]
    Graphql(Vec<GraphqlError>),
}

impl From<&'static str> for Error {
    fn from(error: &'static str) -> Self {
        Error::Message(error.into())
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Message(error.into())
    }
}

/// An entry of the `errors` array in a GraphQL response envelope
#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    pub locations: Option<Vec<GraphqlErrorLocation>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlErrorLocation {
    pub line: usize,
    pub column: usize,
}
