use crate::github::{Client, Error, GraphqlError, Result};
use log::debug;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A request to a GraphQL endpoint
#[derive(Debug, Serialize)]
pub struct Query<V> {
    /// The GraphQL query text
    pub query: &'static str,
    /// The values for the variables. They must match those declared in the
    /// provided query.
    pub variables: V,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphqlError>>,
}

/// `GraphqlClient` handles communication with GitHub's GraphQL API.
///
/// GitHub API docs: https://docs.github.com/en/graphql
pub struct GraphqlClient<'a> {
    inner: &'a Client,
}

impl<'a> GraphqlClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Perform a Query against GitHub's GraphQL Endpoint
    pub async fn query<V: Serialize, R: DeserializeOwned>(&self, query: &Query<V>) -> Result<R> {
        let response = self.inner.post("graphql").json(query).send().await?;
        debug!("GraphQL response: {:#?}", response);

        if !response.status().is_success() {
            return Err(format!("Request failed: {}", response.status()).into());
        }

        let response = response.json::<GraphqlResponse<R>>().await?;

        match (response.data, response.errors) {
            (Some(data), None) => Ok(data),
            (_, Some(errors)) => Err(Error::Graphql(errors)),
            (None, None) => Err("graphql response contained neither data nor errors".into()),
        }
    }
}
