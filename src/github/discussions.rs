//! Discussions related methods of the GitHub GraphQL API.
//!
//! GitHub API docs: https://docs.github.com/en/graphql/guides/using-the-graphql-api-for-discussions

use crate::github::{graphql::Query, Client, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// How many discussions a single list call asks for; there is no pagination
/// beyond this first page.
const DISCUSSION_PAGE_SIZE: i64 = 100;

const LIST_DISCUSSIONS: &str = r#"
query($owner: String!, $name: String!, $first: Int!) {
    repository(owner: $owner, name: $name) {
        discussions(first: $first, orderBy: {field: CREATED_AT, direction: DESC}) {
            nodes {
                title
                body
                createdAt
                author {
                    login
                }
            }
        }
    }
}"#;

const CREATE_DISCUSSION: &str = r#"
mutation($repositoryId: ID!, $categoryId: ID!, $title: String!, $body: String!) {
    createDiscussion(input: {
        repositoryId: $repositoryId,
        categoryId: $categoryId,
        title: $title,
        body: $body
    }) {
        discussion {
            id
        }
    }
}"#;

/// A discussion as this service projects it: the fields the front-end
/// renders, relayed verbatim. `createdAt` stays an opaque string.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discussion {
    pub title: String,
    pub body: String,
    pub created_at: String,
    pub author: Option<Author>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Author {
    pub login: String,
}

#[derive(Debug, Serialize)]
struct ListVariables<'a> {
    owner: &'a str,
    name: &'a str,
    first: i64,
}

#[derive(Debug, Deserialize)]
struct ListResponseData {
    repository: Option<Repository>,
}

#[derive(Debug, Deserialize)]
struct Repository {
    discussions: DiscussionConnection,
}

#[derive(Debug, Deserialize)]
struct DiscussionConnection {
    nodes: Vec<Discussion>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateVariables<'a> {
    repository_id: &'a str,
    category_id: &'a str,
    title: &'a str,
    body: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateResponseData {
    create_discussion: Option<CreateDiscussionPayload>,
}

#[derive(Debug, Deserialize)]
struct CreateDiscussionPayload {
    discussion: Option<DiscussionId>,
}

#[derive(Debug, Deserialize)]
struct DiscussionId {
    id: String,
}

/// `DiscussionsClient` handles communication with the discussions related
/// methods of the GitHub GraphQL API.
pub struct DiscussionsClient<'a> {
    inner: &'a Client,
}

impl<'a> DiscussionsClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// List the most recent discussions in a repository, newest first, capped
    /// at one page. The order is whatever the endpoint returned.
    pub async fn list(&self, owner: &str, name: &str) -> Result<Vec<Discussion>> {
        let query = Query {
            query: LIST_DISCUSSIONS,
            variables: ListVariables {
                owner,
                name,
                first: DISCUSSION_PAGE_SIZE,
            },
        };

        let response: ListResponseData = self.inner.graphql().query(&query).await?;

        let repository = response
            .repository
            .ok_or_else(|| format!("repository {}/{} not found", owner, name))?;

        Ok(repository.discussions.nodes)
    }

    /// Create a discussion. The created node id is not reported back to the
    /// caller.
    pub async fn create(
        &self,
        repository_id: &str,
        category_id: &str,
        title: &str,
        body: &str,
    ) -> Result<()> {
        let query = Query {
            query: CREATE_DISCUSSION,
            variables: CreateVariables {
                repository_id,
                category_id,
                title,
                body,
            },
        };

        let response: CreateResponseData = self.inner.graphql().query(&query).await?;

        if let Some(discussion) = response
            .create_discussion
            .and_then(|payload| payload.discussion)
        {
            debug!("created discussion {}", discussion.id);
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn create_variables_encode_message_as_string_literal() {
        let query = Query {
            query: CREATE_DISCUSSION,
            variables: CreateVariables {
                repository_id: "R_1",
                category_id: "DIC_1",
                title: "Thanks from Ann",
                body: "line one\nsay \"hi\"",
            },
        };

        let json = serde_json::to_string(&query).unwrap();
        assert!(json.contains(r#""repositoryId":"R_1""#));
        assert!(json.contains(r#""categoryId":"DIC_1""#));
        assert!(json.contains(r#""title":"Thanks from Ann""#));
        // the message must arrive escaped, never spliced into the query text
        assert!(json.contains(r#""body":"line one\nsay \"hi\"""#));
        assert!(!json.contains("say \"hi\"\n"));
    }

    #[test]
    fn list_query_asks_for_newest_first() {
        assert!(LIST_DISCUSSIONS.contains("orderBy: {field: CREATED_AT, direction: DESC}"));

        let variables = ListVariables {
            owner: "retruth",
            name: "thanks",
            first: DISCUSSION_PAGE_SIZE,
        };
        let json = serde_json::to_string(&variables).unwrap();
        assert!(json.contains(r#""first":100"#));
    }

    #[test]
    fn discussion_decodes_null_author() {
        let payload = r#"{
            "title": "Thanks from Bob",
            "body": "Cheers",
            "createdAt": "2024-01-01T00:00:00Z",
            "author": null
        }"#;

        let discussion: Discussion = serde_json::from_str(payload).unwrap();
        assert_eq!(discussion.title, "Thanks from Bob");
        assert_eq!(discussion.created_at, "2024-01-01T00:00:00Z");
        assert!(discussion.author.is_none());

        // the projection serializes back out with the wire field names
        let json = serde_json::to_string(&discussion).unwrap();
        assert!(json.contains(r#""createdAt":"2024-01-01T00:00:00Z""#));
    }
}
