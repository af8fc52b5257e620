mod static_files;


use crate::{config::RepoConfig, github::Client, Error, Result};
use futures::future;
use hyper::{
    body,
    header::CONTENT_TYPE,
    server::conn::AddrStream,
    service::{make_service_fn, service_fn},
    Body, Method, Request, Response, Server as HyperServer, StatusCode,
};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::{
    net::SocketAddr,
    path::PathBuf,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

#[derive(Clone, Debug)]
pub struct Server {
    counter: Arc<AtomicUsize>,
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    github: Client,
    repo: RepoConfig,
    static_dir: PathBuf,
}

impl Server {
    pub fn new(github: Client, repo: RepoConfig, static_dir: PathBuf) -> Self {
        Self {
            counter: Arc::new(AtomicUsize::new(0)),
            inner: Arc::new(Inner {
                github,
                repo,
                static_dir,
            }),
        }
    }

    pub async fn start(self, addr: SocketAddr) -> Result<()> {
        let server = self;

        // The closure inside `make_service_fn` is run for each connection,
        // creating a 'service' to handle requests for that specific connection.
        let make_service = make_service_fn(move |_socket: &AddrStream| {
            // While the state was moved into the make_service closure,
            // we need to clone it here because this closure is called
            // once for every connection.
            let server = server.clone();

            // This is the `Service` that will handle the connection.
            future::ok::<_, Error>(service_fn(move |request| {
                let server = server.clone();
                server.serve(request)
            }))
        });

        info!("Listening on http://{}", addr);
        HyperServer::bind(&addr).serve(make_service).await?;

        Ok(())
    }

    async fn serve(self, request: Request<Body>) -> Result<Response<Body>> {
        self.counter.fetch_add(1, Ordering::AcqRel);
        self.route_http_request(request).await
    }

    async fn route_http_request(&self, request: Request<Body>) -> Result<Response<Body>> {
        match (request.method(), request.uri().path()) {
            (&Method::GET, "/api/messages") => self.list_messages().await,
            (&Method::POST, "/api/messages") => self.create_message(request).await,
            (&Method::GET, path) => static_files::serve(&self.inner.static_dir, path).await,
            _ => Ok(Response::builder()
                .status(StatusCode::NOT_FOUND)
                .body(Body::empty())?),
        }
    }

    async fn list_messages(&self) -> Result<Response<Body>> {
        let repo = &self.inner.repo;

        match self
            .inner
            .github
            .discussions()
            .list(repo.owner(), repo.name())
            .await
        {
            Ok(messages) => json_response(StatusCode::OK, &messages),
            Err(err) => {
                error!("loading messages: {:#?}", err);
                json_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &serde_json::json!({ "error": "Failed to load messages" }),
                )
            }
        }
    }

    async fn create_message(&self, request: Request<Body>) -> Result<Response<Body>> {
        let payload = body::to_bytes(request.into_body()).await?;

        // An unparseable body is treated the same as one with missing fields
        let request =
            serde_json::from_slice::<CreateMessageRequest>(&payload).unwrap_or_default();

        let (user_name, message) = match request.into_fields() {
            Some(fields) => fields,
            None => {
                return json_response(
                    StatusCode::BAD_REQUEST,
                    &serde_json::json!({ "error": "Missing userName or message" }),
                )
            }
        };

        let title = format!("Thanks from {}", user_name);
        let repo = &self.inner.repo;

        match self
            .inner
            .github
            .discussions()
            .create(repo.repository_id(), repo.category_id(), &title, &message)
            .await
        {
            Ok(()) => json_response(StatusCode::CREATED, &serde_json::json!({ "success": true })),
            Err(err) => {
                error!("creating message: {:#?}", err);
                json_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &serde_json::json!({ "error": "Failed to create message" }),
                )
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateMessageRequest {
    #[serde(default)]
    user_name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl CreateMessageRequest {
    /// Both fields must be present and non-empty; anything else is a
    /// validation failure.
    fn into_fields(self) -> Option<(String, String)> {
        match (self.user_name, self.message) {
            (Some(user_name), Some(message))
                if !user_name.is_empty() && !message.is_empty() =>
            {
                Some((user_name, message))
            }
            _ => None,
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response<Body>> {
    let body = serde_json::to_vec(value)?;

    Ok(Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))?)
}
