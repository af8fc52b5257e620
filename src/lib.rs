mod config;
mod error;
pub mod github;
mod server;
mod service;

pub use config::{Config, RepoConfig};
pub use error::{Error, Result};
pub use server::Server;
pub use service::{run_serve, ServeOptions};
