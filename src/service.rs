use crate::{config::Config, github::Client, server::Server, Result};
use structopt::StructOpt;

#[derive(StructOpt)]
pub struct ServeOptions {
    #[structopt(long, default_value = "3000")]
    port: u16,
}

pub async fn run_serve(config: Config, options: &ServeOptions) -> Result<()> {
    let github = Client::builder()
        .github_api_token(&config.github_api_token)
        .build()?;

    let server = Server::new(github, config.repo, config.static_dir);

    let addr = ([0, 0, 0, 0], options.port).into();
    server.start(addr).await
}
