use log::info;
use std::path::PathBuf;
use structopt::StructOpt;
use thanks::{run_serve, Config, Error, ServeOptions};

#[derive(StructOpt)]
struct Options {
    #[structopt(short, long, parse(from_os_str), default_value = "thanks.toml")]
    /// config file to use
    config: PathBuf,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    #[structopt(name = "serve")]
    /// Run the server
    Serve(ServeOptions),
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let opts = Options::from_args();

    // set up logging, allowing info level logging by default
    env_logger::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("thanks starting");

    let config = Config::from_file(&opts.config)?;

    match opts.command {
        Command::Serve(options) => run_serve(config, &options).await,
    }
}
