#![deny(rust_2018_idioms)]

use crate::cli::*;
use anyhow::Result;
use console::Term;
use github_cli::{
    app::App,
    github::{ClientConfig, GhClient},
};
use std::{process, time::Duration};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;

async fn run(cmd: Cli) -> Result<()> {
    let config = ClientConfig {
        base_url: cmd.api_url,
        timeout: Duration::from_secs(cmd.timeout),
        per_page: cmd.per_page,
    };
    let client = GhClient::new(config)?;
    let mut app = App::new(client, Term::buffered_stdout());

    match cmd.cmd {
        Command::Create { repo, org, token } => {
            app.create_repository(token.as_deref(), repo, org).await?
        }
        Command::Delete { repo, token } => app.delete_repository(token.as_deref(), repo).await?,
        Command::Profile { name, org } => app.view_profile(&name, org).await?,
        Command::Repos { name, org, token } => {
            app.list_repositories(token.as_deref(), name, org).await?
        }
    };

    app.into_output().flush()?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cmd = cli::cmd();
    debug!(?cmd, "launched");

    if let Err(err) = run(cmd).await {
        debug!(?err, "exiting with error");
        eprintln!("error: {:#}", err);
        process::exit(1);
    }

    debug!("exiting");
}
