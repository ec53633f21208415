use clap::{Parser, Subcommand};
use github_cli::{
    github::config::{DEFAULT_API_URL, DEFAULT_PER_PAGE, DEFAULT_TIMEOUT_SECS},
    PartialRepositoryId, RepositoryId,
};
use url::Url;

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// Seconds to wait for a whole request before giving up.
    #[clap(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS, value_name = "SECONDS")]
    pub timeout: u64,

    /// Number of repositories asked for when listing. Only one page is fetched.
    #[clap(long, global = true, default_value_t = DEFAULT_PER_PAGE, value_name = "N")]
    pub per_page: u32,

    /// Base URL of the REST API.
    ///
    /// Any path it carries is kept as a prefix, `https://ghe.example/api/v3` works.
    #[clap(long, global = true, hide = true, default_value = DEFAULT_API_URL)]
    pub api_url: Url,

    #[clap(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new repository for the token owner or for an organization.
    Create {
        /// Repository name, or `:org/:name` with `--org`.
        repo: PartialRepositoryId,

        /// Create the repository in an organization.
        #[clap(short, long)]
        org: bool,

        /// Personal access token.
        #[clap(short, long)]
        token: Option<String>,
    },
    /// Delete a repository.
    Delete {
        /// Repository identifier, `:owner/:name`.
        repo: RepositoryId,

        /// Personal access token.
        #[clap(short, long)]
        token: Option<String>,
    },
    /// Display public profile info of a user or an organization.
    Profile {
        /// User or organization name.
        name: String,

        /// Look up an organization.
        #[clap(short, long)]
        org: bool,
    },
    /// List repositories of a user or an organization.
    Repos {
        /// User or organization name. Optional for a user when a token is given.
        name: Option<String>,

        /// List repositories of an organization.
        #[clap(short, long)]
        org: bool,

        /// Personal access token, to include private repositories.
        #[clap(short, long)]
        token: Option<String>,
    },
}

pub fn cmd() -> Cli {
    Cli::parse()
}
