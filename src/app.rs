use crate::{
    display::{CreatedRepositoryView, OrgProfileView, RepositoryView, UserProfileView},
    github::{Authentication, GhClient, PersonalAccessToken},
    PartialRepositoryId, RepositoryId,
};
use anyhow::{bail, Context, Error};
use std::{fmt, io::Write};
use tracing::{debug, warn};

/// Account whose repositories get listed, and the token to list them with.
#[derive(PartialEq, Debug)]
pub enum RepositoriesOwner<'a> {
    User(String),
    /// Owner of the token. Private repositories included.
    AuthenticatedUser(PersonalAccessToken<'a>),
    Organization(String, Option<PersonalAccessToken<'a>>),
}

impl<'a> RepositoriesOwner<'a> {
    pub fn select(
        name: Option<String>,
        org: bool,
        token: Option<PersonalAccessToken<'a>>,
    ) -> Result<Self, Error> {
        let owner = match (name, org, token) {
            (Some(name), true, token) => Self::Organization(name, token),
            (None, true, _) => bail!("An organization name is required to list its repositories."),
            (name, false, Some(token)) => {
                if let Some(name) = name {
                    warn!(%name, "listing repositories of the token owner, ignoring user name");
                }
                Self::AuthenticatedUser(token)
            }
            (Some(name), false, None) => Self::User(name),
            (None, false, None) => {
                bail!("A user name is required to list repositories without a personal access token.")
            }
        };
        Ok(owner)
    }
}

impl fmt::Display for RepositoriesOwner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(name) => write!(f, "user {}", name),
            Self::AuthenticatedUser(_) => f.write_str("the authenticated user"),
            Self::Organization(name, _) => write!(f, "organization {}", name),
        }
    }
}

/// Command handlers. Output goes to `out` only after the request fully succeeded.
#[derive(Debug)]
pub struct App<W> {
    client: GhClient,
    out: W,
}

impl<W> App<W>
where
    W: Write,
{
    pub fn new(client: GhClient, out: W) -> Self {
        Self { client, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Creates a repository owned by the token owner, or by the organization named in `repo` when
    /// `org` is set.
    pub async fn create_repository(
        &mut self,
        token: Option<&str>,
        repo: PartialRepositoryId,
        org: bool,
    ) -> Result<(), Error> {
        let token = PersonalAccessToken::require(token, "create a repository")?;
        let repos = self.client.repos();
        let created = match (org, &repo.owner) {
            (true, Some(owner)) => repos.create_in_organization(&token, owner, &repo.name).await,
            (true, None) => {
                bail!("Expecting in `:org/:name` format with `--org`, but was `{}`.", repo)
            }
            (false, Some(_)) => {
                bail!("Repository `{}` names an owner, pass `--org` to create it in an organization.", repo)
            }
            (false, None) => repos.create_for_authenticated_user(&token, &repo.name).await,
        };
        let created = created.with_context(|| format!("Failed to create repository {}", repo))?;
        debug!(?created, "created repository");

        writeln!(self.out, "{}", CreatedRepositoryView(&created))?;
        Ok(())
    }

    pub async fn delete_repository(
        &mut self,
        token: Option<&str>,
        repo: RepositoryId,
    ) -> Result<(), Error> {
        let token = PersonalAccessToken::require(token, "delete a repository")?;
        self.client
            .repos()
            .delete(&token, &repo.owner, &repo.name)
            .await
            .with_context(|| format!("Failed to delete repository {}", repo))?;

        writeln!(self.out, "Repository {} successfully deleted", repo.name)?;
        Ok(())
    }

    /// Prints a user profile, or an organization profile when `org` is set. Both decode to the
    /// same profile but show different fields.
    pub async fn view_profile(&mut self, name: &str, org: bool) -> Result<(), Error> {
        if org {
            let profile = self
                .client
                .orgs()
                .get(name)
                .await
                .with_context(|| format!("Failed to fetch profile of organization {}", name))?;
            writeln!(self.out, "{}", OrgProfileView(&profile))?;
        } else {
            let profile = self
                .client
                .users()
                .get(name)
                .await
                .with_context(|| format!("Failed to fetch profile of user {}", name))?;
            writeln!(self.out, "{}", UserProfileView(&profile))?;
        }
        Ok(())
    }

    pub async fn list_repositories(
        &mut self,
        token: Option<&str>,
        name: Option<String>,
        org: bool,
    ) -> Result<(), Error> {
        let token = PersonalAccessToken::optional(token);
        let owner = RepositoriesOwner::select(name, org, token)?;
        debug!(?owner, "listing repositories");

        let repos = self.client.repos();
        let list = match &owner {
            RepositoriesOwner::User(user) => repos.list_for_user(user).await,
            RepositoriesOwner::AuthenticatedUser(token) => {
                repos.list_for_authenticated_user(token).await
            }
            RepositoriesOwner::Organization(org, token) => {
                let token = token.as_ref().map(|x| x as &dyn Authentication);
                repos.list_for_organization(org, token).await
            }
        };
        let list = list.with_context(|| format!("Failed to list repositories of {}", owner))?;

        for repo in &list {
            writeln!(self.out, "{}", RepositoryView(repo))?;
        }
        writeln!(self.out, "Total count: {}", list.len())?;
        Ok(())
    }
}
