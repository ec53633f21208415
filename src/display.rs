//! Line-oriented output views. Fields are space separated, absent values print empty.

use crate::github::responses::{CreateRepoResponse, Profile, Repository};
use std::fmt;

/// User profile: name, id and avatar URL.
#[derive(Debug)]
pub struct UserProfileView<'a>(pub &'a Profile);

impl fmt::Display for UserProfileView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Profile { name, id, avatar_url, .. } = self.0;
        write!(f, "{} {} {}", name, id, avatar_url)
    }
}

/// Organization profile: location, public repository count and Twitter handle.
#[derive(Debug)]
pub struct OrgProfileView<'a>(pub &'a Profile);

impl fmt::Display for OrgProfileView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Profile { location, public_repos, twitter_username, .. } = self.0;
        write!(f, "{} {} {}", location, public_repos, twitter_username)
    }
}

#[derive(Debug)]
pub struct CreatedRepositoryView<'a>(pub &'a CreateRepoResponse);

impl fmt::Display for CreatedRepositoryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repo = self.0;
        write!(f, "{} {} {}", repo.name, repo.owner.login, repo.private)
    }
}

#[derive(Debug)]
pub struct RepositoryView<'a>(pub &'a Repository);

impl fmt::Display for RepositoryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0.html_url, self.0.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            login: "github".to_owned(),
            id: 9919,
            avatar_url: "https://avatars.githubusercontent.com/u/9919?v=4".to_owned(),
            name: "GitHub".to_owned(),
            location: "San Francisco, CA".to_owned(),
            twitter_username: "github".to_owned(),
            public_repos: 486,
            ..Default::default()
        }
    }

    #[test]
    fn test_user_and_org_views_differ() {
        let profile = profile();
        assert_eq!(
            UserProfileView(&profile).to_string(),
            "GitHub 9919 https://avatars.githubusercontent.com/u/9919?v=4"
        );
        assert_eq!(OrgProfileView(&profile).to_string(), "San Francisco, CA 486 github");
    }

    #[test]
    fn test_empty_profile_views() {
        let profile = Profile::default();
        assert_eq!(UserProfileView(&profile).to_string(), " 0 ");
        assert_eq!(OrgProfileView(&profile).to_string(), " 0 ");
    }

    #[test]
    fn test_created_repository_view() {
        let created = CreateRepoResponse {
            name: "demo".to_owned(),
            owner: Profile { login: "u".to_owned(), ..Default::default() },
            private: true,
            ..Default::default()
        };
        assert_eq!(CreatedRepositoryView(&created).to_string(), "demo u true");
    }

    #[test]
    fn test_repository_view() {
        let repo = Repository {
            html_url: "https://github.com/octocat/Hello-World".to_owned(),
            language: "Rust".to_owned(),
            ..Default::default()
        };
        assert_eq!(RepositoryView(&repo).to_string(), "https://github.com/octocat/Hello-World Rust");
    }
}
