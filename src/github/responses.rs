//! Response bodies of the endpoints used by this crate.
//!
//! Decoding is lenient: a field that is absent or `null` takes its zero value, and unknown fields
//! are skipped.

use serde::{Deserialize, Deserializer};

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Public profile of a user or an organization.
///
/// [GitHub Docs](https://docs.github.com/en/rest/users/users#get-a-user).
#[derive(Deserialize, PartialEq, Default, Clone, Debug)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "nullable")]
    pub login: String,
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub node_id: String,
    #[serde(deserialize_with = "nullable")]
    pub avatar_url: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub company: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub bio: String,
    #[serde(deserialize_with = "nullable")]
    pub twitter_username: String,
    #[serde(deserialize_with = "nullable")]
    pub public_repos: u64,
}

/// One entry of a repository list. Timestamps are kept as sent.
#[derive(Deserialize, PartialEq, Default, Clone, Debug)]
#[serde(default)]
pub struct Repository {
    #[serde(deserialize_with = "nullable")]
    pub html_url: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub created_at: String,
    #[serde(deserialize_with = "nullable")]
    pub updated_at: String,
    #[serde(deserialize_with = "nullable")]
    pub pushed_at: String,
    #[serde(deserialize_with = "nullable")]
    pub size: u64,
    #[serde(deserialize_with = "nullable")]
    pub language: String,
}

/// [GitHub Docs](https://docs.github.com/en/rest/repos/repos#create-a-repository-for-the-authenticated-user).
#[derive(Deserialize, PartialEq, Default, Clone, Debug)]
#[serde(default)]
pub struct CreateRepoResponse {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub node_id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub full_name: String,
    #[serde(deserialize_with = "nullable")]
    pub private: bool,
    #[serde(deserialize_with = "nullable")]
    pub html_url: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub owner: Profile,
    #[serde(deserialize_with = "nullable")]
    pub git_url: String,
    #[serde(deserialize_with = "nullable")]
    pub ssh_url: String,
    #[serde(deserialize_with = "nullable")]
    pub clone_url: String,
    #[serde(deserialize_with = "nullable")]
    pub language: String,
}
