#[cfg(test)]
#[macro_use]
mod testing;

mod display;

pub mod app;
pub mod github;

use anyhow::{bail, Error};
use core::fmt;
use std::str::FromStr;

/// Fully qualified repository, `:owner/:name`.
#[derive(PartialEq, Clone, Debug)]
pub struct RepositoryId {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepositoryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match PartialRepositoryId::from_str(s) {
            Ok(PartialRepositoryId { owner: Some(owner), name }) => Ok(Self { owner, name }),
            _ => bail!("Expecting in `:owner/:name` format, but was `{}`.", s),
        }
    }
}

/// Repository whose owner may be left out, `:owner?/:name`.
#[derive(PartialEq, Clone, Debug)]
pub struct PartialRepositoryId {
    pub owner: Option<String>,
    pub name: String,
}

impl fmt::Display for PartialRepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.owner {
            Some(owner) => write!(f, "{}/{}", owner, self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl FromStr for PartialRepositoryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (owner, name) = match s.split_once('/') {
            Some((owner, name)) => (Some(owner), name),
            None => (None, s),
        };
        let owner_ok = owner.map(is_path_segment).unwrap_or(true);
        if !owner_ok || !is_path_segment(name) || name.contains('/') {
            bail!("Expecting in `:owner?/:name` format, but was `{}`.", s)
        }
        let owner = owner.map(ToOwned::to_owned);
        let name = name.to_owned();
        Ok(Self { owner, name })
    }
}

/// Empty, `.` and `..` would collapse or escape their place in an API path.
fn is_path_segment(s: &str) -> bool {
    !matches!(s, "" | "." | "..")
}

#[cfg(test)]
#[test]
fn test_repository_id_display() {
    let id = RepositoryId { owner: "octocat".to_owned(), name: "demo".to_owned() };
    assert_eq!(id.to_string(), "octocat/demo");
}

#[cfg(test)]
#[test]
fn test_parse_repository_id() {
    // trivial case
    assert_eq!(
        RepositoryId { owner: "octocat".to_owned(), name: "demo".to_owned() },
        "octocat/demo".parse().unwrap()
    );
    // missing owner
    assert_eq!(
        "Expecting in `:owner/:name` format, but was `demo`.",
        "demo".parse::<RepositoryId>().unwrap_err().to_string()
    );
    // missing name
    assert_eq!(
        "Expecting in `:owner/:name` format, but was `octocat/`.",
        "octocat/".parse::<RepositoryId>().unwrap_err().to_string()
    );
    // double separator
    assert!("octocat/de/mo".parse::<RepositoryId>().is_err());
    // dot segments
    assert!("../demo".parse::<RepositoryId>().is_err());
    assert!("octocat/..".parse::<RepositoryId>().is_err());
}

#[cfg(test)]
#[test]
fn test_parse_partial_repository_id() {
    // trivial case
    assert_eq!(
        PartialRepositoryId { owner: Some("acme".to_owned()), name: "demo".to_owned() },
        "acme/demo".parse().unwrap()
    );
    // missing owner
    assert_eq!(
        PartialRepositoryId { owner: None, name: "demo".to_owned() },
        "demo".parse().unwrap()
    );
    // empty owner
    assert_eq!(
        "Expecting in `:owner?/:name` format, but was `/demo`.",
        "/demo".parse::<PartialRepositoryId>().unwrap_err().to_string()
    );
    // missing name
    assert!("".parse::<PartialRepositoryId>().is_err());
    assert!("acme/".parse::<PartialRepositoryId>().is_err());
    // dot segments
    for s in ["..", ".", "../demo", "./demo", "acme/..", "acme/.", "../.."] {
        assert_eq!(
            format!("Expecting in `:owner?/:name` format, but was `{}`.", s),
            s.parse::<PartialRepositoryId>().unwrap_err().to_string()
        );
    }
    // dots inside a name are fine
    assert_eq!(
        PartialRepositoryId { owner: Some("acme".to_owned()), name: "demo.rs".to_owned() },
        "acme/demo.rs".parse().unwrap()
    );
}
