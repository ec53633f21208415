use super::{client::Authentication, error::Error};
use std::fmt;

/// [Personal access token] sent as `Authorization: token <value>`.
///
/// [Personal access token]: https://docs.github.com/en/authentication/keeping-your-account-and-data-secure/creating-a-personal-access-token
#[derive(PartialEq, Clone, Copy)]
pub struct PersonalAccessToken<'a> {
    token: &'a str,
}

impl<'a> PersonalAccessToken<'a> {
    pub const fn new(token: &'a str) -> Self {
        Self { token }
    }

    /// Accepts an absent or empty token as no token.
    pub fn optional(token: Option<&'a str>) -> Option<Self> {
        token.filter(|x| !x.is_empty()).map(Self::new)
    }

    /// Like [`PersonalAccessToken::optional`], but fails when `operation` can not go without one.
    pub fn require(token: Option<&'a str>, operation: &'static str) -> Result<Self, Error> {
        Self::optional(token).ok_or(Error::MissingCredential { operation })
    }
}

impl Authentication for PersonalAccessToken<'_> {
    fn to_authz_value(&self) -> String {
        format!("token {}", self.token)
    }
}

impl fmt::Debug for PersonalAccessToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonalAccessToken").finish_non_exhaustive()
    }
}
