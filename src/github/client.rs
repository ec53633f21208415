use self::{orgs::*, repos::*, users::*};
use super::{config::ClientConfig, error::Error};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    Client, ClientBuilder, Method, Request, Response,
};
use serde::{de::DeserializeOwned, Serialize};
use std::result::Result;
use tracing::{debug, warn};
use url::Url;

type ClientResult<T> = Result<T, Error>;

const USER_AGENT_VALUE: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const NO_BODY: Option<&()> = None;

/// [GitHub REST authentication methods](https://docs.github.com/en/rest/overview/other-authentication-methods).
///
/// [HTTP authorization on MDN](https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Authorization).
///
pub trait Authentication {
    /// Encode authentication into HTTP authorization header.
    fn to_authz_value(&self) -> String;
}

#[derive(Debug)]
pub struct GhClient {
    config: ClientConfig,
    http: Client,
}

impl GhClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let headers = {
            let mut headers = HeaderMap::new();
            headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
            headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));
            headers
        };

        let http = ClientBuilder::new()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(Error::from_transport)?;

        let client = GhClient { config, http };
        debug!(?client);

        Ok(client)
    }

    /// Appends `segments` to the base URL path, each percent-encoded as exactly one segment.
    ///
    /// Empty, `.` and `..` segments are refused.
    fn build_url(&self, segments: &[&str]) -> ClientResult<Url> {
        if let Some(x) = segments.iter().find(|x| matches!(**x, "" | "." | "..")) {
            return Err(Error::InvalidName((*x).to_owned()));
        }
        let base_url = &self.config.base_url;
        let mut url = base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::BaseUrl(base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Url of the first and only page fetched from a list endpoint.
    fn build_page_url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.build_url(segments)?;
        url.query_pairs_mut()
            .append_pair("page", "1")
            .append_pair("per_page", &self.config.per_page.to_string());
        Ok(url)
    }

    /// Builds a request without sending it.
    ///
    /// `Content-type: application/json` goes on every request carrying a body, and on every GET.
    pub fn build_request<B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
        credential: Option<&dyn Authentication>,
    ) -> ClientResult<Request>
    where
        B: Serialize + ?Sized,
    {
        let declares_json = body.is_some() || method == Method::GET;
        let mut request = self.http.request(method, url);

        if let Some(credential) = credential {
            let mut authorization = HeaderValue::from_str(&credential.to_authz_value())?;
            authorization.set_sensitive(true);
            request = request.header(AUTHORIZATION, authorization);
        }

        if declares_json {
            request = request.header(CONTENT_TYPE, "application/json");
        }

        if let Some(body) = body {
            let body = serde_json::to_vec(body).map_err(Error::Serialize)?;
            request = request.body(body);
        }

        request.build().map_err(Error::from_transport)
    }

    /// Sends a request once, with no retry.
    pub async fn execute(&self, request: Request) -> ClientResult<Response> {
        debug!(?request, "sending request");
        let response = self.http.execute(request).await.map_err(Error::from_transport)?;
        debug!(?response, "received response");
        Ok(response)
    }

    async fn send<B, T>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
        credential: Option<&dyn Authentication>,
    ) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.build_request(method, url, body, credential)?;
        let response = self.execute(request).await?;
        decode(response).await
    }

    pub fn orgs(&self) -> GhOrgs<'_> {
        GhOrgs { client: self }
    }

    pub fn repos(&self) -> GhRepos<'_> {
        GhRepos { client: self }
    }

    pub fn users(&self) -> GhUsers<'_> {
        GhUsers { client: self }
    }
}

/// Reads the whole response body and decodes it.
///
/// The status code is not looked at beyond a warning.
pub async fn decode<T>(response: Response) -> ClientResult<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        warn!(%status, url = %response.url(), "decoding body of a non-success response");
    }
    let body = response.bytes().await.map_err(Error::from_transport)?;
    debug!(len = body.len(), "received response body");
    decode_body(&body)
}

pub fn decode_body<T>(body: &[u8]) -> ClientResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body).map_err(Error::Decode)
}

mod orgs {
    use super::*;
    use crate::github::responses::Profile;

    #[derive(Debug)]
    /// GitHub's organization resource.
    ///
    /// [GitHub Docs].
    ///
    /// [GitHub Docs]: https://docs.github.com/en/rest/orgs/orgs
    pub struct GhOrgs<'c> {
        pub client: &'c GhClient,
    }

    impl GhOrgs<'_> {
        /// Get an organization.
        ///
        /// [GitHub Docs].
        ///
        /// [GitHub Docs]: https://docs.github.com/en/rest/orgs/orgs#get-an-organization
        pub async fn get(&self, org: &str) -> ClientResult<Profile> {
            let url = self.client.build_url(&["orgs", org])?;
            self.client.send(Method::GET, url, NO_BODY, None).await
        }
    }
}

mod repos {
    use super::*;
    use crate::github::{
        requests::CreateRepository,
        responses::{CreateRepoResponse, Repository},
    };
    use reqwest::StatusCode;

    #[derive(Debug)]
    /// GitHub's repository resource.
    ///
    /// [GitHub Docs].
    ///
    /// [GitHub Docs]: https://docs.github.com/en/rest/repos/repos
    pub struct GhRepos<'c> {
        pub client: &'c GhClient,
    }

    impl GhRepos<'_> {
        /// Create a repository for the authenticated user.
        ///
        /// [GitHub Docs].
        ///
        /// [GitHub Docs]: https://docs.github.com/en/rest/repos/repos#create-a-repository-for-the-authenticated-user
        pub async fn create_for_authenticated_user(
            &self,
            token: &dyn Authentication,
            name: &str,
        ) -> ClientResult<CreateRepoResponse> {
            let url = self.client.build_url(&["user", "repos"])?;
            let body = CreateRepository { name };
            self.client.send(Method::POST, url, Some(&body), Some(token)).await
        }

        /// Create an organization repository.
        ///
        /// [GitHub Docs].
        ///
        /// [GitHub Docs]: https://docs.github.com/en/rest/repos/repos#create-an-organization-repository
        pub async fn create_in_organization(
            &self,
            token: &dyn Authentication,
            org: &str,
            name: &str,
        ) -> ClientResult<CreateRepoResponse> {
            let url = self.client.build_url(&["orgs", org, "repos"])?;
            let body = CreateRepository { name };
            self.client.send(Method::POST, url, Some(&body), Some(token)).await
        }

        /// Delete a repository. Anything but `204 No Content` is a failure, and its body is never
        /// decoded.
        ///
        /// [GitHub Docs].
        ///
        /// [GitHub Docs]: https://docs.github.com/en/rest/repos/repos#delete-a-repository
        pub async fn delete(
            &self,
            token: &dyn Authentication,
            owner: &str,
            repo: &str,
        ) -> ClientResult<()> {
            let url = self.client.build_url(&["repos", owner, repo])?;
            let request = self.client.build_request(Method::DELETE, url, NO_BODY, Some(token))?;
            let response = self.client.execute(request).await?;
            match response.status() {
                StatusCode::NO_CONTENT => Ok(()),
                status => Err(Error::UnexpectedStatus(status)),
            }
        }

        /// List public repositories for a user.
        ///
        /// [GitHub Docs].
        ///
        /// [GitHub Docs]: https://docs.github.com/en/rest/repos/repos#list-repositories-for-a-user
        pub async fn list_for_user(&self, user: &str) -> ClientResult<Vec<Repository>> {
            let url = self.client.build_page_url(&["users", user, "repos"])?;
            self.client.send(Method::GET, url, NO_BODY, None).await
        }

        /// List repositories for the authenticated user, private ones included.
        ///
        /// [GitHub Docs].
        ///
        /// [GitHub Docs]: https://docs.github.com/en/rest/repos/repos#list-repositories-for-the-authenticated-user
        pub async fn list_for_authenticated_user(
            &self,
            token: &dyn Authentication,
        ) -> ClientResult<Vec<Repository>> {
            let url = self.client.build_page_url(&["user", "repos"])?;
            self.client.send(Method::GET, url, NO_BODY, Some(token)).await
        }

        /// List organization repositories.
        ///
        /// [GitHub Docs].
        ///
        /// [GitHub Docs]: https://docs.github.com/en/rest/repos/repos#list-organization-repositories
        pub async fn list_for_organization(
            &self,
            org: &str,
            token: Option<&dyn Authentication>,
        ) -> ClientResult<Vec<Repository>> {
            let url = self.client.build_page_url(&["orgs", org, "repos"])?;
            self.client.send(Method::GET, url, NO_BODY, token).await
        }
    }
}

mod users {
    use super::*;
    use crate::github::responses::Profile;

    #[derive(Debug)]
    /// GitHub's user resource.
    ///
    /// [GitHub Docs].
    ///
    /// [GitHub Docs]: https://docs.github.com/en/rest/users/users
    pub struct GhUsers<'c> {
        pub client: &'c GhClient,
    }

    impl GhUsers<'_> {
        /// Get a user.
        ///
        /// [GitHub Docs].
        ///
        /// [GitHub Docs]: https://docs.github.com/en/rest/users/users#get-a-user
        pub async fn get(&self, user: &str) -> ClientResult<Profile> {
            let url = self.client.build_url(&["users", user])?;
            self.client.send(Method::GET, url, NO_BODY, None).await
        }
    }
}
