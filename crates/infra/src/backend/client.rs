//! Shared backend client
//!
//! Owns the HTTP client, the project endpoints and the session. Every request
//! carries the project key as `apikey` and a bearer token: the session's
//! access token when signed in, the project key otherwise.

use std::time::Duration;

use profilemap_domain::{BackendConfig, ProfileMapError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, RequestBuilder};
use url::Url;

use super::auth::RestAuthProvider;
use super::profiles::RestProfileTable;
use super::session::SessionState;
use crate::http::HttpClient;

#[derive(Clone)]
pub struct BackendClient {
    http: HttpClient,
    base_url: Url,
    anon_key: String,
    session: SessionState,
}

impl BackendClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    /// [`ProfileMapError::Config`] for an unusable URL or key.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.url)?;
        if config.anon_key.trim().is_empty() {
            return Err(ProfileMapError::Config("backend anon key is empty".to_string()));
        }

        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.anon_key)
            .map_err(|_| ProfileMapError::Config("backend anon key is not a valid header".to_string()))?;
        headers.insert("apikey", key);

        let mut builder = HttpClient::builder()
            .user_agent(concat!("profilemap/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            anon_key: config.anon_key.clone(),
            session: SessionState::new(),
        })
    }

    pub fn profile_table(&self) -> RestProfileTable {
        RestProfileTable::new(self.clone())
    }

    pub fn auth_provider(&self) -> RestAuthProvider {
        RestAuthProvider::new(self.clone())
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// `{base}/rest/v1/{table}`
    pub fn rest_url(&self, table: &str) -> Result<Url> {
        self.join(&format!("rest/v1/{table}"))
    }

    /// `{base}/auth/v1/{path}`
    pub fn auth_url(&self, path: &str) -> Result<Url> {
        self.join(&format!("auth/v1/{path}"))
    }

    /// Request with the session token (or the project key) as bearer.
    pub async fn authorized(&self, method: Method, url: Url) -> RequestBuilder {
        let token = self.session.access_token().await;
        self.with_bearer(method, url, token.as_deref().unwrap_or(&self.anon_key))
    }

    /// Request with an explicit bearer token.
    pub fn with_bearer(&self, method: Method, url: Url, token: &str) -> RequestBuilder {
        self.http.request(method, url).header(AUTHORIZATION, format!("Bearer {token}"))
    }

    /// Request with the project key as bearer, for the token endpoint.
    pub fn anonymous(&self, method: Method, url: Url) -> RequestBuilder {
        self.with_bearer(method, url, &self.anon_key)
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|err| ProfileMapError::Config(format!("invalid backend path '{path}': {err}")))
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let with_slash =
        if trimmed.ends_with('/') { trimmed.to_string() } else { format!("{trimmed}/") };
    let url = Url::parse(&with_slash)
        .map_err(|err| ProfileMapError::Config(format!("invalid backend url '{raw}': {err}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ProfileMapError::Config(format!("backend url must be http(s): {raw}")));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> BackendConfig {
        BackendConfig { url: url.into(), anon_key: "anon".into(), request_timeout_secs: None }
    }

    #[test]
    fn joins_paths_under_base() {
        let client = BackendClient::new(&config("https://project.example.co")).unwrap();
        assert_eq!(
            client.rest_url("profiles").unwrap().as_str(),
            "https://project.example.co/rest/v1/profiles"
        );
        assert_eq!(client.auth_url("user").unwrap().as_str(), "https://project.example.co/auth/v1/user");
    }

    #[test]
    fn keeps_base_path_prefix() {
        let client = BackendClient::new(&config("http://localhost:54321/proxy")).unwrap();
        assert_eq!(
            client.rest_url("profiles").unwrap().as_str(),
            "http://localhost:54321/proxy/rest/v1/profiles"
        );
    }

    #[test]
    fn rejects_bad_configuration() {
        assert!(matches!(BackendClient::new(&config("not a url")), Err(ProfileMapError::Config(_))));
        assert!(matches!(BackendClient::new(&config("ftp://host")), Err(ProfileMapError::Config(_))));

        let mut empty_key = config("https://project.example.co");
        empty_key.anon_key = " ".into();
        assert!(matches!(BackendClient::new(&empty_key), Err(ProfileMapError::Config(_))));
    }
}
