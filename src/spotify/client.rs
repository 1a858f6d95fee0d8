use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::{Error, Result},
    spotify::auth::TokenGuard,
};

/// Authenticated access to the Spotify Web API.
///
/// Every request first goes through [`TokenGuard::ensure_valid`] and is then
/// sent as a GET with a bearer token. Non-success statuses are surfaced as
/// [`Error::Api`] and never retried. The endpoint methods live in the
/// [`playlist`](super::playlist) and [`artists`](super::artists) modules.
pub struct CatalogClient {
    http: Client,
    api_url: String,
    auth: TokenGuard,
}

impl CatalogClient {
    pub fn new(config: &Config) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Builds a client that shares `http` between the token guard and the
    /// API requests.
    pub fn with_http_client(config: &Config, http: Client) -> Self {
        Self {
            auth: TokenGuard::new(config, http.clone()),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn auth(&self) -> &TokenGuard {
        &self.auth
    }

    /// Sends an authenticated GET to `{api_url}{path}` and decodes the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let token = self.auth.ensure_valid().await?;
        let url = format!("{}{}", self.api_url, path);

        log::debug!("GET {} {:?}", url, query);
        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| Error::MalformedResponse { url, source })
    }
}
