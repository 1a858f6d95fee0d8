use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header::AUTHORIZATION};
use tokio::sync::Mutex;

use crate::{
    config::Config,
    error::{Error, Result},
    types::{AccessToken, TokenResponse},
};

/// Owns the access-token lifecycle for the client-credentials flow.
///
/// The guard holds at most one token. It is refreshed lazily: callers invoke
/// [`TokenGuard::ensure_valid`] right before dispatching a request, and a
/// missing or expired token triggers a new exchange at that point. There is
/// no background refresh timer.
///
/// # Concurrency
///
/// The token lives behind an async mutex that stays locked for the whole
/// exchange. When several concurrently launched requests observe an expired
/// token, the first one performs the exchange and the others wait on the
/// lock, then reuse the fresh token instead of authenticating again.
pub struct TokenGuard {
    http: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    token: Mutex<Option<AccessToken>>,
}

impl TokenGuard {
    pub fn new(config: &Config, http: Client) -> Self {
        Self {
            http,
            token_url: config.token_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            token: Mutex::new(None),
        }
    }

    /// Performs a client-credentials exchange and stores the resulting token,
    /// replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`] when the token endpoint cannot be reached or
    /// answers with a non-success status, and [`Error::MalformedResponse`]
    /// when the body lacks `access_token` or `expires_in`. An `expires_in`
    /// too large to represent is an [`Error::Auth`] as well. No retry is made.
    pub async fn authenticate(&self) -> Result<()> {
        let mut lock = self.token.lock().await;
        *lock = Some(self.exchange().await?);
        Ok(())
    }

    /// Returns a bearer token that is not expired, authenticating first when
    /// no token exists yet or the stored one has expired.
    pub async fn ensure_valid(&self) -> Result<String> {
        let mut lock = self.token.lock().await;
        if let Some(token) = lock.as_ref() {
            if !token.is_expired() {
                return Ok(token.token.clone());
            }
            log::debug!("Access token expired at {}, refreshing", token.expires_at);
        }

        let token = self.exchange().await?;
        let bearer = token.token.clone();
        *lock = Some(token);
        Ok(bearer)
    }

    async fn exchange(&self) -> Result<AccessToken> {
        let credentials = STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret));

        log::debug!("Requesting access token from {}", self.token_url);
        let response = self
            .http
            .post(&self.token_url)
            .header(AUTHORIZATION, format!("Basic {}", credentials))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| Error::Auth(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Auth(format!(
                "token endpoint {} returned {}",
                self.token_url, status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Auth(e.to_string()))?;
        let json: TokenResponse =
            serde_json::from_str(&body).map_err(|source| Error::MalformedResponse {
                url: self.token_url.clone(),
                source,
            })?;

        AccessToken::new(json.access_token, json.expires_in)
    }
}
