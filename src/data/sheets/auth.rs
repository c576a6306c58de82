//! Google service account authentication.
//!
//! Signs a short-lived RS256 assertion with the service account key and exchanges it at
//! Google's OAuth token endpoint for a bearer token. Tokens are cached and shared by
//! every clone of [`ServiceAccountAuth`] until shortly before they expire.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{
    config::GoogleCredentials,
    error::{sheets::SheetsError, AppError},
};

pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for each assertion, Google caps it at one hour.
const ASSERTION_LIFETIME_SECONDS: i64 = 3600;

/// Tokens are refreshed this long before Google says they expire.
const REFRESH_MARGIN_SECONDS: i64 = 60;

#[derive(Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Clone)]
struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(REFRESH_MARGIN_SECONDS) < self.expires_at
    }
}

/// Bearer token provider for a Google service account.
#[derive(Clone)]
pub struct ServiceAccountAuth {
    http: reqwest::Client,
    client_email: String,
    key: EncodingKey,
    token_url: String,
    /// Cached token shared between clones.
    token: Arc<RwLock<Option<AccessToken>>>,
}

impl ServiceAccountAuth {
    /// Creates a provider from service account credentials.
    ///
    /// No network call is made, the first token is requested lazily.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `credentials` - Service account email and PEM private key
    ///
    /// # Returns
    /// - `Ok(ServiceAccountAuth)` - Key parsed successfully
    /// - `Err(SheetsError::InvalidPrivateKey)` - Key is not a usable RSA PEM key
    pub fn new(
        http: reqwest::Client,
        credentials: &GoogleCredentials,
    ) -> Result<Self, SheetsError> {
        let key = EncodingKey::from_rsa_pem(credentials.private_key.as_bytes())
            .map_err(SheetsError::InvalidPrivateKey)?;

        Ok(Self {
            http,
            client_email: credentials.client_email.clone(),
            key,
            token_url: GOOGLE_TOKEN_URL.to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Points the provider at a different token endpoint.
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// Returns a bearer token, requesting a new one when the cached token is missing or
    /// about to expire.
    ///
    /// # Returns
    /// - `Ok(String)` - Access token to send as `Authorization: Bearer`
    /// - `Err(AppError::SheetsErr(TokenRequest))` - Google refused the assertion
    /// - `Err(AppError::ReqwestErr)` - Transport failure or malformed response
    pub async fn access_token(&self) -> Result<String, AppError> {
        if let Some(token) = self.token.read().await.as_ref() {
            if token.is_fresh(Utc::now()) {
                return Ok(token.value.clone());
            }
        }

        let mut cached = self.token.write().await;

        // Another caller may have refreshed while we waited for the lock
        if let Some(token) = cached.as_ref() {
            if token.is_fresh(Utc::now()) {
                return Ok(token.value.clone());
            }
        }

        let token = self.request_token().await?;
        let value = token.value.clone();
        *cached = Some(token);

        Ok(value)
    }

    async fn request_token(&self) -> Result<AccessToken, AppError> {
        let now = Utc::now();
        let claims = AssertionClaims {
            iss: &self.client_email,
            scope: SPREADSHEETS_SCOPE,
            aud: &self.token_url,
            iat: now.timestamp(),
            exp: now.timestamp() + ASSERTION_LIFETIME_SECONDS,
        };

        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &self.key)
            .map_err(SheetsError::SignAssertion)?;

        tracing::debug!("Requesting Google access token for {}", self.client_email);

        let response = self
            .http
            .post(&self.token_url)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::TokenRequest { status, body }.into());
        }

        let token: TokenResponse = response.json().await?;

        Ok(AccessToken {
            value: token.access_token,
            expires_at: now + Duration::seconds(token.expires_in),
        })
    }
}
