use crate::{
    abstract_trait::auth::TokenProviderTrait,
    config::ServiceAccountKey,
    domain::responses::TokenResponse,
    errors::AuthError,
    utils::{mask_email, mask_token},
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// Exchanges a signed service-account assertion for an OAuth access token.
/// The key file is read on every call; nothing is cached.
pub struct ServiceAccountTokenProvider {
    http: reqwest::Client,
    key_file: PathBuf,
    scope: String,
}

impl ServiceAccountTokenProvider {
    pub fn new(http: reqwest::Client, key_file: PathBuf, scope: String) -> Self {
        Self {
            http,
            key_file,
            scope,
        }
    }

    pub fn sign_assertion(
        key: &ServiceAccountKey,
        scope: &str,
        issued_at: i64,
    ) -> Result<String, AuthError> {
        let claims = AssertionClaims {
            iss: key.client_email.clone(),
            scope: scope.to_string(),
            aud: key.token_uri.clone(),
            iat: issued_at,
            exp: issued_at + ASSERTION_LIFETIME_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = key.private_key_id.clone();

        let encoding_key =
            EncodingKey::from_rsa_pem(key.private_key.as_bytes()).map_err(AuthError::InvalidKey)?;

        encode(&header, &claims, &encoding_key).map_err(AuthError::Signing)
    }
}

fn body_or_read_error<E: std::fmt::Display>(body: Result<String, E>) -> String {
    body.unwrap_or_else(|e| {
        error!("❌ Failed to read token error body: {e}");
        format!("<unreadable body: {e}>")
    })
}

#[async_trait]
impl TokenProviderTrait for ServiceAccountTokenProvider {
    async fn access_token(&self) -> Result<String, AuthError> {
        let key = ServiceAccountKey::from_file(&self.key_file)
            .await
            .inspect_err(|e| error!("❌ Failed to load service account key: {e}"))?;

        info!(
            "🔐 Requesting access token for {} from {}",
            mask_email(&key.client_email),
            key.token_uri
        );

        let assertion = Self::sign_assertion(&key, &self.scope, Utc::now().timestamp())?;

        let response = self
            .http
            .post(&key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .inspect_err(|e| error!("❌ Token endpoint unreachable: {e:?}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = body_or_read_error(response.text().await);
            error!("❌ Token request rejected with {status}: {body}");
            return Err(AuthError::TokenRejected {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = response.json().await?;

        info!(
            "✅ Access token issued ({}, expires in {:?}s)",
            mask_token(&token.access_token),
            token.expires_in
        );

        Ok(token.access_token)
    }
}
