//! HTTP client for a TMDB-compatible movie catalog.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::config::{AuthType, CatalogConfig, CredentialStatus, SecureString};

use super::error::CatalogError;
use super::models::{MovieDetail, MovieId, MovieSummary, ResultsPage};
use super::{is_blank_query, CatalogApi};

const TRENDING_FAILED: &str = "Failed to fetch trending movies";
const SEARCH_FAILED: &str = "Failed to fetch search results";
const DETAIL_FAILED: &str = "Failed to fetch detailed movie information";

enum CatalogAuth {
    QueryKey(SecureString),
    Bearer(SecureString),
    None,
}

/// Read-only client for the remote catalog.
///
/// Every call is a single GET. Nothing is retried.
pub struct CatalogClient {
    client: Client,
    base_url: String,
    auth: CatalogAuth,
    trending_window: String,
    language: Option<String>,
}

impl CatalogClient {
    /// Build a client from config, resolving the credential up front.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Self::with_credential(config, config.resolve_credential())
    }

    /// Build a client with an already resolved credential.
    pub fn with_credential(
        config: &CatalogConfig,
        credential: CredentialStatus,
    ) -> Result<Self, CatalogError> {
        let auth = match (config.auth_type(), credential) {
            (_, CredentialStatus::NoAuth) | (AuthType::None, _) => CatalogAuth::None,
            (_, CredentialStatus::Unconfigured { reason }) => {
                return Err(CatalogError::NotConfigured { reason });
            }
            (AuthType::Bearer, CredentialStatus::Configured(token)) => CatalogAuth::Bearer(token),
            (AuthType::ApiKey, CredentialStatus::Configured(key)) => CatalogAuth::QueryKey(key),
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth,
            trending_window: config.trending_window.clone(),
            language: config.language.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(
        &self,
        path: &str,
        params: &[(&str, &str)],
        failure: &str,
    ) -> Result<Url, CatalogError> {
        let mut query: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 2);
        if let CatalogAuth::QueryKey(key) = &self.auth {
            query.push(("api_key", key.expose()));
        }
        if let Some(language) = self.language.as_deref() {
            query.push(("language", language));
        }
        query.extend_from_slice(params);

        Url::parse_with_params(&format!("{}{}", self.base_url, path), &query)
            .map_err(|e| CatalogError::remote(format!("{}: invalid URL: {}", failure, e), None))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        failure: &str,
    ) -> Result<T, CatalogError> {
        let url = self.endpoint(path, params, failure)?;

        // Only the path is logged; the query may carry the key.
        tracing::debug!(path = %path, "Sending catalog request");

        let start = Instant::now();
        let mut request = self.client.get(url);
        if let CatalogAuth::Bearer(token) = &self.auth {
            request = request.bearer_auth(token.expose());
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(path = %path, error = %e, "Catalog request failed to send");
            CatalogError::remote(format!("{}: {}", failure, e), None)
        })?;

        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::error!(
                path = %path,
                status = %status,
                latency_ms,
                error = %error_text,
                "Catalog API error"
            );

            return Err(CatalogError::remote(
                format!("{} (HTTP {})", failure, status.as_u16()),
                Some(status.as_u16()),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::remote(format!("{}: {}", failure, e), Some(status.as_u16())))?;

        tracing::debug!(path = %path, latency_ms, bytes = body.len(), "Catalog response received");

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(path = %path, error = %e, "Malformed catalog payload");
            CatalogError::remote(
                format!("{}: malformed response ({})", failure, e),
                Some(status.as_u16()),
            )
        })
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn trending(&self) -> Result<Vec<MovieSummary>, CatalogError> {
        let path = format!("/trending/movie/{}", self.trending_window);
        let page: ResultsPage = self.get_json(&path, &[], TRENDING_FAILED).await?;
        Ok(page.results)
    }

    async fn search(&self, term: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        if is_blank_query(term) {
            return Ok(Vec::new());
        }
        let page: ResultsPage = self
            .get_json("/search/movie", &[("query", term)], SEARCH_FAILED)
            .await?;
        Ok(page.results)
    }

    async fn movie(&self, id: MovieId) -> Result<MovieDetail, CatalogError> {
        let path = format!("/movie/{}", id);
        match self.get_json(&path, &[], DETAIL_FAILED).await {
            Err(CatalogError::RemoteFailure {
                status: Some(404), ..
            }) => Err(CatalogError::NotFound { id }),
            other => other,
        }
    }
}
