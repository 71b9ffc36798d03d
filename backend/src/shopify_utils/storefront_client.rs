//! HTTP client for the storefront GraphQL endpoint.

use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

const DEFAULT_API_VERSION: &str = "2025-01";

#[derive(Clone)]
pub struct StorefrontConfig {
    pub store_domain: String,
    pub access_token: String,
    pub api_version: String,
}

impl StorefrontConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            store_domain: std::env::var("SHOPIFY_STORE_DOMAIN").context("SHOPIFY_STORE_DOMAIN is not set")?,
            access_token: std::env::var("SHOPIFY_STOREFRONT_ACCESS_TOKEN")
                .context("SHOPIFY_STOREFRONT_ACCESS_TOKEN is not set")?,
            api_version: std::env::var("SHOPIFY_API_VERSION").unwrap_or(DEFAULT_API_VERSION.to_string()),
        })
    }

    pub fn endpoint(&self) -> String {
        let domain = self.store_domain.trim_end_matches('/');
        if domain.starts_with("http://") || domain.starts_with("https://") {
            format!("{}/api/{}/graphql.json", domain, self.api_version)
        } else {
            format!("https://{}/api/{}/graphql.json", domain, self.api_version)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Clone)]
pub struct StorefrontClient {
    config: StorefrontConfig,
    http: reqwest::Client,
}

pub fn get_storefront_client() -> anyhow::Result<StorefrontClient> {
    Ok(StorefrontClient::new(StorefrontConfig::from_env()?))
}

impl StorefrontClient {
    pub fn new(config: StorefrontConfig) -> Self {
        Self { config, http: reqwest::Client::new() }
    }

    /// Runs one GraphQL operation and returns its `data` member.
    pub async fn graphql<T: DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> anyhow::Result<T> {
        let t0 = std::time::Instant::now();
        let body = serde_json::to_string(&serde_json::json!({
            "query": query,
            "variables": variables,
        }))?;
        let response = self
            .http
            .post(self.config.endpoint())
            .header("Content-Type", "application/json")
            .header("X-Shopify-Storefront-Access-Token", &self.config.access_token)
            .body(body)
            .send()
            .await
            .with_context(|| format!("storefront request {operation} failed"))?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("{operation}: {}: {}", status, response_txt);
        }
        let dt_ms = t0.elapsed().as_millis();
        tracing::debug!("storefront {operation}: {} bytes in {}ms", response_txt.len(), dt_ms);

        let response: GraphqlResponse<T> = serde_json::from_str(&response_txt)
            .with_context(|| format!("{operation}: unexpected response shape"))?;
        if !response.errors.is_empty() {
            let messages = response.errors.into_iter().map(|e| e.message).collect::<Vec<_>>();
            anyhow::bail!("{operation}: {}", messages.join("; "));
        }
        response.data.with_context(|| format!("{operation}: response has no data"))
    }
}
