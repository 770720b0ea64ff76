//! HTTP implementation of [`CartApi`] using reqwest.
//!
//! Non-2xx responses become [`CartError::Status`]; bodies are decoded with
//! serde_json so an empty body (common for DELETE) reads as `null`.

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::CartApi;
use crate::config::ClientConfig;
use crate::error::{CartError, Result};
use crate::model::{CartItem, InventoryItem, ItemId, QuantityUpdate};

/// Cart backend reached over HTTP.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpCartApi {
    client: Client,
    base: Url,
}

impl HttpCartApi {
    /// Client for the backend at `base_url` with no request timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(base_url, Client::new())
    }

    /// Client built from configuration (base URL and optional timeout).
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Self::with_client(config.origin(), builder.build()?)
    }

    /// Use a caller-supplied reqwest client.
    pub fn with_client(base_url: &str, client: Client) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| CartError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(CartError::InvalidUrl {
                url: base_url.to_string(),
                reason: "cannot be a base".into(),
            });
        }
        Ok(Self { client, base })
    }

    /// Join path segments onto the base URL, percent-encoding each segment.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // cannot_be_a_base was rejected in the constructor
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<Value>,
    ) -> Result<T> {
        let url = self.url(segments);
        tracing::debug!(%method, %url, "cart api request");

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%method, %url, %status, "cart api error status");
            return Err(CartError::Status {
                method: method.to_string(),
                path: url.path().to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &bytes
        };
        Ok(serde_json::from_slice(body)?)
    }
}

#[async_trait]
impl CartApi for HttpCartApi {
    async fn fetch_inventory(&self) -> Result<Vec<InventoryItem>> {
        self.call(Method::GET, &["inventory"], None).await
    }

    async fn fetch_cart(&self) -> Result<Vec<CartItem>> {
        self.call(Method::GET, &["cart"], None).await
    }

    async fn add_to_cart(&self, item: &CartItem) -> Result<CartItem> {
        let body = serde_json::to_value(item)?;
        self.call(Method::POST, &["cart"], Some(body)).await
    }

    async fn update_cart_item(&self, id: &ItemId, quantity: u32) -> Result<Value> {
        let body = serde_json::to_value(QuantityUpdate { quantity })?;
        self.call(Method::PUT, &["cart", &id.as_text()], Some(body))
            .await
    }

    async fn delete_cart_item(&self, id: &ItemId) -> Result<Value> {
        self.call(Method::DELETE, &["cart", &id.as_text()], None)
            .await
    }

    async fn checkout_cart(&self) -> Result<Value> {
        self.call(Method::DELETE, &["cart"], None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_segments_onto_base() {
        let api = HttpCartApi::new("http://localhost:3000").unwrap();
        assert_eq!(
            api.url(&["cart", "7"]).as_str(),
            "http://localhost:3000/cart/7"
        );
        assert_eq!(
            api.url(&["inventory"]).as_str(),
            "http://localhost:3000/inventory"
        );
    }

    #[test]
    fn keeps_base_path_prefix() {
        let api = HttpCartApi::new("http://localhost:3000/api/").unwrap();
        assert_eq!(
            api.url(&["cart", "a b"]).as_str(),
            "http://localhost:3000/api/cart/a%20b"
        );
    }

    #[test]
    fn rejects_unusable_base() {
        assert!(matches!(
            HttpCartApi::new("not a url"),
            Err(CartError::InvalidUrl { .. })
        ));
        assert!(matches!(
            HttpCartApi::new("mailto:shop@example.com"),
            Err(CartError::InvalidUrl { .. })
        ));
    }
}
