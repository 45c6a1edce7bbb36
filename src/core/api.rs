use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::core::model::{SearchRequest, SearchResponse};

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let url = format!("{}/api/search", self.base_url);
        debug!("POST {} ({:?})", url, request.mode);

        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        if !resp.status().is_success() {
            anyhow::bail!("Search failed: {}", resp.status());
        }

        let body: SearchResponse = resp.json().await.context("Malformed search response")?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Mode, Preference};
    use mockito::Matcher;
    use serde_json::json;

    fn request() -> SearchRequest {
        SearchRequest {
            query: "laptop under 50k".to_string(),
            mode: Mode::Search,
            preference: Some(Preference::BestValue),
        }
    }

    #[tokio::test]
    async fn test_search_posts_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/search")
            .match_body(Matcher::Json(json!({
                "query": "laptop under 50k",
                "mode": "search",
                "preference": "best_value"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "summary": "Found 1 products",
                    "products": [{
                        "name": "HP Pavilion 14",
                        "price": "48,500",
                        "rating": 4.5,
                        "specifications": ["AMD Ryzen 5"],
                        "link": "#",
                        "image": ""
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let url = format!("{}/", server.url());
        let client = ApiClient::new(&url, Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), server.url());

        let resp = client.search(&request()).await.unwrap();
        mock.assert_async().await;
        assert_eq!(resp.products.len(), 1);
        assert_eq!(resp.products[0].name, "HP Pavilion 14");
        assert_eq!(resp.summary.as_deref(), Some("Found 1 products"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/search")
            .with_status(500)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url(), Duration::from_secs(5)).unwrap();
        let err = client.search(&request()).await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }
}
