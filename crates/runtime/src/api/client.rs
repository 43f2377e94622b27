//! HTTP client for the remote dashboard endpoint.
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use dashboard_core::{Dataset, Filters};

use super::errors::{LoadError, Result};
use super::loader::{DashboardData, DataLoader};
use crate::config::ApiConfig;

/// Request body accepted by the `/dashboard` endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardRequest<'a> {
    dataset: Dataset,
    filters: &'a Filters,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
}

/// Loader that POSTs the current dataset and filters to the dashboard API.
///
/// Every failure (transport, timeout, non-2xx status, undecodable body) is
/// returned as a [`LoadError`]; wrap the client in a
/// [`FallbackLoader`](super::FallbackLoader) to turn those into bundled data.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    page_size: Option<u32>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            page_size: config.page_size,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/dashboard", self.base_url)
    }
}

#[async_trait(?Send)]
impl DataLoader for ApiClient {
    async fn load(&self, dataset: Dataset, filters: &Filters) -> Result<DashboardData> {
        let body = DashboardRequest {
            dataset,
            filters,
            page: self.page_size.map(|_| 1),
            page_size: self.page_size,
        };
        let url = self.endpoint();

        tracing::debug!(%url, %dataset, ?filters, "requesting dashboard data");

        let request = self.http_client.post(&url).json(&body).send();
        let response = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| LoadError::Timeout(self.timeout))?
            .map_err(LoadError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(LoadError::Transport)?;
        serde_json::from_str(&text).map_err(LoadError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    /// Serves exactly one canned HTTP response and returns the request text.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let mut request = String::new();
            loop {
                let read = socket.read(&mut buf).await.unwrap();
                request.push_str(&String::from_utf8_lossy(&buf[..read]));
                if read == 0 || request_complete(&request) {
                    break;
                }
            }
            let response = format!(
                "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });

        (base_url, server)
    }

    fn request_complete(request: &str) -> bool {
        let Some((head, body)) = request.split_once("\r\n\r\n") else {
            return false;
        };
        let length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())?
            })
            .unwrap_or(0);
        body.len() >= length
    }

    fn client(base_url: String, page_size: Option<u32>) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url,
            timeout: Duration::from_secs(5),
            page_size,
            offline: false,
        })
    }

    #[tokio::test]
    async fn posts_dataset_and_filters_and_decodes_payload() {
        let (base_url, server) = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"summary": {"procedures": 12}, "series": [{"label": "Jan", "actual": 1, "target": 2}], "records": []}"#,
        )
        .await;

        let mut filters = Filters::new();
        filters.insert("team".into(), "Team 1".into());
        let data = client(base_url, Some(25))
            .load(Dataset::Surgical, &filters)
            .await
            .unwrap();

        assert_eq!(data.series.len(), 1);
        assert_eq!(data.summary.unwrap().dataset(), Dataset::Surgical);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /dashboard "));
        assert!(request.contains(r#""dataset":"surgical""#));
        assert!(request.contains(r#""filters":{"team":"Team 1"}"#));
        assert!(request.contains(r#""pageSize":25"#));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (base_url, server) = serve_once("HTTP/1.1 503 Service Unavailable", "{}").await;

        let error = client(base_url, None)
            .load(Dataset::Ambulatory, &Filters::new())
            .await
            .unwrap_err();
        assert!(matches!(error, LoadError::Status { status: 503 }));

        let request = server.await.unwrap();
        assert!(!request.contains("pageSize"));
    }

    #[tokio::test]
    async fn null_payload_is_a_decode_error() {
        let (base_url, _server) = serve_once("HTTP/1.1 200 OK", "null").await;

        let error = client(base_url, None)
            .load(Dataset::Ambulatory, &Filters::new())
            .await
            .unwrap_err();
        assert!(matches!(error, LoadError::Decode(_)));
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let client = client("http://localhost:9000/".into(), None);
        assert_eq!(client.endpoint(), "http://localhost:9000/dashboard");
    }
}
