//! Upstream CSV access.
//!
//! `CsvSource` is the seam between ingestion and the network. The production implementation
//! talks to the published spreadsheet; tests supply in-memory sources.

use std::future::Future;

use reqwest::Client;

use crate::config::CoreConfig;
use crate::{IngestError, IngestResult};

/// Something that can return the CSV text of a named sheet.
pub trait CsvSource: Send + Sync + 'static {
    fn fetch_csv(&self, sheet: &str) -> impl Future<Output = IngestResult<String>> + Send;
}

/// Fetches sheets from the published spreadsheet over HTTP.
///
/// Each fetch is bounded by the configured timeout; on expiry the request is dropped and
/// `IngestError::Timeout` is returned.
#[derive(Clone, Debug)]
pub struct SheetsCsvSource {
    client: Client,
    cfg: CoreConfig,
}

impl SheetsCsvSource {
    pub fn new(cfg: CoreConfig) -> IngestResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("daycare-core/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(IngestError::ClientBuild)?;
        Ok(Self::with_client(client, cfg))
    }

    /// Uses an existing client, sharing its connection pool.
    pub fn with_client(client: Client, cfg: CoreConfig) -> Self {
        Self { client, cfg }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    async fn fetch_unbounded(&self, sheet: &str) -> IngestResult<String> {
        let url = self.cfg.sheet_csv_url(sheet)?;
        tracing::debug!(%url, "fetching sheet csv");

        let resp = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(IngestError::Request)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(IngestError::UpstreamStatus(status.as_u16()));
        }

        resp.text().await.map_err(IngestError::Body)
    }
}

impl CsvSource for SheetsCsvSource {
    async fn fetch_csv(&self, sheet: &str) -> IngestResult<String> {
        let timeout = self.cfg.fetch_timeout();
        match tokio::time::timeout(timeout, self.fetch_unbounded(sheet)).await {
            Ok(result) => result,
            Err(_) => Err(IngestError::Timeout(timeout)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use url::Url;

    /// Serves one canned HTTP response per connection and returns the base URL.
    async fn serve_canned(response: Option<String>) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let response = response.clone();
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 4096];
                    let _ = socket.read(&mut buf).await;
                    match response {
                        Some(resp) => {
                            let _ = socket.write_all(resp.as_bytes()).await;
                            let _ = socket.shutdown().await;
                        }
                        // hold the connection open without answering
                        None => tokio::time::sleep(Duration::from_secs(30)).await,
                    }
                });
            }
        });
        Url::parse(&format!("http://{addr}/d")).expect("url")
    }

    fn source(base: Url, timeout: Duration) -> SheetsCsvSource {
        let cfg = CoreConfig::new("doc-1".into(), "課程表".into(), base, timeout).expect("config");
        let client = Client::builder().no_proxy().build().expect("client");
        SheetsCsvSource::with_client(client, cfg)
    }

    #[tokio::test]
    async fn test_fetch_csv_returns_body_on_success() {
        let body = "週幾,時段\n週一,上午\n";
        let resp = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/csv; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let base = serve_canned(Some(resp)).await;
        let text = source(base, Duration::from_secs(5))
            .fetch_csv("課程表")
            .await
            .expect("fetch");
        assert_eq!(text, body);
    }

    #[tokio::test]
    async fn test_fetch_csv_maps_non_success_status() {
        let resp =
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string();
        let base = serve_canned(Some(resp)).await;
        let err = source(base, Duration::from_secs(5))
            .fetch_csv("missing")
            .await
            .expect_err("should fail");
        assert!(matches!(err, IngestError::UpstreamStatus(404)));
    }

    #[tokio::test]
    async fn test_fetch_csv_times_out_on_silent_upstream() {
        let base = serve_canned(None).await;
        let err = source(base, Duration::from_millis(200))
            .fetch_csv("課程表")
            .await
            .expect_err("should time out");
        assert!(matches!(err, IngestError::Timeout(d) if d == Duration::from_millis(200)));
    }

    #[tokio::test]
    async fn test_fetch_csv_reports_connection_failure() {
        // bind then drop to get a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let base = Url::parse(&format!("http://{addr}/d")).expect("url");
        let err = source(base, Duration::from_secs(5))
            .fetch_csv("課程表")
            .await
            .expect_err("should fail");
        assert!(matches!(err, IngestError::Request(_)));
    }
}
