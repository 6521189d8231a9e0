use super::SourceFetcher;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Fetches sources over HTTP, relative to a base URL such as
/// `https://example.org/data/`.
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, name: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let name = name.trim_start_matches('/');
        format!("{}/{}", base, name)
    }
}

#[async_trait]
impl SourceFetcher for HttpFetcher {
    async fn fetch(&self, name: &str) -> Result<String> {
        let url = self.url_for(name);
        tracing::debug!(%url, "fetching source");
        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }

    fn locate(&self, name: &str) -> String {
        self.url_for(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{load, LoadOptions, LoadingSignal, SourceStatus};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio_util::sync::CancellationToken;

    /// Serves `/ok.json` with one profile and answers 404 for anything else.
    async fn serve_profiles() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let (mut socket, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                tokio::spawn(async move {
                    let mut request = Vec::new();
                    let mut buf = [0u8; 1024];
                    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut buf).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => request.extend_from_slice(&buf[..n]),
                        }
                    }
                    let request = String::from_utf8_lossy(&request);
                    let (status, body) = if request.starts_with("GET /ok.json ") {
                        ("200 OK", r#"[{"name": "Ada", "skills": ["Math"]}]"#)
                    } else {
                        ("404 Not Found", "not here")
                    };
                    let response = format!(
                        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });
        format!("http://{}", addr)
    }

    fn local_fetcher(base_url: String) -> HttpFetcher {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpFetcher::with_client(client, base_url)
    }

    #[tokio::test]
    async fn test_fetches_body_over_http() {
        let fetcher = local_fetcher(serve_profiles().await);
        let body = fetcher.fetch("ok.json").await.unwrap();
        assert!(body.contains("Ada"));
    }

    #[tokio::test]
    async fn test_not_found_fails_only_that_source() {
        let fetcher = local_fetcher(serve_profiles().await);
        let names: Vec<String> = vec!["gone.json".into(), "ok.json".into()];
        let outcome = load(
            &fetcher,
            &names,
            &LoadOptions::default(),
            &LoadingSignal::new(),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

        assert_eq!(outcome.directory.len(), 1);
        assert_eq!(outcome.directory[0].name, "Ada");
        match &outcome.report.sources[0].status {
            SourceStatus::Failed(reason) => assert!(reason.contains("404"), "{reason}"),
            other => panic!("unexpected status: {:?}", other),
        }
        assert_eq!(outcome.report.sources[1].status, SourceStatus::Loaded(1));
        assert!(outcome.report.sources[0].location.ends_with("/gone.json"));
    }

    #[test]
    fn test_joins_base_and_name_with_one_slash() {
        let fetcher = HttpFetcher::new("https://example.org/data/");
        assert_eq!(fetcher.locate("a.json"), "https://example.org/data/a.json");

        let fetcher = HttpFetcher::new("https://example.org/data");
        assert_eq!(fetcher.locate("/b.json"), "https://example.org/data/b.json");
    }
}
