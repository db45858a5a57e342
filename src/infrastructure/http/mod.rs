//! Upstream HTTP transport behind a mockable seam

use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::domain::DomainError;

/// Raw byte stream of an upstream streaming response body.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, DomainError>> + Send>>;

/// Transport operations the gateway needs, kept narrow so tests can script
/// upstream behavior without a network.
#[async_trait]
pub trait HttpClientTrait: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        bearer_token: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError>;

    async fn post_json_stream(
        &self,
        url: &str,
        bearer_token: &str,
        body: &serde_json::Value,
    ) -> Result<ByteStream, DomainError>;
}

/// reqwest-backed transport. The configured timeout bounds the whole
/// non-streaming call and the time to the first frame of a streaming call;
/// a healthy stream may then run for as long as the model keeps talking.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpClient {
    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, timeout })
    }

    async fn send(
        &self,
        url: &str,
        bearer_token: &str,
        body: &serde_json::Value,
        timeout: Option<Duration>,
    ) -> Result<reqwest::Response, DomainError> {
        let mut request = self.client.post(url).bearer_auth(bearer_token).json(body);
        if let Some(limit) = timeout {
            request = request.timeout(limit);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::provider(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::provider(format!("HTTP {status}: {error_body}")));
        }

        Ok(response)
    }
}

/// Bound only the first poll of a byte stream. A timeout yields one terminal
/// error item; after the first frame has arrived the stream is unbounded.
fn bound_first_frame(bytes: ByteStream, limit: Duration) -> ByteStream {
    use futures::{stream, StreamExt};

    Box::pin(stream::unfold(
        (bytes, Some(limit)),
        |(mut bytes, first)| async move {
            match first {
                Some(limit) => match tokio::time::timeout(limit, bytes.next()).await {
                    Ok(item) => item.map(|item| (item, (bytes, None))),
                    Err(_) => Some((
                        Err(DomainError::provider(
                            "Timed out waiting for the first stream frame",
                        )),
                        (Box::pin(stream::empty()) as ByteStream, None),
                    )),
                },
                None => bytes.next().await.map(|item| (item, (bytes, None))),
            }
        },
    ))
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_json(
        &self,
        url: &str,
        bearer_token: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError> {
        self.send(url, bearer_token, body, Some(self.timeout))
            .await?
            .json()
            .await
            .map_err(|e| DomainError::provider(format!("Failed to parse response: {e}")))
    }

    async fn post_json_stream(
        &self,
        url: &str,
        bearer_token: &str,
        body: &serde_json::Value,
    ) -> Result<ByteStream, DomainError> {
        use futures::StreamExt;

        // One timeout budget covers getting the response open plus the first
        // body frame, never the lifetime of a healthy stream.
        let started = tokio::time::Instant::now();
        let response = tokio::time::timeout(self.timeout, self.send(url, bearer_token, body, None))
            .await
            .map_err(|_| DomainError::provider("Timed out opening streaming response"))??;

        let stream = response
            .bytes_stream()
            .map(|result| result.map_err(|e| DomainError::provider(format!("Stream error: {e}"))));

        let remaining = self.timeout.saturating_sub(started.elapsed());
        Ok(bound_first_frame(Box::pin(stream), remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{stream, StreamExt};

    #[tokio::test(start_paused = true)]
    async fn test_first_frame_timeout_yields_single_error() {
        let bytes: ByteStream = Box::pin(stream::pending::<Result<Bytes, DomainError>>());
        let mut bounded = bound_first_frame(bytes, Duration::from_secs(5));

        let first = bounded.next().await.unwrap();
        assert!(first.is_err());
        assert!(bounded.next().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stream_unbounded_after_first_frame() {
        // A slow but healthy stream must not be cut once the first frame
        // has arrived, no matter how long the model keeps talking.
        let head = stream::iter(vec![Ok::<Bytes, DomainError>(Bytes::from("first"))]);
        let tail = stream::once(async {
            tokio::time::sleep(Duration::from_secs(600)).await;
            Ok::<Bytes, DomainError>(Bytes::from("late"))
        });
        let mut bounded =
            bound_first_frame(Box::pin(head.chain(tail)), Duration::from_secs(5));

        assert_eq!(bounded.next().await.unwrap().unwrap(), Bytes::from("first"));
        assert_eq!(bounded.next().await.unwrap().unwrap(), Bytes::from("late"));
        assert!(bounded.next().await.is_none());
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use futures::stream;
    use std::sync::Mutex;

    enum Scripted {
        Response(serde_json::Value),
        StreamChunks(Vec<Bytes>),
        StreamChunksThenError(Vec<Bytes>, String),
        Error(String),
    }

    /// Scripted transport that also records outbound request bodies so
    /// gateway tests can assert on what was sent upstream.
    pub struct MockHttpClient {
        script: Scripted,
        pub requests: Mutex<Vec<serde_json::Value>>,
    }

    impl MockHttpClient {
        pub fn with_response(response: serde_json::Value) -> Self {
            Self {
                script: Scripted::Response(response),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn with_stream_chunks(chunks: Vec<&str>) -> Self {
            Self {
                script: Scripted::StreamChunks(
                    chunks.into_iter().map(|c| Bytes::from(c.to_string())).collect(),
                ),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn with_stream_chunks_then_error(chunks: Vec<&str>, error: impl Into<String>) -> Self {
            Self {
                script: Scripted::StreamChunksThenError(
                    chunks.into_iter().map(|c| Bytes::from(c.to_string())).collect(),
                    error.into(),
                ),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn with_error(error: impl Into<String>) -> Self {
            Self {
                script: Scripted::Error(error.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn last_request(&self) -> Option<serde_json::Value> {
            self.requests.lock().unwrap().last().cloned()
        }

        fn record(&self, body: &serde_json::Value) {
            self.requests.lock().unwrap().push(body.clone());
        }
    }

    #[async_trait]
    impl HttpClientTrait for MockHttpClient {
        async fn post_json(
            &self,
            _url: &str,
            _bearer_token: &str,
            body: &serde_json::Value,
        ) -> Result<serde_json::Value, DomainError> {
            self.record(body);
            match &self.script {
                Scripted::Response(response) => Ok(response.clone()),
                Scripted::Error(e) => Err(DomainError::provider(e.clone())),
                _ => Err(DomainError::internal("mock scripted for streaming")),
            }
        }

        async fn post_json_stream(
            &self,
            _url: &str,
            _bearer_token: &str,
            body: &serde_json::Value,
        ) -> Result<ByteStream, DomainError> {
            self.record(body);
            match &self.script {
                Scripted::StreamChunks(chunks) => {
                    let items: Vec<Result<Bytes, DomainError>> =
                        chunks.iter().cloned().map(Ok).collect();
                    Ok(Box::pin(stream::iter(items)))
                }
                Scripted::StreamChunksThenError(chunks, error) => {
                    let mut items: Vec<Result<Bytes, DomainError>> =
                        chunks.iter().cloned().map(Ok).collect();
                    items.push(Err(DomainError::provider(error.clone())));
                    Ok(Box::pin(stream::iter(items)))
                }
                Scripted::Error(e) => Err(DomainError::provider(e.clone())),
                Scripted::Response(_) => Err(DomainError::internal("mock scripted for json")),
            }
        }
    }
}
