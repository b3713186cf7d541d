// Hosted pinning gateway client
//
// HTTP client for a Pinata-style pinning service: payloads go up as a
// multipart file form to the pin endpoint and come back through the public
// gateway. Credentials and endpoints arrive as configuration; nothing is
// compiled in.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

use vindex_error::{StorageError, StorageResult};

use crate::store::ContentStore;

/// Configuration for a hosted pinning gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Pin endpoint, e.g. "https://api.pinata.cloud/pinning/pinFileToIPFS"
    pub api_url: String,
    /// Public gateway base, e.g. "https://gateway.pinata.cloud"
    pub gateway_url: String,
    /// API key header value
    pub api_key: String,
    /// API secret header value
    pub api_secret: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StoreConfig {
    pub fn new(
        api_url: impl Into<String>,
        gateway_url: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            gateway_url: gateway_url.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            timeout_secs: 30,
        }
    }
}

/// Successful pin response from the gateway
#[derive(Debug, Deserialize)]
struct PinResponse {
    #[serde(rename = "IpfsHash")]
    ipfs_hash: String,
}

/// HTTP client for a hosted content store
#[derive(Debug)]
pub struct GatewayClient {
    config: StoreConfig,
    http_client: HttpClient,
}

impl GatewayClient {
    /// Create a new gateway client
    pub fn new(config: StoreConfig) -> StorageResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StorageError::unavailable(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl ContentStore for GatewayClient {
    async fn put(&self, payload: &[u8]) -> StorageResult<String> {
        // The pin endpoint expects a multipart form with a `file` field,
        // not a bare octet body
        let form = multipart::Form::new().part(
            "file",
            multipart::Part::bytes(payload.to_vec()).file_name("payload"),
        );
        let response = self
            .http_client
            .post(&self.config.api_url)
            .header("pinata_api_key", &self.config.api_key)
            .header("pinata_secret_api_key", &self.config.api_secret)
            .multipart(form)
            .send()
            .await
            .map_err(|e| StorageError::unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StorageError::unavailable(format!(
                "pin request failed with status {}",
                response.status()
            )));
        }

        let pinned: PinResponse = response
            .json()
            .await
            .map_err(|e| StorageError::InvalidResponse(e.to_string()))?;
        debug!(cid = %pinned.ipfs_hash, "payload pinned");
        Ok(pinned.ipfs_hash)
    }

    async fn get(&self, cid: &str) -> StorageResult<Vec<u8>> {
        let url = format!("{}/ipfs/{}", self.config.gateway_url, cid);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| StorageError::unavailable(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound(cid.to_string()));
        }
        if !response.status().is_success() {
            return Err(StorageError::unavailable(format!(
                "gateway fetch failed with status {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StorageError::unavailable(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Accept one HTTP request, hand back its headers and body, answer
    /// with a canned pin response
    async fn serve_one_pin_request(listener: TcpListener) -> (String, Vec<u8>) {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers completed");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length: usize = headers
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse().ok())?
            })
            .expect("pin request must declare a content length");

        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before body completed");
            buf.extend_from_slice(&chunk[..n]);
        }
        let body = buf[header_end..].to_vec();

        let reply = r#"{"IpfsHash":"QmMocked"}"#;
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            reply.len(),
            reply
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        (headers, body)
    }

    #[tokio::test]
    async fn put_sends_a_multipart_file_form_with_credential_headers() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_one_pin_request(listener));

        let config = StoreConfig::new(
            format!("http://{}", addr),
            "http://unused.example.test",
            "key",
            "secret",
        );
        let client = GatewayClient::new(config).unwrap();
        let cid = client.put(b"vehicle payload").await.unwrap();
        assert_eq!(cid, "QmMocked");

        let (headers, body) = server.await.unwrap();
        let headers = headers.to_ascii_lowercase();
        assert!(headers.starts_with("post / "), "{}", headers);
        assert!(
            headers.contains("content-type: multipart/form-data; boundary="),
            "{}",
            headers
        );
        assert!(headers.contains("pinata_api_key: key"), "{}", headers);
        assert!(headers.contains("pinata_secret_api_key: secret"), "{}", headers);

        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("name=\"file\""), "{}", body);
        assert!(body.contains("vehicle payload"), "{}", body);
    }

    #[test]
    fn config_carries_credentials_not_the_client() {
        let config = StoreConfig::new(
            "https://api.example.test/pin",
            "https://gateway.example.test",
            "key",
            "secret",
        );
        assert_eq!(config.timeout_secs, 30);
        let client = GatewayClient::new(config.clone()).unwrap();
        assert_eq!(client.config.api_key, config.api_key);
    }

    #[test]
    fn pin_response_parses_gateway_shape() {
        let parsed: PinResponse =
            serde_json::from_str(r#"{"IpfsHash":"QmTest","PinSize":10}"#).unwrap();
        assert_eq!(parsed.ipfs_hash, "QmTest");
    }
}
