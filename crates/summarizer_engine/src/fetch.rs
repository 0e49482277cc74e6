use std::time::Duration;

use futures_util::StreamExt;

use crate::{FailureKind, FetchError};

/// Transport limits shared by every outbound request.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

impl FetchSettings {
    pub(crate) fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    /// Drains the body, refusing anything beyond `max_bytes`.
    pub(crate) async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        if let Some(content_len) = response.content_length() {
            if content_len > self.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
