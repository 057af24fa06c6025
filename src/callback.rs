//! Response delivery to the CloudFormation presigned callback URL.
//!
//! Delivery is a trait so tests can record responses instead of making a
//! network call. A delivery failure is unrecoverable from inside the
//! handler; CloudFormation will eventually time the resource out.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::error;

use crate::core::models::CustomResourceResponse;
use crate::errors::ResolverError;

#[async_trait]
pub trait ResponseSender: Send + Sync {
    async fn send(
        &self,
        response_url: &str,
        response: &CustomResourceResponse,
    ) -> Result<(), ResolverError>;
}

/// Production sender: PUTs the serialized response to the presigned URL.
pub struct HttpResponseSender {
    client: HttpClient,
}

impl HttpResponseSender {
    pub fn new() -> Self {
        Self {
            client: HttpClient::new(),
        }
    }
}

impl Default for HttpResponseSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseSender for HttpResponseSender {
    async fn send(
        &self,
        response_url: &str,
        response: &CustomResourceResponse,
    ) -> Result<(), ResolverError> {
        let body = serde_json::to_string(response)
            .map_err(|e| ResolverError::HttpError(format!("serialization failed: {e}")))?;

        // The presigned S3 URL is signed without a Content-Type, so the
        // header must be sent empty or the signature check fails.
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(""));

        let resp = self
            .client
            .put(response_url)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!(
                "response PUT failed: status={} body={}",
                status, body_text
            );
            return Err(ResolverError::HttpError(format!(
                "callback returned status {status}"
            )));
        }
        Ok(())
    }
}
