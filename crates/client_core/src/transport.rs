use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use shared::error::RequestError;
use url::Url;

/// Raw status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    pub status: u16,
    pub body: String,
}

impl TransportReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Posts a JSON body and hands back whatever the server answered.
///
/// Only failures to complete the exchange are errors here; status handling
/// belongs to the caller.
#[async_trait]
pub trait JsonTransport: Send + Sync {
    async fn post_json(&self, url: &Url, body: Vec<u8>) -> Result<TransportReply, RequestError>;
}

pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build http client")?;
        Ok(Self { http })
    }
}

#[async_trait]
impl JsonTransport for HttpTransport {
    async fn post_json(&self, url: &Url, body: Vec<u8>) -> Result<TransportReply, RequestError> {
        let res = self
            .http
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| RequestError::transport(describe_send_error(&err)))?;
        let status = res.status().as_u16();
        let body = res.text().await.map_err(|err| {
            RequestError::transport(format!("failed to read response body: {err}"))
        })?;
        Ok(TransportReply { status, body })
    }
}

fn describe_send_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("failed to connect to recommendation service: {err}")
    } else {
        format!("request failed: {err}")
    }
}
