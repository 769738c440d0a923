use std::collections::VecDeque;
use std::time::Duration;

use reqwest::{Client, Url};
use tokio::sync::Mutex;

use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::form::FormInputSet;

/// POSTs the form payload to the treatment endpoint and hands back the raw body.
pub struct HttpTransport {
    endpoint: Url,
    client: Client,
}

impl HttpTransport {
    pub fn new(cfg: &BridgeConfig) -> Result<Self, BridgeError> {
        // No timeout: a submission waits for as long as the server takes.
        let client = Client::builder()
            .build()
            .map_err(|e| BridgeError::Http(e.to_string()))?;
        Ok(Self {
            endpoint: cfg.endpoint()?,
            client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn post_json(&self, payload: &FormInputSet) -> Result<String, BridgeError> {
        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| BridgeError::Http(e.to_string()))?;
        // The status is not a failure on its own; only an unreadable body is.
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                "treatment endpoint returned non-success status"
            );
        }
        resp.text()
            .await
            .map_err(|e| BridgeError::Http(e.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct MockReply {
    pub outcome: Result<String, BridgeError>,
    pub delay: Duration,
}

impl MockReply {
    pub fn body(body: impl Into<String>) -> Self {
        Self {
            outcome: Ok(body.into()),
            delay: Duration::ZERO,
        }
    }

    pub fn error(err: BridgeError) -> Self {
        Self {
            outcome: Err(err),
            delay: Duration::ZERO,
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Scripted transport: answers with the queued replies in order and keeps
/// every payload it was sent.
pub struct MockTransport {
    replies: Mutex<VecDeque<MockReply>>,
    sent: Mutex<Vec<FormInputSet>>,
}

impl MockTransport {
    pub fn new(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub async fn post_json(&self, payload: &FormInputSet) -> Result<String, BridgeError> {
        self.sent.lock().await.push(payload.clone());
        let reply = self
            .replies
            .lock()
            .await
            .pop_front()
            .ok_or(BridgeError::MockExhausted)?;
        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        reply.outcome
    }

    pub async fn sent(&self) -> Vec<FormInputSet> {
        self.sent.lock().await.clone()
    }
}

pub enum Transport {
    Http(HttpTransport),
    Mock(MockTransport),
}

impl Transport {
    pub fn http(cfg: &BridgeConfig) -> Result<Self, BridgeError> {
        Ok(Transport::Http(HttpTransport::new(cfg)?))
    }

    pub fn mock(replies: Vec<MockReply>) -> Self {
        Transport::Mock(MockTransport::new(replies))
    }

    pub async fn post_json(&self, payload: &FormInputSet) -> Result<String, BridgeError> {
        match self {
            Transport::Http(t) => t.post_json(payload).await,
            Transport::Mock(t) => t.post_json(payload).await,
        }
    }

    /// Payloads seen so far; always empty for the HTTP transport.
    pub async fn sent(&self) -> Vec<FormInputSet> {
        match self {
            Transport::Http(_) => Vec::new(),
            Transport::Mock(t) => t.sent().await,
        }
    }
}
