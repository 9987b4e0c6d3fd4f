//! Queue client seam.
//!
//! Operators publish through the [`QueueClient`] trait so tests can
//! substitute a recording double for the AWS SDK. [`SqsQueue`] is the
//! production implementation; [`MemoryQueue`] captures payloads in memory.

use crate::error::{OperatorError, Result};
use async_trait::async_trait;
use std::sync::Mutex;
use tracing::debug;

/// Trait for the outbound enqueue call.
///
/// Exactly one call is made per surviving artifact. Transport errors
/// propagate to the caller unchanged; retry and backoff belong to the
/// underlying client, not to the operator.
#[async_trait]
pub trait QueueClient: Send + Sync {
    /// Enqueue one serialized payload
    async fn enqueue(&self, payload: &str) -> Result<()>;
}

/// AWS SQS queue client
pub struct SqsQueue {
    client: aws_sdk_sqs::Client,
    queue_url: String,
}

impl SqsQueue {
    /// Build a client from static credentials and a queue URL.
    ///
    /// Queue lifecycle, batching, and delivery guarantees are the SDK's
    /// concerns and are not handled here.
    pub async fn connect(
        access_key_id: &str,
        secret_access_key: &str,
        region: &str,
        queue_url: impl Into<String>,
    ) -> Self {
        let credentials =
            aws_sdk_sqs::config::Credentials::from_keys(access_key_id, secret_access_key, None);
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()))
            .credentials_provider(credentials)
            .load()
            .await;

        Self {
            client: aws_sdk_sqs::Client::new(&config),
            queue_url: queue_url.into(),
        }
    }

    /// The configured queue URL
    pub fn queue_url(&self) -> &str {
        &self.queue_url
    }
}

#[async_trait]
impl QueueClient for SqsQueue {
    async fn enqueue(&self, payload: &str) -> Result<()> {
        self.client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(payload)
            .send()
            .await
            .map_err(|e| OperatorError::queue(e.to_string()))?;

        debug!(queue_url = %self.queue_url, bytes = payload.len(), "message enqueued");
        Ok(())
    }
}

/// In-memory queue client that records every payload it receives.
///
/// Stands in for [`SqsQueue`] in tests, mirroring the mocked publish
/// primitive in the reference suite.
#[derive(Default)]
pub struct MemoryQueue {
    payloads: Mutex<Vec<String>>,
    fail_with: Option<String>,
}

impl MemoryQueue {
    /// Create a recording queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue whose enqueue call always fails with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            payloads: Mutex::new(Vec::new()),
            fail_with: Some(message.into()),
        }
    }

    /// Payloads recorded so far, in publish order
    pub fn payloads(&self) -> Vec<String> {
        self.payloads.lock().unwrap().clone()
    }

    /// Number of publish calls recorded
    pub fn len(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }

    /// Check if no publish call was made
    pub fn is_empty(&self) -> bool {
        self.payloads.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl QueueClient for MemoryQueue {
    async fn enqueue(&self, payload: &str) -> Result<()> {
        if let Some(ref message) = self.fail_with {
            return Err(OperatorError::queue(message.clone()));
        }
        self.payloads.lock().unwrap().push(payload.to_string());
        Ok(())
    }
}
