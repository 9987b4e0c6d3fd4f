//! AWS SQS publishing operator
//!
//! Receives typed artifacts, filters them by artifact class and an optional
//! named predicate, renders a key/value payload from configured templates,
//! and publishes the JSON-serialized payload to an SQS queue.
//!
//! # Example Configuration
//!
//! ```yaml
//! type: sqs
//! config:
//!   aws_access_key_id: ${AWS_ACCESS_KEY_ID}
//!   aws_secret_access_key: ${AWS_SECRET_ACCESS_KEY}
//!   aws_region: us-east-1
//!   queue_url: https://sqs.us-east-1.amazonaws.com/123456789/my-queue
//!   artifact_types: [url]
//!   filter: is_domain
//!   kwargs:
//!     feed: my-feed
//!     link: '{url}'
//!     host: '{domain}'
//! ```

use crate::artifact::{Artifact, ArtifactKind};
use crate::error::{OperatorError, Result};
use crate::filter::FilterPredicate;
use crate::operators::{AnyOperator, CheckResult, Operator, OperatorFactory, OperatorSpec};
use crate::queue::{QueueClient, SqsQueue};
use crate::template;
use crate::types::SensitiveString;
use async_trait::async_trait;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use validator::Validate;

/// SQS operator configuration
#[derive(Debug, Clone, Deserialize, Serialize, Validate, JsonSchema)]
pub struct SqsConfig {
    /// AWS access key ID
    #[validate(length(min = 1))]
    pub aws_access_key_id: String,

    /// AWS secret access key
    #[schemars(with = "String")]
    pub aws_secret_access_key: SensitiveString,

    /// AWS region (e.g., us-east-1)
    #[validate(length(min = 1, max = 25))]
    pub aws_region: String,

    /// SQS queue URL
    #[validate(length(min = 1), url)]
    pub queue_url: String,

    /// Artifact classes to publish; everything else is skipped
    #[serde(default = "default_artifact_types")]
    pub artifact_types: Vec<ArtifactKind>,

    /// Optional predicate applied before publishing. An unrecognized name
    /// fails at configuration time.
    #[serde(default, alias = "filter_string")]
    pub filter: Option<FilterPredicate>,

    /// Source allow-list; unset means unrestricted
    #[serde(default)]
    pub allowed_sources: Option<Vec<String>>,

    /// Output keys mapped to literal values or placeholder tokens
    /// ({url}, {domain}, {hash}, {ipaddress}, {yarasignature})
    #[serde(default)]
    pub kwargs: IndexMap<String, String>,
}

fn default_artifact_types() -> Vec<ArtifactKind> {
    vec![ArtifactKind::Url]
}

/// SQS publishing operator
///
/// Generic over the queue client so tests can substitute a recording double.
pub struct SqsOperator<C = SqsQueue> {
    config: SqsConfig,
    client: C,
}

impl<C: QueueClient> SqsOperator<C> {
    /// Create an operator over an existing queue client
    pub fn with_client(config: SqsConfig, client: C) -> Result<Self> {
        config
            .validate()
            .map_err(|e| OperatorError::config(e.to_string()))?;
        Ok(Self { config, client })
    }

    /// The operator's configuration
    pub fn config(&self) -> &SqsConfig {
        &self.config
    }

    /// The underlying queue client
    pub fn client(&self) -> &C {
        &self.client
    }
}

impl SqsOperator<SqsQueue> {
    /// Create an operator with an SQS client built from the configured
    /// credentials and queue URL
    pub async fn connect(config: SqsConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| OperatorError::config(e.to_string()))?;

        let client = SqsQueue::connect(
            &config.aws_access_key_id,
            config.aws_secret_access_key.expose_secret(),
            &config.aws_region,
            config.queue_url.clone(),
        )
        .await;

        info!(queue_url = %config.queue_url, "sqs operator connected");
        Ok(Self { config, client })
    }
}

#[async_trait]
impl<C: QueueClient> Operator for SqsOperator<C> {
    type Config = SqsConfig;

    fn spec() -> OperatorSpec {
        OperatorSpec::builder("sqs", env!("CARGO_PKG_VERSION"))
            .description("Publish artifacts to an Amazon SQS queue")
            .config_schema::<SqsConfig>()
            .build()
    }

    async fn check(&self) -> Result<CheckResult> {
        if let Err(e) = self.config.validate() {
            return Ok(CheckResult::failure(format!("invalid configuration: {e}")));
        }

        if !self.config.queue_url.contains("sqs") {
            return Ok(CheckResult::builder()
                .check_passed("configuration")
                .check_failed(
                    "queue_url_format",
                    "queue URL does not appear to be an SQS URL",
                )
                .build());
        }

        info!(
            queue_url = %self.config.queue_url,
            region = %self.config.aws_region,
            "sqs operator configuration validated"
        );

        Ok(CheckResult::builder()
            .check_passed("configuration")
            .check_passed("queue_url_format")
            .build())
    }

    fn artifact_types(&self) -> &[ArtifactKind] {
        &self.config.artifact_types
    }

    fn allowed_sources(&self) -> Option<&[String]> {
        self.config.allowed_sources.as_deref()
    }

    async fn handle_artifact(&self, artifact: &Artifact) -> Result<()> {
        if let Some(filter) = self.config.filter {
            if !filter.matches(artifact) {
                debug!(
                    filter = %filter,
                    kind = %artifact.kind(),
                    value = %artifact.value(),
                    "artifact rejected by filter, discarding"
                );
                return Ok(());
            }
        }

        let payload = template::render(&self.config.kwargs, artifact)?;
        let body = serde_json::to_string(&payload)?;
        self.client.enqueue(&body).await?;

        debug!(kind = %artifact.kind(), "artifact published");
        Ok(())
    }
}

/// Factory for creating SQS operator instances
pub struct SqsOperatorFactory;

#[async_trait]
impl OperatorFactory for SqsOperatorFactory {
    fn spec(&self) -> OperatorSpec {
        SqsOperator::<SqsQueue>::spec()
    }

    async fn create(&self, config: &serde_yaml::Value) -> Result<Box<dyn AnyOperator>> {
        let config: SqsConfig = serde_yaml::from_value(config.clone())
            .map_err(|e| OperatorError::config(format!("invalid sqs operator config: {e}")))?;
        Ok(Box::new(SqsOperatorWrapper(
            SqsOperator::connect(config).await?,
        )))
    }
}

/// Wrapper for type-erased operator dispatch
struct SqsOperatorWrapper(SqsOperator<SqsQueue>);

#[async_trait]
impl AnyOperator for SqsOperatorWrapper {
    async fn check(&self) -> Result<CheckResult> {
        Operator::check(&self.0).await
    }

    async fn process(&self, artifacts: &[Artifact]) -> Result<()> {
        Operator::process(&self.0, artifacts).await
    }
}
