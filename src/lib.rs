//! iocflow - operator SDK for threat-intel artifact pipelines
//!
//! This crate provides the operator side of an artifact-processing pipeline:
//! typed artifacts (URLs, domains, hashes, IP addresses, YARA signatures)
//! flow in, and operators perform a side effect per artifact. The built-in
//! SQS operator filters artifacts by class and an optional named predicate,
//! renders a payload from configured key/value templates, and publishes the
//! JSON-serialized payload to an Amazon SQS queue.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     iocflow (operator SDK)                  │
//! │  Artifact, Operator, OperatorSpec, Registry, QueueClient    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Built-in operators: sqs                                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use iocflow::{Artifact, Operator, SqsConfig, SqsOperator};
//!
//! let config: SqsConfig = serde_yaml::from_str(raw_config)?;
//! let operator = SqsOperator::connect(config).await?;
//! operator.process(&artifacts).await?;
//! ```

pub mod artifact;
pub mod error;
pub mod filter;
pub mod operators;
pub mod queue;
pub mod template;
pub mod types;

pub use artifact::{Artifact, ArtifactKind};
pub use error::{OperatorError, Result};
pub use filter::FilterPredicate;
pub use operators::sqs::{SqsConfig, SqsOperator, SqsOperatorFactory};
pub use operators::{
    create_operator_registry, AnyOperator, CheckDetail, CheckResult, Operator, OperatorFactory,
    OperatorRegistry, OperatorSpec,
};
pub use queue::{MemoryQueue, QueueClient, SqsQueue};
pub use template::Placeholder;
pub use types::SensitiveString;
