//! Operator SDK: traits for pipeline stages that consume artifacts and
//! perform a side effect, plus the registry for runtime operator lookup.
//!
//! Operators hold immutable configuration fixed at construction and process
//! each artifact independently and statelessly. The provided
//! [`process`](Operator::process) step applies type-tag and source filtering
//! before delegating to [`handle_artifact`](Operator::handle_artifact).

pub mod spec;
pub mod sqs;

pub use spec::{CheckDetail, CheckResult, OperatorSpec};

use crate::artifact::{Artifact, ArtifactKind};
use crate::error::Result;
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use validator::Validate;

/// Trait for operator configuration
pub trait OperatorConfig: DeserializeOwned + Validate + JsonSchema + Send + Sync {}

// Blanket implementation
impl<T> OperatorConfig for T where T: DeserializeOwned + Validate + JsonSchema + Send + Sync {}

/// Trait for operators
#[async_trait]
pub trait Operator: Send + Sync {
    /// Configuration type for this operator
    type Config: OperatorConfig;

    /// Return the operator specification
    fn spec() -> OperatorSpec
    where
        Self: Sized;

    /// Check configuration and connectivity
    async fn check(&self) -> Result<CheckResult>;

    /// Artifact classes this operator accepts
    fn artifact_types(&self) -> &[ArtifactKind];

    /// Source allow-list; `None` means unrestricted
    fn allowed_sources(&self) -> Option<&[String]>;

    /// Handle one artifact that survived type and source filtering
    async fn handle_artifact(&self, artifact: &Artifact) -> Result<()>;

    /// Process a sequence of artifacts in order.
    ///
    /// Artifacts whose class tag is not in [`artifact_types`](Operator::artifact_types),
    /// or whose source is not in the allow-list, are skipped without error.
    async fn process(&self, artifacts: &[Artifact]) -> Result<()> {
        for artifact in artifacts {
            if !self.artifact_types().contains(&artifact.kind()) {
                debug!(kind = %artifact.kind(), "artifact type not accepted, skipping");
                continue;
            }

            if let Some(sources) = self.allowed_sources() {
                if !sources.iter().any(|s| s == artifact.source_name()) {
                    debug!(
                        source = %artifact.source_name(),
                        "artifact source not in allow-list, skipping"
                    );
                    continue;
                }
            }

            self.handle_artifact(artifact).await?;
        }
        Ok(())
    }
}

/// Factory trait for creating operator instances from raw configuration
#[async_trait]
pub trait OperatorFactory: Send + Sync {
    /// Get the operator specification
    fn spec(&self) -> OperatorSpec;

    /// Create a boxed operator instance for runtime dispatch
    async fn create(&self, config: &serde_yaml::Value) -> Result<Box<dyn AnyOperator>>;
}

/// Type-erased operator for runtime dispatch
///
/// This allows the host pipeline to drive operators without knowing their
/// concrete types.
#[async_trait]
pub trait AnyOperator: Send + Sync {
    /// Check configuration and connectivity
    async fn check(&self) -> Result<CheckResult>;

    /// Process a sequence of artifacts in order
    async fn process(&self, artifacts: &[Artifact]) -> Result<()>;
}

/// Registry of available operators
///
/// The host pipeline registers the operators it needs and looks them up by
/// name from configuration.
pub struct OperatorRegistry {
    operators: HashMap<String, Arc<dyn OperatorFactory>>,
}

impl OperatorRegistry {
    /// Create an empty operator registry
    pub fn new() -> Self {
        Self {
            operators: HashMap::new(),
        }
    }

    /// Register an operator factory
    pub fn register(&mut self, name: &str, factory: Arc<dyn OperatorFactory>) {
        self.operators.insert(name.to_string(), factory);
    }

    /// Get an operator factory by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn OperatorFactory>> {
        self.operators.get(name)
    }

    /// List available operator types with their specs
    pub fn list(&self) -> Vec<(&str, OperatorSpec)> {
        self.operators
            .iter()
            .map(|(name, factory)| (name.as_str(), factory.spec()))
            .collect()
    }

    /// Check if an operator is registered
    pub fn contains(&self, name: &str) -> bool {
        self.operators.contains_key(name)
    }

    /// Number of registered operators
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create an operator registry with all built-in operators
pub fn create_operator_registry() -> OperatorRegistry {
    let mut registry = OperatorRegistry::new();
    registry.register("sqs", Arc::new(sqs::SqsOperatorFactory));
    registry
}
