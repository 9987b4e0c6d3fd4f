//! Operator specification and check-result types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operator specification describing its identity and configuration surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorSpec {
    /// Unique operator type identifier (e.g., "sqs")
    pub operator_type: String,

    /// Semantic version
    pub version: String,

    /// Human-readable description
    pub description: Option<String>,

    /// JSON Schema for the operator's configuration
    pub config_schema: Option<serde_json::Value>,
}

impl OperatorSpec {
    /// Create a builder for fluent construction
    pub fn builder(
        operator_type: impl Into<String>,
        version: impl Into<String>,
    ) -> OperatorSpecBuilder {
        OperatorSpecBuilder {
            spec: OperatorSpec {
                operator_type: operator_type.into(),
                version: version.into(),
                description: None,
                config_schema: None,
            },
        }
    }
}

/// Builder for [`OperatorSpec`]
#[derive(Debug)]
pub struct OperatorSpecBuilder {
    spec: OperatorSpec,
}

impl OperatorSpecBuilder {
    /// Set description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.spec.description = Some(desc.into());
        self
    }

    /// Set config schema from a type implementing JsonSchema
    pub fn config_schema<T: JsonSchema>(mut self) -> Self {
        let schema = schemars::schema_for!(T);
        self.spec.config_schema = Some(serde_json::to_value(schema).unwrap_or_default());
        self
    }

    /// Build the spec
    pub fn build(self) -> OperatorSpec {
        self.spec
    }
}

/// Result of a configuration/connectivity check
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Whether the check succeeded
    pub success: bool,
    /// Error message if failed
    pub message: Option<String>,
    /// Individual check details
    pub checks: Vec<CheckDetail>,
}

/// A single check detail
#[derive(Debug, Clone)]
pub struct CheckDetail {
    /// Name of the check (e.g., "configuration", "queue_url_format")
    pub name: String,
    /// Whether this check passed
    pub passed: bool,
    /// Description or error message
    pub message: Option<String>,
}

impl CheckResult {
    /// Create a successful check result
    pub fn success() -> Self {
        Self {
            success: true,
            message: None,
            checks: Vec::new(),
        }
    }

    /// Create a failed check result
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            checks: Vec::new(),
        }
    }

    /// Check if successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Create a builder for detailed checks
    pub fn builder() -> CheckResultBuilder {
        CheckResultBuilder { checks: Vec::new() }
    }

    /// Get all failed checks
    pub fn failed_checks(&self) -> impl Iterator<Item = &CheckDetail> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            write!(f, "check passed")?;
        } else {
            write!(f, "check failed")?;
            if let Some(ref msg) = self.message {
                write!(f, ": {}", msg)?;
            }
        }
        for check in &self.checks {
            let status = if check.passed { "ok" } else { "failed" };
            write!(f, "\n  {}: {}", check.name, status)?;
            if let Some(ref msg) = check.message {
                write!(f, " ({})", msg)?;
            }
        }
        Ok(())
    }
}

/// Builder for [`CheckResult`]
#[derive(Debug, Default)]
pub struct CheckResultBuilder {
    checks: Vec<CheckDetail>,
}

impl CheckResultBuilder {
    /// Record a passed check
    pub fn check_passed(mut self, name: impl Into<String>) -> Self {
        self.checks.push(CheckDetail {
            name: name.into(),
            passed: true,
            message: None,
        });
        self
    }

    /// Record a failed check with a message
    pub fn check_failed(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.checks.push(CheckDetail {
            name: name.into(),
            passed: false,
            message: Some(message.into()),
        });
        self
    }

    /// Build the result; success when every recorded check passed
    pub fn build(self) -> CheckResult {
        let success = self.checks.iter().all(|c| c.passed);
        let message = self
            .checks
            .iter()
            .find(|c| !c.passed)
            .and_then(|c| c.message.clone());
        CheckResult {
            success,
            message,
            checks: self.checks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_builder() {
        let spec = OperatorSpec::builder("sqs", "0.1.0")
            .description("Publish artifacts to SQS")
            .build();

        assert_eq!(spec.operator_type, "sqs");
        assert_eq!(spec.version, "0.1.0");
        assert_eq!(spec.description, Some("Publish artifacts to SQS".to_string()));
    }

    #[test]
    fn test_check_result_builder() {
        let result = CheckResult::builder()
            .check_passed("configuration")
            .check_passed("queue_url_format")
            .build();
        assert!(result.is_success());
        assert_eq!(result.checks.len(), 2);

        let result = CheckResult::builder()
            .check_passed("configuration")
            .check_failed("queue_url_format", "not an SQS URL")
            .build();
        assert!(!result.is_success());
        assert_eq!(result.failed_checks().count(), 1);
        assert_eq!(result.message.as_deref(), Some("not an SQS URL"));
    }
}
