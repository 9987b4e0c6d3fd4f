//! Named filter predicates applied to artifacts before publication.
//!
//! Predicates are named in operator configuration. An unrecognized name is a
//! configuration error at deserialization time; a silent no-op filter would
//! defeat the filtering guarantee.

use crate::artifact::Artifact;
use crate::error::OperatorError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A named boolean test applied to an artifact before publication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FilterPredicate {
    /// True when the artifact's host portion is a domain name rather than a
    /// literal IP address
    IsDomain,
}

impl FilterPredicate {
    /// Evaluate the predicate against an artifact
    pub fn matches(&self, artifact: &Artifact) -> bool {
        match self {
            Self::IsDomain => artifact.is_domain(),
        }
    }

    /// Get string representation (matches the serde names)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IsDomain => "is_domain",
        }
    }
}

impl FromStr for FilterPredicate {
    type Err = OperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "is_domain" => Ok(Self::IsDomain),
            other => Err(OperatorError::config(format!(
                "unknown filter predicate '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for FilterPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_predicate() {
        assert_eq!(
            "is_domain".parse::<FilterPredicate>().unwrap(),
            FilterPredicate::IsDomain
        );
    }

    #[test]
    fn test_parse_unknown_predicate_fails_loudly() {
        let err = "is_host".parse::<FilterPredicate>().unwrap_err();
        assert!(err.to_string().contains("unknown filter predicate"));
    }

    #[test]
    fn test_serde_name() {
        let predicate: FilterPredicate = serde_json::from_str("\"is_domain\"").unwrap();
        assert_eq!(predicate, FilterPredicate::IsDomain);
        assert!(serde_json::from_str::<FilterPredicate>("\"no_such_filter\"").is_err());
    }

    #[test]
    fn test_is_domain_matching() {
        let predicate = FilterPredicate::IsDomain;
        assert!(predicate.matches(&Artifact::url("http://somedomain.com/test", "", "")));
        assert!(!predicate.matches(&Artifact::url("http://123.123.123.123/test", "", "")));
    }
}
