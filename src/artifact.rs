//! Artifact type model
//!
//! Artifacts are the typed units of threat-intelligence data flowing through
//! the pipeline: URLs, domains, hashes, IP addresses, and YARA signatures.
//! Each artifact carries a primary value plus two provenance fields that the
//! operators only read back out (`source_name`, `reference`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::{Host, Url};

/// Closed set of artifact classes, used as the tag for type-based filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// A full URL
    Url,
    /// A bare domain name
    Domain,
    /// A file hash (md5, sha1, sha256, ...)
    Hash,
    /// An IP address
    IpAddress,
    /// A YARA rule
    YaraSignature,
}

impl ArtifactKind {
    /// Get string representation (matches the serde names)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Domain => "domain",
            Self::Hash => "hash",
            Self::IpAddress => "ipaddress",
            Self::YaraSignature => "yarasignature",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A typed threat-intel artifact
///
/// Immutable value type. The primary value is expected to be non-empty for
/// constructed instances; this is not structurally enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Artifact {
    Url {
        value: String,
        source_name: String,
        reference: String,
    },
    Domain {
        value: String,
        source_name: String,
        reference: String,
    },
    Hash {
        value: String,
        source_name: String,
        reference: String,
    },
    IpAddress {
        value: String,
        source_name: String,
        reference: String,
    },
    YaraSignature {
        value: String,
        source_name: String,
        reference: String,
    },
}

impl Artifact {
    /// Create a URL artifact
    pub fn url(
        value: impl Into<String>,
        source_name: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self::Url {
            value: value.into(),
            source_name: source_name.into(),
            reference: reference.into(),
        }
    }

    /// Create a domain artifact
    pub fn domain_name(
        value: impl Into<String>,
        source_name: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self::Domain {
            value: value.into(),
            source_name: source_name.into(),
            reference: reference.into(),
        }
    }

    /// Create a hash artifact
    pub fn hash(
        value: impl Into<String>,
        source_name: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self::Hash {
            value: value.into(),
            source_name: source_name.into(),
            reference: reference.into(),
        }
    }

    /// Create an IP address artifact
    pub fn ip_address(
        value: impl Into<String>,
        source_name: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self::IpAddress {
            value: value.into(),
            source_name: source_name.into(),
            reference: reference.into(),
        }
    }

    /// Create a YARA signature artifact
    pub fn yara_signature(
        value: impl Into<String>,
        source_name: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self::YaraSignature {
            value: value.into(),
            source_name: source_name.into(),
            reference: reference.into(),
        }
    }

    /// The artifact's class tag
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Self::Url { .. } => ArtifactKind::Url,
            Self::Domain { .. } => ArtifactKind::Domain,
            Self::Hash { .. } => ArtifactKind::Hash,
            Self::IpAddress { .. } => ArtifactKind::IpAddress,
            Self::YaraSignature { .. } => ArtifactKind::YaraSignature,
        }
    }

    /// The primary value string
    pub fn value(&self) -> &str {
        match self {
            Self::Url { value, .. }
            | Self::Domain { value, .. }
            | Self::Hash { value, .. }
            | Self::IpAddress { value, .. }
            | Self::YaraSignature { value, .. } => value,
        }
    }

    /// Name of the feed/source this artifact came from
    pub fn source_name(&self) -> &str {
        match self {
            Self::Url { source_name, .. }
            | Self::Domain { source_name, .. }
            | Self::Hash { source_name, .. }
            | Self::IpAddress { source_name, .. }
            | Self::YaraSignature { source_name, .. } => source_name,
        }
    }

    /// Free-form provenance reference (report URL, tweet, ...)
    pub fn reference(&self) -> &str {
        match self {
            Self::Url { reference, .. }
            | Self::Domain { reference, .. }
            | Self::Hash { reference, .. }
            | Self::IpAddress { reference, .. }
            | Self::YaraSignature { reference, .. } => reference,
        }
    }

    /// Domain-extracted value: the host portion for URL artifacts, the value
    /// itself for domain artifacts, `None` otherwise.
    pub fn domain(&self) -> Option<String> {
        match self {
            Self::Url { value, .. } => {
                let parsed = Url::parse(value).ok()?;
                parsed.host_str().map(str::to_string)
            }
            Self::Domain { value, .. } => Some(value.clone()),
            _ => None,
        }
    }

    /// True when the artifact's host portion is a domain name rather than a
    /// literal IP address.
    ///
    /// URL artifacts check the parsed host; domain artifacts check that the
    /// value is not itself an IP literal. Artifacts without a host portion
    /// return `true` since there is nothing to exclude on.
    pub fn is_domain(&self) -> bool {
        match self {
            Self::Url { value, .. } => match Url::parse(value) {
                Ok(parsed) => matches!(parsed.host(), Some(Host::Domain(_))),
                Err(_) => false,
            },
            Self::Domain { value, .. } => value.parse::<std::net::IpAddr>().is_err(),
            _ => true,
        }
    }
}
