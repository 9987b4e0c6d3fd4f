//! Template-variable substitution for operator payloads.
//!
//! Operator configuration maps output keys to either literal values or one of
//! five fixed placeholder tokens. Substitution is an enum-keyed lookup per
//! artifact variant, not general string formatting: a template value is only
//! substituted when it exactly equals a recognized token.

use crate::artifact::Artifact;
use crate::error::{OperatorError, Result};
use indexmap::IndexMap;

/// A recognized placeholder token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `{url}` - the artifact's URL value
    Url,
    /// `{domain}` - the domain value, or the host extracted from a URL
    Domain,
    /// `{hash}` - the hash value
    Hash,
    /// `{ipaddress}` - the IP address value
    IpAddress,
    /// `{yarasignature}` - the signature text
    YaraSignature,
}

impl Placeholder {
    /// Recognize an exact placeholder token, `None` for anything else
    pub fn parse(template: &str) -> Option<Self> {
        match template {
            "{url}" => Some(Self::Url),
            "{domain}" => Some(Self::Domain),
            "{hash}" => Some(Self::Hash),
            "{ipaddress}" => Some(Self::IpAddress),
            "{yarasignature}" => Some(Self::YaraSignature),
            _ => None,
        }
    }

    /// The token string for this placeholder
    pub fn token(&self) -> &'static str {
        match self {
            Self::Url => "{url}",
            Self::Domain => "{domain}",
            Self::Hash => "{hash}",
            Self::IpAddress => "{ipaddress}",
            Self::YaraSignature => "{yarasignature}",
        }
    }

    /// Resolve the placeholder against an artifact.
    ///
    /// Each artifact variant populates exactly one placeholder, except that
    /// `{domain}` also resolves against URL artifacts via host extraction. A
    /// placeholder that does not match the artifact's variant is a template
    /// error rather than a silent empty substitution.
    pub fn resolve(&self, artifact: &Artifact) -> Result<String> {
        let value = match (self, artifact) {
            (Self::Url, Artifact::Url { value, .. }) => Some(value.clone()),
            (Self::Domain, _) => artifact.domain(),
            (Self::Hash, Artifact::Hash { value, .. }) => Some(value.clone()),
            (Self::IpAddress, Artifact::IpAddress { value, .. }) => Some(value.clone()),
            (Self::YaraSignature, Artifact::YaraSignature { value, .. }) => Some(value.clone()),
            _ => None,
        };

        value.ok_or_else(|| {
            OperatorError::template(format!(
                "placeholder {} does not apply to {} artifact",
                self.token(),
                artifact.kind()
            ))
        })
    }
}

/// Render a payload from (key, template) pairs against an artifact.
///
/// Recognized tokens are substituted with the artifact's matching attribute,
/// everything else passes through unchanged. Insertion order of `kwargs` is
/// preserved in the output so serialization has stable key ordering.
pub fn render(
    kwargs: &IndexMap<String, String>,
    artifact: &Artifact,
) -> Result<IndexMap<String, String>> {
    let mut payload = IndexMap::with_capacity(kwargs.len());

    for (key, template) in kwargs {
        let value = match Placeholder::parse(template) {
            Some(placeholder) => placeholder.resolve(artifact)?,
            None => template.clone(),
        };
        payload.insert(key.clone(), value);
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kwargs(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(Placeholder::parse("{url}"), Some(Placeholder::Url));
        assert_eq!(
            Placeholder::parse("{yarasignature}"),
            Some(Placeholder::YaraSignature)
        );
        // Only exact tokens are recognized
        assert_eq!(Placeholder::parse("prefix {url}"), None);
        assert_eq!(Placeholder::parse("{unknown}"), None);
        assert_eq!(Placeholder::parse("url"), None);
    }

    #[test]
    fn test_literals_pass_through() {
        let artifact = Artifact::hash("deadbeef", "", "");
        let payload = render(&kwargs(&[("test_arg", "test_val")]), &artifact).unwrap();
        assert_eq!(payload.get("test_arg"), Some(&"test_val".to_string()));
    }

    #[test]
    fn test_url_substitution_with_domain() {
        let artifact = Artifact::url("http://somedomain.com/test", "", "");
        let payload = render(
            &kwargs(&[("u", "{url}"), ("d", "{domain}")]),
            &artifact,
        )
        .unwrap();
        assert_eq!(payload.get("u"), Some(&"http://somedomain.com/test".to_string()));
        assert_eq!(payload.get("d"), Some(&"somedomain.com".to_string()));
    }

    #[test]
    fn test_mismatched_placeholder_is_an_error() {
        let artifact = Artifact::url("http://somedomain.com/test", "", "");
        let err = render(&kwargs(&[("h", "{hash}")]), &artifact).unwrap_err();
        assert!(err.to_string().contains("{hash}"));
        assert!(err.to_string().contains("url"));
    }

    #[test]
    fn test_empty_kwargs_renders_empty_payload() {
        let artifact = Artifact::url("http://x.com", "", "");
        let payload = render(&IndexMap::new(), &artifact).unwrap();
        assert!(payload.is_empty());
        assert_eq!(serde_json::to_string(&payload).unwrap(), "{}");
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let artifact = Artifact::url("http://x.com/p", "", "");
        let payload = render(
            &kwargs(&[("a", "lit"), ("d", "{domain}")]),
            &artifact,
        )
        .unwrap();
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"a":"lit","d":"x.com"}"#
        );
    }
}
