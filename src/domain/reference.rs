use git2::Oid;

/// Marker that identifies a fully-qualified tag reference
pub const TAG_NAMESPACE_MARKER: &str = "/tags/";

/// Strip the namespace prefix from a fully-qualified reference name.
///
/// Drops the first two `/`-separated segments (`refs/heads/`, `refs/tags/`, ...)
/// and joins the remainder back together. The input shape is not validated:
/// `"HEAD"` yields an empty string and `"refs/x"` yields an empty string too.
///
/// # Example
/// ```
/// use release_stamp::domain::short_name;
/// assert_eq!(short_name("refs/heads/release/1.2.3"), "release/1.2.3");
/// ```
pub fn short_name(reference: &str) -> String {
    reference.split('/').skip(2).collect::<Vec<_>>().join("/")
}

/// Returns true when a fully-qualified reference name lives in a tag namespace
pub fn is_tag_reference(reference: &str) -> bool {
    reference.contains(TAG_NAMESPACE_MARKER)
}

/// A repository reference together with the commit it points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub name: String,
    pub target: Oid,
}

impl Reference {
    /// Create a reference from its fully-qualified name and target commit
    pub fn new(name: impl Into<String>, target: Oid) -> Self {
        Reference {
            name: name.into(),
            target,
        }
    }

    /// Local branch or tag name with the namespace prefix stripped
    pub fn short_name(&self) -> String {
        short_name(&self.name)
    }

    pub fn is_tag(&self) -> bool {
        is_tag_reference(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_branch() {
        assert_eq!(short_name("refs/heads/main"), "main");
    }

    #[test]
    fn test_short_name_keeps_nested_segments() {
        assert_eq!(short_name("refs/heads/release/1.2.3"), "release/1.2.3");
        assert_eq!(short_name("refs/tags/v1.0.0"), "v1.0.0");
    }

    #[test]
    fn test_short_name_malformed_input() {
        assert_eq!(short_name("HEAD"), "");
        assert_eq!(short_name("refs/heads"), "");
        assert_eq!(short_name(""), "");
    }

    #[test]
    fn test_is_tag_reference() {
        assert!(is_tag_reference("refs/tags/v1.0.0"));
        assert!(!is_tag_reference("refs/heads/main"));
        assert!(!is_tag_reference("refs/heads/tags"));
    }

    #[test]
    fn test_reference_accessors() {
        let oid = Oid::from_bytes(&[7; 20]).unwrap();
        let reference = Reference::new("refs/tags/v0.0.2", oid);
        assert_eq!(reference.short_name(), "v0.0.2");
        assert!(reference.is_tag());
        assert_eq!(reference.target, oid);
    }
}
