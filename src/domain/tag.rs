use semver::Version;

/// Prefix carried by version tags unless configured otherwise
pub const DEFAULT_TAG_PREFIX: &str = "v";

/// Represents a git tag by its short name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Semantic version carried by the tag (e.g., "v1.2.3" -> 1.2.3).
    ///
    /// Returns `None` when the tag lacks `prefix` or the remainder is not a
    /// valid semantic version.
    pub fn version(&self, prefix: &str) -> Option<Version> {
        let rest = self.name.strip_prefix(prefix)?;
        Version::parse(rest).ok()
    }
}

/// Check whether `name` is `prefix` followed by a semantic version.
///
/// Parse failures are folded into `false`.
///
/// # Example
/// ```
/// use release_stamp::domain::is_tag_semver_shaped;
/// assert!(is_tag_semver_shaped("v1.2.3", "v"));
/// assert!(!is_tag_semver_shaped("v1.2", "v"));
/// ```
pub fn is_tag_semver_shaped(name: &str, prefix: &str) -> bool {
    Tag::new(name).version(prefix).is_some()
}
