use std::fmt;

/// Caller-supplied version components before release classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct VersionTriple {
    pub major: u64,
    pub minor: u64,
    pub micro: u64,
}

impl VersionTriple {
    /// Create a new version triple
    pub fn new(major: u64, minor: u64, micro: u64) -> Self {
        VersionTriple {
            major,
            minor,
            micro,
        }
    }

    /// "major.minor" form used for the artifact's `short_version`
    pub fn short_version(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&canonical_version(self.major, self.minor, self.micro))
    }
}

/// Format version components as `major.minor.micro`
pub fn canonical_version(major: u64, minor: u64, micro: u64) -> String {
    format!("{}.{}.{}", major, minor, micro)
}
