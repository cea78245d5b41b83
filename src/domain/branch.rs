/// Branch names that count as the project's main line
pub const MAIN_BRANCHES: [&str; 3] = ["master", "main", "trunk"];

/// Branch prefixes that denote an officially released line of history
pub const RELEASE_BRANCHES: [&str; 5] = ["master", "main", "trunk", "release", "hotfix"];

/// Represents the checked-out branch with its classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
    pub is_main: bool,
}

impl BranchContext {
    /// Create a new branch context from a short branch name
    pub fn new(name: impl Into<String>) -> Self {
        let name_str = name.into();
        let is_main = MAIN_BRANCHES.contains(&name_str.as_str());

        BranchContext {
            name: name_str,
            is_main,
        }
    }

    /// First `/`-separated segment of the branch name (`release` for `release/1.2`)
    pub fn family(&self) -> &str {
        self.name.split('/').next().unwrap_or_default()
    }

    /// Check if the branch belongs to the release family
    /// (master, main, trunk, release/*, hotfix/*)
    pub fn is_release_branch(&self) -> bool {
        RELEASE_BRANCHES.contains(&self.family())
    }
}
