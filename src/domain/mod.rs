//! Domain logic - pure naming and versioning rules independent of git operations

pub mod branch;
pub mod reference;
pub mod tag;
pub mod version;

pub use branch::BranchContext;
pub use reference::{short_name, Reference};
pub use tag::{is_tag_semver_shaped, Tag, DEFAULT_TAG_PREFIX};
pub use version::{canonical_version, VersionTriple};
