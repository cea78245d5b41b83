pub mod artifact;
pub mod boundary;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;
pub mod verify;

pub use artifact::{render_artifact, VersionArtifact};
pub use classifier::{is_released, is_released_at, list_tags};
pub use error::{ReleaseStampError, Result};
