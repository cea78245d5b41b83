//! Generated version artifact
//!
//! The artifact is a small Python-syntax module consumed at build/import
//! time. It is rendered in one piece and written with a single call, so a
//! destination is either fully replaced or left untouched.

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::info;

use crate::domain::VersionTriple;
use crate::error::{ReleaseStampError, Result};

/// First line of every generated artifact
pub const ARTIFACT_HEADER: &str = "# THIS FILE IS GENERATED FROM SETUP.PY";

/// Suffix appended to `full_version` for unreleased checkouts
pub const DEVELOP_SUFFIX: &str = "-develop";

/// Resolved version metadata, as persisted in the artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionArtifact {
    pub major: u64,
    pub short_version: String,
    pub version: String,
    pub full_version: String,
    pub is_released: bool,
}

impl VersionArtifact {
    /// Build the artifact for a version triple and release flag.
    ///
    /// `full_version` equals `version` for releases and carries the
    /// `-develop` suffix otherwise.
    pub fn new(triple: VersionTriple, is_released: bool) -> Self {
        let version = triple.to_string();
        let full_version = if is_released {
            version.clone()
        } else {
            format!("{}{}", version, DEVELOP_SUFFIX)
        };

        VersionArtifact {
            major: triple.major,
            short_version: triple.short_version(),
            version,
            full_version,
            is_released,
        }
    }

    /// Render the fixed artifact template
    pub fn render(&self) -> String {
        format!(
            "{header}\n\
             major = {major}\n\
             short_version = '{short_version}'\n\
             version = '{version}'\n\
             full_version = '{full_version}'\n\
             is_released = {is_released}\n",
            header = ARTIFACT_HEADER,
            major = self.major,
            short_version = self.short_version,
            version = self.version,
            full_version = self.full_version,
            is_released = if self.is_released { "True" } else { "False" },
        )
    }

    /// Write the rendered artifact to `destination`, replacing any prior content
    pub fn write_to(&self, destination: impl AsRef<Path>) -> Result<()> {
        let destination = destination.as_ref();
        fs::write(destination, self.render())?;
        info!(
            path = %destination.display(),
            full_version = %self.full_version,
            is_released = self.is_released,
            "wrote version artifact"
        );
        Ok(())
    }

    /// Parse a previously generated artifact.
    ///
    /// Blank lines and `#` comments are skipped. Every field must be present
    /// exactly once and unknown keys are rejected.
    pub fn parse(content: &str) -> Result<Self> {
        let line_re = Regex::new(r"^([a-z_]+)\s*=\s*(.+?)\s*$")
            .map_err(|e| ReleaseStampError::artifact(format!("Invalid line pattern: {}", e)))?;

        let mut major = None;
        let mut short_version = None;
        let mut version = None;
        let mut full_version = None;
        let mut is_released = None;

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let caps = line_re.captures(line).ok_or_else(|| {
                ReleaseStampError::artifact(format!("Line {}: expected 'key = value'", index + 1))
            })?;
            let key = &caps[1];
            let value = &caps[2];

            let slot_taken = match key {
                "major" => major.replace(parse_int(key, value)?).is_some(),
                "short_version" => short_version.replace(parse_str(key, value)?).is_some(),
                "version" => version.replace(parse_str(key, value)?).is_some(),
                "full_version" => full_version.replace(parse_str(key, value)?).is_some(),
                "is_released" => is_released.replace(parse_bool(key, value)?).is_some(),
                other => {
                    return Err(ReleaseStampError::artifact(format!(
                        "Line {}: unknown key '{}'",
                        index + 1,
                        other
                    )))
                }
            };

            if slot_taken {
                return Err(ReleaseStampError::artifact(format!(
                    "Line {}: duplicate key '{}'",
                    index + 1,
                    key
                )));
            }
        }

        Ok(VersionArtifact {
            major: major.ok_or_else(|| missing("major"))?,
            short_version: short_version.ok_or_else(|| missing("short_version"))?,
            version: version.ok_or_else(|| missing("version"))?,
            full_version: full_version.ok_or_else(|| missing("full_version"))?,
            is_released: is_released.ok_or_else(|| missing("is_released"))?,
        })
    }

    /// Read and parse the artifact stored at `path`
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

/// Render the artifact for `triple` and write it to `destination`.
pub fn render_artifact(
    triple: VersionTriple,
    is_released: bool,
    destination: impl AsRef<Path>,
) -> Result<VersionArtifact> {
    let artifact = VersionArtifact::new(triple, is_released);
    artifact.write_to(destination)?;
    Ok(artifact)
}

fn missing(key: &str) -> ReleaseStampError {
    ReleaseStampError::artifact(format!("Missing field '{}'", key))
}

fn parse_int(key: &str, value: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .map_err(|_| ReleaseStampError::artifact(format!("'{}' is not an integer: {}", key, value)))
}

fn parse_str(key: &str, value: &str) -> Result<String> {
    value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .map(str::to_string)
        .ok_or_else(|| {
            ReleaseStampError::artifact(format!("'{}' is not a quoted string: {}", key, value))
        })
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "True" => Ok(true),
        "False" => Ok(false),
        _ => Err(ReleaseStampError::artifact(format!(
            "'{}' is not True or False: {}",
            key, value
        ))),
    }
}
