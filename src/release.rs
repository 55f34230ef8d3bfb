// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Release index data model and latest-release selection
//!
//! A product's release index maps version strings to the builds published
//! for that version. This module decodes that shape and picks the latest
//! stable version out of it.

use std::cell::OnceCell;
use std::collections::HashMap;

use log::warn;
use serde::Deserialize;

use crate::Platform;

/// One platform-specific artifact of a version
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Build {
    pub name: String,
    pub version: String,
    pub os: String,
    pub arch: String,
    pub filename: String,
    pub url: String,
}

/// A published version of a product and its builds
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Version {
    pub name: String,
    /// Version string as published (e.g. "1.5.7")
    pub version: String,
    /// File name of the SHA256SUMS document
    pub shasums: String,
    /// File name of the SHA256SUMS signature
    #[serde(rename = "shasums_signature")]
    pub shasums_sig: String,
    /// Builds in index order
    pub builds: Vec<Build>,
}

impl Version {
    /// Find the build for the fixed target platform (linux/amd64)
    #[must_use]
    pub fn build(&self) -> Option<Build> {
        self.build_for(&Platform::LINUX_AMD64)
    }

    /// Find the first build matching a platform
    ///
    /// Builds are scanned in index order; if more than one matches, the
    /// first wins. Returns an owned copy of the build.
    #[must_use]
    pub fn build_for(&self, platform: &Platform) -> Option<Build> {
        self.builds
            .iter()
            .find(|b| platform.matches(&b.os, &b.arch))
            .cloned()
    }
}

/// A product's release index
///
/// The list of stable versions is derived from the version keys on first use
/// and kept for the lifetime of the value. The version map is read-only
/// once the release exists.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Release {
    pub name: String,
    versions: HashMap<String, Version>,
    /// Stable versions sorted ascending, paired with their index key
    #[serde(skip)]
    stable: OnceCell<Vec<(semver::Version, String)>>,
}

impl Release {
    #[must_use]
    pub fn new(name: impl Into<String>, versions: HashMap<String, Version>) -> Self {
        Self {
            name: name.into(),
            versions,
            stable: OnceCell::new(),
        }
    }

    /// Versions keyed by version string
    #[must_use]
    pub fn versions(&self) -> &HashMap<String, Version> {
        &self.versions
    }

    /// Get the latest stable version
    ///
    /// Version keys that are not valid semantic versions are skipped with a
    /// warning. Pre-release versions are never selected.
    ///
    /// # Returns
    /// `Some(version)` for the highest stable version, `None` if the index
    /// has no stable release
    #[must_use]
    pub fn latest_release(&self) -> Option<&Version> {
        let (_, key) = self.stable().last()?;
        self.versions.get(key)
    }

    /// Stable versions in ascending semver order
    pub fn stable_versions(&self) -> impl Iterator<Item = &semver::Version> {
        self.stable().iter().map(|(v, _)| v)
    }

    fn stable(&self) -> &[(semver::Version, String)] {
        self.stable.get_or_init(|| collect_stable(self.versions.keys()))
    }
}

fn collect_stable<'a>(keys: impl Iterator<Item = &'a String>) -> Vec<(semver::Version, String)> {
    let mut stable: Vec<(semver::Version, String)> = keys
        .filter_map(|key| match semver::Version::parse(key) {
            Ok(v) => Some((v, key.clone())),
            Err(e) => {
                warn!("Failed to parse version {key}: {e}");
                None
            }
        })
        .filter(|(v, _)| v.pre.is_empty())
        .collect();

    stable.sort_by(|a, b| a.0.cmp(&b.0));
    stable
}
