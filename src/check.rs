// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Comparing the latest release against an expected version

use log::debug;

use crate::error::{Error, Result};
use crate::release::{Build, Release, Version};

/// Outcome of checking a release index against an expected version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    /// Latest stable version in the index
    pub latest: Version,
    /// Build of the latest version for the target platform, if published
    pub build: Option<Build>,
    /// Whether the latest version string equals the expected one
    pub matches: bool,
}

/// Resolve the latest stable release and compare it to an expected version
///
/// An omitted expected version compares as the empty string and so never
/// matches.
///
/// # Arguments
/// * `release` - Decoded release index
/// * `product` - Product identifier, used for error reporting
/// * `expected` - Version the caller expects to be the latest
///
/// # Errors
/// Returns `Error::NoReleases` if the index holds no stable version
pub fn check(release: &Release, product: &str, expected: Option<&str>) -> Result<Check> {
    let latest = release.latest_release().ok_or_else(|| Error::NoReleases {
        product: product.to_string(),
    })?;
    debug!("Latest stable release of {product} is {}", latest.version);

    let build = latest.build();
    if build.is_none() {
        debug!("No linux/amd64 build published for {}", latest.version);
    }

    let matches = latest.version == expected.unwrap_or_default();
    Ok(Check {
        latest: latest.clone(),
        build,
        matches,
    })
}
