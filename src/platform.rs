// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Target platform for build lookups and URL building for the release index
//!
//! The release index names platforms with Go-style identifiers (`linux`,
//! `darwin`, `amd64`, `arm64`, ...). Only one OS/architecture pair is
//! looked up by the CLI.

/// Base URL of the public release index
pub const RELEASES_BASE_URL: &str = "https://releases.hashicorp.com/";

/// A platform as named by the release index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    /// Operating system identifier (e.g. "linux")
    pub os: &'static str,
    /// Architecture identifier (e.g. "amd64")
    pub arch: &'static str,
}

impl Platform {
    /// Linux x86_64, the platform whose build URL is reported
    pub const LINUX_AMD64: Platform = Platform {
        os: "linux",
        arch: "amd64",
    };

    /// Check whether a build's OS and architecture identifiers name this platform
    ///
    /// Comparison is exact; the index always uses lowercase identifiers.
    #[must_use]
    pub fn matches(&self, os: &str, arch: &str) -> bool {
        self.os == os && self.arch == arch
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

/// Build the URL of a product's release index
///
/// # Arguments
/// * `base_url` - Base URL of the release index, with or without a trailing slash
/// * `product` - Product identifier (e.g. "terraform")
///
/// # Examples
/// ```
/// use relcheck::platform::index_url;
/// assert_eq!(
///     index_url("https://releases.hashicorp.com/", "vault"),
///     "https://releases.hashicorp.com/vault/index.json"
/// );
/// assert_eq!(
///     index_url("http://localhost:8080", "vault"),
///     "http://localhost:8080/vault/index.json"
/// );
/// ```
pub fn index_url(base_url: &str, product: &str) -> String {
    format!("{}/{}/index.json", base_url.trim_end_matches('/'), product)
}
