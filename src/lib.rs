// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Release Check Library
//!
//! This library fetches a product's release index, selects its latest stable
//! version, looks up the linux/amd64 build of that version and compares the
//! version against an expected one.

pub mod check;
pub mod cli;
pub mod error;
pub mod fetch;
pub mod platform;
pub mod release;

// Re-export commonly used items at the crate root for convenience
pub use check::{Check, check};
pub use error::{Error, Result};
pub use fetch::fetch_release;
pub use platform::{Platform, RELEASES_BASE_URL, index_url};
pub use release::{Build, Release, Version};
