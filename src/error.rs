// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Fatal errors for release lookups

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent or its body could not be read
    #[error("Failed to fetch from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: attohttpc::Error,
    },

    #[error("Failed to fetch from {url}: HTTP status {status}")]
    Status { url: String, status: u16 },

    /// The response body is not a valid release index
    #[error("Failed to decode release index from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No releases found for {product}")]
    NoReleases { product: String },
}

pub type Result<T> = std::result::Result<T, Error>;
