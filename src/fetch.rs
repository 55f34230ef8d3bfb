// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Fetching a product's release index

use log::debug;

use crate::error::{Error, Result};
use crate::platform::index_url;
use crate::release::Release;

/// Fetch and decode the release index of a product
///
/// Issues a single blocking GET with no timeout and no retries.
///
/// # Arguments
/// * `base_url` - Base URL of the release index
/// * `product` - Product identifier (e.g. "terraform")
///
/// # Errors
/// Returns `Error::Fetch` if the request fails, `Error::Status` for a
/// non-success response and `Error::Decode` if the body is not a release index
pub fn fetch_release(base_url: &str, product: &str) -> Result<Release> {
    let url = index_url(base_url, product);
    debug!("Fetching release index from {url}");

    let resp = attohttpc::get(&url).send().map_err(|source| Error::Fetch {
        url: url.clone(),
        source,
    })?;

    if !resp.status().is_success() {
        return Err(Error::Status {
            url,
            status: resp.status().as_u16(),
        });
    }

    let body = resp.text().map_err(|source| Error::Fetch {
        url: url.clone(),
        source,
    })?;

    let release: Release =
        serde_json::from_str(&body).map_err(|source| Error::Decode { url, source })?;
    debug!(
        "Decoded release index for {} with {} versions",
        release.name,
        release.versions().len()
    );
    Ok(release)
}
