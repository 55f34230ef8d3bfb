// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
// CLI argument definitions for relcheck
//
// Separated from main.rs so that build.rs can include this file
// to generate the man page via clap_mangen.

use clap::Parser;

/// CLI argument parser
#[derive(Parser, Debug)]
#[command(
    name = "relcheck",
    version,
    about = "Check whether a product's latest stable release matches an expected version",
    disable_version_flag = true
)]
#[command(arg(clap::Arg::new("version").long("version").action(clap::ArgAction::Version).help("Print version")))]
pub struct Cli {
    /// Product to look up in the release index (e.g. terraform)
    #[arg(value_name = "PRODUCT", value_parser = parse_product)]
    pub product: String,

    /// Version expected to be the latest stable release
    #[arg(value_name = "EXPECTED_VERSION")]
    pub expected: Option<String>,

    /// Print the download URL of the linux/amd64 build of the latest release
    #[arg(short = 'u', long = "url")]
    pub url: bool,

    /// Base URL of the release index (defaults to https://releases.hashicorp.com/)
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Make the operation more talkative
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_product(s: &str) -> Result<String, String> {
    let product = s.trim();
    if product.is_empty() {
        Err("product must not be empty".to_string())
    } else {
        Ok(product.to_string())
    }
}
