// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Release Check (relcheck) - Main Application
//!
//! Looks up a product's latest stable release in the release index and
//! exits 0 only if it equals the expected version. With `--url`, the
//! download URL of the linux/amd64 build is printed first.

use std::process::ExitCode;

use clap::Parser;

use relcheck::cli::Cli;
use relcheck::{RELEASES_BASE_URL, check, fetch_release};

/// Main application entry point
///
/// Exit status is 0 when the latest release matches the expected version
/// and 1 on mismatch or any fatal error.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Fetch, select and compare; returns whether the latest release matched
fn run(cli: &Cli) -> relcheck::Result<bool> {
    let base_url = cli.base_url.as_deref().unwrap_or(RELEASES_BASE_URL);
    let release = fetch_release(base_url, &cli.product)?;
    let result = check(&release, &cli.product, cli.expected.as_deref())?;

    if cli.url
        && let Some(build) = &result.build
    {
        println!("{}", build.url);
    }

    Ok(result.matches)
}
