//! Generate the Homebrew formula from the latest GAM release.

use std::path::Path;

use anyhow::{Context, Result, bail};
use reqwest::Client;

use gambrew::core::formula;
use gambrew::core::select::{MACOS_ARM64, MACOS_X86_64, select_artifact};
use gambrew::core::version::normalize_version;
use gambrew::registry::github;

/// Fetch the latest release, resolve both macOS artifacts, render the
/// formula, and write it.
///
/// Stops before writing when either required artifact is missing; a prior
/// file at `output` is left untouched in that case. With `dry_run` the
/// rendered formula goes to stdout instead of disk.
pub async fn generate(api_url: &str, output: &Path, dry_run: bool) -> Result<()> {
    let client = Client::new();

    let release =
        github::fetch_latest_release(&client, api_url, gambrew::GAM_OWNER, gambrew::GAM_REPO)
            .await
            .context("Failed to fetch latest GAM release from GitHub")?;

    let version = normalize_version(&release.tag_name);

    let arm64 = select_artifact(&release.assets, MACOS_ARM64);
    let x86_64 = select_artifact(&release.assets, MACOS_X86_64);

    match (arm64, x86_64) {
        (Some(arm64), Some(x86_64)) => {
            let text = formula::render(&version, &arm64, &x86_64);

            if dry_run {
                print!("{text}");
                return Ok(());
            }

            formula::write_formula(output, &text)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("✓ Generated {} for GAM v{version}", output.display());
            Ok(())
        }
        (arm64, x86_64) => {
            let mut missing = Vec::new();
            if arm64.is_none() {
                missing.push(MACOS_ARM64.arch);
            }
            if x86_64.is_none() {
                missing.push(MACOS_X86_64.arch);
            }
            bail!(
                "Could not find required macOS assets in release {} (missing: {})",
                release.tag_name,
                missing.join(", ")
            );
        }
    }
}
