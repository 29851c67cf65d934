//! Asset selection for macOS release archives.
//!
//! GAM asset names encode their platform indicators
//! (`gam-7.18.03-macos15.5-arm64.tar.xz`). Selection is a conjunctive
//! substring match against a named [`PlatformRule`], with the macOS
//! sub-version used to rank multiple builds of the same architecture.

use tracing::debug;

use crate::registry::github::GithubAsset;
use crate::types::{ResolvedArtifact, Sha256Hash};

/// Markers that must all appear in an asset filename (case-sensitive) for the
/// asset to be a candidate for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformRule {
    /// Operating-system marker.
    pub os: &'static str,
    /// CPU-architecture marker.
    pub arch: &'static str,
    /// Archive-extension marker.
    pub ext: &'static str,
}

/// macOS ARM64 archive.
pub const MACOS_ARM64: PlatformRule = PlatformRule {
    os: "macos",
    arch: "arm64",
    ext: ".tar.xz",
};

/// macOS Intel archive.
pub const MACOS_X86_64: PlatformRule = PlatformRule {
    os: "macos",
    arch: "x86_64",
    ext: ".tar.xz",
};

impl PlatformRule {
    /// Check whether an asset filename carries all three markers.
    pub fn matches(&self, name: &str) -> bool {
        name.contains(self.os) && name.contains(self.arch) && name.contains(self.ext)
    }
}

/// Select the best-matching downloadable artifact for one platform.
///
/// Candidates whose names carry a parseable macOS sub-version (`macos15.5`)
/// are ranked by that `(major, minor)` pair and the numerically greatest
/// wins. When no candidate encodes a sub-version, the first match in listing
/// order is taken. Both rules resolve ties to the earliest asset, so repeated
/// resolution of the same release snapshot always yields the same artifact.
///
/// Returns `None` when nothing matches; the caller decides whether that is
/// fatal. The asset slice is never mutated or reordered.
pub fn select_artifact(assets: &[GithubAsset], rule: PlatformRule) -> Option<ResolvedArtifact> {
    let mut first: Option<&GithubAsset> = None;
    let mut best: Option<((u32, u32), &GithubAsset)> = None;

    for asset in assets {
        if !rule.matches(&asset.name) {
            continue;
        }
        if asset.digest.is_none() {
            debug!("skipping {}: no digest in release payload", asset.name);
            continue;
        }
        if first.is_none() {
            first = Some(asset);
        }
        if let Some(ver) = macos_release(&asset.name) {
            // Strictly-greater comparison keeps the earliest asset on ties.
            if best.as_ref().is_none_or(|(b, _)| ver > *b) {
                best = Some((ver, asset));
            }
        }
    }

    let asset = best.map(|(_, a)| a).or(first)?;
    let digest = asset.digest.as_deref()?;
    Some(ResolvedArtifact {
        url: asset.browser_download_url.clone(),
        sha256: Sha256Hash::new(extract_checksum(digest)),
    })
}

/// Parse the `(major, minor)` macOS sub-version out of an asset name
/// (`...macos15.5-arm64...` -> `(15, 5)`).
///
/// Returns `None` unless the digits after the `macos` marker form exactly two
/// dot-separated integers; malformed names are skipped, never an error.
fn macos_release(name: &str) -> Option<(u32, u32)> {
    let rest = &name[name.find("macos")? + "macos".len()..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(rest.len());
    let (major, minor) = rest[..end].split_once('.')?;
    Some((major.parse().ok()?, minor.parse().ok()?))
}

/// Extract the hex checksum from a digest string (`sha256:abc...` -> `abc...`).
///
/// Always the segment after the last `:`, so extra separators earlier in the
/// string are tolerated; a digest with no separator passes through whole.
fn extract_checksum(digest: &str) -> &str {
    digest.rsplit_once(':').map_or(digest, |(_, tail)| tail)
}
