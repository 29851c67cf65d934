//! Validate a generated formula file.

use std::path::Path;

use anyhow::{Context, Result, bail};

/// Markers the template always emits; a generated formula missing any of
/// these is corrupt or hand-edited beyond recognition.
const REQUIRED_MARKERS: &[&str] = &[
    "class Gam < Formula",
    "version \"",
    "on_arm do",
    "on_intel do",
    "def install",
    "test do",
];

/// Check that an existing formula file carries every field the generator
/// emits, including a `url`/`sha256` pair per architecture block.
pub fn check(path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    for marker in REQUIRED_MARKERS {
        if !text.contains(marker) {
            bail!("{} is missing `{}`", path.display(), marker.trim_end());
        }
    }
    for field in ["url \"", "sha256 \""] {
        if text.matches(field).count() < 2 {
            bail!(
                "{} must carry `{}` in both architecture blocks",
                path.display(),
                field.trim_end()
            );
        }
    }

    println!("✓ Formula is valid: {}", path.display());
    Ok(())
}
