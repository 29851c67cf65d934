//! Homebrew formula rendering.
//!
//! The formula is a fixed template over the resolved release data; rendering
//! is pure string substitution and the write is a single buffered overwrite.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::types::ResolvedArtifact;

/// Formula description; static across releases.
pub const FORMULA_DESC: &str = "Command-line tool for Google Workspace admins";

/// Upstream project homepage; static across releases.
pub const FORMULA_HOMEPAGE: &str = "https://github.com/GAM-team/GAM";

/// SPDX license identifier of the packaged tool; static across releases.
pub const FORMULA_LICENSE: &str = "Apache-2.0";

#[derive(Error, Debug)]
pub enum FormulaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the complete `gam.rb` formula text.
///
/// Both architectures are required by signature: there is no partial
/// document. The version is embedded as given; callers normalize the tag
/// first.
pub fn render(version: &str, arm64: &ResolvedArtifact, x86_64: &ResolvedArtifact) -> String {
    format!(
        r#"# frozen_string_literal: true

class Gam < Formula
  desc "{FORMULA_DESC}"
  homepage "{FORMULA_HOMEPAGE}"
  version "{version}"
  license "{FORMULA_LICENSE}"

  on_arm do
    url "{arm_url}"
    sha256 "{arm_sha}"
  end

  on_intel do
    url "{intel_url}"
    sha256 "{intel_sha}"
  end

  def install
    # The archive unpacks to a self-contained "gam" directory; install all of
    # it into libexec and expose the executable on PATH via a symlink.
    libexec.install Dir["*"]
    bin.install_symlink libexec/"gam"
  end

  test do
    system bin/"gam", "version"
  end
end
"#,
        arm_url = arm64.url,
        arm_sha = arm64.sha256,
        intel_url = x86_64.url,
        intel_sha = x86_64.sha256,
    )
}

/// Write the rendered formula in one whole-file overwrite.
///
/// The text is fully buffered before the write, so a failure never leaves
/// partially streamed template output behind. The parent directory is created
/// if missing.
pub fn write_formula(path: &Path, text: &str) -> Result<(), FormulaError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sha256Hash;

    fn artifact(url: &str, sha: &str) -> ResolvedArtifact {
        ResolvedArtifact {
            url: url.to_string(),
            sha256: Sha256Hash::new(sha),
        }
    }

    #[test]
    fn test_render_embeds_all_fields() {
        let text = render(
            "1.2.3",
            &artifact("https://x/a", "aaa"),
            &artifact("https://x/b", "bbb"),
        );

        assert!(text.contains("class Gam < Formula"));
        assert!(text.contains(&format!("desc \"{FORMULA_DESC}\"")));
        assert!(text.contains(&format!("homepage \"{FORMULA_HOMEPAGE}\"")));
        assert!(text.contains("version \"1.2.3\""));
        assert!(text.contains(&format!("license \"{FORMULA_LICENSE}\"")));
        assert!(text.contains("url \"https://x/a\""));
        assert!(text.contains("sha256 \"aaa\""));
        assert!(text.contains("url \"https://x/b\""));
        assert!(text.contains("sha256 \"bbb\""));
        assert!(text.contains("system bin/\"gam\", \"version\""));
    }

    #[test]
    fn test_render_arm_block_precedes_intel_block() {
        let text = render(
            "1.2.3",
            &artifact("https://x/arm", "aaa"),
            &artifact("https://x/intel", "bbb"),
        );
        let arm = text.find("on_arm do").unwrap();
        let intel = text.find("on_intel do").unwrap();
        assert!(arm < intel);
        assert!(text.find("https://x/arm").unwrap() > arm);
        assert!(text.find("https://x/arm").unwrap() < intel);
    }

    #[test]
    fn test_write_overwrites_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Formula").join("gam.rb");

        write_formula(&path, "first, longer content\n").unwrap();
        write_formula(&path, "second\n").unwrap();

        let got = std::fs::read_to_string(&path).unwrap();
        assert_eq!(got, "second\n");
    }
}
