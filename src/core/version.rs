//! Release tag normalization.

/// Strip a single leading `v` from a release tag (`v7.18.03` -> `7.18.03`).
///
/// Tags without the prefix pass through unchanged; the remainder is not
/// validated.
pub fn normalize_version(tag: &str) -> String {
    tag.strip_prefix('v').unwrap_or(tag).to_string()
}
