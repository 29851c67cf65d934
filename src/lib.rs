//! gambrew - Homebrew formula generator for GAM
//!
//! Resolves the most recent published release of
//! [GAM](https://github.com/GAM-team/GAM) from the GitHub API, selects the
//! macOS binary archives for both supported architectures, and renders the
//! Homebrew formula (`Formula/gam.rb`) that installs them.
//!
//! # Architecture
//!
//! Two components in a one-way pipeline:
//!
//! - **Resolver** ([`registry::github`] + [`core::select`]): fetches the
//!   release snapshot and picks one `(url, sha256)` pair per platform.
//! - **Renderer** ([`core::formula`]): a pure function of the resolved data
//!   that produces the formula text and performs one whole-file write.
//!
//! The release snapshot is immutable once fetched; nothing feeds back from the
//! renderer to the resolver, and nothing persists across runs.

pub mod core;
pub mod registry;
pub mod types;

// Re-exports for convenience
pub use crate::core::formula;
pub use crate::core::select;
pub use crate::core::version;

/// User-Agent sent with every GitHub API request (anonymous clients are
/// rejected by the API).
pub const USER_AGENT: &str = concat!("gambrew/", env!("CARGO_PKG_VERSION"));

/// Owner of the GitHub project the formula tracks.
pub const GAM_OWNER: &str = "GAM-team";

/// Repository name of the GitHub project the formula tracks.
pub const GAM_REPO: &str = "GAM";

/// Default GitHub API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default output path for the rendered formula, relative to the tap root.
pub const DEFAULT_FORMULA_PATH: &str = "Formula/gam.rb";
