//! Remote release sources.

pub mod github;
