//! Command modules - one file per CLI command

pub mod check;
pub mod generate;
