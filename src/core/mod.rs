//! Core resolution and rendering logic.

pub mod formula;
pub mod select;
pub mod version;
