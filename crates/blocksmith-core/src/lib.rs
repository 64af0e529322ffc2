//! Core types for the blocksmith layout-to-markup compiler.
//!
//! This crate provides the foundational types used across the other
//! blocksmith crates:
//! - The layout model (sections, blocks, nested content)
//! - Style types (preset-or-literal values, spacing, borders)
//! - Error types
//! - Identifier generation for the target editor

pub mod errors;
pub mod id;
pub mod layout;
pub mod parse;
pub mod style;

pub use errors::*;
pub use id::*;
pub use layout::*;
pub use style::*;
