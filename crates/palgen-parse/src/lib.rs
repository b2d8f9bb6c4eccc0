//! Palette parsing and color extraction.
//!
//! This crate turns a block of CSS custom-property color tokens into
//! resolved color values:
//!
//! - **palette**: line splitting and step addressing for one scale block
//! - **extract**: dark-mode hex extraction and RGB decoding

pub mod extract;
pub mod palette;

pub use extract::{ResolvedRole, ResolvedStep, dark_hex, resolve_roles, resolve_scale};
pub use palette::Palette;
