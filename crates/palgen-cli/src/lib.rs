//! CLI library components for the palette code generator.

pub mod logging;
