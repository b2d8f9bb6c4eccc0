//! Source-code literal rendering for extracted palettes.
//!
//! Turns resolved colors into lines of generated source text: color
//! constructor calls with decimal RGB channels, or quoted hex-string
//! constants. Every literal ends with a trailing comma so the output can
//! be pasted directly into an array or struct literal.

mod render;

pub use render::{
    EmitOptions, LiteralFormat, SEPARATOR_WIDTH, render_named, render_scale, separator,
};
