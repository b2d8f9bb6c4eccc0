//! Dark-value extraction over a parsed palette.

use palgen_model::{PaletteError, Result, Rgb, RoleMap, StepIndex};
use tracing::debug;

use crate::palette::Palette;

/// A semantic role resolved against a palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRole {
    pub name: String,
    pub step: StepIndex,
    pub hex: String,
    pub rgb: Rgb,
}

/// One scale step resolved to its dark color.
///
/// `position` is the 1-based line position. It is not a [`StepIndex`]
/// because full-scale extraction walks every line unconditionally, even
/// in a block longer than the conventional 12 steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStep {
    pub position: usize,
    pub hex: String,
    pub rgb: Rgb,
}

/// Extract the dark-mode hex value from one palette line.
///
/// Takes the substring after the *last* `#` in the line. In a
/// `light-dark(#light, #dark)` pair the first `#` introduces the light
/// value and the last the dark value, so the last occurrence is the one
/// that selects dark mode. Trailing `)` and `;` characters are then
/// stripped. No length check happens here; residue from unexpected
/// trailing punctuation fails at hex decode.
///
/// # Errors
///
/// Returns [`PaletteError::MissingHex`] when the line contains no `#`.
pub fn dark_hex(line: &str) -> Result<&str> {
    let (_, tail) = line
        .rsplit_once('#')
        .ok_or_else(|| PaletteError::MissingHex(line.to_string()))?;
    Ok(tail.trim_end_matches([')', ';']))
}

/// Resolve every role binding against the palette, in binding order.
///
/// Binding order is preserved exactly; it determines the order of the
/// generated constants. Any failure aborts the whole resolution with no
/// partial output.
pub fn resolve_roles(palette: &Palette, roles: &RoleMap) -> Result<Vec<ResolvedRole>> {
    let mut resolved = Vec::with_capacity(roles.len());
    for binding in roles {
        let line = palette.line(binding.step)?;
        let hex = dark_hex(line)?;
        let rgb = Rgb::from_hex(hex)?;
        resolved.push(ResolvedRole {
            name: binding.name.clone(),
            step: binding.step,
            hex: hex.to_string(),
            rgb,
        });
    }
    debug!(role_count = resolved.len(), "resolved semantic roles");
    Ok(resolved)
}

/// Resolve every step of the scale, in line order.
pub fn resolve_scale(palette: &Palette) -> Result<Vec<ResolvedStep>> {
    let mut resolved = Vec::with_capacity(palette.len());
    for (offset, line) in palette.lines().iter().enumerate() {
        let hex = dark_hex(line)?;
        let rgb = Rgb::from_hex(hex)?;
        resolved.push(ResolvedStep {
            position: offset + 1,
            hex: hex.to_string(),
            rgb,
        });
    }
    debug!(step_count = resolved.len(), "resolved full scale");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_the_last_hash_not_the_first() {
        let hex = dark_hex("--slate-1: light-dark(#fcfcfd, #111113);").unwrap();
        assert_eq!(hex, "111113");
    }

    #[test]
    fn strips_paren_without_semicolon() {
        let hex = dark_hex("--slate-1: light-dark(#fcfcfd, #111113)").unwrap();
        assert_eq!(hex, "111113");
    }

    #[test]
    fn line_without_hash_is_a_lexical_error() {
        assert!(matches!(
            dark_hex("--slate-1: transparent;"),
            Err(PaletteError::MissingHex(_))
        ));
    }
}
