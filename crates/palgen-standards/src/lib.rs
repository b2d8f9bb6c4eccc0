//! Embedded defaults for the palette code generator.
//!
//! Carries the default slate scale (the dark-theme gray scale the
//! original theme was generated from) and the default semantic role map
//! as embedded data, so the tool works with no input files at all.

mod error;

use palgen_model::RoleMap;

pub use error::StandardsError;

/// The default color scale: 12 slate steps as CSS custom-property tokens.
pub const DEFAULT_SCALE_CSS: &str = include_str!("../data/slate.css");

const DEFAULT_ROLES_JSON: &str = include_str!("../data/roles.json");

/// Load the default semantic role map.
///
/// Role order matches the order the generated constants are expected in
/// by the consuming theme code.
///
/// # Errors
///
/// Returns an error if the embedded JSON fails to parse, which indicates
/// a broken build rather than bad user input.
pub fn default_role_map() -> Result<RoleMap, StandardsError> {
    parse_role_map(DEFAULT_ROLES_JSON)
}

/// Parse a role map from JSON text.
///
/// The format is an array of `{"name": ..., "step": ...}` objects;
/// array order is the output order.
pub fn parse_role_map(text: &str) -> Result<RoleMap, StandardsError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_role_map_loads() {
        let map = default_role_map().expect("embedded role map");
        assert_eq!(map.len(), 12);
        let first = map.iter().next().unwrap();
        assert_eq!(first.name, "bg");
        assert_eq!(first.step.get(), 1);
        let last = map.iter().last().unwrap();
        assert_eq!(last.name, "fg_high_contrast");
        assert_eq!(last.step.get(), 12);
    }

    #[test]
    fn default_scale_has_twelve_token_lines() {
        let lines: Vec<&str> = DEFAULT_SCALE_CSS
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        assert_eq!(lines.len(), 12);
        assert!(lines.iter().all(|line| line.starts_with("--slate-")));
    }

    #[test]
    fn every_default_role_step_is_within_the_scale() {
        let map = default_role_map().unwrap();
        for binding in &map {
            assert!((1..=12).contains(&binding.step.get()));
        }
    }
}
