//! Integration tests for palette extraction.

use palgen_model::{PaletteError, RoleBinding, RoleMap, StepIndex};
use palgen_parse::{Palette, resolve_roles, resolve_scale};

const SLATE: &str = "
--slate-1: light-dark(#fcfcfd, #111113);
--slate-2: light-dark(#f9f9fb, #18191b);
--slate-3: light-dark(#f0f0f3, #212225);
--slate-4: light-dark(#e8e8ec, #272a2d);
--slate-5: light-dark(#e0e1e6, #2e3135);
--slate-6: light-dark(#d9d9e0, #363a3f);
--slate-7: light-dark(#cdced6, #43484e);
--slate-8: light-dark(#b9bbc6, #5a6169);
--slate-9: light-dark(#8b8d98, #696e77);
--slate-10: light-dark(#80838d, #777b84);
--slate-11: light-dark(#60646c, #b0b4ba);
--slate-12: light-dark(#1c2024, #edeef0);
";

fn role_map(entries: &[(&str, u8)]) -> RoleMap {
    entries
        .iter()
        .map(|(name, step)| RoleBinding {
            name: (*name).to_string(),
            step: StepIndex::new(*step).unwrap(),
        })
        .collect()
}

#[test]
fn named_extraction_selects_the_dark_value() {
    let palette = Palette::parse(SLATE).unwrap();
    let roles = role_map(&[("bg", 1)]);

    let resolved = resolve_roles(&palette, &roles).unwrap();

    assert_eq!(resolved.len(), 1);
    let bg = &resolved[0];
    assert_eq!(bg.name, "bg");
    assert_eq!(bg.hex, "111113");
    // The dark value, not the light (252, 252, 253) one.
    assert_eq!((bg.rgb.r, bg.rgb.g, bg.rgb.b), (17, 17, 19));
}

#[test]
fn named_extraction_preserves_binding_order() {
    let palette = Palette::parse(SLATE).unwrap();
    let roles = role_map(&[("bg_solid", 9), ("bg", 1), ("border", 6)]);

    let resolved = resolve_roles(&palette, &roles).unwrap();

    let names: Vec<&str> = resolved.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["bg_solid", "bg", "border"]);
}

#[test]
fn full_scale_yields_one_step_per_line() {
    let palette = Palette::parse(SLATE).unwrap();

    let resolved = resolve_scale(&palette).unwrap();

    assert_eq!(resolved.len(), 12);
    assert_eq!(resolved[0].hex, "111113");
    assert_eq!(resolved[11].hex, "edeef0");
    let positions: Vec<usize> = resolved.iter().map(|s| s.position).collect();
    assert_eq!(positions, (1..=12).collect::<Vec<_>>());
}

#[test]
fn blank_lines_do_not_change_the_result() {
    let trimmed = Palette::parse(SLATE.trim()).unwrap();
    let untrimmed = Palette::parse(SLATE).unwrap();

    assert_eq!(
        resolve_scale(&trimmed).unwrap(),
        resolve_scale(&untrimmed).unwrap()
    );
}

#[test]
fn binding_past_the_end_fails_the_whole_run() {
    let short = "--x-1: light-dark(#fcfcfd, #111113);\n--x-2: light-dark(#f9f9fb, #18191b);";
    let palette = Palette::parse(short).unwrap();
    let roles = role_map(&[("bg", 1), ("fg_high_contrast", 12)]);

    let result = resolve_roles(&palette, &roles);

    assert!(matches!(
        result,
        Err(PaletteError::StepOutOfRange { step: 12, len: 2 })
    ));
}

#[test]
fn malformed_hex_fails_at_decode() {
    let palette = Palette::parse("--x-1: light-dark(#fcfcfd, #11111);").unwrap();
    let roles = role_map(&[("bg", 1)]);

    assert!(matches!(
        resolve_roles(&palette, &roles),
        Err(PaletteError::InvalidHex { .. })
    ));
}

#[test]
fn unexpected_trailing_punctuation_reaches_the_decoder() {
    // A `]` is not part of the stripped character set; it stays embedded
    // in the extracted text and fails numerically, not lexically.
    let palette = Palette::parse("--x-1: light-dark(#fcfcfd, #111113];").unwrap();
    let roles = role_map(&[("bg", 1)]);

    assert!(matches!(
        resolve_roles(&palette, &roles),
        Err(PaletteError::InvalidHex { .. })
    ));
}
