//! Integration tests for hex color decoding.

use palgen_model::Rgb;
use proptest::prelude::*;

proptest! {
    /// Decoding then re-encoding any valid lowercase 6-digit hex string
    /// yields the original string unchanged.
    #[test]
    fn hex_round_trips(hex in "[0-9a-f]{6}") {
        let color = Rgb::from_hex(&hex).unwrap();
        prop_assert_eq!(color.to_hex(), hex);
    }

    /// Every 3-byte channel triple survives an encode/decode cycle.
    #[test]
    fn channels_round_trip(r: u8, g: u8, b: u8) {
        let color = Rgb { r, g, b };
        let decoded = Rgb::from_hex(&color.to_hex()).unwrap();
        prop_assert_eq!(decoded, color);
    }
}

#[test]
fn dark_slate_step_one() {
    let color = Rgb::from_hex("111113").unwrap();
    assert_eq!((color.r, color.g, color.b), (17, 17, 19));
}
