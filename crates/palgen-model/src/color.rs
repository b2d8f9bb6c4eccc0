use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};

/// One RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Decode a 6-hex-digit string (no leading `#`) as three consecutive
    /// 2-digit byte values: red, green, blue.
    pub fn from_hex(value: &str) -> Result<Self> {
        let mut channels = [0u8; 3];
        hex::decode_to_slice(value, &mut channels).map_err(|source| PaletteError::InvalidHex {
            value: value.to_string(),
            source,
        })?;
        Ok(Self {
            r: channels[0],
            g: channels[1],
            b: channels[2],
        })
    }

    /// Re-encode as a lowercase 6-digit hex string (no leading `#`).
    pub fn to_hex(self) -> String {
        hex::encode([self.r, self.g, self.b])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}
