use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaletteError {
    /// Structural: a role binding points past the end of the palette.
    #[error("step {step} is out of range for a palette with {len} lines")]
    StepOutOfRange { step: u8, len: usize },
    /// Structural: a step value outside the 1-12 scale range.
    #[error("invalid step {0}: scale steps range from 1 to 12")]
    InvalidStep(u8),
    /// Structural: the palette block contained no color lines.
    #[error("palette contains no color lines")]
    EmptyPalette,
    /// Lexical: a line with no `#`-delimited hex value.
    #[error("no `#` hex value in line `{0}`")]
    MissingHex(String),
    /// Numeric: the extracted text is not a 6-digit hex color.
    #[error("invalid hex color `{value}`: {source}")]
    InvalidHex {
        value: String,
        source: hex::FromHexError,
    },
}

pub type Result<T> = std::result::Result<T, PaletteError>;
