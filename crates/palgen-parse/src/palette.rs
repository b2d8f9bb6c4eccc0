//! Palette text parsing.
//!
//! A palette block is the body of one CSS color scale: 12 custom-property
//! declarations of the form
//! `--<scale>-<n>: light-dark(#<light>, #<dark>);`, one per line.

use palgen_model::{PaletteError, Result, StepIndex};
use tracing::debug;

/// One parsed color scale, as ordered source lines.
///
/// Line at position `i` corresponds to step `i + 1`. Ordering comes
/// from the source text; the index embedded in the property name is
/// never consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    lines: Vec<String>,
}

impl Palette {
    /// Parse a palette block into its color lines.
    ///
    /// Lines that are blank after whitespace-stripping are skipped, so
    /// leading and trailing empty lines from block-literal formatting do
    /// not shift step positions.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] when no color lines remain.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        if lines.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        debug!(line_count = lines.len(), "parsed palette block");
        Ok(Self { lines })
    }

    /// Number of color lines in the scale.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All color lines, in scale order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The source line for a scale step.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::StepOutOfRange`] when the step points past
    /// the end of the scale. This is fatal to the whole run; there is no
    /// partial-success mode.
    pub fn line(&self, step: StepIndex) -> Result<&str> {
        self.lines
            .get(step.offset())
            .map(String::as_str)
            .ok_or(PaletteError::StepOutOfRange {
                step: step.get(),
                len: self.lines.len(),
            })
    }
}
