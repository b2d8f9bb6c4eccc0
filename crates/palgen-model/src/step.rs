use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PaletteError;

/// Number of steps in one color scale.
pub const SCALE_STEPS: usize = 12;

/// A 1-based step position within a color scale.
///
/// Step 1 is the near-background end of the scale, step 12 the
/// near-foreground end. Values outside [1, 12] are rejected at
/// construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct StepIndex(u8);

impl StepIndex {
    pub fn new(value: u8) -> Result<Self, PaletteError> {
        if value == 0 || value as usize > SCALE_STEPS {
            return Err(PaletteError::InvalidStep(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based offset into the palette's line sequence.
    pub fn offset(self) -> usize {
        usize::from(self.0) - 1
    }
}

impl TryFrom<u8> for StepIndex {
    type Error = PaletteError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StepIndex> for u8 {
    fn from(step: StepIndex) -> Self {
        step.0
    }
}

impl fmt::Display for StepIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
