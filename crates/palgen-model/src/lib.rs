//! Core data model for the palette code generator.
//!
//! - **color**: RGB channel values decoded from hex color strings
//! - **step**: validated 1-based scale step positions
//! - **roles**: ordered semantic role name to step mappings
//! - **error**: the structural / lexical / numeric error taxonomy

pub mod color;
pub mod error;
pub mod roles;
pub mod step;

pub use color::Rgb;
pub use error::{PaletteError, Result};
pub use roles::{RoleBinding, RoleMap};
pub use step::{SCALE_STEPS, StepIndex};
