use palgen_model::Rgb;
use palgen_parse::{ResolvedRole, ResolvedStep};

/// Width of the separator line between the constructor and quoted-hex
/// blocks in combined output.
pub const SEPARATOR_WIDTH: usize = 24;

/// Which literal representation to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LiteralFormat {
    /// Constructor calls with decimal RGB channels.
    Constructor,
    /// Quoted `"#rrggbb"` string constants.
    QuotedHex,
    /// Constructor block, separator line, then quoted-hex block.
    #[default]
    Both,
}

/// Rendering options for generated literals.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Constructor path rendered in front of the channel tuple,
    /// e.g. `Color::from_rgb` or `Color32::from_rgb`.
    pub constructor: String,
    pub format: LiteralFormat,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            constructor: "Color::from_rgb".to_string(),
            format: LiteralFormat::default(),
        }
    }
}

/// The separator line emitted between the two blocks of combined output.
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

fn ctor_call(rgb: Rgb, constructor: &str) -> String {
    format!("{constructor}({}, {}, {})", rgb.r, rgb.g, rgb.b)
}

/// Render named role constants, one line per role, in slice order.
pub fn render_named(roles: &[ResolvedRole], options: &EmitOptions) -> String {
    let ctor_lines = |out: &mut String| {
        for role in roles {
            out.push_str(&role.name);
            out.push_str(": ");
            out.push_str(&ctor_call(role.rgb, &options.constructor));
            out.push_str(",\n");
        }
    };
    let hex_lines = |out: &mut String| {
        for role in roles {
            out.push_str(&role.name);
            out.push_str(": \"#");
            out.push_str(&role.hex);
            out.push_str("\",\n");
        }
    };
    let mut out = String::new();
    match options.format {
        LiteralFormat::Constructor => ctor_lines(&mut out),
        LiteralFormat::QuotedHex => hex_lines(&mut out),
        LiteralFormat::Both => {
            ctor_lines(&mut out);
            out.push_str(&separator());
            out.push('\n');
            hex_lines(&mut out);
        }
    }
    out
}

/// Render one literal per scale step, in line order.
pub fn render_scale(steps: &[ResolvedStep], options: &EmitOptions) -> String {
    let ctor_lines = |out: &mut String| {
        for step in steps {
            out.push_str(&ctor_call(step.rgb, &options.constructor));
            out.push_str(",\n");
        }
    };
    let hex_lines = |out: &mut String| {
        for step in steps {
            out.push_str("\"#");
            out.push_str(&step.hex);
            out.push_str("\",\n");
        }
    };
    let mut out = String::new();
    match options.format {
        LiteralFormat::Constructor => ctor_lines(&mut out),
        LiteralFormat::QuotedHex => hex_lines(&mut out),
        LiteralFormat::Both => {
            ctor_lines(&mut out);
            out.push_str(&separator());
            out.push('\n');
            hex_lines(&mut out);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_call_uses_decimal_channels() {
        let rgb = Rgb { r: 17, g: 17, b: 19 };
        assert_eq!(ctor_call(rgb, "Color::from_rgb"), "Color::from_rgb(17, 17, 19)");
    }

    #[test]
    fn separator_is_twenty_four_dashes() {
        assert_eq!(separator(), "------------------------");
    }
}
