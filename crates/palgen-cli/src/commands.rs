use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use palgen_emit::{EmitOptions, LiteralFormat, render_named, render_scale};
use palgen_model::RoleMap;
use palgen_parse::{Palette, resolve_roles, resolve_scale};
use palgen_standards::{DEFAULT_SCALE_CSS, default_role_map, parse_role_map};

use crate::cli::{FormatArg, NamedArgs, RolesArgs, ScaleArgs};
use crate::summary::print_role_table;

pub fn run_named(args: &NamedArgs) -> Result<String> {
    let span = info_span!("named");
    let _guard = span.enter();

    let palette = load_palette(args.palette.as_deref())?;
    let roles = load_role_map(args.roles.as_deref())?;
    let resolved = resolve_roles(&palette, &roles).context("extract role colors")?;
    info!(
        line_count = palette.len(),
        role_count = resolved.len(),
        "named extraction complete"
    );
    Ok(render_named(&resolved, &emit_options(args.format, &args.ctor)))
}

pub fn run_scale(args: &ScaleArgs) -> Result<String> {
    let span = info_span!("scale");
    let _guard = span.enter();

    let palette = load_palette(args.palette.as_deref())?;
    let resolved = resolve_scale(&palette).context("extract scale colors")?;
    info!(step_count = resolved.len(), "scale extraction complete");
    Ok(render_scale(&resolved, &emit_options(args.format, &args.ctor)))
}

pub fn run_roles(args: &RolesArgs) -> Result<()> {
    let roles = load_role_map(args.roles.as_deref())?;
    print_role_table(&roles);
    Ok(())
}

/// Read the palette block from a file, stdin (`-`), or the embedded default.
fn load_palette(path: Option<&Path>) -> Result<Palette> {
    let text = match path {
        None => {
            debug!("using embedded slate scale");
            DEFAULT_SCALE_CSS.to_string()
        }
        Some(path) if path.as_os_str() == "-" => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("read palette from stdin")?;
            buffer
        }
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read palette file {}", path.display()))?,
    };
    Ok(Palette::parse(&text)?)
}

/// Load the role map from a JSON file or fall back to the embedded default.
fn load_role_map(path: Option<&Path>) -> Result<RoleMap> {
    match path {
        None => Ok(default_role_map().context("load default role map")?),
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read role map {}", path.display()))?;
            parse_role_map(&text).with_context(|| format!("parse role map {}", path.display()))
        }
    }
}

fn emit_options(format: FormatArg, ctor: &str) -> EmitOptions {
    EmitOptions {
        constructor: ctor.to_string(),
        format: match format {
            FormatArg::Ctor => LiteralFormat::Constructor,
            FormatArg::Hex => LiteralFormat::QuotedHex,
            FormatArg::Both => LiteralFormat::Both,
        },
    }
}
