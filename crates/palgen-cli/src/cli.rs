//! CLI argument definitions for the palette code generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "palgen",
    version,
    about = "Palette code generator - convert CSS color tokens to source literals",
    long_about = "Convert CSS custom-property color scales to source-code literals.\n\n\
                  Reads Radix-style `--scale-n: light-dark(#light, #dark);` token lines\n\
                  and emits color constructor calls or quoted hex constants, always\n\
                  selecting the dark-mode value of each pair."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate named role constants from a palette.
    Named(NamedArgs),

    /// Generate one literal per scale step.
    Scale(ScaleArgs),

    /// List the active semantic role map.
    Roles(RolesArgs),
}

#[derive(Parser)]
pub struct NamedArgs {
    /// Palette token file (`-` for stdin; default: the embedded slate scale).
    #[arg(value_name = "PALETTE")]
    pub palette: Option<PathBuf>,

    /// JSON role map file overriding the built-in mapping.
    ///
    /// The format is an array of `{"name": ..., "step": ...}` objects;
    /// array order is the output order.
    #[arg(long = "roles", value_name = "JSON")]
    pub roles: Option<PathBuf>,

    /// Literal representation to emit.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: FormatArg,

    /// Constructor path for RGB literals (e.g. Color32::from_rgb).
    #[arg(long = "ctor", value_name = "PATH", default_value = "Color::from_rgb")]
    pub ctor: String,
}

#[derive(Parser)]
pub struct ScaleArgs {
    /// Palette token file (`-` for stdin; default: the embedded slate scale).
    #[arg(value_name = "PALETTE")]
    pub palette: Option<PathBuf>,

    /// Literal representation to emit.
    #[arg(long = "format", value_enum, default_value = "ctor")]
    pub format: FormatArg,

    /// Constructor path for RGB literals (e.g. Color32::from_rgb).
    #[arg(long = "ctor", value_name = "PATH", default_value = "Color::from_rgb")]
    pub ctor: String,
}

#[derive(Parser)]
pub struct RolesArgs {
    /// JSON role map file overriding the built-in mapping.
    #[arg(long = "roles", value_name = "JSON")]
    pub roles: Option<PathBuf>,
}

/// Literal representation choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Constructor calls with decimal RGB channels.
    Ctor,
    /// Quoted hex-string constants.
    Hex,
    /// Constructor block, separator, then quoted-hex block.
    Both,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
