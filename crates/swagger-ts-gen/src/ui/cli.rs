use std::path::PathBuf;

use clap::{ArgAction, Parser};

use super::colors::{ColorMode, Colors, ThemeMode};

pub const DEFAULT_OUTPUT: &str = "output.ts";

#[derive(Parser, Debug)]
#[command(name = "swagger-ts-gen")]
#[command(version, about = "Swagger model generator for TypeScript", styles = Colors::clap_styles())]
pub struct Cli {
  /// Location of the OpenAPI document: an http(s) URL or a local JSON/YAML file
  #[arg(short, long, value_name = "LOCATION")]
  pub url: String,

  /// Path the generated TypeScript declarations are appended to
  #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
  pub output: PathBuf,

  /// Generate type declarations only (currently the only kind of output)
  #[arg(short, long, default_value_t = false)]
  pub types_only: bool,

  /// Omit all documentation comment blocks
  #[arg(short = 'd', long, default_value_t = false)]
  pub without_documentation: bool,

  /// Delete an existing output file before generating
  #[arg(short, long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
  pub remove_existing: bool,

  /// Enable verbose output, including warnings about malformed schemas
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto")]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto")]
  pub theme: ThemeMode,
}
