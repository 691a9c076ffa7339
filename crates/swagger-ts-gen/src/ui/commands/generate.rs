use std::{
  fs::{File, OpenOptions},
  io::ErrorKind,
  path::PathBuf,
};

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    emitter::EmitOptions, metrics::GenerationStats, orchestrator::Orchestrator, schema::SchemaCollection,
  },
  ui::{Cli, Colors},
  utils::spec::{SpecLoader, SpecSource, component_schemas},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateConfig {
  pub source: SpecSource,
  pub output: PathBuf,
  pub types_only: bool,
  pub documentation: bool,
  pub remove_existing: bool,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_cli(cli: Cli) -> Self {
    let Cli {
      url,
      output,
      types_only,
      without_documentation,
      remove_existing,
      verbose,
      quiet,
      ..
    } = cli;

    Self {
      source: SpecSource::parse(&url),
      output,
      types_only,
      documentation: !without_documentation,
      remove_existing,
      verbose,
      quiet,
    }
  }

  const fn emit_options(&self) -> EmitOptions {
    EmitOptions {
      documentation: self.documentation,
    }
  }

  /// Removes a previous artifact. Failure, including absence, is not an error.
  async fn remove_existing_output(&self, logger: &GenerateLogger<'_>) {
    match tokio::fs::remove_file(&self.output).await {
      Ok(()) => logger.detail(&format!("Removed existing output: {}", self.output.display())),
      Err(err) if err.kind() == ErrorKind::NotFound => {}
      Err(err) => logger.detail(&format!(
        "Could not remove existing output {}: {err}",
        self.output.display()
      )),
    }
  }

  async fn open_output(&self) -> anyhow::Result<File> {
    if let Some(parent) = self.output.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent).await?;
    }
    OpenOptions::new()
      .create(true)
      .append(true)
      .open(&self.output)
      .with_context(|| format!("failed to open {}", self.output.display()))
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn detail(&self, message: &str) {
    if self.config.verbose {
      self.info(message);
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading OpenAPI spec from: {}", self.config.source)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self, collection: &SchemaCollection) {
    if collection.is_empty() {
      self.info(&"No schemas found in components.schemas".with(self.colors.accent()).to_string());
    }
    self.info(
      &format!("Generating TypeScript types for {} schemas...", collection.len())
        .with(self.colors.primary())
        .to_string(),
    );
    if self.config.types_only {
      self.detail("Types-only mode: type declarations are the only output");
    }
    if !self.config.documentation {
      self.detail("Documentation blocks disabled");
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Types generated:", stats.types_generated.to_string());
    self.stat("", format!("{} object types", stats.complex_types_generated));
    self.stat("", format!("{} unions", stats.unions_generated));
    self.stat("", format!("{} aliases", stats.aliases_generated));
    self.stat("Properties:", stats.properties_generated.to_string());
    if self.config.documentation {
      self.stat("Documentation blocks:", stats.documentation_blocks.to_string());
    }
    self.stat("Lines written:", stats.lines_written.to_string());
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() || !self.config.verbose {
      return;
    }

    println!();
    for warning in &stats.warnings {
      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.accent()),
        format!("{warning}").with(self.colors.primary())
      );
    }
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated TypeScript types".with(self.colors.success())
      );
    }
  }
}

/// Runs one generation: optional removal of the previous artifact, a single
/// document retrieval, then streaming every declaration into the output file.
///
/// A failed retrieval returns before the output file is created.
pub async fn generate_types(config: GenerateConfig, colors: &Colors) -> anyhow::Result<GenerationStats> {
  let logger = GenerateLogger::new(&config, colors);

  if config.remove_existing {
    config.remove_existing_output(&logger).await;
  }

  logger.log_loading();
  let document = SpecLoader::open(&config.source).await?.parse()?;
  let schemas = component_schemas(document)?;

  let orchestrator = Orchestrator::new(&schemas, config.emit_options());
  drop(schemas);
  logger.log_generating(orchestrator.collection());

  logger.log_writing();
  let output = config.open_output().await?;
  let (_, stats) = tokio::task::spawn_blocking(move || orchestrator.generate(output)).await??;

  logger.print_statistics(&stats);
  logger.log_success();
  Ok(stats)
}
