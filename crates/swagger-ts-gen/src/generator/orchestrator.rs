//! Orchestration for the schema to TypeScript generation pipeline.
//!
//! The orchestrator classifies a `components.schemas` mapping once, up front,
//! then streams declarations for it into any [`Write`] destination.
//!
//! ```no_run
//! use std::fs::OpenOptions;
//!
//! # fn example(schemas: serde_json::Map<String, serde_json::Value>) -> anyhow::Result<()> {
//! let orchestrator = Orchestrator::new(&schemas, EmitOptions::default());
//! let output = OpenOptions::new().create(true).append(true).open("output.ts")?;
//! let (_, stats) = orchestrator.generate(output)?;
//! println!("Generated {} types with {} warnings", stats.types_generated, stats.warnings.len());
//! # Ok(())
//! # }
//! ```

use std::io::Write;

use serde_json::{Map, Value};

use crate::generator::{
  emitter::{EmitOptions, TypeEmitter},
  metrics::{GenerationStats, GenerationWarning},
  schema::SchemaCollection,
};

pub struct Orchestrator {
  collection: SchemaCollection,
  warnings: Vec<GenerationWarning>,
  options: EmitOptions,
}

impl Orchestrator {
  #[must_use]
  pub fn new(schemas: &Map<String, Value>, options: EmitOptions) -> Self {
    let (collection, warnings) = SchemaCollection::parse(schemas);
    Self {
      collection,
      warnings,
      options,
    }
  }

  #[must_use]
  pub const fn collection(&self) -> &SchemaCollection {
    &self.collection
  }

  /// Writes one declaration group per schema to `writer`.
  ///
  /// Malformed schema nodes never fail generation; they are reported through
  /// [`GenerationStats::warnings`]. Only I/O errors of the destination are
  /// returned.
  pub fn generate<W: Write>(self, writer: W) -> anyhow::Result<(W, GenerationStats)> {
    let mut emitter = TypeEmitter::new(writer, self.options);
    emitter.emit(&self.collection)?;

    let (writer, mut stats) = emitter.finish()?;
    stats.record_warnings(self.warnings);
    Ok((writer, stats))
  }
}
