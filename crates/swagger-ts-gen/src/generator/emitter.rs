use std::io::{self, Write};

use crate::generator::{
  documentation::Indent,
  metrics::GenerationStats,
  schema::{ComplexType, PropertyKind, PropertyNode, SchemaCollection, SchemaNode, UnionType},
};

pub const LINE_TERMINATOR: &str = "\r\n";

/// Append-only, line-oriented output.
///
/// Every line is written with its terminator and flushed before `write_line`
/// returns, so nothing is held back in memory between declarations.
pub struct LineSink<W: Write> {
  inner: W,
  lines_written: usize,
}

impl<W: Write> LineSink<W> {
  pub const fn new(inner: W) -> Self {
    Self {
      inner,
      lines_written: 0,
    }
  }

  pub fn write_line(&mut self, line: &str) -> io::Result<()> {
    write!(self.inner, "{line}{LINE_TERMINATOR}")?;
    self.inner.flush()?;
    self.lines_written += 1;
    Ok(())
  }

  pub fn blank_line(&mut self) -> io::Result<()> {
    self.write_line("")
  }

  pub const fn lines_written(&self) -> usize {
    self.lines_written
  }

  pub fn into_inner(mut self) -> io::Result<W> {
    self.inner.flush()?;
    Ok(self.inner)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
  /// Emit `/** ... **/` blocks for nodes that carry example, format, pattern
  /// or minimum metadata.
  pub documentation: bool,
}

impl Default for EmitOptions {
  fn default() -> Self {
    Self { documentation: true }
  }
}

/// Streams one `export type` declaration group per schema into a [`LineSink`].
pub struct TypeEmitter<W: Write> {
  sink: LineSink<W>,
  options: EmitOptions,
  stats: GenerationStats,
}

impl<W: Write> TypeEmitter<W> {
  pub fn new(writer: W, options: EmitOptions) -> Self {
    Self {
      sink: LineSink::new(writer),
      options,
      stats: GenerationStats::default(),
    }
  }

  /// Emits every schema in collection order, separating groups with exactly one
  /// blank line.
  pub fn emit(&mut self, collection: &SchemaCollection) -> io::Result<()> {
    for (index, (name, node)) in collection.iter().enumerate() {
      if index > 0 {
        self.sink.blank_line()?;
      }

      match node {
        SchemaNode::Complex(complex) => self.emit_complex(name, complex)?,
        SchemaNode::Union(union) => self.emit_union(name, union)?,
        SchemaNode::Property(property) => self.emit_property(name, property)?,
      }
      self.stats.record_declaration(node);
    }
    Ok(())
  }

  /// Flushes the sink and hands back the writer with the run statistics.
  pub fn finish(mut self) -> io::Result<(W, GenerationStats)> {
    self.stats.record_lines(self.sink.lines_written());
    let writer = self.sink.into_inner()?;
    Ok((writer, self.stats))
  }

  fn emit_complex(&mut self, name: &str, complex: &ComplexType) -> io::Result<()> {
    self.sink.write_line(&format!("export type {name} = {{"))?;
    for (key, property) in &complex.properties {
      self.emit_documentation(property, Indent::Property)?;
      let optional = if complex.is_required(key) { "" } else { "?" };
      self
        .sink
        .write_line(&format!("  {key}{optional}: {}", property.render()))?;
      self.stats.record_property();
    }
    self.sink.write_line("}")
  }

  fn emit_union(&mut self, name: &str, union: &UnionType) -> io::Result<()> {
    self.sink.write_line(&format!("export type {name} = {}", union.render()))
  }

  fn emit_property(&mut self, name: &str, property: &PropertyNode) -> io::Result<()> {
    if let PropertyKind::Reference(reference) = &property.kind {
      return self
        .sink
        .write_line(&format!("export type {name} = {}", reference.name()));
    }

    self.emit_documentation(property, Indent::TopLevel)?;
    self
      .sink
      .write_line(&format!("export type {name} = {}", property.render()))
  }

  fn emit_documentation(&mut self, property: &PropertyNode, indent: Indent) -> io::Result<()> {
    if !self.options.documentation {
      return Ok(());
    }
    let Some(block) = property.documentation(indent) else {
      return Ok(());
    };

    self.sink.blank_line()?;
    for line in block.lines() {
      self.sink.write_line(&line)?;
    }
    self.stats.record_documentation();
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn line_sink_terminates_every_line_with_crlf() {
    let mut sink = LineSink::new(Vec::new());
    sink.write_line("export type A = string").unwrap();
    sink.blank_line().unwrap();
    assert_eq!(sink.lines_written(), 2);

    let bytes = sink.into_inner().unwrap();
    assert_eq!(bytes, b"export type A = string\r\n\r\n");
  }

  #[test]
  fn empty_collection_writes_nothing() {
    let mut emitter = TypeEmitter::new(Vec::new(), EmitOptions::default());
    emitter.emit(&SchemaCollection::default()).unwrap();
    let (bytes, stats) = emitter.finish().unwrap();
    assert!(bytes.is_empty());
    assert_eq!(stats.types_generated, 0);
    assert_eq!(stats.lines_written, 0);
  }

  #[test]
  fn documentation_enabled_by_default() {
    assert!(EmitOptions::default().documentation);
  }
}
