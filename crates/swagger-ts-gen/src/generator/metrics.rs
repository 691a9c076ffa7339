use strum::Display;

use crate::generator::schema::SchemaNode;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub types_generated: usize,
  pub complex_types_generated: usize,
  pub unions_generated: usize,
  pub aliases_generated: usize,
  pub properties_generated: usize,
  pub documentation_blocks: usize,
  pub lines_written: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_declaration(&mut self, node: &SchemaNode) {
    self.types_generated += 1;
    match node {
      SchemaNode::Complex(_) => self.complex_types_generated += 1,
      SchemaNode::Union(_) => self.unions_generated += 1,
      SchemaNode::Property(_) => self.aliases_generated += 1,
    }
  }

  pub fn record_property(&mut self) {
    self.properties_generated += 1;
  }

  pub fn record_documentation(&mut self) {
    self.documentation_blocks += 1;
  }

  pub fn record_lines(&mut self, count: usize) {
    self.lines_written = count;
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

/// Non-fatal findings about malformed schema nodes.
///
/// A warning never changes the generated output; the node it names is still
/// emitted through the most permissive rendering rule.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Schema '{schema_name}': {location} has no usable type, rendered as unknown")]
  OpaqueNode { schema_name: String, location: String },
  #[strum(to_string = "Schema '{schema_name}': anyOf entry {index} has no $ref, rendered as unknown")]
  UnionMemberWithoutRef { schema_name: String, index: usize },
  #[strum(to_string = "Schema '{schema_name}': anyOf is not a non-empty list, rendered as unknown")]
  MalformedUnion { schema_name: String },
  #[strum(to_string = "Schema '{schema_name}': {location} has malformed array items, passed through")]
  MalformedArrayItems { schema_name: String, location: String },
  #[strum(to_string = "Schema '{schema_name}': properties is not a mapping, emitted as an empty type")]
  MalformedProperties { schema_name: String },
}
