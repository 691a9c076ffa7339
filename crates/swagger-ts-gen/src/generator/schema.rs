//! Schema model: the closed set of node shapes recognised in `components.schemas`.
//!
//! Raw JSON is classified exactly once, in [`SchemaCollection::parse`]. Every
//! rendering and documentation rule afterwards matches over [`SchemaNode`] and
//! [`PropertyKind`] instead of probing the raw document for attributes.
//!
//! Parsing never fails. Nodes that do not fit a recognised shape degrade to
//! [`PropertyKind::Opaque`], [`ArrayItems::Raw`] or [`UnionMember::Unresolved`]
//! and a [`GenerationWarning`] is recorded for them.

use indexmap::IndexMap;
use itertools::Itertools;
use serde_json::{Map, Number, Value};
use strum::{Display, EnumString};

use crate::{
  generator::{
    documentation::{DocBlock, Indent},
    metrics::GenerationWarning,
  },
  utils::Reference,
};

pub const UNKNOWN_TYPE: &str = "unknown";
const ARRAY_SUFFIX: &str = "[]";
const UNION_SEPARATOR: &str = " | ";
const ENUM_SEPARATOR: &str = "|";

/// Schema names mapped to their nodes, in the document's declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaCollection {
  schemas: IndexMap<String, SchemaNode>,
}

impl SchemaCollection {
  /// Classifies every entry of a `components.schemas` mapping.
  #[must_use]
  pub fn parse(schemas: &Map<String, Value>) -> (Self, Vec<GenerationWarning>) {
    let mut warnings = Vec::new();
    let schemas = schemas
      .iter()
      .map(|(name, value)| {
        let node = NodeParser::new(name, &mut warnings).parse_schema(value);
        (name.clone(), node)
      })
      .collect();

    (Self { schemas }, warnings)
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.schemas.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.schemas.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
    self.schemas.iter().map(|(name, node)| (name.as_str(), node))
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
  Complex(ComplexType),
  Union(UnionType),
  Property(PropertyNode),
}

/// A structured record: a node exposing `properties`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplexType {
  pub properties: IndexMap<String, PropertyNode>,
  pub required: Vec<String>,
}

impl ComplexType {
  #[must_use]
  pub fn is_required(&self, key: &str) -> bool {
    self.required.iter().any(|required| required == key)
  }
}

/// "One of these named types": a node exposing `anyOf`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnionType {
  pub members: Vec<UnionMember>,
}

impl UnionType {
  /// Member names joined with ` | `, in the order given by the document.
  #[must_use]
  pub fn render(&self) -> String {
    if self.members.is_empty() {
      return UNKNOWN_TYPE.to_string();
    }
    self.members.iter().map(UnionMember::render).join(UNION_SEPARATOR)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnionMember {
  Reference(Reference),
  /// An `anyOf` entry without a `$ref`.
  Unresolved,
}

impl UnionMember {
  fn render(&self) -> &str {
    match self {
      Self::Reference(reference) => reference.name(),
      Self::Unresolved => UNKNOWN_TYPE,
    }
  }
}

/// A property, or a top-level node that is neither complex nor a union.
///
/// `example` and `default` only ever feed documentation, never the rendered type.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyNode {
  pub kind: PropertyKind,
  pub example: Option<Value>,
  #[allow(dead_code)]
  pub default: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKind {
  Reference(Reference),
  Array(ArrayItems),
  String {
    enum_values: Option<Vec<String>>,
    format: Option<String>,
    pattern: Option<String>,
  },
  Integer {
    format: Option<String>,
    minimum: Option<Number>,
  },
  Boolean,
  Object,
  Email,
  /// A type tag outside the recognised subset, e.g. `number`; rendered verbatim.
  Other(String),
  /// Neither a reference nor a node with a string `type` tag.
  Opaque,
}

/// The `items` of an array node.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayItems {
  /// A bare type token such as `"items": "integer"`.
  Primitive(PrimitiveToken),
  Reference(Reference),
  Typed(Box<PropertyNode>),
  Missing,
  /// Anything else; passed through unchanged.
  Raw(Value),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PrimitiveToken {
  String,
  Integer,
  Boolean,
}

impl PropertyNode {
  #[must_use]
  pub const fn new(kind: PropertyKind) -> Self {
    Self {
      kind,
      example: None,
      default: None,
    }
  }

  /// The type expression for this node.
  #[must_use]
  pub fn render(&self) -> String {
    self.kind.render()
  }

  /// The documentation block for this node, if it carries anything worth
  /// documenting. References and nodes without a type tag are never documented.
  #[must_use]
  pub fn documentation(&self, indent: Indent) -> Option<DocBlock> {
    if !self.kind.has_type_tag() {
      return None;
    }

    let mut block = DocBlock::new(indent);
    if let Some(example) = &self.example {
      block.push(literal_text(example));
    }

    match &self.kind {
      PropertyKind::String { format, pattern, .. } => {
        if let Some(format) = format {
          block.push(format!("Format: {format}"));
        }
        if let Some(pattern) = pattern {
          block.push(format!("Pattern: {pattern}"));
        }
      }
      PropertyKind::Integer { format, minimum } => {
        if let Some(format) = format {
          block.push(format!("Format: {format}"));
        }
        if let Some(minimum) = minimum {
          block.push(format!("Minimum: {minimum}"));
        }
      }
      _ => {}
    }

    (!block.is_empty()).then_some(block)
  }
}

impl PropertyKind {
  #[must_use]
  pub fn render(&self) -> String {
    match self {
      Self::Reference(reference) => reference.name().to_string(),
      Self::Opaque => UNKNOWN_TYPE.to_string(),
      Self::String {
        enum_values: Some(values),
        ..
      } => values.iter().map(|value| format!("'{value}'")).join(ENUM_SEPARATOR),
      Self::String { .. } | Self::Email => "string".to_string(),
      Self::Integer { .. } => "number".to_string(),
      Self::Boolean => "boolean".to_string(),
      Self::Object => "{}".to_string(),
      Self::Array(items) => items.render(),
      Self::Other(tag) => tag.clone(),
    }
  }

  const fn has_type_tag(&self) -> bool {
    !matches!(self, Self::Reference(_) | Self::Opaque)
  }
}

impl ArrayItems {
  /// Primitive tokens keep their raw spelling (`integer[]`, not `number[]`);
  /// typed items go through the full property rendering.
  #[must_use]
  pub fn render(&self) -> String {
    match self {
      Self::Primitive(token) => format!("{token}{ARRAY_SUFFIX}"),
      Self::Reference(reference) => format!("{}{ARRAY_SUFFIX}", reference.name()),
      Self::Typed(node) => format!("{}{ARRAY_SUFFIX}", node.render()),
      Self::Missing => format!("{UNKNOWN_TYPE}{ARRAY_SUFFIX}"),
      Self::Raw(value) => literal_text(value),
    }
  }
}

/// Strings verbatim, every other JSON value in compact JSON notation.
fn literal_text(value: &Value) -> String {
  match value {
    Value::String(text) => text.clone(),
    other => other.to_string(),
  }
}

fn reference_of(object: &Map<String, Value>) -> Option<Reference> {
  object.get("$ref").and_then(Value::as_str).map(Reference::new)
}

struct NodeParser<'a> {
  schema_name: &'a str,
  warnings: &'a mut Vec<GenerationWarning>,
}

impl<'a> NodeParser<'a> {
  fn new(schema_name: &'a str, warnings: &'a mut Vec<GenerationWarning>) -> Self {
    Self { schema_name, warnings }
  }

  fn parse_schema(&mut self, value: &Value) -> SchemaNode {
    let Some(object) = value.as_object() else {
      return SchemaNode::Property(self.parse_property(value, "schema"));
    };

    if let Some(properties) = object.get("properties") {
      SchemaNode::Complex(self.parse_complex(object, properties))
    } else if let Some(any_of) = object.get("anyOf") {
      SchemaNode::Union(self.parse_union(any_of))
    } else {
      SchemaNode::Property(self.parse_property(value, "schema"))
    }
  }

  fn parse_complex(&mut self, object: &Map<String, Value>, properties: &Value) -> ComplexType {
    let properties = match properties.as_object() {
      Some(properties) => properties
        .iter()
        .map(|(key, property)| {
          let location = format!("property '{key}'");
          (key.clone(), self.parse_property(property, &location))
        })
        .collect(),
      None => {
        self.warnings.push(GenerationWarning::MalformedProperties {
          schema_name: self.schema_name.to_string(),
        });
        IndexMap::new()
      }
    };

    let required = object
      .get("required")
      .and_then(Value::as_array)
      .map(|keys| keys.iter().filter_map(Value::as_str).map(String::from).collect())
      .unwrap_or_default();

    ComplexType { properties, required }
  }

  fn parse_union(&mut self, any_of: &Value) -> UnionType {
    let Some(entries) = any_of.as_array().filter(|entries| !entries.is_empty()) else {
      self.warnings.push(GenerationWarning::MalformedUnion {
        schema_name: self.schema_name.to_string(),
      });
      return UnionType::default();
    };

    let members = entries
      .iter()
      .enumerate()
      .map(|(index, entry)| match entry.as_object().and_then(reference_of) {
        Some(reference) => UnionMember::Reference(reference),
        None => {
          self.warnings.push(GenerationWarning::UnionMemberWithoutRef {
            schema_name: self.schema_name.to_string(),
            index,
          });
          UnionMember::Unresolved
        }
      })
      .collect();

    UnionType { members }
  }

  fn parse_property(&mut self, value: &Value, location: &str) -> PropertyNode {
    let Some(object) = value.as_object() else {
      self.warn_opaque(location);
      return PropertyNode::new(PropertyKind::Opaque);
    };

    PropertyNode {
      kind: self.parse_kind(object, location),
      example: object.get("example").cloned(),
      default: object.get("default").cloned(),
    }
  }

  fn parse_kind(&mut self, object: &Map<String, Value>, location: &str) -> PropertyKind {
    if let Some(reference) = reference_of(object) {
      return PropertyKind::Reference(reference);
    }

    let Some(type_tag) = object.get("type").and_then(Value::as_str).map(str::trim) else {
      self.warn_opaque(location);
      return PropertyKind::Opaque;
    };

    let text = |key: &str| object.get(key).map(literal_text);

    match type_tag {
      "array" => PropertyKind::Array(self.parse_items(object.get("items"), location)),
      "string" => PropertyKind::String {
        enum_values: object
          .get("enum")
          .and_then(Value::as_array)
          .filter(|values| !values.is_empty())
          .map(|values| values.iter().map(literal_text).collect()),
        format: text("format"),
        pattern: text("pattern"),
      },
      "integer" => PropertyKind::Integer {
        format: text("format"),
        minimum: match object.get("minimum") {
          Some(Value::Number(minimum)) => Some(minimum.clone()),
          _ => None,
        },
      },
      "boolean" => PropertyKind::Boolean,
      "object" => PropertyKind::Object,
      "email" => PropertyKind::Email,
      other => PropertyKind::Other(other.to_string()),
    }
  }

  fn parse_items(&mut self, items: Option<&Value>, location: &str) -> ArrayItems {
    match items {
      Some(Value::String(token)) => match token.trim().parse::<PrimitiveToken>() {
        Ok(token) => ArrayItems::Primitive(token),
        Err(_) => self.raw_items(Value::String(token.clone()), location),
      },
      Some(value @ Value::Object(object)) => {
        if let Some(reference) = reference_of(object) {
          ArrayItems::Reference(reference)
        } else if object.contains_key("type") {
          let location = format!("{location} items");
          ArrayItems::Typed(Box::new(self.parse_property(value, &location)))
        } else {
          self.raw_items(value.clone(), location)
        }
      }
      Some(other) => self.raw_items(other.clone(), location),
      None => {
        self.warn_malformed_items(location);
        ArrayItems::Missing
      }
    }
  }

  fn raw_items(&mut self, value: Value, location: &str) -> ArrayItems {
    self.warn_malformed_items(location);
    ArrayItems::Raw(value)
  }

  fn warn_malformed_items(&mut self, location: &str) {
    self.warnings.push(GenerationWarning::MalformedArrayItems {
      schema_name: self.schema_name.to_string(),
      location: location.to_string(),
    });
  }

  fn warn_opaque(&mut self, location: &str) {
    self.warnings.push(GenerationWarning::OpaqueNode {
      schema_name: self.schema_name.to_string(),
      location: location.to_string(),
    });
  }
}
