use serde_json::{Map, Value};

use crate::generator::{
  emitter::{EmitOptions, TypeEmitter},
  metrics::{GenerationStats, GenerationWarning},
  schema::{PropertyNode, SchemaCollection, SchemaNode},
};

pub(super) fn schemas(value: Value) -> Map<String, Value> {
  match value {
    Value::Object(map) => map,
    other => panic!("expected a schema mapping, got {other}"),
  }
}

pub(super) fn parse(value: Value) -> (SchemaCollection, Vec<GenerationWarning>) {
  SchemaCollection::parse(&schemas(value))
}

pub(super) fn parse_single(value: Value) -> SchemaNode {
  let (collection, _) = parse(serde_json::json!({ "Subject": value }));
  let (_, node) = collection.iter().next().expect("single schema");
  node.clone()
}

pub(super) fn parse_property(value: Value) -> PropertyNode {
  match parse_single(value) {
    SchemaNode::Property(property) => property,
    other => panic!("expected a property node, got {other:?}"),
  }
}

pub(super) fn emit(value: Value, options: EmitOptions) -> (String, GenerationStats) {
  let (collection, _) = parse(value);
  let mut emitter = TypeEmitter::new(Vec::new(), options);
  emitter.emit(&collection).expect("writing to a Vec cannot fail");
  let (bytes, stats) = emitter.finish().expect("flushing a Vec cannot fail");
  (String::from_utf8(bytes).expect("output is UTF-8"), stats)
}

pub(super) fn emit_lines(value: Value) -> Vec<String> {
  to_lines(&emit(value, EmitOptions::default()).0)
}

pub(super) fn emit_lines_without_docs(value: Value) -> Vec<String> {
  to_lines(&emit(value, EmitOptions { documentation: false }).0)
}

/// Splits CRLF-terminated output into lines, asserting every line is terminated.
pub(super) fn to_lines(output: &str) -> Vec<String> {
  if output.is_empty() {
    return Vec::new();
  }
  let body = output.strip_suffix("\r\n").expect("output ends with CRLF");
  body.split("\r\n").map(String::from).collect()
}
