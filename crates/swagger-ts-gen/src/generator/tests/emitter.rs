use serde_json::json;

use super::support::{emit, emit_lines, emit_lines_without_docs};
use crate::generator::emitter::EmitOptions;

#[test]
fn complex_type_marks_optional_properties() {
  let lines = emit_lines(json!({
    "Pet": {
      "type": "object",
      "properties": {
        "id": { "type": "integer" },
        "name": { "type": "string" }
      },
      "required": ["id"]
    }
  }));
  assert_eq!(lines, ["export type Pet = {", "  id: number", "  name?: string", "}"]);
}

#[test]
fn complex_type_without_required_list_is_all_optional() {
  let lines = emit_lines(json!({
    "Tag": {
      "properties": {
        "id": { "type": "integer" },
        "label": { "$ref": "#/components/schemas/Label" }
      }
    }
  }));
  assert_eq!(lines, ["export type Tag = {", "  id?: number", "  label?: Label", "}"]);
}

#[test]
fn complex_type_with_no_properties_is_empty_body() {
  let lines = emit_lines(json!({ "Empty": { "type": "object", "properties": {} } }));
  assert_eq!(lines, ["export type Empty = {", "}"]);
}

#[test]
fn union_joins_reference_names() {
  let lines = emit_lines(json!({
    "Status": {
      "anyOf": [
        { "$ref": "#/components/schemas/Active" },
        { "$ref": "#/components/schemas/Inactive" }
      ]
    }
  }));
  assert_eq!(lines, ["export type Status = Active | Inactive"]);
}

#[test]
fn string_enum_alias() {
  let lines = emit_lines(json!({ "Tag": { "type": "string", "enum": ["x", "y"] } }));
  assert_eq!(lines, ["export type Tag = 'x'|'y'"]);
}

#[test]
fn bare_reference_alias() {
  let lines = emit_lines(json!({ "Current": { "$ref": "#/components/schemas/Pet", "example": "ignored" } }));
  assert_eq!(lines, ["export type Current = Pet"]);
}

#[test]
fn integer_array_alias_keeps_raw_token() {
  let lines = emit_lines(json!({ "Ids": { "type": "array", "items": "integer" } }));
  assert_eq!(lines, ["export type Ids = integer[]"]);
}

#[test]
fn opaque_alias_is_unknown() {
  let lines = emit_lines(json!({ "Anything": {} }));
  assert_eq!(lines, ["export type Anything = unknown"]);
}

#[test]
fn groups_are_separated_by_exactly_one_blank_line() {
  let lines = emit_lines(json!({
    "A": { "type": "string" },
    "B": { "type": "boolean" },
    "C": { "anyOf": [{ "$ref": "#/components/schemas/A" }] }
  }));
  assert_eq!(
    lines,
    [
      "export type A = string",
      "",
      "export type B = boolean",
      "",
      "export type C = A",
    ]
  );
}

#[test]
fn declarations_follow_collection_order() {
  let (output, stats) = emit(
    json!({
      "Zulu": { "type": "string" },
      "Alpha": { "type": "string" },
      "Mike": { "type": "string" }
    }),
    EmitOptions::default(),
  );
  let names: Vec<&str> = output
    .lines()
    .filter_map(|line| line.strip_prefix("export type "))
    .filter_map(|line| line.split(' ').next())
    .collect();
  assert_eq!(names, ["Zulu", "Alpha", "Mike"]);
  assert_eq!(stats.types_generated, 3);
  assert_eq!(stats.aliases_generated, 3);
}

#[test]
fn property_documentation_is_indented_and_preceded_by_blank_line() {
  let lines = emit_lines(json!({
    "Pet": {
      "properties": {
        "id": { "type": "integer", "format": "int64", "example": 10 },
        "name": { "type": "string", "example": "doggie" }
      },
      "required": ["id", "name"]
    }
  }));
  assert_eq!(
    lines,
    [
      "export type Pet = {",
      "",
      "  /**",
      "  * 10",
      "  * Format: int64",
      "  **/",
      "  id: number",
      "",
      "  /**",
      "  * doggie",
      "  **/",
      "  name: string",
      "}",
    ]
  );
}

#[test]
fn top_level_documentation_has_no_indent() {
  let lines = emit_lines(json!({
    "First": { "type": "boolean" },
    "PetId": { "type": "integer", "format": "int64", "minimum": 1 }
  }));
  assert_eq!(
    lines,
    [
      "export type First = boolean",
      "",
      "",
      "/**",
      "* Format: int64",
      "* Minimum: 1",
      "**/",
      "export type PetId = number",
    ]
  );
}

#[test]
fn first_declaration_documentation_starts_with_blank_line() {
  let lines = emit_lines(json!({ "Email": { "type": "string", "format": "email" } }));
  assert_eq!(lines, ["", "/**", "* Format: email", "**/", "export type Email = string"]);
}

#[test]
fn suppressed_documentation_emits_no_comment_lines() {
  let schemas = json!({
    "Pet": {
      "properties": {
        "id": { "type": "integer", "format": "int64", "example": 10 },
        "name": { "type": "string", "pattern": "^[a-z]+$" }
      }
    },
    "PetId": { "type": "integer", "minimum": 1 },
    "Names": { "type": "array", "items": "string", "example": ["a"] }
  });

  let lines = emit_lines_without_docs(schemas.clone());
  assert!(
    lines
      .iter()
      .all(|line| !line.contains("/**") && !line.contains("**/") && !line.trim_start().starts_with('*')),
    "no documentation lines expected: {lines:?}"
  );
  assert_eq!(
    lines,
    [
      "export type Pet = {",
      "  id?: number",
      "  name?: string",
      "}",
      "",
      "export type PetId = number",
      "",
      "export type Names = string[]",
    ]
  );

  let (_, stats) = emit(schemas, EmitOptions { documentation: false });
  assert_eq!(stats.documentation_blocks, 0);
}

#[test]
fn stats_count_declarations_properties_and_docs() {
  let (_, stats) = emit(
    json!({
      "Pet": {
        "properties": {
          "id": { "type": "integer", "example": 1 },
          "name": { "type": "string" }
        }
      },
      "Status": { "anyOf": [{ "$ref": "#/components/schemas/A" }] },
      "Id": { "type": "integer" }
    }),
    EmitOptions::default(),
  );
  assert_eq!(stats.types_generated, 3);
  assert_eq!(stats.complex_types_generated, 1);
  assert_eq!(stats.unions_generated, 1);
  assert_eq!(stats.aliases_generated, 1);
  assert_eq!(stats.properties_generated, 2);
  assert_eq!(stats.documentation_blocks, 1);
  // 4 complex + 4 doc + 1 separator + 1 union + 1 separator + 1 alias
  assert_eq!(stats.lines_written, 12);
}
