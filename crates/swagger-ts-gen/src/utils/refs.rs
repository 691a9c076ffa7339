use std::fmt;

/// A `$ref` pointer to another named schema.
///
/// OpenAPI references use JSON Pointer syntax (e.g. `#/components/schemas/Pet`).
/// Only the final path segment is meaningful for declaration output: it is the
/// name of the referenced type. External and malformed paths are kept as-is and
/// still yield their last segment, so a reference never fails to resolve to a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
  path: String,
}

impl Reference {
  #[must_use]
  pub fn new(path: impl Into<String>) -> Self {
    Self { path: path.into() }
  }

  /// The substring after the final `/` of the reference path.
  #[must_use]
  pub fn name(&self) -> &str {
    self.path.rsplit('/').next().unwrap_or(&self.path)
  }
}

impl fmt::Display for Reference {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
