use std::fmt;

const PROPERTY_INDENT: &str = "  ";
const BLOCK_OPEN: &str = "/**";
const BLOCK_CLOSE: &str = "**/";

/// Indentation context of a documentation block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
  /// Above a property line inside a complex type body.
  Property,
  /// Above a top-level `export type` declaration.
  TopLevel,
}

impl Indent {
  const fn prefix(self) -> &'static str {
    match self {
      Self::Property => PROPERTY_INDENT,
      Self::TopLevel => "",
    }
  }
}

/// A `/** ... **/` comment block describing example, format, pattern and
/// minimum metadata of a schema node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocBlock {
  indent: Indent,
  entries: Vec<String>,
}

impl DocBlock {
  #[must_use]
  pub const fn new(indent: Indent) -> Self {
    Self {
      indent,
      entries: Vec::new(),
    }
  }

  pub fn push(&mut self, entry: impl Into<String>) {
    self.entries.push(entry.into());
  }

  /// A block is only worth emitting when it holds more than its opening marker.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Every output line of the block: the opening marker, one `* entry` line per
  /// entry, and the closing marker, each carrying the context indentation.
  pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
    let prefix = self.indent.prefix();
    std::iter::once(format!("{prefix}{BLOCK_OPEN}"))
      .chain(self.entries.iter().map(move |entry| format!("{prefix}* {entry}")))
      .chain(std::iter::once(format!("{prefix}{BLOCK_CLOSE}")))
  }
}

impl fmt::Display for DocBlock {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for line in self.lines() {
      writeln!(f, "{line}")?;
    }
    Ok(())
  }
}
