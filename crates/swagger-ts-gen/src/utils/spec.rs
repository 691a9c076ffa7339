use std::{
  ffi::OsStr,
  fmt,
  path::{Path, PathBuf},
};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use reqwest::Url;
use serde_json::{Map, Value};

const SCHEMAS_POINTER: &str = "/components/schemas";

#[derive(Debug, thiserror::Error)]
pub enum SpecLoadError {
  #[error("failed to fetch {url}: {source}")]
  Fetch { url: Url, source: reqwest::Error },
  #[error("failed to read {}: {source}", path.display())]
  Read { path: PathBuf, source: fmmap::error::Error },
  #[error("document is not valid UTF-8: {0}")]
  Utf8(#[from] std::str::Utf8Error),
  #[error("failed to parse JSON document: {0}")]
  Json(#[from] serde_json::Error),
  #[error("failed to parse YAML document: {0}")]
  Yaml(#[from] serde_yaml::Error),
  #[error("document has no `components.schemas` mapping")]
  MissingSchemas,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }

  fn from_path(path: &Path) -> Self {
    path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(Self::default(), Self::from_extension)
  }
}

/// Where the OpenAPI document is retrieved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
  Remote(Url),
  Local(PathBuf),
}

impl SpecSource {
  /// `http` and `https` locations are fetched; anything else is a local path.
  #[must_use]
  pub fn parse(location: &str) -> Self {
    match Url::parse(location) {
      Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Remote(url),
      _ => Self::Local(PathBuf::from(location)),
    }
  }

  #[must_use]
  pub fn format(&self) -> SpecFormat {
    match self {
      Self::Remote(url) => SpecFormat::from_path(Path::new(url.path())),
      Self::Local(path) => SpecFormat::from_path(path),
    }
  }
}

impl fmt::Display for SpecSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Remote(url) => write!(f, "{url}"),
      Self::Local(path) => write!(f, "{}", path.display()),
    }
  }
}

enum SpecContent {
  Mapped(AsyncMmapFile),
  Fetched(Vec<u8>),
}

impl SpecContent {
  fn as_slice(&self) -> &[u8] {
    match self {
      Self::Mapped(file) => file.as_slice(),
      Self::Fetched(bytes) => bytes,
    }
  }
}

pub struct SpecLoader {
  content: SpecContent,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(source: &SpecSource) -> Result<Self, SpecLoadError> {
    let content = match source {
      SpecSource::Remote(url) => SpecContent::Fetched(fetch(url).await?),
      SpecSource::Local(path) => {
        let file = AsyncMmapFile::open(path).await.map_err(|source| SpecLoadError::Read {
          path: path.clone(),
          source,
        })?;
        SpecContent::Mapped(file)
      }
    };

    Ok(Self {
      content,
      format: source.format(),
    })
  }

  pub fn parse(&self) -> Result<Value, SpecLoadError> {
    match self.format {
      SpecFormat::Json => Ok(serde_json::from_slice(self.content.as_slice())?),
      SpecFormat::Yaml => {
        let content = std::str::from_utf8(self.content.as_slice())?;
        Ok(serde_yaml::from_str(content)?)
      }
    }
  }
}

async fn fetch(url: &Url) -> Result<Vec<u8>, SpecLoadError> {
  let to_error = |source| SpecLoadError::Fetch { url: url.clone(), source };

  let response = reqwest::get(url.clone())
    .await
    .map_err(to_error)?
    .error_for_status()
    .map_err(to_error)?;
  let bytes = response.bytes().await.map_err(to_error)?;
  Ok(bytes.to_vec())
}

/// Takes the `components.schemas` mapping out of a parsed document.
///
/// No other part of the document is consulted.
pub fn component_schemas(mut document: Value) -> Result<Map<String, Value>, SpecLoadError> {
  match document.pointer_mut(SCHEMAS_POINTER).map(Value::take) {
    Some(Value::Object(schemas)) => Ok(schemas),
    _ => Err(SpecLoadError::MissingSchemas),
  }
}
