use std::fmt;
use std::path::{Path, PathBuf};
use anyhow::{Result, anyhow};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ContentError;

// @module: Source document loading and frontmatter extraction

/// Sentinel line that opens and closes the frontmatter block
const FRONTMATTER_SENTINEL: &str = "---";

/// Parsed frontmatter: string keys mapped to scalar or sequence values
pub type Metadata = serde_json::Map<String, Value>;

/// The fixed set of source documents that make up the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slug {
    // @slug: Landing section
    Home,
    // @slug: Biography section
    About,
    // @slug: Project showcase, the only document split into sub-sections
    Projects,
    // @slug: Contact details
    Contact,
}

impl Slug {
    /// All slugs in page declaration order
    pub const ALL: [Slug; 4] = [Slug::Home, Slug::About, Slug::Projects, Slug::Contact];

    // @returns: Lowercase slug identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    // @returns: Backing file name inside the content directory
    pub fn file_name(&self) -> String {
        format!("{}.md", self.as_str())
    }

    /// Whether this document's body is partitioned into named sub-sections
    pub fn has_sub_sections(&self) -> bool {
        matches!(self, Self::Projects)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Slug {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "about" => Ok(Self::About),
            "projects" => Ok(Self::Projects),
            "contact" => Ok(Self::Contact),
            _ => Err(anyhow!("Invalid slug: {}", s)),
        }
    }
}

// @struct: A loaded source document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    // @field: Slug the document was loaded for
    pub slug: Slug,

    // @field: Key/value pairs from the frontmatter block, empty if absent
    pub metadata: Metadata,

    // @field: Raw body text after the frontmatter block, byte-for-byte
    pub body: String,
}

impl Document {
    /// Title from the frontmatter, if one was declared
    pub fn title(&self) -> Option<&str> {
        self.metadata.get("title").and_then(Value::as_str)
    }
}

/// Reads source documents from a content directory
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    /// Directory holding one markdown file per slug
    content_dir: PathBuf,
}

impl DocumentLoader {
    /// Create a loader rooted at the given content directory
    pub fn new<P: AsRef<Path>>(content_dir: P) -> Self {
        DocumentLoader {
            content_dir: content_dir.as_ref().to_path_buf(),
        }
    }

    // @returns: Path of the backing file for a slug
    pub fn document_path(&self, slug: Slug) -> PathBuf {
        self.content_dir.join(slug.file_name())
    }

    // @loads: One document, splitting frontmatter from body
    // @fails: NotFound if the file is absent, MalformedMetadata on a bad block
    pub async fn load(&self, slug: Slug) -> Result<Document, ContentError> {
        let path = self.document_path(slug);
        debug!("Loading document '{}' from {:?}", slug, path);

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ContentError::NotFound { slug });
            }
            Err(e) => return Err(ContentError::Io { slug, source: e }),
        };

        let (metadata, body) = extract_frontmatter(slug, &content)?;
        Ok(Document {
            slug,
            metadata,
            body: body.to_string(),
        })
    }
}

// @parses: Leading frontmatter block, returning metadata and the remaining body
// @tolerates: Absence of the block (empty metadata, body untouched)
fn extract_frontmatter(slug: Slug, content: &str) -> Result<(Metadata, &str), ContentError> {
    let mut opener = String::from(FRONTMATTER_SENTINEL);
    opener.push('\n');
    let Some(rest) = content.strip_prefix(&opener) else {
        return Ok((Metadata::new(), content));
    };

    let mut metadata = Metadata::new();
    // Bytes consumed so far, counted from the start of `content`
    let mut consumed = opener.len();
    let mut line_no = 1;

    for line in rest.split_inclusive('\n') {
        line_no += 1;
        let trimmed = line.trim_end_matches(['\n', '\r']);

        if trimmed == FRONTMATTER_SENTINEL {
            let body = &content[consumed + line.len()..];
            return Ok((metadata, body));
        }

        if !trimmed.trim().is_empty() {
            let (key, value) = trimmed.split_once(':').ok_or_else(|| {
                ContentError::MalformedMetadata {
                    slug,
                    line: line_no,
                    reason: format!("expected 'key: value', got '{}'", trimmed),
                }
            })?;

            let key = key.trim();
            if key.is_empty() {
                return Err(ContentError::MalformedMetadata {
                    slug,
                    line: line_no,
                    reason: "empty metadata key".to_string(),
                });
            }
            metadata.insert(key.to_string(), parse_metadata_value(value.trim()));
        }

        consumed += line.len();
    }

    Err(ContentError::MalformedMetadata {
        slug,
        line: line_no,
        reason: format!("missing closing '{}' sentinel", FRONTMATTER_SENTINEL),
    })
}

// @parses: A single frontmatter value into a JSON scalar or string sequence
fn parse_metadata_value(raw: &str) -> Value {
    // Inline sequence: [a, b, c]
    if let Some(inner) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        let items: Vec<Value> = inner
            .split(',')
            .map(|item| Value::String(unquote(item.trim()).to_string()))
            .filter(|item| item.as_str().is_some_and(|s| !s.is_empty()))
            .collect();
        return Value::Array(items);
    }

    // Scalars: booleans and numbers keep their JSON type
    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(int) = raw.parse::<i64>() {
        return Value::Number(int.into());
    }
    if let Ok(float) = raw.parse::<f64>() {
        if let Some(number) = serde_json::Number::from_f64(float) {
            return Value::Number(number);
        }
    }

    Value::String(unquote(raw).to_string())
}

// @strips: One matching pair of surrounding quotes
fn unquote(raw: &str) -> &str {
    let quoted = (raw.starts_with('"') && raw.ends_with('"') && raw.len() >= 2)
        || (raw.starts_with('\'') && raw.ends_with('\'') && raw.len() >= 2);
    if quoted {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}
