use std::fmt;
use log::warn;
use serde::Serialize;

// @module: Contact record parsing from bulleted "Label: Value" lines

/// Bullet token that marks a contact record line
const BULLET_MARKER: &str = "- ";

/// Separator between label and value inside a record line
const LABEL_SEPARATOR: &str = ": ";

/// Recognized contact channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContactKind {
    // @kind: Email address, linked via mailto:
    Email,
    // @kind: Phone number, linked via tel: with non-digits stripped
    Phone,
    // @kind: GitHub profile, linked via https://
    GitHub,
    // @kind: LinkedIn profile, linked via https://
    LinkedIn,
}

impl ContactKind {
    // @returns: Icon identifier consumed by the view layer
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Email => "mail",
            Self::Phone => "phone",
            Self::GitHub => "github",
            Self::LinkedIn => "linkedin",
        }
    }

    // @resolves: The href for a raw value, pure in (kind, value)
    pub fn resolve_href(&self, raw_value: &str) -> String {
        match self {
            Self::Email => format!("mailto:{}", raw_value),
            Self::Phone => {
                let digits: String = raw_value.chars().filter(char::is_ascii_digit).collect();
                format!("tel:{}", digits)
            }
            Self::GitHub | Self::LinkedIn => {
                // Values are expected bare host+path; an explicit scheme is kept as-is
                if raw_value.contains("://") {
                    raw_value.to_string()
                } else {
                    format!("https://{}", raw_value)
                }
            }
        }
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.icon())
    }
}

// @struct: One rule of the label table, the surface the view layer extends
#[derive(Debug, Clone, Copy)]
pub struct LabelRule {
    // @field: Label string as written in the document
    pub label: &'static str,

    // @field: Contact kind the label maps to
    pub kind: ContactKind,

    // @field: Whether the link opens an external site
    pub external: bool,
}

/// Default label table, in display order
pub const DEFAULT_LABEL_RULES: [LabelRule; 4] = [
    LabelRule { label: "Email", kind: ContactKind::Email, external: false },
    LabelRule { label: "Phone", kind: ContactKind::Phone, external: false },
    LabelRule { label: "GitHub", kind: ContactKind::GitHub, external: true },
    LabelRule { label: "LinkedIn", kind: ContactKind::LinkedIn, external: true },
];

// @struct: A typed contact entry ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactEntry {
    // @field: Contact channel
    pub kind: ContactKind,

    // @field: Value exactly as written in the document
    pub raw_value: String,

    // @field: Normalized link target
    pub resolved_href: String,

    // @field: Whether the view should open the link externally
    pub external: bool,
}

/// Why a contact line was dropped instead of parsed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SkipReason {
    /// Record line without a "Label: Value" separator
    MissingSeparator,
    /// Label not present in the rule table
    UnrecognizedLabel(String),
}

/// Diagnostic for a dropped contact line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number within the contact body
    pub line: usize,
    /// The line as written
    pub text: String,
    /// Why it was dropped
    pub reason: SkipReason,
}

/// Parsed contact document: description text, entries, and drop diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ContactContent {
    /// Non-record lines joined in document order
    pub description: String,

    /// Entries in document order
    pub entries: Vec<ContactEntry>,

    /// Lines that were dropped, with reasons
    pub skipped: Vec<SkippedLine>,
}

// @parses: A contact body with the default label table
pub fn parse(body: &str) -> ContactContent {
    parse_with_rules(body, &DEFAULT_LABEL_RULES)
}

// @parses: A contact body against a caller-supplied label table
// @degrades: Malformed or unrecognized record lines become diagnostics, never errors
pub fn parse_with_rules(body: &str, rules: &[LabelRule]) -> ContactContent {
    let mut description: Vec<&str> = Vec::new();
    let mut entries: Vec<ContactEntry> = Vec::new();
    let mut skipped: Vec<SkippedLine> = Vec::new();

    for (index, line) in body.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = line.trim();

        let Some(record) = trimmed.strip_prefix(BULLET_MARKER) else {
            description.push(line);
            continue;
        };

        let Some((label, raw_value)) = record.split_once(LABEL_SEPARATOR) else {
            warn!("Dropping contact line {} without '{}' separator: '{}'", line_no, LABEL_SEPARATOR.trim_end(), trimmed);
            skipped.push(SkippedLine {
                line: line_no,
                text: line.to_string(),
                reason: SkipReason::MissingSeparator,
            });
            continue;
        };

        match rules.iter().find(|rule| rule.label == label) {
            Some(rule) => {
                entries.push(ContactEntry {
                    kind: rule.kind,
                    raw_value: raw_value.to_string(),
                    resolved_href: rule.kind.resolve_href(raw_value),
                    external: rule.external,
                });
            }
            None => {
                warn!("Dropping contact line {} with unrecognized label '{}'", line_no, label);
                skipped.push(SkippedLine {
                    line: line_no,
                    text: line.to_string(),
                    reason: SkipReason::UnrecognizedLabel(label.to_string()),
                });
            }
        }
    }

    ContactContent {
        description: description.join("\n").trim_end().to_string(),
        entries,
        skipped,
    }
}
