use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::errors::SplitError;

// @module: Body partitioning into named sub-sections by heading boundary

// @const: Heading marker regex, fixed prefix token plus title
static HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^### (.*)$").unwrap()
});

// @struct: One named, contiguous slice of a document body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubSection {
    // @field: Heading title, unique within a document
    pub name: String,

    // @field: Accumulated lines up to the next marker, trailing whitespace stripped
    pub body: String,
}

/// Result of splitting a body at its heading markers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitDocument {
    /// Lines preceding the first heading marker, kept as written
    pub leading: String,

    /// Sub-sections in document order
    pub sub_sections: Vec<SubSection>,
}

impl SplitDocument {
    /// A body with no markers: everything is leading text
    pub fn unsplit(body: &str) -> Self {
        SplitDocument {
            leading: body.to_string(),
            sub_sections: Vec::new(),
        }
    }

    /// Look up a sub-section body by its heading title
    pub fn sub_section(&self, name: &str) -> Option<&str> {
        self.sub_sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.body.as_str())
    }
}

// @splits: A body into leading text plus named sub-sections
// @fails: InvalidHeading on an empty title, DuplicateSection on a repeated one
pub fn split(body: &str) -> Result<SplitDocument, SplitError> {
    let mut leading = String::new();
    let mut sub_sections: Vec<SubSection> = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;
    let mut line_no = 0;

    for raw_line in body.split_inclusive('\n') {
        line_no += 1;
        let line = raw_line.trim_end_matches(['\n', '\r']);

        if let Some(captures) = HEADING_REGEX.captures(line) {
            let title = captures[1].trim();
            if title.is_empty() {
                return Err(SplitError::InvalidHeading { line: line_no });
            }

            // Close the running sub-section before the uniqueness check, so a
            // marker repeating the immediately preceding title is caught too
            if let Some((name, lines)) = current.take() {
                sub_sections.push(SubSection {
                    name,
                    body: lines.join("\n").trim_end().to_string(),
                });
            }
            if sub_sections.iter().any(|s| s.name == title) {
                return Err(SplitError::DuplicateSection {
                    name: title.to_string(),
                    line: line_no,
                });
            }
            current = Some((title.to_string(), Vec::new()));
        } else {
            match current.as_mut() {
                Some((_, lines)) => lines.push(line),
                // Leading body is kept byte-for-byte, newlines included
                None => leading.push_str(raw_line),
            }
        }
    }

    if let Some((name, lines)) = current.take() {
        sub_sections.push(SubSection {
            name,
            body: lines.join("\n").trim_end().to_string(),
        });
    }

    Ok(SplitDocument {
        leading,
        sub_sections,
    })
}
