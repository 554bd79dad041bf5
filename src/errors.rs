/*!
 * Error types for the folio application.
 *
 * This module contains custom error types for the different stages of the
 * content pipeline, using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

use crate::document_loader::Slug;

/// Errors that can occur while loading a source document
#[derive(Error, Debug)]
pub enum ContentError {
    /// The requested slug has no backing file in the content directory
    #[error("No content file found for slug '{slug}'")]
    NotFound {
        /// Slug that was requested
        slug: Slug,
    },

    /// A frontmatter block is present but cannot be parsed
    #[error("Malformed metadata in '{slug}' at line {line}: {reason}")]
    MalformedMetadata {
        /// Slug of the offending document
        slug: Slug,
        /// 1-based line number inside the document
        line: usize,
        /// Human-readable parse failure
        reason: String,
    },

    /// Error from the underlying filesystem read
    #[error("Failed to read content for slug '{slug}': {source}")]
    Io {
        /// Slug of the offending document
        slug: Slug,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while splitting a body into sub-sections
#[derive(Error, Debug)]
pub enum SplitError {
    /// A heading marker with an empty title after trimming
    #[error("Heading marker with empty title at line {line}")]
    InvalidHeading {
        /// 1-based line number of the bad marker
        line: usize,
    },

    /// Two heading markers share the same title
    #[error("Duplicate sub-section title '{name}' at line {line}")]
    DuplicateSection {
        /// Repeated title
        name: String,
        /// 1-based line number of the second occurrence
        line: usize,
    },
}

/// Errors that abort a page composition as a whole
#[derive(Error, Debug)]
pub enum ComposeError {
    /// A required document failed to load
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Splitting the projects document failed unrecoverably
    #[error("Split error: {0}")]
    Split(#[from] SplitError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from document loading
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Error from section splitting
    #[error("Split error: {0}")]
    Split(#[from] SplitError),

    /// Error from page composition
    #[error("Compose error: {0}")]
    Compose(#[from] ComposeError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
