/*!
 * # Folio - Portfolio Content Pipeline
 *
 * A Rust library that composes a single-page personal portfolio from a small
 * set of hand-written markdown documents.
 *
 * ## Features
 *
 * - Load source documents with an optional frontmatter metadata block
 * - Split the projects document into named sub-sections by heading boundary
 * - Parse bulleted "Label: Value" contact lines into typed entries
 * - Bind curated image and playlist descriptors to sections by name
 * - Compose everything into an ordered page structure for an external renderer
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document_loader`: Source document reading and frontmatter extraction
 * - `section_splitter`: Body partitioning at heading markers
 * - `contact`: Contact record parsing and the label rule table
 * - `media`: Static media binding tables
 * - `page_composer`: Final page composition
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod contact;
pub mod document_loader;
pub mod errors;
pub mod file_utils;
pub mod media;
pub mod page_composer;
pub mod section_splitter;

// Re-export main types for easier usage
pub use app_config::Config;
pub use contact::{ContactContent, ContactEntry, ContactKind};
pub use document_loader::{Document, DocumentLoader, Slug};
pub use errors::{AppError, ComposeError, ContentError, SplitError};
pub use media::{MediaItem, MediaKind, MediaLibrary, SectionKind};
pub use page_composer::{ComposedPage, LinkKind, PageComposer, PageSection, ProjectSection};
pub use section_splitter::{SplitDocument, SubSection};
