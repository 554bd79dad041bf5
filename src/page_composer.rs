use log::{debug, warn};
use serde::Serialize;

use crate::contact::{self, ContactContent};
use crate::document_loader::{Document, DocumentLoader, Metadata, Slug};
use crate::errors::{ComposeError, SplitError};
use crate::media::{MediaItem, MediaLibrary, SectionKind};
use crate::section_splitter::{self, SplitDocument};

// @module: Page composition, merging loader, splitter, parser and binder output

/// Link presentation variants the renderer distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinkKind {
    /// Link into a source repository
    Repo,
    /// Link to a deployed application
    App,
    /// Link to a hosted resume document
    Resume,
    /// Everything else renders as a plain anchor
    Plain,
}

impl LinkKind {
    // @classifies: An href by its well-known hosts
    pub fn classify(href: &str) -> Self {
        if href.contains("github.com") {
            Self::Repo
        } else if href.contains("madigan.app") {
            Self::App
        } else if href.contains("docs.google.com") {
            Self::Resume
        } else {
            Self::Plain
        }
    }
}

// @struct: One project sub-section with its curated media
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSection {
    // @field: Heading title from the projects document
    pub name: String,

    // @field: Icon asset path derived from the name
    pub icon_path: String,

    // @field: Sub-section body text
    pub body: String,

    // @field: Bound media in curation order
    pub media: Vec<MediaItem>,
}

// @struct: One top-level section of the composed page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSection {
    // @field: Section identity
    pub kind: SectionKind,

    // @field: Title from frontmatter, if declared
    pub title: Option<String>,

    // @field: Frontmatter key/value pairs
    pub metadata: Metadata,

    // @field: Section body (leading body for the split document)
    pub body: String,

    // @field: Bound media in curation order
    pub media: Vec<MediaItem>,

    // @field: Project sub-sections, empty for unsplit documents
    pub sub_sections: Vec<ProjectSection>,

    // @field: Embedded contact data, present only on the home section
    pub contact: Option<ContactContent>,
}

/// The fully composed page handed to the external renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedPage {
    /// Top-level sections in fixed declaration order
    pub sections: Vec<PageSection>,

    /// Parsed contact data, consumed at top level by the renderer
    pub contact: ContactContent,
}

/// Builds a ComposedPage from the four source documents
#[derive(Debug, Clone)]
pub struct PageComposer {
    loader: DocumentLoader,
    media: MediaLibrary,
}

impl PageComposer {
    /// Create a composer over a loader and a media binding table
    pub fn new(loader: DocumentLoader, media: MediaLibrary) -> Self {
        PageComposer { loader, media }
    }

    // @composes: The page from all four documents, loaded concurrently
    // @fails: Fast, with the first load error; no partial page is produced
    pub async fn compose(&self) -> Result<ComposedPage, ComposeError> {
        let (home, about, projects, contact_doc) = tokio::try_join!(
            self.loader.load(Slug::Home),
            self.loader.load(Slug::About),
            self.loader.load(Slug::Projects),
            self.loader.load(Slug::Contact),
        )?;

        let contact_content = contact::parse(&contact_doc.body);
        debug!(
            "Parsed {} contact entries ({} skipped)",
            contact_content.entries.len(),
            contact_content.skipped.len()
        );

        let split_projects = self.split_projects(&projects)?;

        let sections = vec![
            self.home_section(&home, &contact_content),
            self.plain_section(SectionKind::About, &about),
            self.projects_section(&projects, split_projects),
            self.plain_section(SectionKind::Contact, &contact_doc),
        ];

        Ok(ComposedPage {
            sections,
            contact: contact_content,
        })
    }

    // An empty heading title leaves the document unsplit; a duplicate
    // title is a content bug and aborts the composition
    fn split_projects(&self, projects: &Document) -> Result<SplitDocument, ComposeError> {
        if !projects.slug.has_sub_sections() {
            return Ok(SplitDocument::unsplit(&projects.body));
        }
        match section_splitter::split(&projects.body) {
            Ok(split) => Ok(split),
            Err(e @ SplitError::InvalidHeading { .. }) => {
                warn!("Treating '{}' as unsplit: {}", projects.slug, e);
                Ok(SplitDocument::unsplit(&projects.body))
            }
            Err(e @ SplitError::DuplicateSection { .. }) => Err(e.into()),
        }
    }

    fn home_section(&self, document: &Document, contact_content: &ContactContent) -> PageSection {
        let mut section = self.plain_section(SectionKind::Home, document);
        // The home section embeds the contact entries as a convenience
        section.contact = Some(contact_content.clone());
        section
    }

    fn projects_section(&self, document: &Document, split: SplitDocument) -> PageSection {
        let sub_sections = split
            .sub_sections
            .into_iter()
            .map(|sub| {
                let kind = SectionKind::Project(sub.name.clone());
                ProjectSection {
                    icon_path: project_icon_path(&sub.name),
                    media: self.media.bind(&kind).to_vec(),
                    name: sub.name,
                    body: sub.body,
                }
            })
            .collect();

        PageSection {
            kind: SectionKind::Projects,
            title: document.title().map(str::to_string),
            metadata: document.metadata.clone(),
            body: split.leading,
            media: self.media.bind(&SectionKind::Projects).to_vec(),
            sub_sections,
            contact: None,
        }
    }

    fn plain_section(&self, kind: SectionKind, document: &Document) -> PageSection {
        PageSection {
            title: document.title().map(str::to_string),
            metadata: document.metadata.clone(),
            body: document.body.clone(),
            media: self.media.bind(&kind).to_vec(),
            sub_sections: Vec::new(),
            contact: None,
            kind,
        }
    }
}

// @derives: Icon asset path from a project name, spaces removed, lowercased
pub fn project_icon_path(name: &str) -> String {
    let normalized: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    format!("/projects/{}.ico", normalized)
}
