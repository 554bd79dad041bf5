/*!
 * End-to-end page composition tests
 */

use anyhow::Result;
use folio::document_loader::{DocumentLoader, Slug};
use folio::errors::{ComposeError, ContentError, SplitError};
use folio::media::{MediaKind, MediaLibrary, SectionKind};
use folio::page_composer::PageComposer;
use crate::common;

fn composer_for(dir: &std::path::Path) -> PageComposer {
    PageComposer::new(DocumentLoader::new(dir), MediaLibrary::default())
}

/// Test composing a complete valid content directory
#[test]
fn test_compose_withValidContent_shouldProduceOrderedSections() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    common::create_content_fixture(temp_dir.path())?;

    let composer = composer_for(temp_dir.path());
    let page = tokio_test::block_on(composer.compose())?;

    // Exactly four top-level sections in declaration order
    let kinds: Vec<&SectionKind> = page.sections.iter().map(|s| &s.kind).collect();
    assert_eq!(
        kinds,
        vec![&SectionKind::Home, &SectionKind::About, &SectionKind::Projects, &SectionKind::Contact]
    );

    // Sub-section count equals the heading marker count in projects.md
    let marker_count = common::sample_projects()
        .lines()
        .filter(|l| l.starts_with("### "))
        .count();
    assert_eq!(page.sections[2].sub_sections.len(), marker_count);

    // Contact entries surface at page level
    assert_eq!(page.contact.entries.len(), 4);
    assert_eq!(page.contact.skipped.len(), 1);
    Ok(())
}

/// Test that the home section redundantly embeds the contact data
#[test]
fn test_compose_withValidContent_shouldEmbedContactInHome() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_content_fixture(temp_dir.path())?;

    let page = tokio_test::block_on(composer_for(temp_dir.path()).compose())?;

    let home = &page.sections[0];
    let embedded = home.contact.as_ref().expect("home should embed contact data");
    assert_eq!(embedded, &page.contact);

    // No other section carries the embedded copy
    assert!(page.sections[1..].iter().all(|s| s.contact.is_none()));
    Ok(())
}

/// Test media binding through composition
#[test]
fn test_compose_withValidContent_shouldBindCuratedMedia() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_content_fixture(temp_dir.path())?;

    let page = tokio_test::block_on(composer_for(temp_dir.path()).compose())?;

    // Home carousel
    assert_eq!(page.sections[0].media.len(), 6);

    // Per-project media and icon paths
    let projects = &page.sections[2];
    let email = projects.sub_sections.iter().find(|s| s.name == "EmailEssence").unwrap();
    assert_eq!(email.media.len(), 5);
    assert_eq!(email.icon_path, "/projects/emailessence.ico");

    let whatnext = projects.sub_sections.iter().find(|s| s.name == "WhatNext").unwrap();
    assert!(whatnext.media.iter().all(|m| m.kind == MediaKind::AudioPlaylist));
    Ok(())
}

/// Test idempotence of composition over unchanged inputs
#[test]
fn test_compose_calledTwice_shouldProduceEqualPages() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_content_fixture(temp_dir.path())?;

    let composer = composer_for(temp_dir.path());
    let first = tokio_test::block_on(composer.compose())?;
    let second = tokio_test::block_on(composer.compose())?;

    assert_eq!(first, second);
    Ok(())
}

/// Test fail-fast behavior when a required document is missing
#[test]
fn test_compose_withMissingDocument_shouldFailWithNotFound() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_content_fixture(temp_dir.path())?;
    std::fs::remove_file(temp_dir.path().join("contact.md"))?;

    let err = tokio_test::block_on(composer_for(temp_dir.path()).compose()).unwrap_err();

    match err {
        ComposeError::Content(ContentError::NotFound { slug }) => assert_eq!(slug, Slug::Contact),
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

/// Test that a malformed frontmatter block aborts the whole composition
#[test]
fn test_compose_withMalformedMetadata_shouldFailAsAWhole() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_content_fixture(temp_dir.path())?;
    common::create_test_file(temp_dir.path(), "about.md", "---\nbroken line without colon\n---\n")?;

    let err = tokio_test::block_on(composer_for(temp_dir.path()).compose()).unwrap_err();
    assert!(matches!(
        err,
        ComposeError::Content(ContentError::MalformedMetadata { slug: Slug::About, .. })
    ));
    Ok(())
}

/// Test that an empty heading title degrades to an unsplit projects section
#[test]
fn test_compose_withEmptyHeadingTitle_shouldTreatProjectsAsUnsplit() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_content_fixture(temp_dir.path())?;
    common::create_test_file(temp_dir.path(), "projects.md", "Intro.\n### \nbody\n")?;

    let page = tokio_test::block_on(composer_for(temp_dir.path()).compose())?;

    let projects = &page.sections[2];
    assert!(projects.sub_sections.is_empty());
    assert_eq!(projects.body, "Intro.\n### \nbody\n");
    Ok(())
}

/// Test that duplicate sub-section titles abort the composition
#[test]
fn test_compose_withDuplicateSubSection_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_content_fixture(temp_dir.path())?;
    common::create_test_file(
        temp_dir.path(),
        "projects.md",
        "### Twice\nfirst\n### Twice\nsecond\n",
    )?;

    let err = tokio_test::block_on(composer_for(temp_dir.path()).compose()).unwrap_err();
    assert!(matches!(
        err,
        ComposeError::Split(SplitError::DuplicateSection { .. })
    ));
    Ok(())
}

/// Test composition with an injected empty media library
#[test]
fn test_compose_withEmptyMediaLibrary_shouldBindNoMedia() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_content_fixture(temp_dir.path())?;

    let composer = PageComposer::new(DocumentLoader::new(temp_dir.path()), MediaLibrary::empty());
    let page = tokio_test::block_on(composer.compose())?;

    assert!(page.sections.iter().all(|s| s.media.is_empty()));
    assert!(page.sections[2].sub_sections.iter().all(|s| s.media.is_empty()));
    Ok(())
}

/// Test that the composed page serializes to JSON for the renderer
#[test]
fn test_compose_output_shouldSerializeToJson() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_content_fixture(temp_dir.path())?;

    let page = tokio_test::block_on(composer_for(temp_dir.path()).compose())?;
    let json = serde_json::to_string(&page)?;

    assert!(json.contains("\"sections\""));
    assert!(json.contains("mailto:someone@example.com"));
    Ok(())
}
