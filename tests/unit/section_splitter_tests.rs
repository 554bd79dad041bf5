/*!
 * Tests for body partitioning at heading markers
 */

use folio::errors::SplitError;
use folio::section_splitter::split;
use crate::common;

/// Test that N well-formed markers produce exactly N sub-sections in order
#[test]
fn test_split_withWellFormedMarkers_shouldProduceOnePerMarker() {
    let body = "Lead-in text.\n\n### One\nalpha\n\n### Two\nbeta\n\n### Three\ngamma\n";
    let result = split(body).unwrap();

    let marker_count = body.lines().filter(|l| l.starts_with("### ")).count();
    assert_eq!(result.sub_sections.len(), marker_count);

    let names: Vec<&str> = result.sub_sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["One", "Two", "Three"]);
}

/// Test that sub-section bodies are non-overlapping contiguous slices
#[test]
fn test_split_withSampleProjects_shouldKeepBodiesDisjoint() {
    let result = split(common::sample_projects_body()).unwrap();

    assert_eq!(result.sub_sections.len(), 3);
    assert!(result.leading.contains("A few things I have built."));
    assert!(result.sub_section("EmailEssence").unwrap().contains("summarizes"));
    assert!(result.sub_section("ReverbXR").unwrap().contains("WebXR"));
    // No body bleeds into a neighbor
    assert!(!result.sub_section("EmailEssence").unwrap().contains("WebXR"));
    assert!(!result.sub_section("ReverbXR").unwrap().contains("Playlist"));
}

/// Test that sub-section bodies have trailing whitespace stripped
#[test]
fn test_split_withTrailingBlankLines_shouldTrimSubSectionBodies() {
    let result = split("### Solo\nbody text\n\n\n").unwrap();
    assert_eq!(result.sub_sections[0].body, "body text");
}

/// Test the empty leading body case
#[test]
fn test_split_withMarkerOnFirstLine_shouldAllowEmptyLeading() {
    let result = split("### First\nbody").unwrap();
    assert_eq!(result.leading, "");
    assert_eq!(result.sub_sections.len(), 1);
}

/// Test rejection of an empty heading title
#[test]
fn test_split_withBlankTitle_shouldFailWithInvalidHeading() {
    let err = split("text\ntext\n### \nbody").unwrap_err();
    assert!(matches!(err, SplitError::InvalidHeading { line: 3 }));
}

/// Test rejection of duplicate heading titles
#[test]
fn test_split_withRepeatedTitle_shouldFailWithDuplicateSection() {
    let err = split("### Twice\na\n### Twice\nb").unwrap_err();
    match err {
        SplitError::DuplicateSection { name, .. } => assert_eq!(name, "Twice"),
        other => panic!("unexpected error: {other:?}"),
    }
}
