use super::{extract_paragraphs, find_documents, load_document, BODY_STYLE};
use crate::formats::markdown::MarkdownFormat;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_find_documents_filters_and_sorts() {
    let dir = tempdir().unwrap();
    for name in ["b.md", "a.md", "notes.txt", ".draft.md", "~$lock.md"] {
        fs::write(dir.path().join(name), "x").unwrap();
    }

    let found = find_documents(vec![dir.path().to_path_buf()], &["md".to_string()]).unwrap();
    let names: Vec<&str> = found
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .collect();
    assert_eq!(names, ["a.md", "b.md"]);
}

#[test]
fn test_find_documents_accepts_explicit_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("solo.md");
    fs::write(&path, "x").unwrap();

    let found = find_documents(vec![path.clone()], &["md".to_string()]).unwrap();
    assert_eq!(found, [path]);
}

#[test]
fn test_extraction_interleaves_headings_and_bodies() {
    let source = "intro text\n\n# One\n\nfirst body\n\n## Two\n\nsecond body\nstill second\n";
    let paragraphs = extract_paragraphs(source, &MarkdownFormat).unwrap();

    let styles: Vec<&str> = paragraphs.iter().map(|p| p.style.as_str()).collect();
    assert_eq!(
        styles,
        [BODY_STYLE, "Heading 1", BODY_STYLE, "Heading 2", BODY_STYLE]
    );
    assert_eq!(paragraphs[1].text, "One");
    assert_eq!(paragraphs[1].heading_depth, Some(1));
    assert_eq!(paragraphs[3].heading_depth, Some(2));
    assert_eq!(
        paragraphs[4].text, "second body\nstill second",
        "a blank line, not a newline, separates body paragraphs"
    );
}

#[test]
fn test_blank_lines_split_body_paragraphs() {
    let source = "first\n\nsecond\n\n\nthird\n";
    let paragraphs = extract_paragraphs(source, &MarkdownFormat).unwrap();
    let texts: Vec<&str> = paragraphs.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, ["first", "second", "third"]);
}

#[test]
fn test_code_fence_hashes_are_not_headings() {
    let source = "# Real\n\n```\n# comment, not a heading\n```\n";
    let paragraphs = extract_paragraphs(source, &MarkdownFormat).unwrap();
    let headings: Vec<&str> = paragraphs
        .iter()
        .filter(|p| p.is_heading())
        .map(|p| p.text.as_str())
        .collect();
    assert_eq!(headings, ["Real"], "the grammar decides what is a heading");
}

#[test]
fn test_setext_headings_read_as_body() {
    let source = "Title\n=====\n\nbody\n";
    let paragraphs = extract_paragraphs(source, &MarkdownFormat).unwrap();
    assert!(paragraphs.iter().all(|p| !p.is_heading()));
}

#[test]
fn test_empty_source_has_no_paragraphs() {
    assert!(extract_paragraphs("", &MarkdownFormat).unwrap().is_empty());
}

#[test]
fn test_load_document_titles_from_the_file_stem() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Field Guide.md");
    fs::write(&path, "# Chapter\n\ntext\n").unwrap();

    let document = load_document(&path, &MarkdownFormat).unwrap();
    assert_eq!(document.title, "Field Guide");
    assert_eq!(document.paragraphs.len(), 2);
}

#[test]
fn test_crlf_sources_normalize_before_parsing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("crlf.md");
    fs::write(&path, "# One\r\n\r\nbody line\r\n").unwrap();

    let document = load_document(&path, &MarkdownFormat).unwrap();
    let texts: Vec<&str> = document.paragraphs.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, ["One", "body line"]);
}
