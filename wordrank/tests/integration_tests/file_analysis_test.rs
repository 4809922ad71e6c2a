// tests/integration_tests/file_analysis_test.rs
use super::common::{SAMPLE_TEXT, create_test_file, setup_test_document};
use anyhow::Result;
use tempfile::TempDir;
use wordrank::{Backend, Error, analyze_file, format_report};

#[test]
fn test_report_from_file() -> Result<()> {
    let (_dir, path) = setup_test_document(SAMPLE_TEXT)?;
    let report = analyze_file(&path, Backend::Avl, 3)?;
    assert_eq!(
        format_report(&report),
        "Total unique words: 21\n1. it  6\n2. of  6\n3. the 6\n"
    );
    Ok(())
}

#[test]
fn test_empty_file() -> Result<()> {
    let (_dir, path) = setup_test_document("")?;
    for backend in Backend::ALL {
        let report = analyze_file(&path, backend, 10)?;
        assert_eq!(format_report(&report), "Total unique words: 0\n");
    }
    Ok(())
}

#[test]
fn test_punctuation_only_file() -> Result<()> {
    let (_dir, path) = setup_test_document("123 ... !!! -- \n\n")?;
    let report = analyze_file(&path, Backend::Hash, 5)?;
    assert_eq!(report.unique_words, 0);
    assert!(report.ranked.is_empty());
    Ok(())
}

#[test]
fn test_missing_file_is_an_io_error() -> Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.path().join("nope.txt");
    let err = analyze_file(&missing, Backend::Bst, 10).err();
    assert!(matches!(err, Some(Error::CannotOpen { .. })));
    assert!(!err.is_some_and(|e| e.is_configuration()));
    Ok(())
}

#[test]
fn test_directory_cannot_be_read() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "nested/inner.txt", "words")?;
    let nested = dir.path().join("nested");
    let result = analyze_file(&nested, Backend::Hash, 10);
    assert!(
        matches!(result, Err(Error::Read { .. })),
        "A directory opens but fails on read"
    );
    let message = result.err().map(|err| err.to_string());
    let expected = format!("An I/O error occurred reading '{}'.", nested.display());
    assert_eq!(message, Some(expected));
    Ok(())
}
