// tests/integration_tests/ranking_test.rs
use super::common::SAMPLE_TEXT;
use anyhow::Result;
use wordrank::{Backend, Container, Entry, WordCounts, analyze, rank};

#[test]
fn test_total_order_on_ties() {
    for backend in Backend::ALL {
        let mut counts = WordCounts::new(backend);
        counts.put(String::from("dog"), 5);
        counts.put(String::from("ant"), 3);
        counts.put(String::from("cat"), 5);
        let expected = vec![
            Entry::new("cat", 5),
            Entry::new("dog", 5),
            Entry::new("ant", 3),
        ];
        let ranked = rank(&counts, 3);
        assert_eq!(ranked.into_entries(), expected, "{backend}");
    }
}

#[test]
fn test_sample_document_top_words() -> Result<()> {
    let report = analyze(SAMPLE_TEXT.as_bytes(), Backend::Hash, 6)?;
    assert_eq!(report.unique_words, 21);
    assert_eq!(
        report.ranked.entries(),
        &[
            Entry::new("it", 6),
            Entry::new("of", 6),
            Entry::new("the", 6),
            Entry::new("was", 6),
            Entry::new("age", 2),
            Entry::new("and", 2),
        ]
    );
    Ok(())
}

#[test]
fn test_limit_larger_than_vocabulary() -> Result<()> {
    let text = "one two two three three three four";
    let report = analyze(text.as_bytes(), Backend::Avl, 100)?;
    assert_eq!(report.unique_words, 4);
    assert_eq!(report.ranked.len(), 4, "Only the distinct words");
    Ok(())
}

#[test]
fn test_hyphen_and_case_rules_reach_ranking() -> Result<()> {
    let text = "-able Able ABLE well-known Well-Known";
    let report = analyze(text.as_bytes(), Backend::Bst, 10)?;
    assert_eq!(
        report.ranked.entries(),
        &[Entry::new("able", 3), Entry::new("well-known", 2)]
    );
    Ok(())
}
