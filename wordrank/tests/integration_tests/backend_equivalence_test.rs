// tests/integration_tests/backend_equivalence_test.rs
use super::common::{SAMPLE_TEXT, generated_words};
use anyhow::Result;
use std::collections::BTreeMap;
use wordrank::{Backend, Container, analyze, count_words};

fn as_map(text: &str, backend: Backend) -> Result<BTreeMap<String, u64>> {
    let counts = count_words(text.as_bytes(), backend)?;
    Ok(counts.iter().map(|(k, v)| (k.clone(), *v)).collect())
}

#[test]
fn test_backends_agree_on_counts() -> Result<()> {
    let generated = generated_words(5_000, 42).join(" ");
    for text in [SAMPLE_TEXT, generated.as_str(), ""] {
        let reference = as_map(text, Backend::Bst)?;
        for backend in [Backend::Avl, Backend::Hash] {
            assert_eq!(
                as_map(text, backend)?,
                reference,
                "{backend} disagrees with bst"
            );
        }
    }
    Ok(())
}

#[test]
fn test_backends_agree_on_ranking() -> Result<()> {
    let text = generated_words(3_000, 7).join("\n");
    let reference = analyze(text.as_bytes(), Backend::Bst, 25)?;
    for backend in [Backend::Avl, Backend::Hash] {
        let report = analyze(text.as_bytes(), backend, 25)?;
        assert_eq!(report, reference, "{backend}");
    }
    Ok(())
}

#[test]
fn test_trees_iterate_alphabetically() -> Result<()> {
    for backend in [Backend::Bst, Backend::Avl] {
        let counts = count_words(SAMPLE_TEXT.as_bytes(), backend)?;
        let keys: Vec<&String> = counts.iter().map(|(k, _)| k).collect();
        let ordered = keys.windows(2).all(|w| w[0] < w[1]);
        assert!(ordered, "{backend} is not in key order");
    }
    Ok(())
}

#[test]
fn test_each_entry_yielded_once() -> Result<()> {
    for backend in Backend::ALL {
        let counts = count_words(SAMPLE_TEXT.as_bytes(), backend)?;
        assert_eq!(counts.iter().count(), counts.size(), "{backend}");
        let total: u64 = counts.iter().map(|(_, v)| *v).sum();
        assert_eq!(total, 45, "{backend} lost tokens");
    }
    Ok(())
}
