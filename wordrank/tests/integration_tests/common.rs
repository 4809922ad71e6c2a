// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SAMPLE_TEXT: &str = "\
It was the best of times, it was the worst of times,
it was the age of wisdom, it was the age of foolishness,
it was the epoch of belief, it was the epoch of incredulity.
Well-known words and don't-forget hyphens -- and a -leading one.\r\n";

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn setup_test_document(content: &str) -> Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(temp_dir.path(), "document.txt", content)?;
    Ok((temp_dir, path))
}

/// Deterministic pseudo-random words so failures reproduce.
pub fn generated_words(count: usize, seed: u64) -> Vec<String> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let len = 1 + (state >> 60) as usize % 4;
            (0..len)
                .map(|i| char::from(b'a' + ((state >> (i * 5 + 8)) % 6) as u8))
                .collect()
        })
        .collect()
}
