//! JSON document writer for the collected records
//!
//! The whole batch result is written at once as a single JSON array; there
//! is no partial or incremental persistence. Non-ASCII text (titles,
//! comments, genres are mostly Cyrillic) is written verbatim, not escaped.

use crate::crawler::BookRecord;
use crate::Result;
use std::fs;
use std::path::Path;

/// Writes the collected records to `path` as one JSON array
///
/// The parent directory is created if it does not exist yet. An existing
/// file at `path` is replaced.
pub fn write_records(records: &[BookRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string(records)?;
    fs::write(path, json)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_records() -> Vec<BookRecord> {
        vec![
            BookRecord {
                title: "Алые паруса".to_string(),
                author: "Александр Грин".to_string(),
                img_src: Some("images/239.jpg".to_string()),
                book_path: Some("books/Алые паруса.txt".to_string()),
                comments: vec!["Чудесно.".to_string()],
                genres: vec!["Научная фантастика".to_string()],
            },
            BookRecord {
                title: "Second".to_string(),
                author: "Author".to_string(),
                img_src: None,
                book_path: None,
                comments: vec![],
                genres: vec![],
            },
        ]
    }

    #[test]
    fn test_roundtrip_preserves_records_and_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");
        let records = sample_records();

        write_records(&records, &path).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        let parsed: Vec<BookRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_non_ascii_is_written_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");

        write_records(&sample_records(), &path).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains("Алые паруса"));
        assert!(json.contains("Научная фантастика"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_creates_missing_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("out").join("books.json");

        write_records(&[], &path).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        assert_eq!(json, "[]");
    }

    #[test]
    fn test_empty_batch_writes_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");

        write_records(&[], &path).unwrap();

        let parsed: Vec<BookRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(parsed.is_empty());
    }
}
