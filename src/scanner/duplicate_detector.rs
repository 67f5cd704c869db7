//! Reading document numbers from files and dropping duplicates

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::core::error::{DocNumError, Result};

/// Unique document numbers gathered from every input file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueIdentifiers {
    ids: BTreeSet<String>,
    total_lines: usize,
}

impl UniqueIdentifiers {
    /// Number of distinct identifiers
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Lines seen across all files, duplicates included
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Lines that repeated an identifier already seen
    pub fn duplicates(&self) -> usize {
        self.total_lines - self.ids.len()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.ids.contains(identifier)
    }

    /// Identifiers in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

/// Union the lines of every file into one set
///
/// # Arguments
/// * `contents` - Full text of each input file
///
/// # Returns
/// The unique identifiers. Blank lines are kept as empty identifiers and the
/// order of `contents` does not affect the result.
pub fn collect_unique<I, S>(contents: I) -> UniqueIdentifiers
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut unique = UniqueIdentifiers::default();

    for text in contents {
        for line in text.as_ref().lines() {
            unique.total_lines += 1;
            unique.ids.insert(line.to_owned());
        }
    }

    unique
}

/// Read every input file completely
///
/// # Arguments
/// * `paths` - Files to read, in entry order
///
/// # Returns
/// File contents in the same order, or the first failure naming the
/// offending path and its position in the list
pub fn read_identifier_files(paths: &[PathBuf]) -> Result<Vec<String>> {
    paths
        .iter()
        .enumerate()
        .map(|(idx, path)| -> Result<String> {
            let text = fs::read_to_string(path).map_err(|source| {
                DocNumError::InputFileUnreadable {
                    index: idx + 1,
                    path: path.clone(),
                    source,
                }
            })?;
            debug!(path = %path.display(), bytes = text.len(), "read input file");
            Ok(text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_duplicates_within_and_across_files() {
        let unique = collect_unique([
            "docnum123456789\ncontractAB12345\ndocnum123456789\n",
            "contractAB12345\nxxxxxxxxxxxxxxx\n",
        ]);
        assert_eq!(unique.len(), 3);
        assert_eq!(unique.total_lines(), 5);
        assert_eq!(unique.duplicates(), 2);
        assert!(unique.contains("xxxxxxxxxxxxxxx"));
    }

    #[test]
    fn test_blank_lines_become_empty_identifier() {
        let unique = collect_unique(["a\n\nb\n\n"]);
        assert_eq!(unique.len(), 3);
        assert!(unique.contains(""));
    }

    #[test]
    fn test_crlf_and_no_trailing_whitespace_trim() {
        let unique = collect_unique(["abc\r\n abc \r\n"]);
        assert!(unique.contains("abc"));
        assert!(unique.contains(" abc "));
        assert_eq!(unique.len(), 2);
    }

    #[test]
    fn test_file_order_does_not_matter() {
        let forward = collect_unique(["a\nb\n", "c\na\n"]);
        let backward = collect_unique(["c\na\n", "a\nb\n"]);
        assert!(forward.iter().eq(backward.iter()));
    }

    #[test]
    fn test_read_identifier_files() {
        let mut file1 = NamedTempFile::new().unwrap();
        let mut file2 = NamedTempFile::new().unwrap();
        file1.write_all(b"docnum123456789\n").unwrap();
        file2.write_all(b"contractAB12345\n").unwrap();

        let paths = vec![file1.path().to_path_buf(), file2.path().to_path_buf()];
        let contents = read_identifier_files(&paths).unwrap();
        assert_eq!(contents, vec!["docnum123456789\n", "contractAB12345\n"]);
    }

    #[test]
    fn test_missing_file_reports_position() {
        let temp_dir = TempDir::new().unwrap();
        let mut present = NamedTempFile::new_in(temp_dir.path()).unwrap();
        present.write_all(b"x\n").unwrap();
        let missing = temp_dir.path().join("missing.txt");

        let paths = vec![present.path().to_path_buf(), missing.clone()];
        match read_identifier_files(&paths) {
            Err(DocNumError::InputFileUnreadable { index, path, .. }) => {
                assert_eq!(index, 2);
                assert_eq!(path, missing);
            }
            other => panic!("expected InputFileUnreadable, got {:?}", other),
        }
    }
}
