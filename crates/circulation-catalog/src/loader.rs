//! # Catalog Loader
//!
//! Reads the tab-delimited catalog file.
//!
//! ## File Format
//! ```text
//! 1984<TAB>George Orwell
//! Animal Farm<TAB>George Orwell
//! <blank lines are skipped>
//! Brave New World<TAB>Aldous Huxley
//! ```
//!
//! Records keep file order, which is the order the library numbers them in.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use circulation_core::validation::validate_catalog_field;
use circulation_core::CatalogEntry;
use tracing::{debug, info};

use crate::error::{CatalogError, CatalogResult};

/// Parses catalog records from any buffered reader.
///
/// The title runs up to the first tab; everything after it is the author.
/// Windows line endings are accepted.
pub fn parse_catalog<R: BufRead>(reader: R) -> CatalogResult<Vec<CatalogEntry>> {
    let mut entries = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| CatalogError::io("<catalog>", source))?;
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() {
            continue;
        }

        let (title, author) = line
            .split_once('\t')
            .ok_or(CatalogError::MalformedRecord { line: line_no })?;

        let invalid = |source| CatalogError::InvalidRecord {
            line: line_no,
            source,
        };
        let title = validate_catalog_field("title", title).map_err(invalid)?;
        let author = validate_catalog_field("author", author).map_err(invalid)?;

        entries.push(CatalogEntry::new(title, author));
    }

    debug!(count = entries.len(), "Catalog parsed");
    Ok(entries)
}

/// Opens and parses the catalog at `path`.
pub fn load_catalog(path: impl AsRef<Path>) -> CatalogResult<Vec<CatalogEntry>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CatalogError::io(path, source))?;

    let entries = parse_catalog(BufReader::new(file)).map_err(|err| match err {
        CatalogError::Io { source, .. } => CatalogError::io(path, source),
        other => other,
    })?;

    info!(path = %path.display(), count = entries.len(), "Catalog loaded");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    #[test]
    fn test_parse_catalog() {
        let text = "1984\tGeorge Orwell\nEmma\tJane Austen\n";
        let entries = parse_catalog(Cursor::new(text)).unwrap();

        assert_eq!(
            entries,
            vec![
                CatalogEntry::new("1984", "George Orwell"),
                CatalogEntry::new("Emma", "Jane Austen"),
            ]
        );
    }

    #[test]
    fn test_parse_skips_blank_lines_and_crlf() {
        let text = "\r\nDune\tFrank Herbert\r\n\n  \nEmma\tJane Austen";
        let entries = parse_catalog(Cursor::new(text)).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].author, "Frank Herbert");
        assert_eq!(entries[1].title, "Emma");
    }

    #[test]
    fn test_parse_splits_on_first_tab() {
        let entries = parse_catalog(Cursor::new("Title\tAuthor\twith tab")).unwrap();
        assert_eq!(entries[0].author, "Author\twith tab");
    }

    #[test]
    fn test_parse_rejects_missing_tab() {
        let err = parse_catalog(Cursor::new("1984\tGeorge Orwell\nno tab here\n")).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRecord { line: 2 }));
    }

    #[test]
    fn test_parse_rejects_blank_author() {
        let err = parse_catalog(Cursor::new("Emma\t   \n")).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRecord { line: 1, .. }));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1984\tGeorge Orwell").unwrap();
        writeln!(file, "Brave New World\tAldous Huxley").unwrap();

        let entries = load_catalog(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], CatalogEntry::new("Brave New World", "Aldous Huxley"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.tsv");

        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Io { path: p, .. } if p == path));
    }
}
