//! Input-file reading with per-file error isolation.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read a whole log file into memory, one string per line.
///
/// The handle is scoped to this call. An unreadable file surfaces as an
/// `Err` the pipeline logs and skips; it never aborts the remaining files.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    BufReader::new(file).lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_lines() {
        let path = std::env::temp_dir().join("logtally-ingest-test.log");
        fs::write(&path, "first line\nsecond line\n").unwrap();
        let lines = read_lines(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(lines, vec!["first line", "second line"]);
    }

    #[test]
    fn test_missing_file_is_err_not_panic() {
        assert!(read_lines(Path::new("/nonexistent/access.log")).is_err());
    }
}
