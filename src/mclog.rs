//! Quick triage over a game or server `latest.log`.

use crate::error::{PackError, Result};
use crate::workspace::read_lossy;
use std::path::Path;

/// Substrings that mark a line worth surfacing.
pub const ERROR_KEYWORDS: &[&str] = &["ERROR", "WARN", "Exception", "Failed to", "Stacktrace", "Crash"];

/// One flagged log line.
#[derive(Debug, Clone)]
pub struct LogHit {
    /// 1-based line number in the full file.
    pub line_no: usize,
    pub line: String,
}

/// Result of a log scan over the last `tail` lines.
#[derive(Debug)]
pub struct LogScan {
    pub hits: Vec<LogHit>,
    /// Keyword to number of flagged lines containing it, in
    /// `ERROR_KEYWORDS` order, zero counts omitted.
    pub counts: Vec<(&'static str, usize)>,
}

/// Scan the last `tail` lines of the log for error keywords.
pub fn parse_log(log_path: &Path, tail: usize) -> Result<LogScan> {
    if !log_path.exists() {
        return Err(PackError::NotFound {
            path: log_path.display().to_string(),
        });
    }
    let content = read_lossy(log_path)?;
    let lines: Vec<&str> = content.lines().collect();
    let skip = lines.len().saturating_sub(tail);

    let mut hits = Vec::new();
    let mut counts = vec![0usize; ERROR_KEYWORDS.len()];
    for (idx, line) in lines.iter().enumerate().skip(skip) {
        let mut flagged = false;
        for (k, keyword) in ERROR_KEYWORDS.iter().enumerate() {
            if line.contains(keyword) {
                counts[k] += 1;
                flagged = true;
            }
        }
        if flagged {
            hits.push(LogHit {
                line_no: idx + 1,
                line: (*line).to_string(),
            });
        }
    }

    let counts = ERROR_KEYWORDS
        .iter()
        .zip(counts)
        .filter(|(_, n)| *n > 0)
        .map(|(kw, n)| (*kw, n))
        .collect();
    Ok(LogScan { hits, counts })
}

/// Render a scan the way the CLI prints it.
pub fn format_scan(scan: &LogScan) -> Vec<String> {
    if scan.hits.is_empty() {
        return vec!["no error or warning patterns found".to_string()];
    }
    let mut lines: Vec<String> = scan
        .hits
        .iter()
        .map(|h| format!("{}: {}", h.line_no, h.line))
        .collect();
    let summary = scan
        .counts
        .iter()
        .map(|(kw, n)| format!("{}={}", kw, n))
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(format!("counts: {}", summary));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_hits_carry_absolute_line_numbers() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("latest.log");
        fs::write(&path, "ok\n[12:00:01] [Server/ERROR]: boom\nok\n").unwrap();

        let scan = parse_log(&path, 400).unwrap();
        assert_eq!(scan.hits.len(), 1);
        assert_eq!(scan.hits[0].line_no, 2);
        assert_eq!(scan.counts, vec![("ERROR", 1)]);
    }

    #[test]
    fn test_tail_limits_the_window() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("latest.log");
        let mut body = String::from("old ERROR line\n");
        for _ in 0..10 {
            body.push_str("fine\n");
        }
        body.push_str("recent WARN line\n");
        fs::write(&path, &body).unwrap();

        let scan = parse_log(&path, 5).unwrap();
        assert_eq!(scan.hits.len(), 1);
        assert!(scan.hits[0].line.contains("WARN"));
    }

    #[test]
    fn test_clean_log_formats_fallback() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("latest.log");
        fs::write(&path, "all good\nstill good\n").unwrap();

        let scan = parse_log(&path, 400).unwrap();
        assert_eq!(format_scan(&scan), vec!["no error or warning patterns found"]);
    }

    #[test]
    fn test_missing_log_is_not_found() {
        let err = parse_log(Path::new("/nonexistent/latest.log"), 400).unwrap_err();
        assert!(matches!(err, PackError::NotFound { .. }));
    }
}
