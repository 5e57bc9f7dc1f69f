//! Per-day visit log.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, NaiveDateTime};
use common::ShellResult;

/// Default directory holding visit logs.
pub const LOG_DIR: &str = "logs";

/// File name prefix of a visit log; the date follows immediately.
pub const FILE_PREFIX: &str = "access_";

/// File name suffix of a visit log.
pub const FILE_SUFFIX: &str = ".log";

const DATE_FORMAT: &str = "%Y%m%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// File name of the visit log for a day, e.g. `access_20240131.log`.
pub fn log_file_name(date: NaiveDate) -> String {
    format!("{}{}{}", FILE_PREFIX, date.format(DATE_FORMAT), FILE_SUFFIX)
}

/// Format one visit log line, without the trailing newline.
pub fn format_entry(time: NaiveDateTime, url: &str) -> String {
    format!("{} - {}", time.format(TIMESTAMP_FORMAT), url)
}

/// Append-only visit log, one file per calendar day.
#[derive(Clone, Debug)]
pub struct VisitLog {
    directory: PathBuf,
}

impl VisitLog {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory holding the log files.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the log file for a day.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.directory.join(log_file_name(date))
    }

    /// Record a visit at the current local time.
    pub fn record(&self, url: &str) -> ShellResult<PathBuf> {
        self.record_at(url, Local::now().naive_local())
    }

    /// Record a visit at `time`, returning the file written to.
    ///
    /// The file is opened, appended to and closed for every entry so that
    /// earlier entries survive a crash.
    pub fn record_at(&self, url: &str, time: NaiveDateTime) -> ShellResult<PathBuf> {
        fs::create_dir_all(&self.directory)?;

        let path = self.path_for(time.date());
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{}", format_entry(time, url))?;
        file.flush()?;

        Ok(path)
    }
}

impl Default for VisitLog {
    fn default() -> Self {
        Self::new(LOG_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_log_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(log_file_name(date), "access_20240131.log");
    }

    #[test]
    fn test_format_entry() {
        assert_eq!(
            format_entry(at(2024, 3, 5, 9, 7, 1), "http://x.test/"),
            "2024-03-05 09:07:01 - http://x.test/"
        );
    }

    #[test]
    fn test_record_appends_lines() {
        let temp_dir = TempDir::new().unwrap();
        let log = VisitLog::new(temp_dir.path().join("logs"));

        let first = log.record_at("http://a.test/", at(2024, 3, 5, 10, 0, 0)).unwrap();
        let second = log.record_at("http://b.test/", at(2024, 3, 5, 10, 0, 5)).unwrap();
        assert_eq!(first, second);
        assert!(first.ends_with("access_20240305.log"));

        let contents = fs::read_to_string(&first).unwrap();
        assert_eq!(
            contents,
            "2024-03-05 10:00:00 - http://a.test/\n2024-03-05 10:00:05 - http://b.test/\n"
        );
    }

    #[test]
    fn test_record_splits_by_day() {
        let temp_dir = TempDir::new().unwrap();
        let log = VisitLog::new(temp_dir.path());

        let monday = log.record_at("http://a.test/", at(2024, 3, 4, 23, 59, 59)).unwrap();
        let tuesday = log.record_at("http://b.test/", at(2024, 3, 5, 0, 0, 0)).unwrap();

        assert_ne!(monday, tuesday);
        assert_eq!(fs::read_to_string(&tuesday).unwrap().lines().count(), 1);
    }
}
