//! Visit log retention sweep.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta};
use common::ShellResult;
use tracing::{info, warn};

use crate::visit_log::{FILE_PREFIX, FILE_SUFFIX};

/// Visit logs older than this many days are deleted at startup.
pub const RETENTION_DAYS: i64 = 365;

/// Result of a retention sweep.
#[derive(Debug, Default)]
pub struct SweepReport {
    /// Files that were deleted.
    pub deleted: Vec<PathBuf>,
    /// Files inside the retention window.
    pub kept: Vec<PathBuf>,
    /// Files whose date could not be read or that could not be deleted.
    pub failed: Vec<PathBuf>,
}

/// Extract the date embedded in a visit log file name.
///
/// The date is the eight characters right after the `access_` prefix, in
/// `YYYYMMDD` form. Returns `None` if they are not a valid calendar date.
pub fn parse_log_date(file_name: &str) -> Option<NaiveDate> {
    let start = FILE_PREFIX.len();
    let digits = file_name.get(start..start + 8)?;
    // `%Y` would otherwise accept a sign.
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(digits, "%Y%m%d").ok()
}

fn is_visit_log(file_name: &str) -> bool {
    file_name.len() >= FILE_PREFIX.len() + FILE_SUFFIX.len()
        && file_name.starts_with(FILE_PREFIX)
        && file_name.ends_with(FILE_SUFFIX)
}

/// Delete visit logs in `directory` dated before `now - max_age`.
///
/// The directory is created if missing. Per-file failures are logged and
/// recorded in the report without stopping the sweep; only failing to create
/// or list the directory is an error.
pub fn sweep(directory: &Path, now: NaiveDateTime, max_age: TimeDelta) -> ShellResult<SweepReport> {
    fs::create_dir_all(directory)?;

    let cutoff = now - max_age;
    let mut report = SweepReport::default();

    for entry in fs::read_dir(directory)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to read entry in {}: {}", directory.display(), e);
                continue;
            }
        };

        let path = entry.path();
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if !is_visit_log(file_name) || !path.is_file() {
            continue;
        }

        let Some(date) = parse_log_date(file_name) else {
            warn!("Failed to process log file {}: no valid date in name", path.display());
            report.failed.push(path);
            continue;
        };

        let expired = date
            .and_hms_opt(0, 0, 0)
            .is_some_and(|start_of_day| start_of_day < cutoff);
        if !expired {
            report.kept.push(path);
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Old log deleted: {}", path.display());
                report.deleted.push(path);
            }
            Err(e) => {
                warn!("Failed to process log file {}: {}", path.display(), e);
                report.failed.push(path);
            }
        }
    }

    Ok(report)
}

/// Startup sweep with the default retention window and the local clock.
/// Never fails; directory-level errors are logged.
pub fn sweep_old_logs(directory: &Path) -> SweepReport {
    let now = Local::now().naive_local();
    match sweep(directory, now, TimeDelta::days(RETENTION_DAYS)) {
        Ok(report) => report,
        Err(e) => {
            warn!("Log retention sweep of {} failed: {}", directory.display(), e);
            SweepReport::default()
        }
    }
}
