//! Operator-facing progress reports.

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, SecondsFormat};

/// Progress recorded after a successful commit.
///
/// Renders as `Committed Data - X of Y (timestamp) Z% Complete.`
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    /// Absolute position of the last document committed.
    pub position: u64,
    /// Total reported by the most recent read.
    pub total_found: u64,
    /// When the commit completed.
    pub committed_at: DateTime<FixedOffset>,
}

impl ProgressReport {
    /// A report stamped with the current local time.
    pub fn now(position: u64, total_found: u64) -> Self {
        Self::at(position, total_found, Local::now().fixed_offset())
    }

    /// A report stamped with the given time.
    pub fn at(position: u64, total_found: u64, committed_at: DateTime<FixedOffset>) -> Self {
        Self {
            position,
            total_found,
            committed_at,
        }
    }

    /// Completion percentage. Zero when nothing was reported as found.
    pub fn percent(&self) -> f64 {
        if self.total_found == 0 {
            return 0.0;
        }
        self.position as f64 / self.total_found as f64 * 100.0
    }
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Committed Data - {} of {} ({}) {:.4}% Complete.",
            self.position,
            self.total_found,
            self.committed_at.to_rfc3339_opts(SecondsFormat::Secs, false),
            self.percent()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_time() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-03-05T14:07:09+01:00").unwrap()
    }

    #[test]
    fn test_display() {
        let report = ProgressReport::at(2000, 2400, fixed_time());
        assert_eq!(
            report.to_string(),
            "Committed Data - 2000 of 2400 (2024-03-05T14:07:09+01:00) 83.3333% Complete."
        );
    }

    #[test]
    fn test_percent() {
        assert_eq!(ProgressReport::at(2, 4, fixed_time()).percent(), 50.0);
        assert_eq!(ProgressReport::at(4, 4, fixed_time()).percent(), 100.0);
        assert_eq!(ProgressReport::at(3, 0, fixed_time()).percent(), 0.0);
    }
}
