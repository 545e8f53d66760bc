// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Time source for generated output file names.

use chrono::{Local, NaiveDateTime};

/// Sortable and safe in file names on common platforms (no `:`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H.%M.%S";

pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// `now()` rendered with [`TIMESTAMP_FORMAT`].
    fn timestamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn timestamp_pattern() {
        let at = NaiveDate::from_ymd_opt(2026, 3, 7)
            .and_then(|d| d.and_hms_opt(9, 5, 2))
            .expect("valid date");
        assert_eq!(FixedClock(at).timestamp(), "2026-03-07 09.05.02");
    }
}
