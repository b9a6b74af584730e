//! The configured commission calendar and its lookup operations.
//!
//! The period table is configuration data, not computed: payroll publishes
//! the schedule ahead of time and the application only looks dates up in it.
//! The table must stay sorted by start date; lookups rely on it.

use chrono::NaiveDate;

use super::cycles_model::CommissionCycle;

/// `(start, end, pay)` rows of the published payroll schedule.
const CYCLE_TABLE: &[(&str, &str, &str)] = &[
    ("2024-12-14", "2024-12-27", "2025-01-03"),
    ("2024-12-28", "2025-01-10", "2025-01-17"),
    ("2025-01-11", "2025-01-24", "2025-01-31"),
    ("2025-01-25", "2025-02-07", "2025-02-14"),
    ("2025-02-08", "2025-02-21", "2025-02-28"),
    ("2025-02-22", "2025-03-07", "2025-03-14"),
    ("2025-03-08", "2025-03-21", "2025-03-28"),
    ("2025-03-22", "2025-04-04", "2025-04-11"),
    ("2025-04-05", "2025-04-18", "2025-04-25"),
    ("2025-04-19", "2025-05-02", "2025-05-09"),
    ("2025-05-03", "2025-05-16", "2025-05-23"),
    ("2025-05-17", "2025-05-30", "2025-06-06"),
    ("2025-05-31", "2025-06-13", "2025-06-20"),
    ("2025-06-14", "2025-06-27", "2025-07-03"),
    ("2025-06-28", "2025-07-11", "2025-07-18"),
    ("2025-07-12", "2025-07-25", "2025-08-01"),
    ("2025-07-26", "2025-08-08", "2025-08-15"),
    ("2025-08-09", "2025-08-22", "2025-08-29"),
    ("2025-08-23", "2025-09-05", "2025-09-12"),
    ("2025-09-06", "2025-09-19", "2025-09-26"),
    ("2025-09-20", "2025-10-03", "2025-10-10"),
    ("2025-10-04", "2025-10-17", "2025-10-24"),
    ("2025-10-18", "2025-10-31", "2025-11-07"),
    ("2025-11-01", "2025-11-14", "2025-11-21"),
    ("2025-11-15", "2025-11-28", "2025-12-05"),
    ("2025-11-29", "2025-12-12", "2025-12-19"),
    ("2025-12-13", "2025-12-26", "2026-01-02"),
    ("2025-12-27", "2026-01-09", "2026-01-16"),
];

/// Immutable, ordered table of commission cycles with date-based lookups.
///
/// `today` is always an explicit parameter; the calendar never reads the
/// wall clock itself.
#[derive(Debug, Clone)]
pub struct CycleCalendar {
    cycles: Vec<CommissionCycle>,
}

impl CycleCalendar {
    /// Builds the calendar from the published payroll schedule.
    pub fn standard() -> Self {
        Self::from_rows(CYCLE_TABLE)
    }

    /// Builds a calendar from `(start, end, pay)` ISO date rows.
    ///
    /// Rows must be sorted by start date. Invalid dates are skipped
    /// rather than panicking; the shipped table contains none.
    pub fn from_rows(rows: &[(&str, &str, &str)]) -> Self {
        let cycles = rows
            .iter()
            .filter_map(|(start, end, pay)| {
                Some((
                    NaiveDate::parse_from_str(start, "%Y-%m-%d").ok()?,
                    NaiveDate::parse_from_str(end, "%Y-%m-%d").ok()?,
                    NaiveDate::parse_from_str(pay, "%Y-%m-%d").ok()?,
                ))
            })
            .enumerate()
            .map(|(index, (start, end, pay))| CommissionCycle {
                start,
                end,
                pay,
                index,
            })
            .collect();
        Self { cycles }
    }

    /// Returns the cycle whose inclusive `[start, end]` window contains
    /// `today`, or `None` if `today` falls in a gap or outside the
    /// configured range.
    pub fn current_cycle(&self, today: NaiveDate) -> Option<&CommissionCycle> {
        self.cycles.iter().find(|cycle| cycle.contains(today))
    }

    /// Returns the cycle immediately preceding the current one by table
    /// position, or `None` when there is no current cycle or the current
    /// cycle is the first entry.
    pub fn previous_cycle(&self, today: NaiveDate) -> Option<&CommissionCycle> {
        let current = self.current_cycle(today)?;
        if current.index == 0 {
            return None;
        }
        self.cycles.get(current.index - 1)
    }

    /// Full ordered cycle table.
    pub fn cycles(&self) -> &[CommissionCycle] {
        &self.cycles
    }
}

impl Default for CycleCalendar {
    fn default() -> Self {
        Self::standard()
    }
}
