//! Schedule data model and row reconstruction.
//!
//! A [`Schedule`] is an ordered list of [`Day`]s numbered `1..=N` without
//! gaps. The tabular codecs flatten it into [`Row`]s and rebuild it with
//! [`Schedule::from_rows`], which infers Day boundaries from the Day column
//! alone.

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Hours assigned to one subject on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Subject name (non-empty)
    #[serde(rename = "Subject")]
    pub subject: String,

    /// Hours of study (finite, non-negative)
    #[serde(rename = "Hours")]
    pub hours: f64,
}

impl Allocation {
    pub fn new(subject: impl Into<String>, hours: f64) -> Self {
        Self {
            subject: subject.into(),
            hours,
        }
    }

    fn validate(&self, day_number: u32) -> Result<()> {
        if self.subject.trim().is_empty() {
            return Err(PlannerError::Format(format!(
                "Day {} has an allocation with an empty subject name",
                day_number
            )));
        }
        if !self.hours.is_finite() || self.hours < 0.0 {
            return Err(PlannerError::Format(format!(
                "Day {} subject \"{}\" has invalid hours: {}",
                day_number, self.subject, self.hours
            )));
        }
        Ok(())
    }
}

/// One day of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// 1-based position in the schedule
    #[serde(rename = "Day")]
    pub day_number: u32,

    /// Allocations in display order
    #[serde(rename = "Subjects")]
    pub subjects: Vec<Allocation>,
}

impl Day {
    pub fn new(day_number: u32) -> Self {
        Self {
            day_number,
            subjects: Vec::new(),
        }
    }

    pub fn with_subjects(day_number: u32, subjects: Vec<Allocation>) -> Self {
        Self {
            day_number,
            subjects,
        }
    }

    /// Sum of hours across this day's allocations.
    pub fn total_hours(&self) -> f64 {
        self.subjects.iter().map(|a| a.hours).sum()
    }
}

/// Flattened `(day, subject, hours)` triple used by the tabular codecs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(rename = "Day")]
    pub day: u32,

    #[serde(rename = "Subject")]
    pub subject: String,

    #[serde(rename = "Hours")]
    pub hours: f64,
}

impl Row {
    pub fn new(day: u32, subject: impl Into<String>, hours: f64) -> Self {
        Self {
            day,
            subject: subject.into(),
            hours,
        }
    }
}

/// Column names written as the first row of every tabular file.
pub const ROW_HEADER: [&str; 3] = ["Day", "Subject", "Hours"];

/// Upper bound on the number of days in a schedule (100 years).
pub const MAX_DAYS: u32 = 36_500;

/// A well-formed study schedule.
///
/// Days are always numbered `1..=len()` in order; allocations always carry a
/// non-empty subject and finite, non-negative hours. Every constructor checks
/// this, so a `Schedule` value is structurally valid by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Day>", into = "Vec<Day>")]
pub struct Schedule {
    days: Vec<Day>,
}

impl Schedule {
    /// An empty schedule with no days.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schedule from days, validating numbering and allocations.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Format` if day numbers are not exactly
    /// `1, 2, ..., N` in order, or if any allocation is invalid.
    pub fn from_days(days: Vec<Day>) -> Result<Self> {
        for (index, day) in days.iter().enumerate() {
            let expected = index as u64 + 1;
            if u64::from(day.day_number) != expected {
                return Err(PlannerError::Format(format!(
                    "Expected day {} at position {}, found day {}",
                    expected, expected, day.day_number
                )));
            }
            for allocation in &day.subjects {
                allocation.validate(day.day_number)?;
            }
        }
        Ok(Self { days })
    }

    /// Rebuild a schedule from flat rows in a single pass.
    ///
    /// Rows must be grouped and non-decreasing by day. A day number that
    /// jumps ahead inserts empty intermediate days; a day number lower than
    /// the previous row's is rejected rather than reordered.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Format` for day `0` or above [`MAX_DAYS`], for rows out of day order,
    /// for invalid allocations, or for any error yielded by `rows` itself.
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Row>>,
    {
        let mut days: Vec<Day> = Vec::new();
        let mut previous_day = 0u32;

        // Messages name the day rather than a position; codecs that know the
        // source line report it from their own parsing errors.
        for row in rows {
            let row = row?;
            if row.day == 0 {
                return Err(PlannerError::Format(
                    "Day numbers start at 1, found day 0".to_string(),
                ));
            }
            if row.day > MAX_DAYS {
                return Err(PlannerError::Format(format!(
                    "Day {} exceeds the maximum of {}",
                    row.day, MAX_DAYS
                )));
            }
            if row.day < previous_day {
                return Err(PlannerError::Format(format!(
                    "Day {} appears after day {}; rows must be grouped by day in ascending order",
                    row.day, previous_day
                )));
            }
            previous_day = row.day;

            while days.len() < row.day as usize {
                days.push(Day::new(days.len() as u32 + 1));
            }

            let allocation = Allocation::new(row.subject, row.hours);
            allocation.validate(row.day)?;
            if let Some(day) = days.last_mut() {
                day.subjects.push(allocation);
            }
        }

        Ok(Self { days })
    }

    /// Flatten into rows in day-then-subject order.
    pub fn to_rows(&self) -> Vec<Row> {
        self.days
            .iter()
            .flat_map(|day| {
                day.subjects
                    .iter()
                    .map(move |a| Row::new(day.day_number, a.subject.clone(), a.hours))
            })
            .collect()
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of allocations across all days.
    pub fn allocation_count(&self) -> usize {
        self.days.iter().map(|day| day.subjects.len()).sum()
    }

    /// Sum of hours across all days.
    pub fn total_hours(&self) -> f64 {
        self.days.iter().map(Day::total_hours).sum()
    }

    /// Distinct subject names in first-seen order.
    pub fn subjects(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for allocation in self.days.iter().flat_map(|day| &day.subjects) {
            if !seen.contains(&allocation.subject.as_str()) {
                seen.push(&allocation.subject);
            }
        }
        seen
    }

    pub fn into_days(self) -> Vec<Day> {
        self.days
    }
}

impl TryFrom<Vec<Day>> for Schedule {
    type Error = PlannerError;

    fn try_from(days: Vec<Day>) -> Result<Self> {
        Self::from_days(days)
    }
}

impl From<Schedule> for Vec<Day> {
    fn from(schedule: Schedule) -> Self {
        schedule.days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_rows(rows: Vec<Row>) -> impl Iterator<Item = Result<Row>> {
        rows.into_iter().map(Ok)
    }

    #[test]
    fn test_from_rows_groups_by_day() {
        let schedule = Schedule::from_rows(ok_rows(vec![
            Row::new(1, "Math", 3.0),
            Row::new(1, "History", 3.0),
            Row::new(2, "Math", 3.0),
        ]))
        .unwrap();

        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.days()[0].subjects.len(), 2);
        assert_eq!(schedule.days()[1].subjects, vec![Allocation::new("Math", 3.0)]);
    }

    #[test]
    fn test_from_rows_fills_skipped_days() {
        let schedule = Schedule::from_rows(ok_rows(vec![
            Row::new(1, "Math", 2.0),
            Row::new(1, "Art", 2.0),
            Row::new(3, "Math", 2.0),
        ]))
        .unwrap();

        let numbers: Vec<u32> = schedule.days().iter().map(|d| d.day_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(schedule.days()[1].subjects.is_empty());
        assert_eq!(schedule.days()[2].subjects.len(), 1);
    }

    #[test]
    fn test_from_rows_leading_gap() {
        let schedule = Schedule::from_rows(ok_rows(vec![Row::new(2, "Math", 1.0)])).unwrap();
        assert_eq!(schedule.len(), 2);
        assert!(schedule.days()[0].subjects.is_empty());
    }

    #[test]
    fn test_from_rows_rejects_descending_day() {
        let result = Schedule::from_rows(ok_rows(vec![
            Row::new(2, "Math", 1.0),
            Row::new(1, "Math", 1.0),
        ]));
        assert!(matches!(result, Err(PlannerError::Format(_))));
    }

    #[test]
    fn test_from_rows_rejects_non_contiguous_duplicate() {
        let result = Schedule::from_rows(ok_rows(vec![
            Row::new(1, "Math", 1.0),
            Row::new(2, "Math", 1.0),
            Row::new(1, "Art", 1.0),
        ]));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Day 1 appears after day 2"));
    }

    #[test]
    fn test_from_rows_errors_do_not_number_rows() {
        // Row positions here would not match the source file's line numbers.
        let result = Schedule::from_rows(ok_rows(vec![
            Row::new(1, "Math", 1.0),
            Row::new(2, "Math", 1.0),
            Row::new(MAX_DAYS + 1, "Math", 1.0),
        ]));
        let message = result.unwrap_err().to_string();
        assert!(!message.contains("Row "), "{}", message);
        assert!(message.contains(&format!("Day {} exceeds", MAX_DAYS + 1)));

        let message = Schedule::from_rows(ok_rows(vec![Row::new(0, "Math", 1.0)]))
            .unwrap_err()
            .to_string();
        assert!(message.contains("found day 0"), "{}", message);
    }

    #[test]
    fn test_from_rows_rejects_day_zero() {
        let result = Schedule::from_rows(ok_rows(vec![Row::new(0, "Math", 1.0)]));
        assert!(matches!(result, Err(PlannerError::Format(_))));
    }

    #[test]
    fn test_from_rows_rejects_huge_day() {
        let result = Schedule::from_rows(ok_rows(vec![Row::new(u32::MAX, "Math", 1.0)]));
        assert!(matches!(result, Err(PlannerError::Format(_))));
    }

    #[test]
    fn test_from_rows_rejects_bad_allocation() {
        let empty_subject = Schedule::from_rows(ok_rows(vec![Row::new(1, "  ", 1.0)]));
        assert!(matches!(empty_subject, Err(PlannerError::Format(_))));

        let negative = Schedule::from_rows(ok_rows(vec![Row::new(1, "Math", -1.0)]));
        assert!(matches!(negative, Err(PlannerError::Format(_))));

        let nan = Schedule::from_rows(ok_rows(vec![Row::new(1, "Math", f64::NAN)]));
        assert!(matches!(nan, Err(PlannerError::Format(_))));
    }

    #[test]
    fn test_from_rows_propagates_row_errors() {
        let rows = vec![
            Ok(Row::new(1, "Math", 1.0)),
            Err(PlannerError::Format("bad cell".to_string())),
        ];
        let err = Schedule::from_rows(rows).unwrap_err();
        assert!(err.to_string().contains("bad cell"));
    }

    #[test]
    fn test_duplicate_subjects_within_day_are_kept() {
        let schedule = Schedule::from_rows(ok_rows(vec![
            Row::new(1, "Math", 1.0),
            Row::new(1, "Math", 2.0),
        ]))
        .unwrap();
        assert_eq!(schedule.days()[0].subjects.len(), 2);
        assert_eq!(schedule.subjects(), vec!["Math"]);
    }

    #[test]
    fn test_to_rows_order() {
        let schedule = Schedule::from_days(vec![
            Day::with_subjects(1, vec![Allocation::new("Math", 1.5), Allocation::new("Art", 2.0)]),
            Day::new(2),
            Day::with_subjects(3, vec![Allocation::new("Art", 0.5)]),
        ])
        .unwrap();

        assert_eq!(
            schedule.to_rows(),
            vec![
                Row::new(1, "Math", 1.5),
                Row::new(1, "Art", 2.0),
                Row::new(3, "Art", 0.5),
            ]
        );
        assert_eq!(schedule.allocation_count(), 3);
        assert!((schedule.total_hours() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_days_rejects_gaps() {
        let result = Schedule::from_days(vec![Day::new(1), Day::new(3)]);
        assert!(matches!(result, Err(PlannerError::Format(_))));
    }

    #[test]
    fn test_json_shape_and_validation() {
        let schedule = Schedule::from_days(vec![Day::with_subjects(
            1,
            vec![Allocation::new("Math", 3.0)],
        )])
        .unwrap();

        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"Day": 1, "Subjects": [{"Subject": "Math", "Hours": 3.0}]}])
        );

        let bad = serde_json::from_str::<Schedule>(r#"[{"Day": 2, "Subjects": []}]"#);
        assert!(bad.is_err());
    }
}
