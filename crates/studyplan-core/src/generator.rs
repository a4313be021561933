//! Schedule generation.
//!
//! Splits a daily hour budget evenly across subjects and repeats the same
//! split for every day of the plan.

use crate::error::{PlannerError, Result};
use crate::schedule::{Allocation, Day, Schedule, MAX_DAYS};

/// Generate an evenly split study schedule.
///
/// Every day receives one allocation per subject, in input order, at
/// `total_hours_per_day / subjects.len()` hours rounded to two decimals.
/// Subjects are not deduplicated; callers that want unique subjects should
/// deduplicate before calling.
///
/// # Errors
///
/// Returns `PlannerError::InvalidInput` if:
/// - `subjects` is empty or contains a blank name
/// - `total_hours_per_day` is not a positive finite number, or is too large
///   to round to two decimals
/// - `num_days` is zero or exceeds [`MAX_DAYS`]
///
/// # Examples
///
/// ```
/// use studyplan_core::generate;
///
/// let schedule = generate(&["Math", "History"], 6.0, 2).unwrap();
/// assert_eq!(schedule.len(), 2);
/// assert_eq!(schedule.days()[0].subjects[0].hours, 3.0);
/// ```
pub fn generate<S: AsRef<str>>(
    subjects: &[S],
    total_hours_per_day: f64,
    num_days: u32,
) -> Result<Schedule> {
    if subjects.is_empty() {
        return Err(PlannerError::InvalidInput(
            "No subjects provided".to_string(),
        ));
    }
    if let Some(position) = subjects.iter().position(|s| s.as_ref().trim().is_empty()) {
        return Err(PlannerError::InvalidInput(format!(
            "Subject {} is blank",
            position + 1
        )));
    }
    if !total_hours_per_day.is_finite() || total_hours_per_day <= 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "Hours per day must be greater than 0 (got {})",
            total_hours_per_day
        )));
    }
    if num_days == 0 {
        return Err(PlannerError::InvalidInput(
            "Number of days must be greater than 0".to_string(),
        ));
    }
    if num_days > MAX_DAYS {
        return Err(PlannerError::InvalidInput(format!(
            "Number of days must be at most {} (got {})",
            MAX_DAYS, num_days
        )));
    }

    let per_subject = round_hours(total_hours_per_day / subjects.len() as f64);
    if !per_subject.is_finite() {
        return Err(PlannerError::InvalidInput(format!(
            "Hours per day is too large (got {})",
            total_hours_per_day
        )));
    }
    let allocations: Vec<Allocation> = subjects
        .iter()
        .map(|subject| Allocation::new(subject.as_ref(), per_subject))
        .collect();

    let days = (1..=num_days)
        .map(|day_number| Day::with_subjects(day_number, allocations.clone()))
        .collect();

    Schedule::from_days(days)
}

/// Round to two decimal places, halves away from zero.
pub fn round_hours(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
