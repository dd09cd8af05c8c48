//! The elapsed-fraction accrual model.
//!
//! Instead of projecting whole months forward like [`project`], this model
//! looks at how much of the year has already elapsed: the fraction of the
//! current month that has passed earns a proportional share of the monthly
//! allotment, truncated to whole days. It is kept as a separate strategy
//! with its own integer result type and is never merged with the month-based
//! model.
//!
//! [`project`]: crate::accrual::project

use log::debug;

use crate::accrual::{Policy, MONTHS_PER_YEAR};
use crate::time::Date;

/// Integer day counts produced by the elapsed-fraction model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accumulation {
    /// Days due right now: the banked balance plus this month's share.
    pub days_due_total: u32,
    /// Days earned since the start of the current year.
    pub days_due_this_year: u32,
    /// Days that will still be earned before year end.
    pub days_remaining_this_year: u32,
    /// The part of the current balance carried over from previous years.
    pub days_due_accumulated: u32,
    pub total_due_at_end_of_year: u32,
    pub expected_excess_at_end_of_year: u32,
}

/// Vacation days earned in the current month so far: the elapsed fraction of
/// the month applied to the monthly allotment, truncated to whole days.
fn days_due_this_month(policy: &Policy, today: Date) -> u32 {
    let per_month = policy.annual_days / MONTHS_PER_YEAR;
    let days_in_month = today.year().number_of_days_in_month(today.month()) as f64;

    ((today.day() as f64 / days_in_month) * per_month as f64) as u32
}

/// Vacation days earned since January 1st: elapsed whole months plus the
/// fraction of the current month, applied to the monthly allotment and
/// truncated to whole days.
fn days_due_since_start_of_year(policy: &Policy, today: Date) -> u32 {
    let per_month = policy.annual_days / MONTHS_PER_YEAR;
    let days_in_month = today.year().number_of_days_in_month(today.month()) as f64;
    let elapsed_months = (today.month().as_usize() - 1) as f64;

    ((elapsed_months + today.day() as f64 / days_in_month) * per_month as f64) as u32
}

/// Runs the elapsed-fraction model for the given balance and date.
#[must_use]
pub fn accumulate(policy: &Policy, current_hours: f64, today: Date) -> Accumulation {
    let days_due_total =
        (current_hours / policy.work_day_hours) as u32 + days_due_this_month(policy, today);
    let days_due_this_year = days_due_since_start_of_year(policy, today);
    let days_remaining_this_year = policy.annual_days.saturating_sub(days_due_this_year);
    let days_due_accumulated = days_due_total.saturating_sub(days_due_this_year);
    let total_due_at_end_of_year = days_due_total + days_remaining_this_year;
    let expected_excess_at_end_of_year = total_due_at_end_of_year.saturating_sub(policy.cap_days());

    debug!(
        "accumulation at {}: due {} ({} this year), {} remaining",
        today, days_due_total, days_due_this_year, days_remaining_this_year
    );

    Accumulation {
        days_due_total,
        days_due_this_year,
        days_remaining_this_year,
        days_due_accumulated,
        total_due_at_end_of_year,
        expected_excess_at_end_of_year,
    }
}
