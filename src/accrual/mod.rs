//! The accrual engine: turns an annual allotment, a banked balance and a
//! calendar position into the projected year-end totals.

use log::debug;
use thiserror::Error;

use crate::time::{Date, WeekStart};

mod allotment;
pub use allotment::*;
mod schedule;
pub use schedule::*;
pub mod stats;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Hours in one working day, as used by the month-based projection.
pub const WORK_DAY_HOURS: f64 = 8.4;

/// The slightly larger figure used by payroll exports that bill 202 hours
/// over 24 days. Both constants are in active use depending on who produced
/// the balance figure, so neither replaces the other.
pub const PAYROLL_WORK_DAY_HOURS: f64 = 8.416666666;

pub const DEFAULT_ANNUAL_DAYS: u32 = 24;
pub const DEFAULT_MAX_ACCUM_DAYS: u32 = 36;

const HALF_DAY_EPSILON: f64 = 1e-3;

/// How the accumulation cap is derived from the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapRule {
    /// A fixed cap, regardless of the allotment size.
    Fixed(u32),
    /// Small allotments keep the fixed minimum cap, larger ones may
    /// accumulate twice their allotment.
    Tiered,
}

impl CapRule {
    #[must_use]
    pub const fn cap_for(&self, annual_days: u32) -> u32 {
        match *self {
            Self::Fixed(cap) => cap,
            Self::Tiered => {
                if annual_days < 18 {
                    DEFAULT_MAX_ACCUM_DAYS
                } else {
                    annual_days * 2
                }
            }
        }
    }
}

impl Default for CapRule {
    fn default() -> Self {
        Self::Fixed(DEFAULT_MAX_ACCUM_DAYS)
    }
}

/// The vacation policy an employee is under.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    pub annual_days: u32,
    pub cap: CapRule,
    pub week_start: WeekStart,
    /// Hours that one vacation day is worth. Must be positive; used for
    /// every hours/days conversion under this policy.
    pub work_day_hours: f64,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            annual_days: DEFAULT_ANNUAL_DAYS,
            cap: CapRule::default(),
            week_start: WeekStart::default(),
            work_day_hours: WORK_DAY_HOURS,
        }
    }
}

impl Policy {
    #[must_use]
    pub fn hours_to_days(&self, hours: f64) -> f64 {
        hours / self.work_day_hours
    }

    #[must_use]
    pub fn days_to_hours(&self, days: f64) -> f64 {
        days * self.work_day_hours
    }

    /// The accumulation cap in days, with the tiering rule applied.
    #[must_use]
    pub fn cap_days(&self) -> u32 {
        self.cap.cap_for(self.annual_days)
    }

    /// Hours of vacation credited per month.
    #[must_use]
    pub fn monthly_hours(&self) -> f64 {
        self.days_to_hours(self.annual_days as f64) / MONTHS_PER_YEAR as f64
    }
}

/// Everything one projection run needs. A value object; nothing in here is
/// shared or mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionInput {
    pub policy: Policy,
    /// The accumulated balance from the latest pay slip, in hours.
    pub current_hours: f64,
    pub today: Date,
    /// Extra vacation days the user intends to consume before year end.
    pub extra_days: f64,
}

/// The month-based projection of the year-end balance.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// Months left in the year, the current one included.
    pub remaining_months: u32,
    pub monthly_hours: f64,
    pub additional_hours: f64,
    pub additional_days: f64,
    pub total_hours: f64,
    /// The projected year-end total, rounded to whole days with ties away
    /// from zero.
    pub total_days: f64,
    pub excess_days: f64,
    pub working_days_remaining: usize,
}

/// Projects the year-end balance with the month-based model: every remaining
/// month credits one twelfth of the annual allotment.
#[must_use]
pub fn project(input: &ProjectionInput) -> Projection {
    let policy = &input.policy;
    let today = input.today;

    let remaining_months = today.month().remaining_in_year() as u32;
    let monthly_hours = policy.monthly_hours();
    let additional_hours = remaining_months as f64 * monthly_hours;
    let additional_days = policy.hours_to_days(additional_hours);

    let total_hours =
        input.current_hours + additional_hours - policy.days_to_hours(input.extra_days);
    let total_days = policy.hours_to_days(total_hours).round();
    let excess_days = excess_days(total_days, policy.cap_days());

    let working_days_remaining =
        working_days_remaining(today.year(), today.month(), policy.week_start);

    debug!(
        "projection at {}: {} months remaining, {:.2}h/month, total {:.2}h",
        today, remaining_months, monthly_hours, total_hours
    );

    Projection {
        remaining_months,
        monthly_hours,
        additional_hours,
        additional_days,
        total_hours,
        total_days,
        excess_days,
        working_days_remaining,
    }
}

/// The part of a projected total that exceeds the cap and would be forfeited.
#[must_use]
pub fn excess_days(total_days: f64, cap: u32) -> f64 {
    (total_days - cap as f64).max(0.0)
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtraDaysError {
    #[error("extra vacation consumption cannot be negative, got {0}")]
    Negative(f64),
    #[error("extra vacation consumption must be in half-day increments (e.g. 1, 1.5, 2), got {0}")]
    NotHalfDayResolution(f64),
    #[error(
        "extra vacation consumption ({requested}) exceeds the {available} working days \
         schedulable from the start of the previous month"
    )]
    ExceedsSchedulable { requested: f64, available: usize },
}

/// Whether a value is a whole or half day (within a small tolerance).
#[must_use]
pub fn is_half_day_resolution(value: f64) -> bool {
    if value < 0.0 {
        return false;
    }

    let fractional = value - value.floor();

    fractional < HALF_DAY_EPSILON
        || (fractional - 0.5).abs() < HALF_DAY_EPSILON
        || fractional > 1.0 - HALF_DAY_EPSILON
}

/// Validates the requested extra vacation consumption against the half-day
/// granularity rule and the schedulable-days bound.
pub fn validate_extra_days(days: f64, max_schedulable: usize) -> Result<(), ExtraDaysError> {
    if days < 0.0 {
        return Err(ExtraDaysError::Negative(days));
    }

    if !is_half_day_resolution(days) {
        return Err(ExtraDaysError::NotHalfDayResolution(days));
    }

    if days > max_schedulable as f64 {
        return Err(ExtraDaysError::ExceedsSchedulable {
            requested: days,
            available: max_schedulable,
        });
    }

    Ok(())
}
