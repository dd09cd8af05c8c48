//! Renders projection results as the human-readable report printed by the
//! binary.

use core::fmt;

use crate::accrual::stats::Accumulation;
use crate::accrual::{Policy, Projection, ProjectionInput};
use crate::time::Date;

/// Formats a day or hour figure the way the report prints all fractional
/// values: whole numbers lose their decimal part, everything else keeps two
/// decimals.
#[must_use]
pub fn format_days(days: f64) -> String {
    let rounded = days.round();

    if (days - rounded).abs() < 0.005 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.2}", days)
    }
}

/// The report for the month-based projection.
pub struct Report<'a> {
    pub input: &'a ProjectionInput,
    pub projection: &'a Projection,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let policy = &self.input.policy;
        let projection = self.projection;
        let month = self.input.today.month();

        writeln!(f, "=== Vacation Days Calculator ===")?;
        writeln!(
            f,
            "Annual vacation days: {} ({} hours)",
            policy.annual_days,
            format_days(policy.days_to_hours(policy.annual_days as f64))
        )?;
        writeln!(
            f,
            "Maximum accumulated days: {} ({} hours)",
            policy.cap_days(),
            format_days(policy.days_to_hours(policy.cap_days() as f64))
        )?;
        writeln!(
            f,
            "Current accumulated hours: {:.2}",
            self.input.current_hours
        )?;
        writeln!(f)?;
        writeln!(f, "Current month: {} ({})", month.name(), month)?;
        writeln!(
            f,
            "Remaining working days this year: {}",
            projection.working_days_remaining
        )?;
        if self.input.extra_days > 0.0 {
            writeln!(
                f,
                "Extra vacation days consumption: {}",
                format_days(self.input.extra_days)
            )?;
        }
        writeln!(
            f,
            "Remaining months (including current): {}",
            projection.remaining_months
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Additional vacation expected by year end: {} days ({} hours)",
            format_days(projection.additional_days),
            format_days(projection.additional_hours)
        )?;
        writeln!(
            f,
            "Total accumulated vacation expected: {} days ({} hours)",
            format_days(projection.total_days),
            format_days(projection.total_hours)
        )?;
        writeln!(
            f,
            "Vacation to be deducted (exceeding max): {} days ({} hours)",
            format_days(projection.excess_days),
            format_days(policy.days_to_hours(projection.excess_days))
        )
    }
}

/// The report for the elapsed-fraction model.
pub struct AccumulationReport<'a> {
    pub policy: &'a Policy,
    pub today: Date,
    pub stats: &'a Accumulation,
}

impl fmt::Display for AccumulationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats;
        let month = self.today.month();

        writeln!(f, "=== Vacation Days Calculator ===")?;
        writeln!(f, "Annual vacation days: {}", self.policy.annual_days)?;
        writeln!(f, "Maximum accumulated days: {}", self.policy.cap_days())?;
        writeln!(f, "Current month: {} ({})", month.name(), month)?;
        writeln!(f)?;
        write!(f, "Current vacation days due: {}", stats.days_due_total)?;
        if stats.days_due_accumulated > 0 {
            write!(
                f,
                " (accumulated {}, current year {})",
                stats.days_due_accumulated, stats.days_due_this_year
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Expected additional days to end of year: {}",
            stats.days_remaining_this_year
        )?;
        writeln!(
            f,
            "Expected total due at end of year: {}",
            stats.total_due_at_end_of_year
        )?;
        writeln!(
            f,
            "Expected excess days at end of year: {}",
            stats.expected_excess_at_end_of_year
        )
    }
}
