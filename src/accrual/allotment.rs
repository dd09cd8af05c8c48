use thiserror::Error;

pub const MIN_ANNUAL_DAYS: u32 = 15;
pub const MAX_ANNUAL_DAYS: u32 = 24;

/// Payroll hour totals for each allotment in `MIN_ANNUAL_DAYS..=MAX_ANNUAL_DAYS`.
///
/// These are the figures that appear on pay slips. They are rounded
/// idiosyncratically by payroll, so they are kept as a table instead of being
/// derived from the day count.
const ANNUAL_HOURS: [u32; 10] = [126, 134, 143, 151, 160, 168, 176, 185, 193, 202];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllotmentError {
    #[error(
        "annual allotment must be between {MIN_ANNUAL_DAYS} and {MAX_ANNUAL_DAYS} days, got {0}"
    )]
    DaysOutOfRange(u32),
    #[error("{0} annual hours does not correspond to a valid allotment")]
    UnknownHours(u32),
}

/// Checks that `days` is a member of the validated allotment set.
pub fn validate_days(days: u32) -> Result<(), AllotmentError> {
    if !(MIN_ANNUAL_DAYS..=MAX_ANNUAL_DAYS).contains(&days) {
        return Err(AllotmentError::DaysOutOfRange(days));
    }

    Ok(())
}

/// The payroll hour figure for an allotment of `days`.
pub fn hours_for_days(days: u32) -> Result<u32, AllotmentError> {
    validate_days(days)?;

    Ok(ANNUAL_HOURS[(days - MIN_ANNUAL_DAYS) as usize])
}

/// The canonical day figure for a payroll hour total. The hour total must
/// match the table exactly.
pub fn days_for_hours(hours: u32) -> Result<u32, AllotmentError> {
    ANNUAL_HOURS
        .iter()
        .position(|&entry| entry == hours)
        .map(|index| MIN_ANNUAL_DAYS + index as u32)
        .ok_or(AllotmentError::UnknownHours(hours))
}
