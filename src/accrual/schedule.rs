use crate::time::{Month, WeekStart, Year};

/// Counts the working days in a month by classifying every day of the month
/// with its weekday.
#[must_use]
pub fn working_days_in_month(year: Year, month: Month, week_start: WeekStart) -> usize {
    (1..=year.number_of_days_in_month(month))
        .filter(|day| week_start.is_working_day(year.week_day(month, *day)))
        .count()
}

/// Working days left in the year, counting every day of `from` onward.
/// This never wraps into the next year.
#[must_use]
pub fn working_days_remaining(year: Year, from: Month, week_start: WeekStart) -> usize {
    Month::months()
        .into_iter()
        .filter(|month| month.as_usize() >= from.as_usize())
        .map(|month| working_days_in_month(year, month, week_start))
        .sum()
}

/// Working days from the start of the previous month through year end.
///
/// This window is the upper bound for the extra vacation a user may declare
/// as "to be consumed": one month of lookback plus the remainder of the year.
/// In January the lookback reaches into December of the previous year.
#[must_use]
pub fn working_days_from_previous_month_start(
    year: Year,
    current: Month,
    week_start: WeekStart,
) -> usize {
    if current.is_eq(&Month::January) {
        working_days_in_month(year.prev(), Month::December, week_start)
            + working_days_remaining(year, Month::January, week_start)
    } else {
        working_days_remaining(year, current.prev(), week_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_working_days_december_2024() {
        // December 2024 starts on a Sunday and has five full weeks plus
        // Monday the 30th and Tuesday the 31st.
        assert_eq!(
            working_days_in_month(Year::new(2024), Month::December, WeekStart::Sunday),
            23
        );
        assert_eq!(
            working_days_in_month(Year::new(2024), Month::December, WeekStart::Monday),
            22
        );
    }

    #[test]
    fn test_working_days_february() {
        let leap = working_days_in_month(Year::new(2024), Month::February, WeekStart::Sunday);
        let common = working_days_in_month(Year::new(2025), Month::February, WeekStart::Sunday);

        assert!((20..=22).contains(&leap));
        assert!((19..=21).contains(&common));
    }

    #[test]
    fn test_remaining_single_month() {
        assert_eq!(
            working_days_remaining(Year::new(2024), Month::December, WeekStart::Sunday),
            23
        );
        assert_eq!(
            working_days_remaining(Year::new(2024), Month::December, WeekStart::Monday),
            22
        );
    }

    #[test]
    fn test_remaining_full_year() {
        let full_year = working_days_remaining(Year::new(2025), Month::January, WeekStart::Sunday);

        // a year has roughly 260 working days
        assert!((250..=270).contains(&full_year));

        let sum: usize = Month::months()
            .into_iter()
            .map(|month| working_days_in_month(Year::new(2025), month, WeekStart::Sunday))
            .sum();
        assert_eq!(full_year, sum);
    }

    #[test]
    fn test_previous_month_start_wraps_into_last_december() {
        assert_eq!(
            working_days_from_previous_month_start(Year::new(2025), Month::January, WeekStart::Sunday),
            working_days_in_month(Year::new(2024), Month::December, WeekStart::Sunday)
                + working_days_remaining(Year::new(2025), Month::January, WeekStart::Sunday)
        );
    }

    #[test]
    fn test_previous_month_start_within_year() {
        assert_eq!(
            working_days_from_previous_month_start(Year::new(2025), Month::February, WeekStart::Sunday),
            working_days_remaining(Year::new(2025), Month::January, WeekStart::Sunday)
        );
        assert_eq!(
            working_days_from_previous_month_start(Year::new(2025), Month::July, WeekStart::Sunday),
            working_days_remaining(Year::new(2025), Month::June, WeekStart::Sunday)
        );
        assert_eq!(
            working_days_from_previous_month_start(Year::new(2024), Month::December, WeekStart::Sunday),
            working_days_in_month(Year::new(2024), Month::November, WeekStart::Sunday)
                + working_days_in_month(Year::new(2024), Month::December, WeekStart::Sunday)
        );
    }
}
