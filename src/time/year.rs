use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::time::{Month, WeekDay};

#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize, Display,
)]
#[serde(from = "usize")]
#[serde(into = "usize")]
#[display("{_0}")]
pub struct Year(usize);

impl Year {
    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A year that is not a leap year is a common year.
    pub const fn is_common_year(&self) -> bool {
        self.as_usize() % 4 != 0 || (self.as_usize() % 100 == 0 && self.as_usize() % 400 != 0)
    }

    /// A leap year is a calendar year that contains an additional day added to
    /// February, so it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        !self.is_common_year()
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// Calculate the weekday of the specified month and day in this year.
    ///
    /// This uses Zeller's congruence for the Gregorian calendar. Zeller counts
    /// January and February as months 13 and 14 of the previous year and
    /// numbers the result `0 = Saturday` through `6 = Friday`; the result is
    /// shifted onto the `0 = Sunday` scale used by [`WeekDay`].
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid.
    #[must_use]
    pub const fn week_day(&self, month: Month, day: usize) -> WeekDay {
        let mut m = month.as_usize() as i64;
        let mut y = self.0 as i64;

        if m < 3 {
            m += 12;
            y -= 1;
        }

        let q = day as i64;
        let k = y % 100;
        let j = y / 100;

        let h = (q + (13 * (m + 1)) / 5 + k + k / 4 + j / 4 - 2 * j).rem_euclid(7);

        WeekDay::from_index(((h + 6) % 7) as usize)
    }

    /// Returns the number of days in this year.
    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    #[must_use]
    pub const fn prev(&self) -> Self {
        Self(self.0 - 1)
    }
}

impl From<usize> for Year {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<Year> for usize {
    fn from(value: Year) -> Self {
        value.as_usize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_leap_year() {
        assert!(Year::new(2000).is_leap_year());
        assert!(Year::new(2024).is_leap_year());
        assert!(!Year::new(1900).is_leap_year());
        assert!(!Year::new(2023).is_leap_year());

        for year in [1904, 1908, 2004, 2016, 2020, 2028, 2400] {
            assert!(
                Year::new(year).is_leap_year(),
                "{} should be a leap year",
                year
            );
        }

        for year in [1900, 1901, 2100, 2200, 2300, 2025, 2026, 2027] {
            assert!(
                !Year::new(year).is_leap_year(),
                "{} should not be a leap year",
                year
            );
        }
    }

    #[test]
    fn test_number_of_days_in_month() {
        assert_eq!(Year::new(2024).number_of_days_in_month(Month::February), 29);
        assert_eq!(Year::new(2025).number_of_days_in_month(Month::February), 28);
        assert_eq!(Year::new(2025).number_of_days_in_month(Month::January), 31);
        assert_eq!(Year::new(2025).number_of_days_in_month(Month::April), 30);
        assert_eq!(Year::new(2025).number_of_days_in_month(Month::December), 31);
    }

    #[test]
    fn test_days() {
        for year in 1904..=2100 {
            let year = Year::new(year);
            if year.is_leap_year() {
                assert_eq!(year.days(), 366, "{} should have 366 days", year);
            } else {
                assert_eq!(year.days(), 365, "{} should have 365 days", year);
            }
        }
    }

    #[test]
    fn test_week_day() {
        // known dates around a December 2024 weekend
        assert_eq!(
            Year::new(2024).week_day(Month::December, 14),
            WeekDay::Saturday
        );
        assert_eq!(
            Year::new(2024).week_day(Month::December, 15),
            WeekDay::Sunday
        );
        assert_eq!(
            Year::new(2024).week_day(Month::December, 16),
            WeekDay::Monday
        );

        assert_eq!(
            Year::new(2025).week_day(Month::January, 1),
            WeekDay::Wednesday
        );
        // leap day
        assert_eq!(
            Year::new(2024).week_day(Month::February, 29),
            WeekDay::Thursday
        );
    }

    #[test]
    fn test_week_day_advances_by_one() {
        // consecutive days cycle through the week without gaps
        let year = Year::new(2024);
        let mut previous = year.week_day(Month::January, 1);

        for month in Month::months() {
            let start = if month.is_eq(&Month::January) { 2 } else { 1 };
            for day in start..=year.number_of_days_in_month(month) {
                let current = year.week_day(month, day);
                assert_eq!(
                    current.as_usize(),
                    (previous.as_usize() + 1) % 7,
                    "{}-{:02}-{:02} should follow a {}",
                    year,
                    month,
                    day,
                    previous
                );
                previous = current;
            }
        }
    }
}
