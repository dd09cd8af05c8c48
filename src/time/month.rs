use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "usize")]
#[serde(into = "usize")]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    pub const fn new(number: usize) -> Self {
        Self::months()[number - 1]
    }

    pub const fn months() -> [Self; 12] {
        [
            Self::January,
            Self::February,
            Self::March,
            Self::April,
            Self::May,
            Self::June,
            Self::July,
            Self::August,
            Self::September,
            Self::October,
            Self::November,
            Self::December,
        ]
    }

    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    #[must_use]
    pub(crate) const fn is_eq(&self, other: &Self) -> bool {
        self.as_usize() == other.as_usize()
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self::months()[self.as_usize() % 12]
    }

    #[must_use]
    pub const fn prev(&self) -> Self {
        Self::months()[(self.as_usize() + 10) % 12]
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// The number of months left in the year, this one included.
    /// December is 1 and January is 12.
    #[must_use]
    pub const fn remaining_in_year(&self) -> usize {
        13 - self.as_usize()
    }
}

impl From<Month> for usize {
    fn from(month: Month) -> Self {
        month.as_usize()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_usize().fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Error)]
#[error("invalid month number")]
pub struct InvalidNumberForMonth;

impl TryFrom<usize> for Month {
    type Error = InvalidNumberForMonth;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::months()
            .into_iter()
            .find(|month| *month as usize == value)
            .ok_or(InvalidNumberForMonth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        for month in Month::months() {
            assert_eq!(month.to_string(), month.as_usize().to_string());
        }
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(Month::try_from(0), Err(InvalidNumberForMonth));
        assert_eq!(Month::try_from(13), Err(InvalidNumberForMonth));

        for number in 1..=12 {
            assert_eq!(Month::try_from(number), Ok(Month::new(number)));
        }
    }

    #[test]
    fn test_next_prev() {
        assert_eq!(Month::December.next(), Month::January);
        assert_eq!(Month::January.prev(), Month::December);

        let months = Month::months();
        for i in 0..months.len() {
            assert_eq!(months[i].next(), months[(i + 1) % months.len()]);
            assert_eq!(months[(i + 1) % months.len()].prev(), months[i]);
        }
    }

    #[test]
    fn test_remaining_in_year() {
        assert_eq!(Month::January.remaining_in_year(), 12);
        assert_eq!(Month::June.remaining_in_year(), 7);
        assert_eq!(Month::December.remaining_in_year(), 1);
    }
}
