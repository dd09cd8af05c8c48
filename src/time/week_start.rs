use serde::Deserialize;

use crate::time::WeekDay;

/// The day that opens the working week.
///
/// A Sunday-start week works Sunday through Thursday, a Monday-start week
/// works Monday through Friday. Either way five of the seven days count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    #[must_use]
    pub const fn is_working_day(&self, day: WeekDay) -> bool {
        match *self {
            Self::Sunday => day.as_usize() <= WeekDay::Thursday.as_usize(),
            Self::Monday => {
                day.as_usize() >= WeekDay::Monday.as_usize()
                    && day.as_usize() <= WeekDay::Friday.as_usize()
            }
        }
    }
}
