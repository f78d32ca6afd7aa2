//! Weekdays and the column a month grid starts on.

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Day of the week, shared by both calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Maps 0..=6 (Sunday = 0); other values wrap.
    pub(crate) const fn from_days_from_sunday(index: i64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = index.rem_euclid(7) as usize;
        Self::ALL[index]
    }

    /// Days since the preceding (or same) Sunday, 0..=6.
    pub const fn days_from_sunday(self) -> u8 {
        self as u8
    }

    /// The following day.
    pub const fn succ(self) -> Self {
        Self::from_days_from_sunday(self.days_from_sunday() as i64 + 1)
    }
}

/// First column of a week row in a month grid.
///
/// Persian calendars start the week on Saturday, which is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    #[default]
    Saturday,
    Sunday,
    Monday,
}

impl WeekStart {
    /// The weekday shown in the first column.
    pub const fn first_day(self) -> Weekday {
        match self {
            Self::Saturday => Weekday::Saturday,
            Self::Sunday => Weekday::Sunday,
            Self::Monday => Weekday::Monday,
        }
    }

    /// Column (0..=6) of `weekday` in a week starting on this day.
    pub const fn offset(self, weekday: Weekday) -> u8 {
        (weekday.days_from_sunday() + 7 - self.first_day().days_from_sunday()) % 7
    }

    /// Column headers, in order.
    pub const fn days(self) -> [Weekday; 7] {
        let mut days = [self.first_day(); 7];
        let mut i = 1;
        while i < days.len() {
            days[i] = days[i - 1].succ();
            i += 1;
        }
        days
    }
}
