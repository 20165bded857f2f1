//! Month grid generation.

use serde::{Serialize, Serializer, ser::SerializeSeq};
use tracing::trace;

use crate::date::{DateValue, or_now};

/// One calendar row, Sunday through Saturday. `None` marks a day outside
/// the month.
pub type Week = [Option<DateValue>; 7];

/// A month laid out as weeks of seven weekday slots.
///
/// Day `n` of the month sits in row `(offset + n - 1) / 7`, column
/// `(offset + n - 1) % 7`, where `offset` is the weekday of the 1st.
/// Slots before the 1st and after the last emitted day are `None`.
///
/// [`MonthGrid::for_month`] sizes the grid as `ceil(last_day / 7)` rows, so
/// a month whose days spill past that many rows loses its trailing days
/// (December 2023 stops at the 30th). [`MonthGrid::spanning_month`] adds
/// rows until every day fits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    weeks: Vec<Week>,
}

impl MonthGrid {
    /// Builds the grid for the month containing `date`.
    ///
    /// Each day is a midnight [`DateValue`] built from `date`'s year and
    /// month. The grid has `ceil(last_day / 7)` rows; days that do not fit
    /// after the leading offset are not emitted.
    pub fn for_month(date: DateValue) -> Self {
        let last_day = date.month_end().day() as usize;
        Self::layout(date, last_day.div_ceil(7))
    }

    /// Like [`MonthGrid::for_month`], but with as many rows as it takes to
    /// hold every day of the month (4 to 6).
    pub fn spanning_month(date: DateValue) -> Self {
        let offset = date.month_start().weekday() as usize;
        let last_day = date.month_end().day() as usize;
        Self::layout(date, (offset + last_day).div_ceil(7))
    }

    #[tracing::instrument(level = "trace", skip(date), fields(year = date.year(), month = date.month()))]
    fn layout(date: DateValue, n_weeks: usize) -> Self {
        let start = date.month_start();
        let last_day = date.month_end().day();
        let day_offset = start.weekday() as usize;
        trace!(last_day, day_offset, "laying out month");

        let mut weeks = Vec::with_capacity(n_weeks);
        let mut day = 1;
        for i in 0..n_weeks {
            let mut week: Week = [None; 7];
            let first_slot = if i == 0 { day_offset } else { 0 };
            for slot in week.iter_mut().skip(first_slot) {
                if day > last_day {
                    break;
                }
                *slot = Some(start.shift_days(i64::from(day) - 1));
                day += 1;
            }
            weeks.push(week);
        }
        Self { weeks }
    }

    /// Returns the weeks in order.
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Returns the number of weeks.
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Returns `true` if the grid has no weeks.
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Iterates over the days of the month in order, skipping empty slots.
    pub fn days(&self) -> impl Iterator<Item = DateValue> + '_ {
        self.weeks.iter().flatten().flatten().copied()
    }

    /// Consumes the grid, returning its weeks.
    pub fn into_weeks(self) -> Vec<Week> {
        self.weeks
    }
}

impl Serialize for MonthGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.weeks.len()))?;
        for week in &self.weeks {
            let cells: Vec<Option<String>> = week
                .iter()
                .map(|slot| slot.map(|d| d.naive().format("%Y-%m-%d").to_string()))
                .collect();
            seq.serialize_element(&cells)?;
        }
        seq.end()
    }
}

/// Builds the month grid for `date` (default: now).
pub fn month_array(date: impl Into<Option<DateValue>>) -> MonthGrid {
    MonthGrid::for_month(or_now(date))
}
