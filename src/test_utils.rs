//! Constructors for test fixtures; panic on invalid input.

use crate::{CalendarDate, Day, Month, Year};

pub fn year(value: u16) -> Year {
    Year::new(value).unwrap()
}

pub fn month(value: u8) -> Month {
    Month::new(value).unwrap()
}

pub fn day(value: u8, y: u16, m: u8) -> Day {
    Day::new(value, year(y), month(m)).unwrap()
}

pub fn days(y: u16, m: u8, values: std::ops::RangeInclusive<u8>) -> Vec<Day> {
    values.map(|d| day(d, y, m)).collect()
}

pub fn date(y: u16, m: u8, d: u8) -> CalendarDate {
    CalendarDate::new(y, m, d).unwrap()
}
