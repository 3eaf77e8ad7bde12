use std::fmt;
use chrono::{Datelike, NaiveDate, Weekday};

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const REPORT_HEADER: &str = "People who should be congratulated on their birthday: ";
pub const LOOKAHEAD_DAYS: i64 = 7;

// A weekend birthday is greeted on the following Monday only while that
// Monday still counts as upcoming.
const SATURDAY_LIMIT: i64 = 5;
const SUNDAY_LIMIT: i64 = 6;

/// Names of contacts to congratulate, bucketed by weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayReport {
    today: Weekday,
    buckets: [Vec<String>; 7],
}

impl BirthdayReport {
    fn new(today: Weekday) -> Self {
        Self {
            today,
            buckets: Default::default(),
        }
    }

    pub fn names_on(&self, weekday: Weekday) -> &[String] {
        &self.buckets[weekday.num_days_from_monday() as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|v| v.is_empty())
    }

    /// Non-empty buckets, starting from today's weekday and wrapping around.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[String])> + '_ {
        let mut weekday = self.today;
        (0..7).filter_map(move |_| {
            let current = weekday;
            weekday = weekday.succ();
            let names = self.names_on(current);
            (!names.is_empty()).then_some((current, names))
        })
    }
}

impl fmt::Display for BirthdayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{}None", REPORT_HEADER);
        }

        writeln!(f, "{}", REPORT_HEADER)?;
        for (weekday, names) in self.iter() {
            writeln!(f, "{}: {}",
                WEEKDAY_NAMES[weekday.num_days_from_monday() as usize],
                names.join(", ")
            )?;
        }
        Ok(())
    }
}

/// The birthday's anniversary in `year`. February 29 falls back to
/// March 1 when `year` is not a leap year.
fn anniversary(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// The first anniversary of `birthday` on or after `today`.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary(birthday, today.year())?;
    match this_year < today {
        true => anniversary(birthday, today.year() + 1),
        false => Some(this_year),
    }
}

/// Weekday on which a contact is greeted, if the birthday is upcoming.
fn greeting_day(occurrence: NaiveDate, today: NaiveDate) -> Option<Weekday> {
    let delta = (occurrence - today).num_days();
    if delta >= LOOKAHEAD_DAYS {
        return None;
    }

    match occurrence.weekday() {
        Weekday::Sat => (delta < SATURDAY_LIMIT).then_some(Weekday::Mon),
        Weekday::Sun => (delta < SUNDAY_LIMIT).then_some(Weekday::Mon),
        weekday => Some(weekday),
    }
}

/// Groups the contacts whose birthdays fall within the next seven days,
/// counting today, by the weekday they should be congratulated on.
pub fn upcoming_birthdays<'a, I>(today: NaiveDate, contacts: I) -> BirthdayReport
where
    I: IntoIterator<Item = (&'a str, NaiveDate)>,
{
    let mut report = BirthdayReport::new(today.weekday());
    for (name, birthday) in contacts {
        let Some(weekday) = next_occurrence(birthday, today)
            .and_then(|date| greeting_day(date, today)) else {
            continue;
        };
        report.buckets[weekday.num_days_from_monday() as usize].push(name.to_string());
    }
    report
}
