use chrono::Weekday;
use addrbook::birthdays::{self, upcoming_birthdays};
use crate::date;

/**
# birthdays
 - upcoming_birthdays
 - next_occurrence

# BirthdayReport
 - names_on
 - is_empty
 - iter
 - to_string
 */
#[test]
fn test_week_from_monday() {
    let today = date(2024, 6, 10);
    let contacts = vec![
        ("Alice", date(1990, 6, 14)),
        ("Bob", date(1990, 6, 15)),
        ("Carol", date(1990, 6, 11)),
        ("Dave", date(1990, 6, 10)),
        ("Eve", date(1990, 6, 11)),
    ];

    let report = upcoming_birthdays(today, contacts);
    assert_eq!(report.names_on(Weekday::Mon), &["Dave".to_string()]);
    assert_eq!(report.names_on(Weekday::Tue), &["Carol".to_string(), "Eve".to_string()]);
    assert_eq!(report.names_on(Weekday::Fri), &["Alice".to_string()]);
    assert_eq!(report.names_on(Weekday::Sat).is_empty(), true);
    assert_eq!(report.names_on(Weekday::Sun).is_empty(), true);
    assert_eq!(
        report.to_string(),
        "People who should be congratulated on their birthday: \n\
         Monday: Dave\n\
         Tuesday: Carol, Eve\n\
         Friday: Alice\n"
    );
}

#[test]
fn test_weekend_from_friday() {
    // Friday 14 June 2024.
    let today = date(2024, 6, 14);
    let contacts = vec![
        ("Sat", date(1990, 6, 15)),
        ("Sun", date(1990, 6, 16)),
        ("Mon", date(1990, 6, 17)),
        ("Thu", date(1990, 6, 20)),
        ("Fri", date(1990, 6, 21)),
    ];

    let report = upcoming_birthdays(today, contacts);
    assert_eq!(
        report.names_on(Weekday::Mon),
        &["Sat".to_string(), "Sun".to_string(), "Mon".to_string()]
    );
    assert_eq!(report.names_on(Weekday::Thu), &["Thu".to_string()]);
    assert_eq!(report.names_on(Weekday::Fri).is_empty(), true);

    let order = report.iter().map(|(day, _)| day).collect::<Vec<_>>();
    assert_eq!(order, vec![Weekday::Mon, Weekday::Thu]);
}

#[test]
fn test_leap_day() {
    let today = date(2025, 3, 1);
    assert_eq!(birthdays::next_occurrence(date(2000, 2, 29), today), Some(today));

    let report = upcoming_birthdays(today, vec![("Leap", date(2000, 2, 29))]);
    assert_eq!(report.is_empty(), false);
    assert_eq!(report.names_on(Weekday::Mon), &["Leap".to_string()]);
}
