//! Approximate distance between two instants, in words.

use time::OffsetDateTime;
use time::util::is_leap_year;

const MINUTES_PER_DAY: i64 = 1440;
const MINUTES_PER_MONTH: i64 = 43_200;
const MINUTES_PER_YEAR: i64 = 525_600;
const MINUTES_PER_QUARTER_YEAR: i64 = 131_400;
const MINUTES_PER_THREE_QUARTERS_YEAR: i64 = 394_200;

/// Phrase such as `less than a minute`, `about 3 hours` or `over 2 years`.
///
/// Order of the arguments does not matter.
pub fn distance_in_words(from: OffsetDateTime, to: OffsetDateTime) -> String {
    let (from, to) = if from <= to { (from, to) } else { (to, from) };
    let minutes = ((to - from).as_seconds_f64() / 60.0).round() as i64;

    match minutes {
        0 => "less than a minute".to_string(),
        1 => "1 minute".to_string(),
        2..45 => format!("{minutes} minutes"),
        45..90 => "about 1 hour".to_string(),
        90..1440 => plural("about ", ratio(minutes, 60), "hour"),
        1440..2520 => "1 day".to_string(),
        2520..43_200 => plural("", ratio(minutes, MINUTES_PER_DAY), "day"),
        43_200..86_400 => plural("about ", ratio(minutes, MINUTES_PER_MONTH), "month"),
        86_400..525_600 => plural("", ratio(minutes, MINUTES_PER_MONTH), "month"),
        _ => years_in_words(from, to, minutes),
    }
}

fn years_in_words(from: OffsetDateTime, to: OffsetDateTime, minutes: i64) -> String {
    let mut from_year = from.year();
    if u8::from(from.month()) >= 3 {
        from_year += 1;
    }
    let mut to_year = to.year();
    if u8::from(to.month()) < 3 {
        to_year -= 1;
    }
    let leap_years = if from_year > to_year {
        0
    } else {
        (from_year..=to_year).filter(|y| is_leap_year(*y)).count() as i64
    };

    let minutes = minutes - leap_years * MINUTES_PER_DAY;
    let years = minutes / MINUTES_PER_YEAR;
    let remainder = minutes % MINUTES_PER_YEAR;

    if remainder < MINUTES_PER_QUARTER_YEAR {
        plural("about ", years, "year")
    } else if remainder < MINUTES_PER_THREE_QUARTERS_YEAR {
        plural("over ", years, "year")
    } else {
        plural("almost ", years + 1, "year")
    }
}

fn ratio(minutes: i64, unit: i64) -> i64 {
    (minutes as f64 / unit as f64).round() as i64
}

fn plural(prefix: &str, count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{prefix}1 {unit}")
    } else {
        format!("{prefix}{count} {unit}s")
    }
}
