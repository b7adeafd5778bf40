//! ISO-date display helpers for history rows.
//!
//! Backend timestamps arrive as ISO 8601 strings and stay strings; there is
//! no date arithmetic in this client beyond "n days ago" labels, so the civil
//! day-count is computed directly rather than pulling in a date crate.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Split `YYYY-MM-DD` (or a full ISO 8601 timestamp) into (year, month, day).
fn split_iso_date(iso: &str) -> Option<(i64, u32, u32)> {
    let date = iso.get(..10)?;
    let mut parts = date.splitn(3, '-');
    let year: i64 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}

/// Render an ISO date or timestamp as `DD Mon YYYY`; malformed input is
/// returned unchanged.
#[must_use]
pub fn format_date(iso: &str) -> String {
    match split_iso_date(iso) {
        Some((year, month, day)) => {
            format!("{day:02} {} {year}", MONTHS[(month - 1) as usize])
        }
        None => iso.to_owned(),
    }
}

/// Days since the civil epoch (1970-01-01) for a proleptic Gregorian date.
/// Howard Hinnant's `days_from_civil` algorithm.
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = i64::from((month + 9) % 12);
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Whole days from `from_iso` to `to_iso`; positive when `to_iso` is later.
/// `None` when either date is malformed.
#[must_use]
pub fn days_between(from_iso: &str, to_iso: &str) -> Option<i64> {
    let (fy, fm, fd) = split_iso_date(from_iso)?;
    let (ty, tm, td) = split_iso_date(to_iso)?;
    Some(days_from_civil(ty, tm, td) - days_from_civil(fy, fm, fd))
}

/// Relative label for a history row: "today", "yesterday", "n days ago", or
/// the formatted date when it lies in the future or is malformed.
#[must_use]
pub fn relative_label(iso: &str, today_iso: &str) -> String {
    match days_between(iso, today_iso) {
        Some(0) => "today".to_owned(),
        Some(1) => "yesterday".to_owned(),
        Some(days) if days > 1 => format!("{days} days ago"),
        _ => format_date(iso),
    }
}
