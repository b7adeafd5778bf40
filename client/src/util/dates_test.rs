use super::*;

#[test]
fn format_date_handles_dates_and_timestamps() {
    assert_eq!(format_date("2026-08-25"), "25 Aug 2026");
    assert_eq!(format_date("2026-01-05T10:15:00Z"), "05 Jan 2026");
}

#[test]
fn format_date_passes_malformed_input_through() {
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_date(""), "");
    assert_eq!(format_date("2026-13-01"), "2026-13-01");
}

#[test]
fn days_between_counts_forward_and_backward() {
    assert_eq!(days_between("2026-08-20", "2026-08-25"), Some(5));
    assert_eq!(days_between("2026-08-25", "2026-08-20"), Some(-5));
    assert_eq!(days_between("2026-08-25", "2026-08-25"), Some(0));
}

#[test]
fn days_between_crosses_month_and_leap_boundaries() {
    assert_eq!(days_between("2026-01-31", "2026-02-01"), Some(1));
    assert_eq!(days_between("2026-12-31", "2027-01-01"), Some(1));
    // 2028 is a leap year.
    assert_eq!(days_between("2028-02-28", "2028-03-01"), Some(2));
    assert_eq!(days_between("2027-02-28", "2027-03-01"), Some(1));
}

#[test]
fn days_between_rejects_malformed_dates() {
    assert_eq!(days_between("garbage", "2026-08-25"), None);
    assert_eq!(days_between("2026-08-25", "2026-00-10"), None);
}

#[test]
fn relative_label_buckets_recency() {
    assert_eq!(relative_label("2026-08-25", "2026-08-25"), "today");
    assert_eq!(relative_label("2026-08-24", "2026-08-25"), "yesterday");
    assert_eq!(relative_label("2026-08-01", "2026-08-25"), "24 days ago");
}

#[test]
fn relative_label_falls_back_for_future_and_malformed() {
    assert_eq!(relative_label("2026-09-01", "2026-08-25"), "01 Sep 2026");
    assert_eq!(relative_label("n/a", "2026-08-25"), "n/a");
}
