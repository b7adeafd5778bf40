use super::*;

#[test]
fn case_href_formats_detail_route() {
    assert_eq!(case_href("c-42"), "/case/c-42");
}

#[test]
fn dpd_severity_buckets_days_past_due() {
    assert_eq!(dpd_severity(0), "dpd--early");
    assert_eq!(dpd_severity(30), "dpd--early");
    assert_eq!(dpd_severity(31), "dpd--warn");
    assert_eq!(dpd_severity(90), "dpd--warn");
    assert_eq!(dpd_severity(91), "dpd--critical");
    assert_eq!(dpd_severity(365), "dpd--critical");
}

#[test]
fn status_badge_class_uses_wire_strings() {
    assert_eq!(status_badge_class(CaseStatus::Pending), "badge badge--pending");
    assert_eq!(
        status_badge_class(CaseStatus::PromiseToPay),
        "badge badge--promise_to_pay"
    );
}
