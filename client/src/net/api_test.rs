use super::*;
use crate::net::types::CaseStatus;

#[test]
fn collection_endpoint_with_defaults_is_page_only() {
    let query = CollectionQuery::default();
    assert_eq!(collection_endpoint(&query), "/api/collection?page=0");
}

#[test]
fn collection_endpoint_includes_status_and_search() {
    let query = CollectionQuery {
        search: "ravi kumar".to_owned(),
        status: Some(CaseStatus::InFollowUp),
        page: 2,
    };
    assert_eq!(
        collection_endpoint(&query),
        "/api/collection?page=2&status=in_follow_up&search=ravi%20kumar"
    );
}

#[test]
fn encode_query_component_escapes_reserved_bytes() {
    assert_eq!(encode_query_component("a b"), "a%20b");
    assert_eq!(encode_query_component("a&b=c"), "a%26b%3Dc");
    assert_eq!(encode_query_component("98-12.34_~"), "98-12.34_~");
    assert_eq!(encode_query_component("100%"), "100%25");
}

#[test]
fn case_endpoints_format_expected_paths() {
    assert_eq!(case_endpoint("c-1"), "/api/collection/c-1");
    assert_eq!(case_payments_endpoint("c-1"), "/api/collection/c-1/payments");
    assert_eq!(case_followups_endpoint("c-1"), "/api/collection/c-1/followups");
    assert_eq!(case_flag_endpoint("c-1"), "/api/collection/c-1/flag");
    assert_eq!(case_location_endpoint("c-1"), "/api/collection/c-1/location");
}

#[test]
fn customer_endpoints_format_expected_paths() {
    assert_eq!(customer_endpoint("cu-9"), "/api/customers/cu-9");
    assert_eq!(customer_addresses_endpoint("cu-9"), "/api/customers/cu-9/addresses");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("case fetch", 503), "case fetch failed: 503");
}
