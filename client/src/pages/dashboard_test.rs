use super::*;

#[test]
fn next_page_gate_follows_total() {
    assert!(!has_next_page(0, 0));
    assert!(!has_next_page(0, 20));
    assert!(has_next_page(0, 21));
    assert!(has_next_page(1, 41));
    assert!(!has_next_page(1, 40));
}
