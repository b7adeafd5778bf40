use super::*;

#[test]
fn document_owner_paths_distinguish_case_and_application() {
    assert_eq!(
        DocumentOwner::Case("c-1".to_owned()).documents_path(),
        "/api/collection/c-1/documents"
    );
    assert_eq!(
        DocumentOwner::Application("app-7".to_owned()).documents_path(),
        "/api/applications/app-7/documents"
    );
}
