use super::*;

#[test]
fn customer_defaults_missing_addresses_to_empty() {
    let customer: Customer = serde_json::from_str(
        r#"{
            "id": "cu-9",
            "name": "Ravi Kumar",
            "phone": "9812345678",
            "email": null,
            "pan": "ABCDE1234F"
        }"#,
    )
    .unwrap();
    assert!(customer.addresses.is_empty());
    assert_eq!(customer.pan.as_deref(), Some("ABCDE1234F"));
}

#[test]
fn address_serializes_kind_as_snake_case() {
    let address = Address {
        kind: AddressKind::Permanent,
        line1: "12 MG Road".to_owned(),
        line2: None,
        city: "Indore".to_owned(),
        state: "Madhya Pradesh".to_owned(),
        pincode: "452001".to_owned(),
        geo: None,
    };
    let value = serde_json::to_value(&address).unwrap();
    assert_eq!(value["kind"], "permanent");
}

#[test]
fn associate_role_serializes_snake_case() {
    let associate = Associate {
        name: "Sita Kumar".to_owned(),
        role: AssociateRole::CoApplicant,
        phone: "9876501234".to_owned(),
        relation: Some("spouse".to_owned()),
    };
    let value = serde_json::to_value(&associate).unwrap();
    assert_eq!(value["role"], "co_applicant");
}

#[test]
fn document_kind_strings_and_labels_align() {
    assert_eq!(DocumentKind::AddressProof.as_str(), "address_proof");
    assert_eq!(DocumentKind::Pan.label(), "PAN Card");
    assert_eq!(DocumentKind::ALL.len(), 5);
}

#[test]
fn document_kind_round_trips_wire_strings() {
    for kind in DocumentKind::ALL {
        assert_eq!(kind.as_str().parse::<DocumentKind>().unwrap(), kind);
    }
    assert!("passport".parse::<DocumentKind>().is_err());
}
