//! Unit tests for [`Person`].

use crate::types::Person;

#[test]
fn test_accessors() {
    let person = Person::new(2, "Fiona", "P2");

    assert_eq!(person.id(), 2);
    assert_eq!(person.first_name(), "Fiona");
    assert_eq!(person.last_name(), "P2");
}

#[test]
fn test_display_matches_record_rendering() {
    let person = Person::new(1, "Michael", "P1");

    assert_eq!(
        person.to_string(),
        "Person(id=1, firstName=Michael, lastName=P1)"
    );
}

#[test]
fn test_serializes_with_camel_case_fields() {
    let person = Person::new(3, "Sam", "P3");

    let json = serde_json::to_value(&person).expect("Failed to serialize");

    assert_eq!(json["id"], 3);
    assert_eq!(json["firstName"], "Sam");
    assert_eq!(json["lastName"], "P3");
}

#[test]
fn test_deserializes_from_camel_case_json() {
    let json = r#"{"id":4,"firstName":"Jesse","lastName":"P4"}"#;

    let person: Person = serde_json::from_str(json).expect("Failed to deserialize");

    assert_eq!(person, Person::new(4, "Jesse", "P4"));
}
