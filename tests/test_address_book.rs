//! End-to-end tests for record and address book operations.
//!
//! These tests drive the public API the way a caller would: build records,
//! store them in a book, then look up, edit, and delete.

use contact_book::{AddressBook, BookError, Field, Record};

fn john() -> Record {
    let mut record = Record::new("John");
    record
        .add_phone("1234567890")
        .unwrap()
        .add_phone("5555555555")
        .unwrap();
    record
}

fn names(book: &AddressBook) -> Vec<String> {
    book.iter().map(|(name, _)| name.to_string()).collect()
}

#[test]
fn test_record_render() {
    assert_eq!(
        john().to_string(),
        "Contact name: John, phones: 1234567890; 5555555555"
    );
}

#[test]
fn test_edit_preserves_order() {
    let mut record = john();
    record.edit_phone("1234567890", "1112223333").unwrap();
    assert_eq!(
        record.to_string(),
        "Contact name: John, phones: 1112223333; 5555555555"
    );
}

#[test]
fn test_edit_absent_phone_fails_without_change() {
    let mut record = john();
    let before = record.to_string();

    let result = record.edit_phone("9999999999", "1112223333");
    assert!(matches!(result, Err(BookError::PhoneNotFound(ref p)) if p == "9999999999"));
    assert_eq!(record.to_string(), before);
}

#[test]
fn test_remove_phone() {
    let mut record = john();
    let before = record.to_string();
    assert!(record.remove_phone("9999999999").is_none());
    assert_eq!(record.to_string(), before);

    let mut record = Record::new("Dup");
    for phone in ["1111111111", "5555555555", "1111111111", "2222222222"] {
        record.add_phone(phone).unwrap();
    }
    record.remove_phone("1111111111");
    assert_eq!(
        record.to_string(),
        "Contact name: Dup, phones: 5555555555; 1111111111; 2222222222"
    );
}

#[test]
fn test_book_insertion_order_and_last_write_wins() {
    let mut book = AddressBook::new();
    book.add_record(john());
    book.add_record(Record::new("Jane"));
    assert_eq!(names(&book), vec!["John", "Jane"]);

    let mut replacement = Record::new("John");
    replacement.add_phone("7777777777").unwrap();
    book.add_record(replacement);

    assert_eq!(book.len(), 2);
    assert_eq!(
        book.find("John").unwrap().to_string(),
        "Contact name: John, phones: 7777777777"
    );
}

#[test]
fn test_detached_record_stays_valid() {
    let original = john();
    let kept = original.clone();

    let mut book = AddressBook::new();
    book.add_record(original);
    let replaced = book.add_record(Record::new("John")).unwrap();

    assert_eq!(replaced, kept);
    assert!(book.find("John").unwrap().phones().is_empty());
}

#[test]
fn test_absent_lookups_do_not_fail() {
    let mut book = AddressBook::new();
    assert!(book.find("Nobody").is_none());
    assert!(book.delete("Nobody").is_none());
    assert!(book.is_empty());
}

#[test]
fn test_find_phone_first_match() {
    let mut record = Record::new("Dup");
    record.add_phone("1111111111").unwrap();
    record.add_phone("1111111111").unwrap();

    let first = record.find_phone("1111111111").unwrap();
    assert!(std::ptr::eq(first, &record.phones()[0]));
    assert_eq!(first.value(), "1111111111");
    assert!(record.find_phone("2222222222").is_none());
}

#[test]
fn test_invalid_phone_error_surfaces_to_caller() {
    let mut record = Record::new("John");
    let err = record.add_phone("12345").unwrap_err();
    assert_eq!(err.to_string(), "Invalid phone number: 12345");
    assert!(record.phones().is_empty());
}
