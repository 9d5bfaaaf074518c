use crate::{CoreError, Message, MessageBuilder};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serde_json::json;

#[test]
fn given_headers_when_built_then_present_in_insertion_order() {
    // Given
    let builder = MessageBuilder::with_payload("body")
        .set_header("b", 2)
        .set_header("a", "one")
        .set_header("c", true);

    // When
    let message = builder.build().unwrap();

    // Then
    let names: Vec<&str> = message.headers().names().collect();
    assert_eq!(names, vec!["b", "a", "c"]);
    assert_that!(message.header("b"), eq(Some(&json!(2))));
}

#[test]
fn given_duplicate_header_when_set_then_value_replaced_in_place() {
    let message = MessageBuilder::with_payload(())
        .set_header("first", 1)
        .set_header("second", 2)
        .set_header("first", 10)
        .build()
        .unwrap();

    let names: Vec<&str> = message.headers().names().collect();
    assert_eq!(names, vec!["first", "second"]);
    assert_that!(message.header("first"), eq(Some(&json!(10))));
}

#[test]
fn given_existing_header_when_set_if_absent_then_kept() {
    let message = MessageBuilder::with_payload(())
        .set_header("status", "200")
        .set_header_if_absent("status", "500")
        .set_header_if_absent("extra", "x")
        .build()
        .unwrap();

    assert_that!(message.headers().get_str("status"), eq(Some("200")));
    assert_that!(message.headers().get_str("extra"), eq(Some("x")));
}

#[test]
fn given_header_names_differing_in_case_then_both_kept() {
    let message = MessageBuilder::with_payload(())
        .set_header("Header", 1)
        .set_header("header", 2)
        .build()
        .unwrap();

    assert_that!(message.headers().len(), eq(2));
}

#[test]
fn given_blank_header_name_when_built_then_error() {
    let result = MessageBuilder::with_payload("x").set_header("  ", 1).build();

    assert_that!(result, err(anything()));
    assert!(matches!(result, Err(CoreError::InvalidHeaderName { .. })));
}

#[test]
fn given_valid_builder_when_built_then_ok() {
    let result = MessageBuilder::with_payload("x").set_header("k", "v").build();

    assert_that!(result, ok(anything()));
}

#[test]
fn given_message_when_from_message_then_copies_payload_and_headers_with_new_id() {
    // Given
    let original = Message::builder("payload".to_string())
        .set_header("k", "v")
        .build()
        .unwrap();

    // When
    let copy = MessageBuilder::from_message(&original)
        .set_header("extra", 1)
        .build()
        .unwrap();

    // Then
    assert_that!(copy.payload().as_str(), eq("payload"));
    assert_that!(copy.headers().get_str("k"), eq(Some("v")));
    assert_that!(copy.headers().len(), eq(2));
    assert_ne!(copy.id(), original.id());
    assert_that!(original.headers().len(), eq(1));
}

#[test]
fn given_other_headers_when_copy_headers_then_overwrites() {
    let source = Message::builder(())
        .set_header("a", "from-source")
        .set_header("b", "b")
        .build()
        .unwrap();

    let message = MessageBuilder::with_payload(())
        .set_header("a", "original")
        .copy_headers(source.headers())
        .build()
        .unwrap();

    assert_that!(message.headers().get_str("a"), eq(Some("from-source")));
    assert_that!(message.headers().get_str("b"), eq(Some("b")));
}
