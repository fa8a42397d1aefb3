use alloc::{string::ToString, vec, vec::Vec};

use crate::{DecodeError, Decoder, Value, path};

fn decode_err(payload: &str) -> DecodeError {
    let mut decoder = Decoder::new();
    decoder.write(payload).unwrap();
    decoder.end();
    decoder.read(|_, _| {}).unwrap_err()
}

#[test]
fn object_value_missing_fails_at_the_close() {
    assert_eq!(
        decode_err(r#"{"a":}"#),
        DecodeError::UnexpectedToken("}".to_string())
    );
}

#[test]
fn object_keys_must_be_strings() {
    assert_eq!(
        decode_err("{1:2}"),
        DecodeError::NonStringKey("1".to_string())
    );
    assert_eq!(
        decode_err("{null:1}"),
        DecodeError::NonStringKey("null".to_string())
    );
    assert_eq!(
        decode_err("{true:1}"),
        DecodeError::NonStringKey("true".to_string())
    );
}

#[test]
fn misplaced_structural_tokens() {
    assert_eq!(decode_err(":"), DecodeError::UnexpectedToken(":".to_string()));
    assert_eq!(decode_err(","), DecodeError::UnexpectedToken(",".to_string()));
    assert_eq!(decode_err("]"), DecodeError::UnexpectedToken("]".to_string()));
    assert_eq!(
        decode_err("[1,]"),
        DecodeError::UnexpectedToken("]".to_string())
    );
    assert_eq!(
        decode_err("[1,,2]"),
        DecodeError::UnexpectedToken(",".to_string())
    );
    assert_eq!(
        decode_err(r#"{"a" 1}"#),
        DecodeError::UnexpectedToken("1".to_string())
    );
}

#[test]
fn lexical_errors_surface_through_read() {
    assert_eq!(decode_err("@"), DecodeError::UnexpectedCharacter('@'));
    assert_eq!(decode_err("[007]"), DecodeError::UnexpectedCharacter('0'));
    assert_eq!(
        decode_err(r#""\uD83D""#),
        DecodeError::InvalidUnicodeEscape(0xD83D)
    );
}

#[test]
fn values_before_the_error_are_still_delivered() {
    let mut decoder = Decoder::new();
    decoder.write(r#"[1, {"a":}]"#).unwrap();
    decoder.end();

    let mut events = Vec::new();
    let err = decoder
        .read(|p, v| events.push((p.to_vec(), v)))
        .unwrap_err();
    assert_eq!(err, DecodeError::UnexpectedToken("}".to_string()));
    assert_eq!(events, vec![(path![0], Value::Integer(1))]);
}

#[test]
fn syntax_error_poisons_the_session() {
    let mut decoder = Decoder::new();
    decoder.write("[1,]").unwrap();

    let err = decoder.read(|_, _| {}).unwrap_err();
    assert_eq!(err, DecodeError::UnexpectedToken("]".to_string()));

    // No resynchronization: the same error replays forever.
    assert_eq!(decoder.read(|_, _| {}).unwrap_err(), err);
    decoder.write("[2]").unwrap();
    assert_eq!(decoder.read(|_, _| {}).unwrap_err(), err);
}

#[test]
fn write_after_end_fails_without_corrupting_state() {
    let mut decoder = Decoder::new();
    decoder.write("41 ").unwrap();

    let mut events = Vec::new();
    assert!(decoder.read(|p, v| events.push((p.to_vec(), v))).unwrap());
    assert_eq!(events, vec![(path![], Value::Integer(41))]);

    decoder.end();
    assert_eq!(decoder.write("2"), Err(DecodeError::StreamClosed));

    // The failed write is fatal to that call only.
    assert!(!decoder.read(|p, v| events.push((p.to_vec(), v))).unwrap());
    assert_eq!(events.len(), 1);
}
