#![allow(missing_docs)]

mod common;

use common::{ORIGINAL, STREAM};
use jsonstream::{DecodeError, Decoder, PathSegment, Value, path};

type Event = (Vec<PathSegment>, Value);

fn expected_events() -> Vec<Event> {
    vec![
        (path!["tool", "name"], Value::from("search")),
        (path!["tool", "args", "query"], Value::from("rust json")),
        (path!["tool", "args", "limit"], Value::Integer(5)),
        (path!["results", 0, "title"], Value::from("a")),
        (path!["results", 0, "score"], Value::Float(0.5)),
        (path!["results", 1, "title"], Value::from("b")),
        (path!["results", 1, "score"], Value::Float(1.5)),
        (path!["done"], Value::Boolean(true)),
    ]
}

#[test]
fn stream_chunks_reassemble_the_original() {
    assert_eq!(STREAM.concat(), ORIGINAL);
}

#[test]
fn one_shot_decode_matches_expectations() -> Result<(), DecodeError> {
    let mut decoder = Decoder::new();
    decoder.write(ORIGINAL)?;
    decoder.end();

    let mut events = Vec::new();
    let more = decoder.read(|p, v| events.push((p.to_vec(), v)))?;
    assert!(!more);
    assert_eq!(events, expected_events());
    Ok(())
}

#[test]
fn seam_cut_stream_decodes_identically() -> Result<(), DecodeError> {
    let mut decoder = Decoder::new();
    let mut events = Vec::new();

    for chunk in STREAM {
        decoder.write(chunk)?;
        let more = decoder.read(|p, v| events.push((p.to_vec(), v)))?;
        assert!(more, "exhausted before end() at chunk {chunk:?}");
    }
    decoder.end();
    let more = decoder.read(|p, v| events.push((p.to_vec(), v)))?;
    assert!(!more);

    assert_eq!(events, expected_events());
    Ok(())
}

/// The path slice lent to the callback is only borrowed for the call; a
/// retained copy stays stable even though the decoder reuses the stack.
#[test]
fn retained_path_copies_are_stable() -> Result<(), DecodeError> {
    let mut decoder = Decoder::new();
    decoder.write(r#"{"a":[10,20]}"#)?;
    decoder.end();

    let mut paths: Vec<Vec<PathSegment>> = Vec::new();
    decoder.read(|p, _| paths.push(p.to_vec()))?;
    assert_eq!(paths, vec![path!["a", 0], path!["a", 1]]);
    Ok(())
}
