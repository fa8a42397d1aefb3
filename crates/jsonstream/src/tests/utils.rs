use alloc::vec::Vec;

use crate::{Decoder, PathSegment, Value, produce_chunks};

pub(crate) type Event = (Vec<PathSegment>, Value);

/// Feeds `payload` in `parts` chunks, calling `read` after each chunk and
/// once more after `end()`, collecting every callback.
pub(crate) fn decode_chunked(payload: &str, parts: usize) -> Vec<Event> {
    let mut decoder = Decoder::new();
    let mut events = Vec::new();
    for chunk in produce_chunks(payload, parts) {
        decoder.write(chunk).unwrap();
        let more = decoder
            .read(|path, value| events.push((path.to_vec(), value)))
            .unwrap();
        assert!(more, "stream reported exhaustion before end()");
    }
    decoder.end();
    let more = decoder
        .read(|path, value| events.push((path.to_vec(), value)))
        .unwrap();
    assert!(!more, "stream not exhausted after end()");
    events
}

pub(crate) fn decode_all(payload: &str) -> Vec<Event> {
    decode_chunked(payload, 1)
}
