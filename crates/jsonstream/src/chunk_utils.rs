use alloc::vec::Vec;

/// Split `payload` into `parts` roughly equal slices, moving each cut
/// forward to the next UTF-8 character boundary.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &str, parts: usize) -> Vec<&str> {
    assert!(parts > 0);
    let stride = payload.len().div_ceil(parts);
    let mut chunks = Vec::with_capacity(parts);
    let mut start = 0;
    while start < payload.len() {
        let mut cut = (start + stride).min(payload.len());
        while !payload.is_char_boundary(cut) {
            cut += 1;
        }
        chunks.push(&payload[start..cut]);
        start = cut;
    }
    chunks
}

/// Return the cumulative prefixes of [`produce_chunks`], ending with
/// `payload` itself.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_prefixes(payload: &str, parts: usize) -> Vec<&str> {
    let mut consumed = 0;
    produce_chunks(payload, parts)
        .into_iter()
        .map(|chunk| {
            consumed += chunk.len();
            &payload[..consumed]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{produce_chunks, produce_prefixes};

    #[test]
    fn chunks_reassemble_and_respect_boundaries() {
        let payload = "a\u{00E9}b\u{4E16}c";
        for parts in 1..=payload.len() {
            let chunks = produce_chunks(payload, parts);
            let joined: String = chunks.concat();
            assert_eq!(joined, payload);
        }
    }

    #[test]
    fn prefixes_converge_to_payload() {
        let prefixes = produce_prefixes("abcdef", 3);
        assert_eq!(prefixes, ["ab", "abcd", "abcdef"]);
    }
}
