#![allow(missing_docs)]

pub const ORIGINAL: &str = r#"{"tool":{"name":"search","args":{"query":"rust json","limit":5}},"results":[{"title":"a","score":0.5},{"title":"b","score":1.5}],"notes":[],"done":true}"#;

// This stream simulates a structured tool-call response arriving over a
// socket. Chunks are intentionally cut on awkward seams: inside keys, inside
// string values, between a number and the character that terminates it, and
// across container transitions.
#[rustfmt::skip]
pub const STREAM: [&str; 12] = [
    "{\"tool\":{\"na",                 // inside a key
    "me\":\"sea",                      // inside a string value
    "rch\",\"args\":{\"query\":\"rust js", // string value split mid-word
    "on\",\"limit\":5",                // number still ambiguous here
    "}},\"results\":[{\"ti",           // two object closes then an array of objects
    "tle\":\"a\",\"score\":0.",        // fraction split after the point
    "5},{\"title\":\"b\",",            // sibling object
    "\"score\":1.5}",                  // fraction intact, close pending
    "],\"notes\"",                     // empty array next
    ":[],\"do",                        // key split
    "ne\":tru",                        // literal split
    "e}",
];
