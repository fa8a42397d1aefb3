//! Feed a JSON document chunk by chunk and print each leaf value as soon as
//! it is recognized, addressed by its structural path.

use jsonstream::{DecodeError, Decoder, PathSegment, Value};

fn main() -> Result<(), DecodeError> {
    let chunks = [
        r#"{"user": {"id": 4"#,
        r#"2, "name": "Ada"}, "#,
        r#""tags": ["admin", "#,
        r#""ops"]}"#,
    ];

    let mut decoder = Decoder::new();
    for chunk in chunks {
        println!("chunk: {chunk:?}");
        decoder.write(chunk)?;
        decoder.read(print_leaf)?;
    }
    decoder.end();
    decoder.read(print_leaf)?;
    Ok(())
}

fn print_leaf(path: &[PathSegment], value: Value) {
    let mut rendered = String::from("$");
    for segment in path {
        match segment {
            PathSegment::Key(k) => {
                rendered.push('.');
                rendered.push_str(k);
            }
            PathSegment::Index(i) => {
                rendered.push_str(&format!("[{i}]"));
            }
        }
    }
    println!("  {rendered} = {value:?}");
}
