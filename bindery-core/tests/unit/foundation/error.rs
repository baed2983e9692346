use super::*;

#[test]
fn display_prefixes_category() {
    let e = BinderyError::validation("grid must have cols > 0 and rows > 0");
    assert_eq!(
        e.to_string(),
        "validation error: grid must have cols > 0 and rows > 0"
    );

    let e = BinderyError::serde("parse book: oops");
    assert_eq!(e.to_string(), "serialization error: parse book: oops");

    let e = BinderyError::document("write pdf 'x.pdf': oops");
    assert_eq!(e.to_string(), "document error: write pdf 'x.pdf': oops");
}

#[test]
fn other_is_transparent() {
    let e = BinderyError::from(anyhow::anyhow!("decode image from memory"));
    assert_eq!(e.to_string(), "decode image from memory");
}
