//! Order-preserving byte strings.
//!
//! Ascending layout: `BYTES_MARKER`, the payload with every `0x00` written
//! as `0x00 0xff`, then the terminator `0x00 0x01`. The terminator sorts
//! below any escaped or literal byte, so a prefix always sorts first.
//!
//! Descending layout: `BYTES_DESC_MARKER` followed by the bitwise complement
//! of the ascending body.

use crate::BufferError;

/// Marker of an ascending byte string.
pub const BYTES_MARKER: u8 = 0x12;
/// Marker of a descending byte string.
pub const BYTES_DESC_MARKER: u8 = 0x13;

const ESCAPE: u8 = 0x00;
const ESCAPED_TERM: u8 = 0x01;
const ESCAPED_00: u8 = 0xff;

/// Appends the ascending encoding of `data`.
pub fn encode_bytes_ascending(mut buf: Vec<u8>, data: &[u8]) -> Vec<u8> {
    buf.reserve(data.len() + 3);
    buf.push(BYTES_MARKER);
    for chunk in data.split_inclusive(|&b| b == ESCAPE) {
        buf.extend_from_slice(chunk);
        if chunk.last() == Some(&ESCAPE) {
            buf.push(ESCAPED_00);
        }
    }
    buf.push(ESCAPE);
    buf.push(ESCAPED_TERM);
    buf
}

/// Appends the descending encoding of `data`.
pub fn encode_bytes_descending(buf: Vec<u8>, data: &[u8]) -> Vec<u8> {
    let start = buf.len();
    let mut buf = encode_bytes_ascending(buf, data);
    buf[start] = BYTES_DESC_MARKER;
    for b in &mut buf[start + 1..] {
        *b = !*b;
    }
    buf
}

/// Appends the ascending encoding of a string's UTF-8 bytes.
pub fn encode_string_ascending(buf: Vec<u8>, s: &str) -> Vec<u8> {
    encode_bytes_ascending(buf, s.as_bytes())
}

/// Appends the descending encoding of a string's UTF-8 bytes.
pub fn encode_string_descending(buf: Vec<u8>, s: &str) -> Vec<u8> {
    encode_bytes_descending(buf, s.as_bytes())
}

fn check_marker(b: &[u8], expected: u8) -> Result<&[u8], BufferError> {
    match b.split_first() {
        Some((&m, rest)) if m == expected => Ok(rest),
        other => Err(BufferError::MarkerNotFound {
            expected,
            found: other.map(|(&m, _)| m),
        }),
    }
}

/// Shared unescape loop. `flip` is the identity for ascending bodies and the
/// complement for descending ones.
fn decode_body(mut b: &[u8], flip: impl Fn(u8) -> u8) -> Result<(&[u8], Vec<u8>), BufferError> {
    let mut out = Vec::new();
    loop {
        let i = b
            .iter()
            .position(|&t| flip(t) == ESCAPE)
            .ok_or(BufferError::MissingTerminator)?;
        let &next = b.get(i + 1).ok_or(BufferError::MissingTerminator)?;
        out.extend(b[..i].iter().map(|&t| flip(t)));
        match flip(next) {
            ESCAPED_TERM => return Ok((&b[i + 2..], out)),
            ESCAPED_00 => out.push(0x00),
            other => return Err(BufferError::MalformedEscape(other)),
        }
        b = &b[i + 2..];
    }
}

/// Decodes a byte string written by [`encode_bytes_ascending`].
pub fn decode_bytes_ascending(b: &[u8]) -> Result<(&[u8], Vec<u8>), BufferError> {
    decode_body(check_marker(b, BYTES_MARKER)?, |t| t)
}

/// Decodes a byte string written by [`encode_bytes_descending`].
pub fn decode_bytes_descending(b: &[u8]) -> Result<(&[u8], Vec<u8>), BufferError> {
    decode_body(check_marker(b, BYTES_DESC_MARKER)?, |t| !t)
}

/// Decodes a string written by [`encode_string_ascending`].
pub fn decode_string_ascending(b: &[u8]) -> Result<(&[u8], String), BufferError> {
    let (rest, bytes) = decode_bytes_ascending(b)?;
    let s = String::from_utf8(bytes).map_err(|_| BufferError::InvalidUtf8)?;
    Ok((rest, s))
}

/// Decodes a string written by [`encode_string_descending`].
pub fn decode_string_descending(b: &[u8]) -> Result<(&[u8], String), BufferError> {
    let (rest, bytes) = decode_bytes_descending(b)?;
    let s = String::from_utf8(bytes).map_err(|_| BufferError::InvalidUtf8)?;
    Ok((rest, s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_embedded_zero() {
        let buf = encode_bytes_ascending(Vec::new(), &[0x61, 0x00, 0x62]);
        assert_eq!(buf, vec![BYTES_MARKER, 0x61, 0x00, 0xff, 0x62, 0x00, 0x01]);
        let buf = encode_bytes_descending(Vec::new(), &[0x61, 0x00, 0x62]);
        assert_eq!(
            buf,
            vec![BYTES_DESC_MARKER, 0x9e, 0xff, 0x00, 0x9d, 0xff, 0xfe]
        );
    }

    #[test]
    fn decode_leaves_tail() {
        let mut buf = encode_bytes_ascending(Vec::new(), &[0x00, 0x00]);
        buf.extend_from_slice(&[0xaa, 0xbb]);
        let (rest, data) = decode_bytes_ascending(&buf).unwrap();
        assert_eq!(data, vec![0x00, 0x00]);
        assert_eq!(rest, &[0xaa, 0xbb]);

        let mut buf = encode_bytes_descending(Vec::new(), b"");
        buf.push(0xcc);
        let (rest, data) = decode_bytes_descending(&buf).unwrap();
        assert!(data.is_empty());
        assert_eq!(rest, &[0xcc]);
    }

    #[test]
    fn malformed_inputs() {
        assert_eq!(
            decode_bytes_ascending(&[BYTES_DESC_MARKER]),
            Err(BufferError::MarkerNotFound {
                expected: BYTES_MARKER,
                found: Some(BYTES_DESC_MARKER)
            })
        );
        assert_eq!(
            decode_bytes_ascending(&[]),
            Err(BufferError::MarkerNotFound {
                expected: BYTES_MARKER,
                found: None
            })
        );
        assert_eq!(
            decode_bytes_ascending(&[BYTES_MARKER, 0x61, 0x62]),
            Err(BufferError::MissingTerminator)
        );
        assert_eq!(
            decode_bytes_ascending(&[BYTES_MARKER, 0x61, 0x00]),
            Err(BufferError::MissingTerminator)
        );
        assert_eq!(
            decode_bytes_ascending(&[BYTES_MARKER, 0x00, 0x07]),
            Err(BufferError::MalformedEscape(0x07))
        );
        assert_eq!(
            decode_string_ascending(&encode_bytes_ascending(Vec::new(), &[0xc3, 0x28])),
            Err(BufferError::InvalidUtf8)
        );
    }

    #[test]
    fn prefix_sorts_first() {
        let a = encode_string_ascending(Vec::new(), "ab");
        let b = encode_string_ascending(Vec::new(), "ab\0");
        let c = encode_string_ascending(Vec::new(), "abc");
        assert!(a < b && b < c);
        let a = encode_string_descending(Vec::new(), "ab");
        let c = encode_string_descending(Vec::new(), "abc");
        assert!(a > c);
    }
}
