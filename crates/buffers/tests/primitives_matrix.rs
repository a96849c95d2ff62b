//! Ordering and chaining matrix for the integer and byte-string primitives.

use ordkey_buffers::*;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Integers
// ---------------------------------------------------------------------------

#[test]
fn varint_width_boundaries_sort() {
    let values = [
        i64::MIN,
        -0x1_0000_0000,
        -0xffff_ffff,
        -0x1_0000,
        -0xffff,
        -0x100,
        -0xff,
        -1,
        0,
        1,
        109,
        110,
        0xff,
        0x100,
        0xffff,
        0x1_0000,
        i64::MAX,
    ];
    let asc: Vec<Vec<u8>> = values
        .iter()
        .map(|&v| encode_varint_ascending(Vec::new(), v))
        .collect();
    let desc: Vec<Vec<u8>> = values
        .iter()
        .map(|&v| encode_varint_descending(Vec::new(), v))
        .collect();
    for i in 1..values.len() {
        assert!(asc[i - 1] < asc[i], "asc {} !< {}", values[i - 1], values[i]);
        assert!(desc[i - 1] > desc[i], "desc {} !> {}", values[i - 1], values[i]);
    }
}

proptest! {
    #[test]
    fn varint_order(a in any::<i64>(), b in any::<i64>()) {
        let ea = encode_varint_ascending(Vec::new(), a);
        let eb = encode_varint_ascending(Vec::new(), b);
        prop_assert_eq!(a.cmp(&b), ea.cmp(&eb));
        let da = encode_varint_descending(Vec::new(), a);
        let db = encode_varint_descending(Vec::new(), b);
        prop_assert_eq!(b.cmp(&a), da.cmp(&db));
    }

    #[test]
    fn uvarint_order(a in any::<u64>(), b in any::<u64>()) {
        let ea = encode_uvarint_ascending(Vec::new(), a);
        let eb = encode_uvarint_ascending(Vec::new(), b);
        prop_assert_eq!(a.cmp(&b), ea.cmp(&eb));
        let da = encode_uvarint_descending(Vec::new(), a);
        let db = encode_uvarint_descending(Vec::new(), b);
        prop_assert_eq!(b.cmp(&a), da.cmp(&db));
    }

    #[test]
    fn bytes_order(a in proptest::collection::vec(any::<u8>(), 0..16),
                   b in proptest::collection::vec(any::<u8>(), 0..16)) {
        let ea = encode_bytes_ascending(Vec::new(), &a);
        let eb = encode_bytes_ascending(Vec::new(), &b);
        prop_assert_eq!(a.cmp(&b), ea.cmp(&eb));
        let da = encode_bytes_descending(Vec::new(), &a);
        let db = encode_bytes_descending(Vec::new(), &b);
        prop_assert_eq!(b.cmp(&a), da.cmp(&db));
        prop_assert_eq!(decode_bytes_descending(&da).unwrap().1, a);
    }
}

// ---------------------------------------------------------------------------
// Chaining
// ---------------------------------------------------------------------------

#[test]
fn composite_key_decodes_in_sequence() {
    let buf = encode_string_ascending(Vec::new(), "users");
    let buf = encode_varint_descending(buf, 42);
    let buf = encode_bytes_descending(buf, &[0x00, 0xff]);
    let buf = encode_uvarint_ascending(buf, 7);

    let (rest, name) = decode_string_ascending(&buf).unwrap();
    assert_eq!(name, "users");
    let (rest, id) = decode_varint_descending(rest).unwrap();
    assert_eq!(id, 42);
    let (rest, blob) = decode_bytes_descending(rest).unwrap();
    assert_eq!(blob, vec![0x00, 0xff]);
    let (rest, n) = decode_uvarint_ascending(rest).unwrap();
    assert_eq!(n, 7);
    assert!(rest.is_empty());
}

#[test]
fn markers_do_not_overlap() {
    let int_range = INT_MIN..=INT_MAX;
    assert!(!int_range.contains(&BYTES_MARKER));
    assert!(!int_range.contains(&BYTES_DESC_MARKER));
    assert_ne!(BYTES_MARKER, BYTES_DESC_MARKER);
}
