//! Typed-literal codecs: base64 decoding and UUID shape validation.
//!
//! The base64 decoder is deliberately lenient, which is why it is
//! hand-rolled rather than delegated to a strict engine: it accepts the
//! standard alphabet and the URL-safe variants (`-` `_`) interchangeably,
//! ignores `=` padding and whitespace anywhere in the body, and discards
//! residue bits that do not fill a whole byte. The decoded length is
//! `floor(6 * significant_chars / 8)`.

/// Decodes a base64 body. Returns `None` on any byte outside the
/// alphabet/skip set.
pub(crate) fn decode_base64(input: &str) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len() / 4 * 3 + 3);
    let mut accum: u32 = 0;
    let mut bits: u32 = 0;

    for &c in input.as_bytes() {
        let sextet = match c {
            b'=' | b' ' | b'\n' | b'\r' => continue,
            b'A'..=b'Z' => c - b'A',
            b'a'..=b'z' => c - b'a' + 26,
            b'0'..=b'9' => c - b'0' + 52,
            b'+' | b'-' => 62,
            b'/' | b'_' => 63,
            _ => return None,
        };
        accum = (accum << 6) | u32::from(sextet);
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push(((accum >> bits) & 0xFF) as u8);
        }
    }

    Some(out)
}

/// Validates the 8-4-4-4-12 UUID shape: exactly 36 characters, dashes
/// at positions 8, 13, 18 and 23, hex digits everywhere else. Case is
/// not normalized.
pub(crate) fn validate_uuid(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 36 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, &c)| match i {
        8 | 13 | 18 | 23 => c == b'-',
        _ => c.is_ascii_hexdigit(),
    })
}
