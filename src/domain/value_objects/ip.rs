//! IPv4 validity predicate
//!
//! Strict dotted-quad grammar: exactly four octets, each matching
//! `25[0-5] | 2[0-4]\d | [01]?\d\d?`. Hostnames, IPv6, surrounding
//! whitespace and out-of-range octets are all rejected.

/// Returns true if `input` is a valid dotted-quad IPv4 address.
pub fn is_valid_ipv4(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }

    let mut octets = 0;
    for part in input.split('.') {
        if !octet_ok(part) {
            return false;
        }
        octets += 1;
    }
    octets == 4
}

/// One octet of the grammar: `25[0-5] | 2[0-4]\d | [01]?\d\d?`.
///
/// One- and two-digit octets accept any digits; three-digit octets must
/// start with 0 or 1, or be 200-255. Leading zeros ("01", "001") are
/// allowed, as the grammar permits.
fn octet_ok(part: &str) -> bool {
    let bytes = part.as_bytes();
    if bytes.is_empty() || bytes.len() > 3 || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }
    match bytes {
        [_] | [_, _] => true,
        [b'0' | b'1', _, _] => true,
        [b'2', second, third] => *second < b'5' || (*second == b'5' && *third <= b'5'),
        _ => false,
    }
}
