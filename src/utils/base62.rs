//! Base62 encoding used for short code derivation.

/// Alphabet ordered digits, lowercase, uppercase; positional value = index.
const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Encodes an unsigned 64-bit integer as base62. Zero encodes to `"0"`;
/// no leading zero symbols otherwise.
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    // 62^11 > 2^64, so 11 bytes is the worst case for u64.
    let mut buf = [0u8; 11];
    let mut i = buf.len();
    while n > 0 {
        i -= 1;
        buf[i] = ALPHABET[(n % 62) as usize];
        n /= 62;
    }

    String::from_utf8(buf[i..].to_vec()).expect("alphabet is ASCII")
}

/// Decodes a base62 string produced by [`encode`].
///
/// Returns `None` on symbols outside the alphabet or on overflow.
pub fn decode(s: &str) -> Option<u64> {
    if s.is_empty() {
        return None;
    }

    let mut n: u64 = 0;
    for b in s.bytes() {
        let value = ALPHABET.iter().position(|&a| a == b)? as u64;
        n = n.checked_mul(62)?.checked_add(value)?;
    }
    Some(n)
}

/// Returns true if every character belongs to the base62 alphabet.
pub fn is_base62(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| ALPHABET.contains(&b))
}
