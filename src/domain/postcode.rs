//! Postcode decoding.
//!
//! A postcode is an opaque token whose only structure is that it reads as a
//! base-36 number. That number is what the base price is derived from.

/// Decode a postcode as an unsigned base-36 integer.
///
/// Accepts `0-9`, `a-z` and `A-Z` only; signs, whitespace and empty input are
/// rejected, as is any value that does not fit in an `i64`.
pub fn decode(postcode: &str) -> Option<i64> {
    if postcode.is_empty() || !postcode.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    i64::from_str_radix(postcode, 36).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_digits_and_letters() {
        assert_eq!(decode("0"), Some(0));
        assert_eq!(decode("Z"), Some(35));
        assert_eq!(decode("10"), Some(36));
        assert_eq!(decode("SW1A1AA"), decode("sw1a1aa"));
    }

    #[test]
    fn test_decode_rejects_invalid_characters() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("_"), None);
        assert_eq!(decode("SW1A 1AA"), None);
        assert_eq!(decode("+SW1"), None);
        assert_eq!(decode("-SW1"), None);
    }

    #[test]
    fn test_decode_rejects_overflow() {
        // i64::MAX is "1y2p0ij32e8e7" in base 36
        assert_eq!(decode("1y2p0ij32e8e7"), Some(i64::MAX));
        assert_eq!(decode("1y2p0ij32e8e8"), None);
        assert_eq!(decode("ZZZZZZZZZZZZZZ"), None);
    }
}
