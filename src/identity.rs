//! Stable item identity.
//!
//! A djb2-xor rolling hash over the UTF-16 code units of
//! `"{sourceId}:{link}"`, rendered in base-36 under a constant prefix.
//! UTF-16 units (not bytes) keep ids bit-for-bit identical to the ids the
//! board has already handed out, which is what lets the per-user
//! interaction store survive re-collection. Collisions are an accepted
//! low-probability risk; this is deliberately not a cryptographic hash.

const SEED: u32 = 5381;
const PREFIX: &str = "collected-";

/// Deterministic id for an item, a pure function of `(source_id, link)`.
pub fn identify(source_id: &str, link: &str) -> String {
    let key = format!("{source_id}:{link}");
    let mut hash = SEED;
    for unit in key.encode_utf16() {
        hash = hash.wrapping_mul(33) ^ u32::from(unit);
    }
    format!("{PREFIX}{}", to_base36(hash))
}

fn to_base36(mut n: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    // u32::MAX is 7 digits in base 36.
    let mut buf = [0u8; 7];
    let mut i = buf.len();
    while n > 0 {
        i -= 1;
        buf[i] = DIGITS[(n % 36) as usize];
        n /= 36;
    }
    buf[i..].iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector() {
        assert_eq!(identify("a", "b"), "collected-375i70");
    }

    #[test]
    fn deterministic_across_calls() {
        let id1 = identify("tistory-dailyhumor", "https://dailyhumor.tistory.com/123");
        let id2 = identify("tistory-dailyhumor", "https://dailyhumor.tistory.com/123");
        assert_eq!(id1, id2);
        assert!(id1.starts_with(PREFIX));
    }

    #[test]
    fn different_inputs_differ() {
        assert_ne!(
            identify("tistory-dailyhumor", "https://dailyhumor.tistory.com/123"),
            identify("tistory-dailyhumor", "https://dailyhumor.tistory.com/124"),
        );
        assert_ne!(identify("a", "bc"), identify("ab", "c"));
    }

    #[test]
    fn hangul_links_hash_over_utf16_units() {
        // Stays stable for non-ASCII input; one unit per Hangul syllable.
        let id = identify("src", "https://example.com/글-제목");
        assert_eq!(id, identify("src", "https://example.com/글-제목"));
        assert!(id.len() <= PREFIX.len() + 7);
    }

    #[test]
    fn base36_digits_only() {
        let id = identify("tistory-lifewisdom", "https://lifewisdom.tistory.com/9");
        let suffix = &id[PREFIX.len()..];
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
