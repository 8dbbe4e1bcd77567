//! Version-4-style UUID strings for local identifiers (list keys etc.)
//!
//! Ids are produced by filling a fixed template with random nibbles. The
//! random source is not cryptographically secure and no uniqueness is
//! promised across processes, so never use these where unpredictability
//! matters.

use rand::Rng;

/// Layout filled by [`create_uuid`]
///
/// `x` becomes any hex digit, `y` becomes one of `8 9 a b` (RFC 4122
/// variant bits), everything else is copied through.
pub const UUID_TEMPLATE: &str = "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";

const HEX_CHARS: &[u8] = b"0123456789abcdef";

/// Generate a new UUID-like string using the thread-local generator
pub fn create_uuid() -> String {
    create_uuid_with(&mut rand::thread_rng())
}

/// Generate a UUID-like string from the given random source
pub fn create_uuid_with<R: Rng>(rng: &mut R) -> String {
    let mut id = String::with_capacity(UUID_TEMPLATE.len());
    for c in UUID_TEMPLATE.chars() {
        match c {
            'x' => id.push(nibble_to_hex(rng.gen_range(0..16))),
            'y' => id.push(nibble_to_hex((rng.gen_range(0..16) & 0x3) | 0x8)),
            other => id.push(other),
        }
    }
    id
}

fn nibble_to_hex(nibble: u8) -> char {
    HEX_CHARS[(nibble & 0xf) as usize] as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Checks `[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}`
    fn matches_layout(id: &str) -> bool {
        let bytes = id.as_bytes();
        if bytes.len() != 36 {
            return false;
        }
        bytes.iter().enumerate().all(|(i, &b)| match i {
            8 | 13 | 18 | 23 => b == b'-',
            14 => b == b'4',
            19 => matches!(b, b'8' | b'9' | b'a' | b'b'),
            _ => matches!(b, b'0'..=b'9' | b'a'..=b'f'),
        })
    }

    #[test]
    fn test_uuid_matches_layout() {
        for _ in 0..1000 {
            let id = create_uuid();
            assert!(matches_layout(&id), "bad id: {}", id);
        }
    }

    #[test]
    fn test_uuid_parses_as_v4() {
        for _ in 0..100 {
            let id = create_uuid();
            let parsed = uuid::Uuid::parse_str(&id).unwrap();
            assert_eq!(parsed.get_version_num(), 4);
            assert_eq!(parsed.get_variant(), uuid::Variant::RFC4122);
            assert_eq!(parsed.hyphenated().to_string(), id);
        }
    }

    #[test]
    fn test_seeded_generator_is_deterministic() {
        let a = create_uuid_with(&mut ChaCha8Rng::seed_from_u64(7));
        let b = create_uuid_with(&mut ChaCha8Rng::seed_from_u64(7));
        let c = create_uuid_with(&mut ChaCha8Rng::seed_from_u64(8));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(matches_layout(&a));
    }

    #[test]
    fn test_variant_nibble_covers_all_values() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut seen = [false; 4];
        for _ in 0..500 {
            let id = create_uuid_with(&mut rng);
            let idx = match id.as_bytes()[19] {
                b'8' => 0,
                b'9' => 1,
                b'a' => 2,
                b'b' => 3,
                other => panic!("unexpected variant nibble {}", other as char),
            };
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_nibble_to_hex_lowercase() {
        assert_eq!(nibble_to_hex(0), '0');
        assert_eq!(nibble_to_hex(9), '9');
        assert_eq!(nibble_to_hex(10), 'a');
        assert_eq!(nibble_to_hex(15), 'f');
    }
}
