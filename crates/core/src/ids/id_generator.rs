use uuid::Uuid;

use crate::constants::POLICY_NUMBER_PREFIX;

/// Length of the random portion of policy numbers.
const POLICY_SUFFIX_LENGTH: usize = 7;

/// Alphabet for policy number suffixes (upper-case alphanumeric).
const POLICY_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Source of opaque record ids and human-readable policy numbers.
///
/// Services take this as an injected capability so tests can supply
/// deterministic values.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh opaque record id.
    fn next_id(&self) -> String;

    /// Returns a fresh policy number, e.g. `POL-8K2M0QZ`.
    fn next_policy_number(&self) -> String;
}

/// Default generator backed by random (v4) UUIDs.
///
/// Policy numbers map UUID bytes onto an upper-case alphabet. Collisions are
/// not checked against the ledger.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn next_policy_number(&self) -> String {
        let uuid = Uuid::new_v4();
        let suffix: String = uuid
            .as_bytes()
            .iter()
            .take(POLICY_SUFFIX_LENGTH)
            .map(|&b| POLICY_ALPHABET[(b as usize) % POLICY_ALPHABET.len()] as char)
            .collect();
        format!("{}-{}", POLICY_NUMBER_PREFIX, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_is_unique() {
        let generator = UuidIdGenerator::new();
        assert_ne!(generator.next_id(), generator.next_id());
    }

    #[test]
    fn test_policy_number_format() {
        let number = UuidIdGenerator::new().next_policy_number();
        let (prefix, suffix) = number.split_once('-').unwrap();
        assert_eq!(prefix, "POL");
        assert_eq!(suffix.len(), 7);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }
}
