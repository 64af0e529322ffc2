//! Unique-identifier generation for emitted container blocks.
//!
//! The target editor requires otherwise-identical block instances to
//! carry distinct identifiers, and re-generation of the same layout is
//! expected to produce fresh ones. That makes this a deliberate point of
//! non-determinism, so it lives behind a trait: production code injects
//! [`RandomIds`], tests inject [`SequentialIds`] and get exact output.

use uuid::Uuid;

/// Number of hex characters per identifier; 12 gives 48 bits of entropy,
/// enough to make collisions within one document negligible.
pub const ID_LEN: usize = 12;

/// Source of per-instance block identifiers.
pub trait IdSource {
    /// Produce the next identifier: `ID_LEN` lowercase hex characters.
    fn next_id(&mut self) -> String;
}

/// Random identifiers for production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> String {
        let hex = Uuid::new_v4().simple().to_string();
        hex[..ID_LEN].to_string()
    }
}

/// Deterministic identifiers for tests and snapshot comparisons.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialIds {
    next: u64,
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{:0width$x}", self.next, width = ID_LEN);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_have_fixed_width_hex() {
        let mut ids = RandomIds;
        let id = ids.next_id();
        assert_eq!(id.len(), ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn random_ids_do_not_repeat() {
        let mut ids = RandomIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn sequential_ids_are_stable() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id(), "000000000000");
        assert_eq!(ids.next_id(), "000000000001");
    }
}
