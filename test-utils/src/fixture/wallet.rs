//! Wallet fixtures.

/// Base-58 alphabet used by Solana addresses.
const BASE58: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// A known-good Solana address.
pub const VALID_ADDRESS: &str = "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy";

/// Builds a deterministic, syntactically valid 44-character address.
///
/// Different seeds give different addresses.
///
/// # Arguments
/// - `seed` - Any number identifying the address within a test
///
/// # Returns
/// - `String` - Address matching the Solana address pattern
pub fn address(seed: u64) -> String {
    let mut remaining = seed;
    let mut suffix = Vec::new();

    loop {
        suffix.push(BASE58[(remaining % 58) as usize]);
        remaining /= 58;
        if remaining == 0 {
            break;
        }
    }

    let mut address = vec![b'W'; 44 - suffix.len()];
    address.extend(suffix.iter().rev());

    String::from_utf8(address).expect("base-58 alphabet is ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_are_distinct_and_well_formed() {
        let first = address(1);
        let second = address(2);
        let large = address(u64::MAX);

        assert_ne!(first, second);
        for candidate in [&first, &second, &large] {
            assert_eq!(candidate.len(), 44);
            assert!(candidate.bytes().all(|b| BASE58.contains(&b)));
        }
    }
}
