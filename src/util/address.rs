//! Solana wallet address shape check.

use std::sync::LazyLock;

use regex::Regex;

/// Base-58 alphabet (no `0`, `I`, `O`, `l`), 32 to 44 characters, anchored.
static SOLANA_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{32,44}$").expect("address pattern is a valid regex")
});

/// Returns true if `address` has the shape of a Solana address.
///
/// This is a syntax check only. It does not decode the base-58 payload or check that
/// the account exists on chain.
pub fn is_solana_address(address: &str) -> bool {
    SOLANA_ADDRESS.is_match(address)
}
