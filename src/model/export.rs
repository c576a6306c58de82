use serde::Serialize;

/// One `[address, tokens]` pair of the wallet export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletAllocation(pub String, pub u64);
