use near_sdk::NearToken;

pub const DEFAULT_MAX_SUPPLY: u64 = 50;
// 0.00001 NEAR.
pub const DEFAULT_MINTING_FEE: NearToken = NearToken::from_yoctonear(10_000_000_000_000_000_000);
pub const DEFAULT_ROYALTY_PERCENTAGE: u32 = 10;

pub const MAX_ROYALTY_PERCENTAGE: u32 = 100;

// Transfers to `system` are burned by the protocol; it is never a valid
// royalty sink.
pub const BURN_ACCOUNT: &str = "system";

pub const WORD_LIST_LEN: u64 = 10;

pub const MAX_ENUMERATION_LIMIT: u64 = 100;
pub const DEFAULT_ENUMERATION_LIMIT: u64 = 50;
