use faucet_token::constants::ONE_TOKEN;

/// Amount minted by every successful claim: 10 tokens.
pub const FAUCET_AMOUNT: u64 = 10 * ONE_TOKEN;

/// Seconds an address must wait between two successful claims (24h).
pub const COOLDOWN_TIME: u64 = 24 * 60 * 60;

/// Lifetime cap per address: 50 tokens, i.e. five claims.
pub const MAX_CLAIM_AMOUNT: u64 = 50 * ONE_TOKEN;
