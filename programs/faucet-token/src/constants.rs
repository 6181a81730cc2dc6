/// SPL decimals of the faucet token.
pub const DECIMALS: u8 = 9;

/// One whole token in base units.
pub const ONE_TOKEN: u64 = 10u64.pow(DECIMALS as u32);

/// Hard cap on everything the ledger will ever mint: 1,000,000 tokens.
pub const MAX_SUPPLY: u64 = 1_000_000 * ONE_TOKEN;

pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;
