use anchor_lang::prelude::*;

/// Mirrors the ERC20 mint log: `from` is always the zero key.
#[event]
pub struct Transfer {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

#[event]
pub struct TokenInitialized {
    pub token_ledger: Pubkey,
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub max_supply: u64,
    pub initialized_at: i64,
}

#[event]
pub struct AuthorizedMinterSet {
    pub token_ledger: Pubkey,
    pub minter: Pubkey,
    pub set_at: i64,
}
