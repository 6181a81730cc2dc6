use anchor_lang::prelude::*;

#[event]
pub struct TokensClaimed {
    pub user: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct FaucetPaused {
    pub paused: bool,
}

#[event]
pub struct FaucetInitialized {
    pub faucet_config: Pubkey,
    pub admin: Pubkey,
    pub token_mint: Pubkey,
    pub token_ledger: Pubkey,
    pub initialized_at: i64,
}
