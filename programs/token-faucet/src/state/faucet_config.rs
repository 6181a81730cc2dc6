use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct FaucetConfig {
    /// Authority that can pause and unpause the faucet
    pub admin: Pubkey,
    /// Ledger account of the faucet token
    pub token_ledger: Pubkey,
    /// The SPL mint this faucet dispenses
    pub token_mint: Pubkey,
    /// Global switch; no claims succeed while set
    pub paused: bool,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl FaucetConfig {
    pub const SEED_PREFIX: &'static [u8] = b"faucet_config";
    pub const SPACE: usize = 8 + Self::INIT_SPACE;
}
