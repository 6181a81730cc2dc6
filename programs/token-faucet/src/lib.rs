pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("9kKrAJsk287onKUgcqAtYF5P8WF65uyWC9yuujxAjXMj");

#[program]
pub mod token_faucet {
    use super::*;

    /// Initialize the faucet for an existing token ledger
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize::handler(ctx)
    }

    /// Request tokens from the faucet
    pub fn request_tokens(ctx: Context<RequestTokens>) -> Result<()> {
        request_tokens::handler(ctx)
    }

    /// Pause or unpause all claims. Admin only
    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        set_paused::handler(ctx, paused)
    }

    pub fn can_claim(ctx: Context<ClaimView>) -> Result<bool> {
        instructions::can_claim(ctx)
    }

    pub fn remaining_allowance(ctx: Context<ClaimView>) -> Result<u64> {
        instructions::remaining_allowance(ctx)
    }

    pub fn last_claim_at(ctx: Context<ClaimView>) -> Result<i64> {
        instructions::last_claim_at(ctx)
    }

    pub fn total_claimed(ctx: Context<ClaimView>) -> Result<u64> {
        instructions::total_claimed(ctx)
    }

    /// Seconds until the user's cooldown ends
    pub fn cooldown_remaining(ctx: Context<ClaimView>) -> Result<i64> {
        instructions::cooldown_remaining(ctx)
    }

    pub fn claim_status(ctx: Context<ClaimView>) -> Result<ClaimStatus> {
        instructions::claim_status(ctx)
    }

    pub fn cooldown_time(ctx: Context<FaucetView>) -> Result<u64> {
        instructions::cooldown_time(ctx)
    }

    pub fn is_paused(ctx: Context<FaucetView>) -> Result<bool> {
        instructions::is_paused(ctx)
    }
}
