use crate::constants::COOLDOWN_TIME;
use crate::state::{ClaimRecord, ClaimStatus, FaucetConfig};
use anchor_lang::prelude::*;

// Read-only instructions for clients polling faucet state. They are meant to
// be simulated; values come back as return data.

pub fn can_claim(ctx: Context<ClaimView>) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx
        .accounts
        .snapshot()?
        .can_claim(ctx.accounts.faucet_config.paused, now))
}

pub fn remaining_allowance(ctx: Context<ClaimView>) -> Result<u64> {
    Ok(ctx.accounts.snapshot()?.remaining_allowance())
}

pub fn last_claim_at(ctx: Context<ClaimView>) -> Result<i64> {
    Ok(ctx.accounts.snapshot()?.last_claim_at)
}

pub fn total_claimed(ctx: Context<ClaimView>) -> Result<u64> {
    Ok(ctx.accounts.snapshot()?.total_claimed)
}

pub fn cooldown_remaining(ctx: Context<ClaimView>) -> Result<i64> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.snapshot()?.cooldown_remaining(now))
}

pub fn claim_status(ctx: Context<ClaimView>) -> Result<ClaimStatus> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.snapshot()?.status(now))
}

pub fn cooldown_time(_ctx: Context<FaucetView>) -> Result<u64> {
    Ok(COOLDOWN_TIME)
}

pub fn is_paused(ctx: Context<FaucetView>) -> Result<bool> {
    Ok(ctx.accounts.faucet_config.paused)
}

#[derive(Accounts)]
pub struct ClaimView<'info> {
    #[account(
        seeds = [FaucetConfig::SEED_PREFIX, faucet_config.token_mint.as_ref()],
        bump = faucet_config.bump,
    )]
    pub faucet_config: Account<'info, FaucetConfig>,

    /// CHECK: any address may be queried
    pub user: UncheckedAccount<'info>,

    /// CHECK: address pinned by seeds; empty until the user's first claim
    #[account(
        seeds = [ClaimRecord::SEED_PREFIX, user.key().as_ref(), faucet_config.token_mint.as_ref()],
        bump,
    )]
    pub claim_record: UncheckedAccount<'info>,
}

impl ClaimView<'_> {
    /// The stored record, or a fresh one if the user never claimed.
    fn snapshot(&self) -> Result<ClaimRecord> {
        let info = self.claim_record.to_account_info();
        if info.data_is_empty() {
            return Ok(ClaimRecord::default());
        }
        require_keys_eq!(*info.owner, crate::ID, anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram);
        let data = info.try_borrow_data()?;
        ClaimRecord::try_deserialize(&mut &data[..])
    }
}

#[derive(Accounts)]
pub struct FaucetView<'info> {
    #[account(
        seeds = [FaucetConfig::SEED_PREFIX, faucet_config.token_mint.as_ref()],
        bump = faucet_config.bump,
    )]
    pub faucet_config: Account<'info, FaucetConfig>,
}
