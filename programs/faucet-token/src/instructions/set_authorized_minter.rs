use crate::error::TokenError;
use crate::events::AuthorizedMinterSet;
use crate::state::TokenLedger;
use anchor_lang::prelude::*;

pub fn handler(ctx: Context<SetAuthorizedMinter>, minter: Pubkey) -> Result<()> {
    let token_ledger = &mut ctx.accounts.token_ledger;
    token_ledger.assign_minter(minter)?;

    msg!("Authorized minter for {} set to {}", token_ledger.mint, minter);

    emit!(AuthorizedMinterSet {
        token_ledger: token_ledger.key(),
        minter,
        set_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetAuthorizedMinter<'info> {
    #[account(
        mut,
        seeds = [TokenLedger::SEED_PREFIX, token_ledger.mint.as_ref()],
        bump = token_ledger.bump,
        has_one = admin @ TokenError::NotAuthorized,
    )]
    pub token_ledger: Account<'info, TokenLedger>,

    pub admin: Signer<'info>,
}
