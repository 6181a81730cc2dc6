use crate::error::FaucetError;
use crate::events::FaucetPaused;
use crate::state::FaucetConfig;
use anchor_lang::prelude::*;

pub fn handler(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    let faucet_config = &mut ctx.accounts.faucet_config;
    faucet_config.paused = paused;

    msg!("Faucet {} paused: {}", faucet_config.token_mint, paused);
    emit!(FaucetPaused { paused });

    Ok(())
}

#[derive(Accounts)]
pub struct SetPaused<'info> {
    #[account(
        mut,
        seeds = [FaucetConfig::SEED_PREFIX, faucet_config.token_mint.as_ref()],
        bump = faucet_config.bump,
        has_one = admin @ FaucetError::NotAuthorized,
    )]
    pub faucet_config: Account<'info, FaucetConfig>,

    pub admin: Signer<'info>,
}
