use crate::error::FaucetError;
use crate::events::FaucetInitialized;
use crate::state::FaucetConfig;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;
use faucet_token::state::TokenLedger;

/// Creates the faucet for an existing token ledger. The config PDA must then
/// be registered as the ledger's authorized minter.
pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let faucet_config = &mut ctx.accounts.faucet_config;

    faucet_config.admin = ctx.accounts.admin.key();
    faucet_config.token_ledger = ctx.accounts.token_ledger.key();
    faucet_config.token_mint = ctx.accounts.token_mint.key();
    faucet_config.paused = false;
    faucet_config.bump = ctx.bumps.faucet_config;

    msg!(
        "Faucet initialized with mint: {}, ledger: {}, admin: {}",
        faucet_config.token_mint,
        faucet_config.token_ledger,
        faucet_config.admin
    );

    emit!(FaucetInitialized {
        faucet_config: faucet_config.key(),
        admin: faucet_config.admin,
        token_mint: faucet_config.token_mint,
        token_ledger: faucet_config.token_ledger,
        initialized_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Faucet configuration PDA, future authorized minter of the ledger
    #[account(
        init,
        payer = admin,
        space = FaucetConfig::SPACE,
        seeds = [FaucetConfig::SEED_PREFIX, token_mint.key().as_ref()],
        bump
    )]
    pub faucet_config: Account<'info, FaucetConfig>,

    /// Only the ledger admin may create its faucet
    #[account(
        constraint = token_ledger.mint == token_mint.key() @ FaucetError::LedgerMismatch,
        constraint = token_ledger.admin == admin.key() @ FaucetError::NotAuthorized,
    )]
    pub token_ledger: Account<'info, TokenLedger>,

    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Admin that can pause the faucet
    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}
