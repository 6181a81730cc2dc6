use crate::constants::FAUCET_AMOUNT;
use crate::events::TokensClaimed;
use crate::state::{ClaimRecord, FaucetConfig};
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};
use faucet_token::{cpi::accounts::MintTokens, program::FaucetToken, state::TokenLedger};

pub fn handler(ctx: Context<RequestTokens>) -> Result<()> {
    let clock = Clock::get()?;
    let paused = ctx.accounts.faucet_config.paused;

    // Book the claim first; a failing mint below reverts it with the transaction.
    let claim_record = &mut ctx.accounts.claim_record;
    claim_record.try_claim(paused, clock.unix_timestamp)?;
    claim_record.user = ctx.accounts.user.key();
    claim_record.bump = ctx.bumps.claim_record;
    let total_claimed = claim_record.total_claimed;

    // The faucet config PDA is the ledger's authorized minter
    let mint_key = ctx.accounts.token_mint.key();
    let seeds = &[
        FaucetConfig::SEED_PREFIX,
        mint_key.as_ref(),
        &[ctx.accounts.faucet_config.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = MintTokens {
        token_ledger: ctx.accounts.token_ledger.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        destination: ctx.accounts.user_token_account.to_account_info(),
        minter: ctx.accounts.faucet_config.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
    };
    let cpi_program = ctx.accounts.faucet_token_program.to_account_info();
    faucet_token::cpi::mint(
        CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds),
        FAUCET_AMOUNT,
    )?;

    msg!(
        "Distributed {} tokens to user: {} (lifetime total: {})",
        FAUCET_AMOUNT,
        ctx.accounts.user.key(),
        total_claimed
    );

    emit!(TokensClaimed {
        user: ctx.accounts.user.key(),
        amount: FAUCET_AMOUNT,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RequestTokens<'info> {
    /// Faucet configuration PDA
    #[account(
        seeds = [FaucetConfig::SEED_PREFIX, token_mint.key().as_ref()],
        bump = faucet_config.bump,
        has_one = token_mint,
        has_one = token_ledger,
    )]
    pub faucet_config: Account<'info, FaucetConfig>,

    /// User claim history
    #[account(
        init_if_needed,
        payer = user,
        space = ClaimRecord::SPACE,
        seeds = [ClaimRecord::SEED_PREFIX, user.key().as_ref(), token_mint.key().as_ref()],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// Supply ledger, updated by the mint CPI
    #[account(mut)]
    pub token_ledger: Account<'info, TokenLedger>,

    #[account(mut)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// User's token account (destination)
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = token_mint,
        associated_token::authority = user,
    )]
    pub user_token_account: InterfaceAccount<'info, TokenAccount>,

    /// User requesting tokens
    #[account(mut)]
    pub user: Signer<'info>,

    pub faucet_token_program: Program<'info, FaucetToken>,
    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}
