use crate::events::Transfer;
use crate::state::TokenLedger;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{mint_to, Mint, MintTo, TokenAccount, TokenInterface};

/// Mints `amount` into `destination`. Only the authorized minter may call
/// this, normally through a CPI signed by the faucet's config PDA.
pub fn handler(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
    let minter = ctx.accounts.minter.key();
    let new_supply = ctx.accounts.token_ledger.reserve_supply(&minter, amount)?;

    let mint_key = ctx.accounts.mint.key();
    let seeds = &[
        TokenLedger::SEED_PREFIX,
        mint_key.as_ref(),
        &[ctx.accounts.token_ledger.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = MintTo {
        mint: ctx.accounts.mint.to_account_info(),
        to: ctx.accounts.destination.to_account_info(),
        authority: ctx.accounts.token_ledger.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    mint_to(
        CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds),
        amount,
    )?;

    let to = ctx.accounts.destination.owner;
    msg!("Minted {} tokens to {} (total supply: {})", amount, to, new_supply);

    emit!(Transfer {
        from: Pubkey::default(),
        to,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct MintTokens<'info> {
    #[account(
        mut,
        seeds = [TokenLedger::SEED_PREFIX, mint.key().as_ref()],
        bump = token_ledger.bump,
        has_one = mint,
    )]
    pub token_ledger: Account<'info, TokenLedger>,

    #[account(mut)]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Token account receiving the minted tokens
    #[account(
        mut,
        token::mint = mint,
    )]
    pub destination: InterfaceAccount<'info, TokenAccount>,

    /// Must match `token_ledger.authorized_minter`
    pub minter: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}
