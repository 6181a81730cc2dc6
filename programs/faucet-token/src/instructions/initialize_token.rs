use crate::constants::{DECIMALS, MAX_SUPPLY};
use crate::events::TokenInitialized;
use crate::state::TokenLedger;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};

pub fn handler(ctx: Context<InitializeToken>, name: String, symbol: String) -> Result<()> {
    TokenLedger::validate_metadata(&name, &symbol)?;

    let token_ledger = &mut ctx.accounts.token_ledger;
    token_ledger.admin = ctx.accounts.admin.key();
    token_ledger.mint = ctx.accounts.mint.key();
    token_ledger.authorized_minter = Pubkey::default();
    token_ledger.total_supply = 0;
    token_ledger.max_supply = MAX_SUPPLY;
    token_ledger.decimals = DECIMALS;
    token_ledger.name = name;
    token_ledger.symbol = symbol;
    token_ledger.bump = ctx.bumps.token_ledger;

    msg!(
        "Token ledger initialized for mint: {}, max supply: {}, decimals: {}",
        token_ledger.mint,
        MAX_SUPPLY,
        DECIMALS
    );
    msg!("Token: {} ({})", token_ledger.name, token_ledger.symbol);

    emit!(TokenInitialized {
        token_ledger: token_ledger.key(),
        mint: token_ledger.mint,
        admin: token_ledger.admin,
        max_supply: MAX_SUPPLY,
        initialized_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeToken<'info> {
    /// Ledger PDA, also the mint authority
    #[account(
        init,
        payer = admin,
        space = TokenLedger::SPACE,
        seeds = [TokenLedger::SEED_PREFIX, mint.key().as_ref()],
        bump
    )]
    pub token_ledger: Account<'info, TokenLedger>,

    /// The SPL mint created for the faucet token. No freeze authority
    #[account(
        init,
        payer = admin,
        mint::decimals = DECIMALS,
        mint::authority = token_ledger,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
    pub rent: Sysvar<'info, Rent>,
}
