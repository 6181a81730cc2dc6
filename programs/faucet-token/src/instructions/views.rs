use crate::state::TokenLedger;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount};

// Read-only instructions. Clients simulate them and read the return data.

pub fn balance_of(ctx: Context<BalanceOf>) -> Result<u64> {
    Ok(ctx
        .accounts
        .owner_token_account
        .as_ref()
        .map_or(0, |account| account.amount))
}

pub fn total_supply(ctx: Context<LedgerView>) -> Result<u64> {
    Ok(ctx.accounts.token_ledger.total_supply)
}

pub fn max_supply(ctx: Context<LedgerView>) -> Result<u64> {
    Ok(ctx.accounts.token_ledger.max_supply)
}

pub fn remaining_supply(ctx: Context<LedgerView>) -> Result<u64> {
    Ok(ctx.accounts.token_ledger.remaining_supply())
}

pub fn name(ctx: Context<LedgerView>) -> Result<String> {
    Ok(ctx.accounts.token_ledger.name.clone())
}

pub fn symbol(ctx: Context<LedgerView>) -> Result<String> {
    Ok(ctx.accounts.token_ledger.symbol.clone())
}

pub fn decimals(ctx: Context<LedgerView>) -> Result<u8> {
    Ok(ctx.accounts.token_ledger.decimals)
}

#[derive(Accounts)]
pub struct BalanceOf<'info> {
    #[account(
        seeds = [TokenLedger::SEED_PREFIX, mint.key().as_ref()],
        bump = token_ledger.bump,
        has_one = mint,
    )]
    pub token_ledger: Account<'info, TokenLedger>,

    pub mint: InterfaceAccount<'info, Mint>,

    /// CHECK: any address may be queried
    pub owner: UncheckedAccount<'info>,

    /// The owner's associated token account; absent means zero balance
    #[account(
        associated_token::mint = mint,
        associated_token::authority = owner,
    )]
    pub owner_token_account: Option<InterfaceAccount<'info, TokenAccount>>,
}

#[derive(Accounts)]
pub struct LedgerView<'info> {
    #[account(
        seeds = [TokenLedger::SEED_PREFIX, token_ledger.mint.as_ref()],
        bump = token_ledger.bump,
    )]
    pub token_ledger: Account<'info, TokenLedger>,
}
