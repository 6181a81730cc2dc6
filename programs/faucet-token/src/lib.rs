pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("GRguUVXULUZzYdhWBSmWVhkKNnL3zRAXagiK3XfTnAbu");

#[program]
pub mod faucet_token {
    use super::*;

    /// Create the token mint and its ledger. The ledger PDA becomes the mint authority
    pub fn initialize_token(
        ctx: Context<InitializeToken>,
        name: String,
        symbol: String,
    ) -> Result<()> {
        initialize_token::handler(ctx, name, symbol)
    }

    /// Configure the single identity allowed to mint. Can only be done once
    pub fn set_authorized_minter(ctx: Context<SetAuthorizedMinter>, minter: Pubkey) -> Result<()> {
        set_authorized_minter::handler(ctx, minter)
    }

    /// Mint tokens, capped by the maximum supply
    pub fn mint(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
        mint::handler(ctx, amount)
    }

    pub fn balance_of(ctx: Context<BalanceOf>) -> Result<u64> {
        instructions::balance_of(ctx)
    }

    pub fn total_supply(ctx: Context<LedgerView>) -> Result<u64> {
        instructions::total_supply(ctx)
    }

    pub fn max_supply(ctx: Context<LedgerView>) -> Result<u64> {
        instructions::max_supply(ctx)
    }

    /// Amount still mintable before the cap is reached
    pub fn remaining_supply(ctx: Context<LedgerView>) -> Result<u64> {
        instructions::remaining_supply(ctx)
    }

    pub fn name(ctx: Context<LedgerView>) -> Result<String> {
        instructions::name(ctx)
    }

    pub fn symbol(ctx: Context<LedgerView>) -> Result<String> {
        instructions::symbol(ctx)
    }

    pub fn decimals(ctx: Context<LedgerView>) -> Result<u8> {
        instructions::decimals(ctx)
    }
}
