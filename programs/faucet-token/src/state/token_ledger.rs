use crate::constants::{MAX_NAME_LEN, MAX_SYMBOL_LEN};
use crate::error::TokenError;
use anchor_lang::prelude::*;

/// Supply accounting for the faucet token.
///
/// The ledger PDA is the SPL mint authority, so every token in circulation
/// passed through [`TokenLedger::reserve_supply`]. Balances themselves live in
/// the holders' token accounts.
#[account]
#[derive(Default, InitSpace)]
pub struct TokenLedger {
    /// Deployer; may configure the authorized minter once
    pub admin: Pubkey,
    /// The SPL mint this ledger controls
    pub mint: Pubkey,
    /// Only identity allowed to mint. Default key until configured
    pub authorized_minter: Pubkey,
    /// Total amount minted so far (in base units)
    pub total_supply: u64,
    /// Hard cap for `total_supply`
    pub max_supply: u64,
    pub decimals: u8,
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    #[max_len(MAX_SYMBOL_LEN)]
    pub symbol: String,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl TokenLedger {
    pub const SEED_PREFIX: &'static [u8] = b"token_ledger";
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    pub fn validate_metadata(name: &str, symbol: &str) -> Result<()> {
        require!(
            !name.is_empty() && name.len() <= MAX_NAME_LEN,
            TokenError::InvalidMetadata
        );
        require!(
            !symbol.is_empty() && symbol.len() <= MAX_SYMBOL_LEN,
            TokenError::InvalidMetadata
        );
        Ok(())
    }

    pub fn has_minter(&self) -> bool {
        self.authorized_minter != Pubkey::default()
    }

    /// Sets the authorized minter. Immutable once set.
    pub fn assign_minter(&mut self, minter: Pubkey) -> Result<()> {
        require!(!self.has_minter(), TokenError::MinterAlreadySet);
        require!(minter != Pubkey::default(), TokenError::InvalidMinter);
        self.authorized_minter = minter;
        Ok(())
    }

    pub fn check_minter(&self, minter: &Pubkey) -> Result<()> {
        require!(
            self.has_minter() && self.authorized_minter == *minter,
            TokenError::NotAuthorized
        );
        Ok(())
    }

    /// Validates the minter and the cap, then books `amount` against the supply.
    /// Returns the new total supply.
    pub fn reserve_supply(&mut self, minter: &Pubkey, amount: u64) -> Result<u64> {
        self.check_minter(minter)?;
        let new_total = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::SupplyCapExceeded)?;
        require!(new_total <= self.max_supply, TokenError::SupplyCapExceeded);
        self.total_supply = new_total;
        Ok(new_total)
    }

    pub fn remaining_supply(&self) -> u64 {
        self.max_supply.saturating_sub(self.total_supply)
    }
}
