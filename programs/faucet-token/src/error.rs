use anchor_lang::prelude::*;

#[error_code]
pub enum TokenError {
    #[msg("Unauthorized access. Only the authorized minter or ledger admin can perform this action")]
    NotAuthorized,

    #[msg("Mint amount would exceed the maximum token supply")]
    SupplyCapExceeded,

    #[msg("The authorized minter has already been set")]
    MinterAlreadySet,

    #[msg("The authorized minter cannot be the default public key")]
    InvalidMinter,

    #[msg("Token name or symbol is empty or too long")]
    InvalidMetadata,
}
