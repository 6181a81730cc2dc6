use anchor_lang::prelude::*;

#[error_code]
pub enum FaucetError {
    #[msg("Unauthorized access. Only the faucet admin can perform this action")]
    NotAuthorized,

    #[msg("The faucet is currently paused")]
    FaucetPaused,

    #[msg("Cooldown period is still active. Please wait before requesting again")]
    CooldownActive,

    #[msg("You have reached your lifetime claim limit")]
    LifetimeLimitExceeded,

    #[msg("The token ledger does not belong to this mint")]
    LedgerMismatch,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
