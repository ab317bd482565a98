use anchor_lang::prelude::*;

/// Custom error codes for the timelock pool program.
#[error_code]
pub enum TimelockError {
    #[msg("Unauthorized: pool owner signature required")]
    Unauthorized,

    #[msg("Token account does not match the pool's mint or owner")]
    InvalidToken,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Release date must be strictly in the future")]
    InvalidReleaseDate,

    #[msg("Beneficiary must be a valid identity distinct from the pool owner")]
    InvalidBeneficiary,

    #[msg("Allocation would exceed the pool's total funds")]
    PoolExhausted,

    #[msg("Release date has not been reached yet")]
    TooEarly,

    #[msg("Grant has already been released")]
    AlreadyReleased,

    #[msg("Vault cannot cover the transfer")]
    TransferFailed,

    #[msg("Grant does not belong to this pool")]
    InvalidGrant,

    #[msg("Beneficiary grant list is full")]
    GrantListFull,

    #[msg("No unallocated funds left to reclaim")]
    NothingToReclaim,

    #[msg("Math overflow")]
    MathOverflow,
}
