use anchor_lang::prelude::*;

/// Custom error codes for the vesting factory program.
#[error_code]
pub enum VestingError {
    #[msg("No access: caller is not allowed to perform this action")]
    NoAccess,

    #[msg("Zero address is not allowed")]
    ZeroAddress,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Start timestamp is before the current time")]
    StartBeforeNow,

    #[msg("Amount exceeds the factory token balance")]
    AmountExceedsBalance,

    #[msg("Schedule already initialised")]
    AlreadyInitialised,

    #[msg("Schedule not initialised")]
    NotInitialised,

    #[msg("Schedule already cancelled")]
    AlreadyCancelled,

    #[msg("Schedule already fully claimed")]
    AlreadyClaimed,

    #[msg("A vesting schedule already exists for this recipient")]
    VestingExists,

    #[msg("New recipient is the current recipient")]
    SameRecipient,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid schedule account")]
    InvalidScheduleAccount,

    #[msg("Empty batch")]
    EmptyBatch,

    #[msg("Batch size too large")]
    BatchTooLarge,

    #[msg("Batch accounts are malformed")]
    MalformedBatch,

    #[msg("Math overflow")]
    MathOverflow,
}
