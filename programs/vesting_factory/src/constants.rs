//! Program-wide constants.

/// Factory PDA: `[FACTORY_SEED, mint]`.
pub const FACTORY_SEED: &[u8] = b"factory";

/// Factory token account PDA: `[FACTORY_VAULT_SEED, factory]`.
pub const FACTORY_VAULT_SEED: &[u8] = b"factory_vault";

/// Schedule PDA: `[SCHEDULE_SEED, factory, index.to_le_bytes()]`.
pub const SCHEDULE_SEED: &[u8] = b"schedule";

/// Schedule token account PDA: `[SCHEDULE_VAULT_SEED, schedule]`.
pub const SCHEDULE_VAULT_SEED: &[u8] = b"schedule_vault";

/// Recipient index PDA: `[RECIPIENT_SEED, factory, recipient]`.
pub const RECIPIENT_SEED: &[u8] = b"recipient";

/// Max schedules processed per `claim_all` call.
pub const MAX_BATCH_CLAIM: usize = 5;

/// Remaining accounts consumed per schedule in `claim_all`
/// (schedule, schedule vault, recipient token account).
pub const CLAIM_ALL_ACCOUNTS_PER_ITEM: usize = 3;
