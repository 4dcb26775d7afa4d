//! Window checks for `claim_all`.

use crate::constants::{CLAIM_ALL_ACCOUNTS_PER_ITEM, MAX_BATCH_CLAIM};
use crate::error::VestingError;

/// Number of schedules carried by `len` remaining accounts.
pub fn window_items(len: usize) -> Result<usize, VestingError> {
    if len == 0 {
        return Err(VestingError::EmptyBatch);
    }
    if len % CLAIM_ALL_ACCOUNTS_PER_ITEM != 0 {
        return Err(VestingError::MalformedBatch);
    }
    let items = len / CLAIM_ALL_ACCOUNTS_PER_ITEM;
    if items > MAX_BATCH_CLAIM {
        return Err(VestingError::BatchTooLarge);
    }
    Ok(items)
}

/// The schedule at `offset` in a window must be `first_index + offset`.
pub fn check_position(
    first_index: u64,
    offset: usize,
    schedule_index: u64,
) -> Result<(), VestingError> {
    let expected = first_index
        .checked_add(offset as u64)
        .ok_or(VestingError::MathOverflow)?;
    if schedule_index != expected {
        return Err(VestingError::MalformedBatch);
    }
    Ok(())
}
