use anchor_lang::prelude::*;
use core::result::Result;

use crate::error::VestingError;

/// Recipient index entry: maps one recipient of a factory to at most one schedule.
///
/// The factory owns these entries; a vacant entry has `schedule == Pubkey::default()`.
#[account]
#[derive(Default, Debug)]
pub struct RecipientVesting {
    pub factory: Pubkey,
    pub recipient: Pubkey,
    pub schedule: Pubkey,
    pub bump: u8,
}

impl RecipientVesting {
    pub const SIZE: usize =
        32 + // factory
        32 + // recipient
        32 + // schedule
        1;   // bump

    pub fn space() -> usize {
        8 + Self::SIZE
    }

    pub fn is_vacant(&self) -> bool {
        self.schedule == Pubkey::default()
    }

    pub fn register(
        &mut self,
        factory: Pubkey,
        recipient: Pubkey,
        schedule: Pubkey,
        bump: u8,
    ) -> Result<(), VestingError> {
        if recipient == Pubkey::default() || schedule == Pubkey::default() {
            return Err(VestingError::ZeroAddress);
        }
        if !self.is_vacant() {
            return Err(VestingError::VestingExists);
        }
        self.factory = factory;
        self.recipient = recipient;
        self.schedule = schedule;
        self.bump = bump;
        Ok(())
    }

    /// Moves the mapping held by `old` to `new`.
    ///
    /// Only the schedule `old` currently points at may request the move.
    pub fn reassign(
        old: &mut Self,
        new: &mut Self,
        requester: &Pubkey,
        new_recipient: Pubkey,
        new_bump: u8,
    ) -> Result<(), VestingError> {
        if old.is_vacant() || old.schedule != *requester {
            return Err(VestingError::NoAccess);
        }
        if old.recipient == Pubkey::default() || new_recipient == Pubkey::default() {
            return Err(VestingError::ZeroAddress);
        }
        if !new.is_vacant() {
            return Err(VestingError::VestingExists);
        }
        new.factory = old.factory;
        new.recipient = new_recipient;
        new.schedule = old.schedule;
        new.bump = new_bump;
        old.schedule = Pubkey::default();
        Ok(())
    }
}
