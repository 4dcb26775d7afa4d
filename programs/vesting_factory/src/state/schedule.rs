use anchor_lang::prelude::*;
use core::result::Result;

use crate::error::VestingError;
use crate::utils::linear;

/// One linear vesting schedule per recipient.
///
/// Lifecycle: `Uninitialised -> Initialised -> { Active, Cancelled }`. Whether an
/// active schedule still has tokens to release is derived from
/// `total_claimed_amount` against `amount`, not stored.
#[account]
#[derive(Default, Debug)]
pub struct Schedule {
    /// Factory that created (and indexes) this schedule.
    pub factory: Pubkey,
    /// Position in the factory's creation order.
    pub index: u64,
    /// Current beneficiary.
    pub recipient: Pubkey,
    /// Vesting start (Unix seconds).
    pub start: i64,
    /// Seconds over which `amount` vests.
    pub duration: u64,
    /// Total allocation.
    pub amount: u64,
    /// Cumulative released amount (never decreases, never exceeds `amount`).
    pub total_claimed_amount: u64,
    pub is_cancellable: bool,
    pub cancelled: bool,
    pub initialised: bool,
    pub bump: u8,
    pub vault_bump: u8,
}

/// Token movements produced by cancelling a schedule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cancellation {
    /// Vested but unclaimed amount released to the recipient.
    pub to_recipient: u64,
    /// Unvested remainder returned to the treasury.
    pub to_treasury: u64,
}

impl Schedule {
    pub const SIZE: usize =
        32 + // factory
        8 +  // index
        32 + // recipient
        8 +  // start
        8 +  // duration
        8 +  // amount
        8 +  // total_claimed_amount
        1 +  // is_cancellable
        1 +  // cancelled
        1 +  // initialised
        1 +  // bump
        1;   // vault_bump

    pub fn space() -> usize {
        8 + Self::SIZE
    }

    #[allow(clippy::too_many_arguments)]
    pub fn initialise(
        &mut self,
        factory: Pubkey,
        index: u64,
        recipient: Pubkey,
        start: i64,
        duration: u64,
        amount: u64,
        is_cancellable: bool,
        bump: u8,
        vault_bump: u8,
    ) -> Result<(), VestingError> {
        if self.initialised {
            return Err(VestingError::AlreadyInitialised);
        }
        self.factory = factory;
        self.index = index;
        self.recipient = recipient;
        self.start = start;
        self.duration = duration;
        self.amount = amount;
        self.total_claimed_amount = 0;
        self.is_cancellable = is_cancellable;
        self.cancelled = false;
        self.initialised = true;
        self.bump = bump;
        self.vault_bump = vault_bump;
        Ok(())
    }

    pub fn vested_amount(&self, now: i64) -> Result<u64, VestingError> {
        linear::vested_amount(self.amount, self.start, self.duration, now)
    }

    pub fn claimable_amount(&self, now: i64) -> Result<u64, VestingError> {
        linear::claimable_amount(
            self.amount,
            self.total_claimed_amount,
            self.start,
            self.duration,
            now,
        )
    }

    pub fn is_fully_claimed(&self) -> bool {
        self.total_claimed_amount >= self.amount
    }

    /// Whether a batch claim should visit this schedule.
    pub fn is_claim_eligible(&self) -> bool {
        self.initialised && !self.cancelled && !self.is_fully_claimed()
    }

    /// Books the current claimable amount and returns it; the caller moves the
    /// tokens. Zero claimable is not an error.
    pub fn claim(&mut self, now: i64) -> Result<u64, VestingError> {
        if !self.initialised {
            return Err(VestingError::NotInitialised);
        }
        if self.cancelled {
            return Err(VestingError::AlreadyCancelled);
        }
        if self.is_fully_claimed() {
            return Err(VestingError::AlreadyClaimed);
        }
        let claimable = self.claimable_amount(now)?;
        if claimable == 0 {
            return Ok(0);
        }
        self.total_claimed_amount = self
            .total_claimed_amount
            .checked_add(claimable)
            .ok_or(VestingError::MathOverflow)?;
        Ok(claimable)
    }

    pub fn can_cancel(&self, caller: &Pubkey, treasury: &Pubkey) -> bool {
        self.is_cancellable && caller == treasury
    }

    /// Settles the vested portion to the recipient and the unvested remainder to
    /// the treasury, then marks the schedule cancelled.
    pub fn cancel(
        &mut self,
        caller: &Pubkey,
        treasury: &Pubkey,
        now: i64,
    ) -> Result<Cancellation, VestingError> {
        if !self.initialised {
            return Err(VestingError::NotInitialised);
        }
        if !self.can_cancel(caller, treasury) {
            return Err(VestingError::NoAccess);
        }
        if self.cancelled {
            return Err(VestingError::AlreadyCancelled);
        }
        let vested = self.vested_amount(now)?.max(self.total_claimed_amount);
        let to_recipient = vested - self.total_claimed_amount;
        let to_treasury = self
            .amount
            .checked_sub(vested)
            .ok_or(VestingError::MathOverflow)?;

        self.total_claimed_amount = vested;
        self.cancelled = true;
        Ok(Cancellation {
            to_recipient,
            to_treasury,
        })
    }

    /// Access and argument checks for a recipient reassignment.
    ///
    /// Cancellable schedules may be reassigned by the recipient or the treasury;
    /// non-cancellable ones only by the recipient, and never to itself.
    pub fn authorize_recipient_change(
        &self,
        caller: &Pubkey,
        treasury: &Pubkey,
        new_recipient: &Pubkey,
    ) -> Result<(), VestingError> {
        if !self.initialised {
            return Err(VestingError::NotInitialised);
        }
        if *new_recipient == Pubkey::default() {
            return Err(VestingError::ZeroAddress);
        }
        let is_recipient = *caller == self.recipient;
        if self.is_cancellable {
            if !is_recipient && caller != treasury {
                return Err(VestingError::NoAccess);
            }
            // The index already maps the current recipient to this schedule.
            if *new_recipient == self.recipient {
                return Err(VestingError::VestingExists);
            }
        } else {
            if !is_recipient {
                return Err(VestingError::NoAccess);
            }
            if *new_recipient == self.recipient {
                return Err(VestingError::SameRecipient);
            }
        }
        Ok(())
    }

    /// Returns the previous recipient.
    pub fn set_recipient(&mut self, new_recipient: Pubkey) -> Pubkey {
        core::mem::replace(&mut self.recipient, new_recipient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEK: i64 = 7 * 86_400;
    const NOW: i64 = 1_800_000_000;

    fn schedule(recipient: Pubkey, amount: u64, duration: u64, cancellable: bool) -> Schedule {
        let mut s = Schedule::default();
        s.initialise(
            Pubkey::new_unique(),
            0,
            recipient,
            NOW,
            duration,
            amount,
            cancellable,
            255,
            254,
        )
        .unwrap();
        s
    }

    #[test]
    fn initialise_runs_once() {
        let recipient = Pubkey::new_unique();
        let mut s = schedule(recipient, 100, 10, false);
        assert_eq!(s.recipient, recipient);
        assert_eq!(s.start, NOW);
        assert_eq!(s.duration, 10);
        assert_eq!(s.amount, 100);
        assert!(!s.is_cancellable);
        assert!(matches!(
            s.initialise(Pubkey::new_unique(), 1, recipient, 0, 1, 1, true, 0, 0),
            Err(VestingError::AlreadyInitialised)
        ));
        assert_eq!(s.amount, 100);
        assert!(!s.is_cancellable);
    }

    #[test]
    fn uninitialised_schedule_refuses_everything() {
        let mut s = Schedule::default();
        let who = Pubkey::new_unique();
        assert!(matches!(s.claim(NOW), Err(VestingError::NotInitialised)));
        assert!(matches!(s.cancel(&who, &who, NOW), Err(VestingError::NotInitialised)));
        assert!(matches!(
            s.authorize_recipient_change(&who, &who, &Pubkey::new_unique()),
            Err(VestingError::NotInitialised)
        ));
        assert!(!s.is_claim_eligible());
    }

    #[test]
    fn claim_is_noop_when_nothing_vested() {
        let mut s = schedule(Pubkey::new_unique(), 100, 10, false);
        assert_eq!(s.claim(NOW - 5).unwrap(), 0);
        assert_eq!(s.claim(NOW).unwrap(), 0);
        assert_eq!(s.total_claimed_amount, 0);
    }

    #[test]
    fn claims_sum_to_amount() {
        let mut s = schedule(Pubkey::new_unique(), 1_001, 7, false);
        let mut total = 0;
        for t in 1..=7 {
            total += s.claim(NOW + t).unwrap();
            assert!(s.total_claimed_amount <= s.amount);
        }
        assert_eq!(total, 1_001);
        assert!(s.is_fully_claimed());
        assert!(!s.is_claim_eligible());
        assert!(matches!(s.claim(NOW + 100), Err(VestingError::AlreadyClaimed)));
    }

    #[test]
    fn repeated_claims_at_same_time_release_once() {
        let mut s = schedule(Pubkey::new_unique(), 100, 10, false);
        assert_eq!(s.claim(NOW + 3).unwrap(), 30);
        assert_eq!(s.claim(NOW + 3).unwrap(), 0);
        assert_eq!(s.claimable_amount(NOW + 3).unwrap(), 0);
        assert_eq!(s.claimable_amount(NOW + 5).unwrap(), 20);
    }

    #[test]
    fn cancel_after_four_of_fifty_two_weeks() {
        let treasury = Pubkey::new_unique();
        let mut s = schedule(Pubkey::new_unique(), 1_000, (52 * WEEK) as u64, true);

        let c = s.cancel(&treasury, &treasury, NOW + 4 * WEEK).unwrap();
        assert_eq!(c.to_recipient, 76);
        assert_eq!(c.to_treasury, 924);
        assert_eq!(s.total_claimed_amount, 76);
        assert!(s.cancelled);
        assert!(!s.is_claim_eligible());
    }

    #[test]
    fn cancel_pays_only_unclaimed_vested_portion() {
        let treasury = Pubkey::new_unique();
        let mut s = schedule(Pubkey::new_unique(), 100, 10, true);
        assert_eq!(s.claim(NOW + 2).unwrap(), 20);

        let c = s.cancel(&treasury, &treasury, NOW + 5).unwrap();
        assert_eq!(c, Cancellation { to_recipient: 30, to_treasury: 50 });
        assert_eq!(s.total_claimed_amount, 50);
    }

    #[test]
    fn cancel_before_start_returns_everything() {
        let treasury = Pubkey::new_unique();
        let mut s = schedule(Pubkey::new_unique(), 100, 10, true);
        let c = s.cancel(&treasury, &treasury, NOW - 1).unwrap();
        assert_eq!(c, Cancellation { to_recipient: 0, to_treasury: 100 });
    }

    #[test]
    fn cancel_requires_treasury_and_cancellable() {
        let treasury = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();

        let mut locked = schedule(recipient, 100, 10, false);
        assert!(matches!(
            locked.cancel(&treasury, &treasury, NOW + 1),
            Err(VestingError::NoAccess)
        ));

        let mut s = schedule(recipient, 100, 10, true);
        assert!(matches!(
            s.cancel(&recipient, &treasury, NOW + 1),
            Err(VestingError::NoAccess)
        ));
        assert!(!s.cancelled);

        s.cancel(&treasury, &treasury, NOW + 1).unwrap();
        assert!(matches!(
            s.cancel(&treasury, &treasury, NOW + 2),
            Err(VestingError::AlreadyCancelled)
        ));
        assert!(matches!(s.claim(NOW + 20), Err(VestingError::AlreadyCancelled)));
    }

    #[test]
    fn cancel_after_full_claim_moves_nothing() {
        let treasury = Pubkey::new_unique();
        let mut s = schedule(Pubkey::new_unique(), 100, 10, true);
        assert_eq!(s.claim(NOW + 10).unwrap(), 100);
        let c = s.cancel(&treasury, &treasury, NOW + 11).unwrap();
        assert_eq!(c, Cancellation::default());
        assert!(s.cancelled);
    }

    #[test]
    fn non_cancellable_recipient_change_rules() {
        let treasury = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();
        let next = Pubkey::new_unique();
        let s = schedule(recipient, 100, 10, false);

        assert!(matches!(
            s.authorize_recipient_change(&recipient, &treasury, &recipient),
            Err(VestingError::SameRecipient)
        ));
        assert!(matches!(
            s.authorize_recipient_change(&treasury, &treasury, &next),
            Err(VestingError::NoAccess)
        ));
        assert!(matches!(
            s.authorize_recipient_change(&recipient, &treasury, &Pubkey::default()),
            Err(VestingError::ZeroAddress)
        ));
        s.authorize_recipient_change(&recipient, &treasury, &next).unwrap();
    }

    #[test]
    fn cancellable_recipient_change_rules() {
        let treasury = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();
        let next = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let mut s = schedule(recipient, 100, 10, true);

        s.authorize_recipient_change(&recipient, &treasury, &next).unwrap();
        s.authorize_recipient_change(&treasury, &treasury, &next).unwrap();
        assert!(matches!(
            s.authorize_recipient_change(&stranger, &treasury, &next),
            Err(VestingError::NoAccess)
        ));
        assert!(matches!(
            s.authorize_recipient_change(&treasury, &treasury, &recipient),
            Err(VestingError::VestingExists)
        ));

        assert_eq!(s.set_recipient(next), recipient);
        assert_eq!(s.recipient, next);
        assert!(matches!(
            s.authorize_recipient_change(&recipient, &treasury, &stranger),
            Err(VestingError::NoAccess)
        ));
    }
}
