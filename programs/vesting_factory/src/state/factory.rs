use anchor_lang::prelude::*;
use core::result::Result;

use crate::error::VestingError;

/// Factory state PDA: one per mint.
#[account]
#[derive(Default, Debug)]
pub struct Factory {
    /// Privileged address; may create, cancel and withdraw.
    pub treasury: Pubkey,
    /// Token mint every schedule of this factory vests.
    pub mint: Pubkey,
    /// Number of schedules ever created; schedule `i` lives at the PDA for index `i`.
    pub schedule_count: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl Factory {
    pub const SIZE: usize =
        32 + // treasury
        32 + // mint
        8 +  // schedule_count
        1 +  // bump
        1;   // vault_bump

    pub fn space() -> usize {
        8 + Self::SIZE
    }

    pub fn initialise(
        &mut self,
        treasury: Pubkey,
        mint: Pubkey,
        bump: u8,
        vault_bump: u8,
    ) -> Result<(), VestingError> {
        if treasury == Pubkey::default() {
            return Err(VestingError::ZeroAddress);
        }
        self.treasury = treasury;
        self.mint = mint;
        self.schedule_count = 0;
        self.bump = bump;
        self.vault_bump = vault_bump;
        Ok(())
    }

    pub fn require_treasury(&self, caller: &Pubkey) -> Result<(), VestingError> {
        if *caller != self.treasury {
            return Err(VestingError::NoAccess);
        }
        Ok(())
    }

    /// Returns the previous treasury.
    pub fn change_treasury(
        &mut self,
        caller: &Pubkey,
        new_treasury: Pubkey,
    ) -> Result<Pubkey, VestingError> {
        self.require_treasury(caller)?;
        if new_treasury == Pubkey::default() {
            return Err(VestingError::ZeroAddress);
        }
        let old = self.treasury;
        self.treasury = new_treasury;
        Ok(old)
    }

    /// Validation shared by both creation paths. The recipient uniqueness
    /// check belongs to the recipient index.
    pub fn validate_new_vesting(
        &self,
        caller: &Pubkey,
        recipient: &Pubkey,
        amount: u64,
        available: u64,
    ) -> Result<(), VestingError> {
        self.require_treasury(caller)?;
        if *recipient == Pubkey::default() {
            return Err(VestingError::ZeroAddress);
        }
        if amount == 0 {
            return Err(VestingError::ZeroAmount);
        }
        if amount > available {
            return Err(VestingError::AmountExceedsBalance);
        }
        Ok(())
    }

    /// Appends a schedule to the creation index and returns its index.
    pub fn push_schedule(&mut self) -> Result<u64, VestingError> {
        let index = self.schedule_count;
        self.schedule_count = index.checked_add(1).ok_or(VestingError::MathOverflow)?;
        Ok(index)
    }
}

pub fn validate_start(start: i64, now: i64) -> Result<(), VestingError> {
    if start < now {
        return Err(VestingError::StartBeforeNow);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory(treasury: Pubkey) -> Factory {
        let mut f = Factory::default();
        f.initialise(treasury, Pubkey::new_unique(), 255, 254).unwrap();
        f
    }

    #[test]
    fn zero_treasury_rejected_at_init() {
        let mut f = Factory::default();
        assert!(matches!(
            f.initialise(Pubkey::default(), Pubkey::new_unique(), 1, 1),
            Err(VestingError::ZeroAddress)
        ));
    }

    #[test]
    fn change_treasury_is_treasury_only() {
        let treasury = Pubkey::new_unique();
        let next = Pubkey::new_unique();
        let mut f = factory(treasury);

        assert!(matches!(
            f.change_treasury(&next, next),
            Err(VestingError::NoAccess)
        ));
        assert!(matches!(
            f.change_treasury(&treasury, Pubkey::default()),
            Err(VestingError::ZeroAddress)
        ));
        assert_eq!(f.treasury, treasury);

        assert_eq!(f.change_treasury(&treasury, next).unwrap(), treasury);
        assert_eq!(f.treasury, next);
        assert!(matches!(
            f.change_treasury(&treasury, treasury),
            Err(VestingError::NoAccess)
        ));
    }

    #[test]
    fn new_vesting_validation_order() {
        let treasury = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();
        let f = factory(treasury);

        assert!(matches!(
            f.validate_new_vesting(&recipient, &recipient, 10, 10),
            Err(VestingError::NoAccess)
        ));
        assert!(matches!(
            f.validate_new_vesting(&treasury, &Pubkey::default(), 10, 10),
            Err(VestingError::ZeroAddress)
        ));
        assert!(matches!(
            f.validate_new_vesting(&treasury, &recipient, 0, 10),
            Err(VestingError::ZeroAmount)
        ));
        assert!(matches!(
            f.validate_new_vesting(&treasury, &recipient, 11, 10),
            Err(VestingError::AmountExceedsBalance)
        ));
        f.validate_new_vesting(&treasury, &recipient, 10, 10).unwrap();
    }

    #[test]
    fn start_must_not_be_in_the_past() {
        assert!(matches!(validate_start(99, 100), Err(VestingError::StartBeforeNow)));
        validate_start(100, 100).unwrap();
        validate_start(101, 100).unwrap();
    }

    #[test]
    fn creation_index_is_append_only() {
        let mut f = factory(Pubkey::new_unique());
        assert_eq!(f.push_schedule().unwrap(), 0);
        assert_eq!(f.push_schedule().unwrap(), 1);
        assert_eq!(f.schedule_count, 2);

        f.schedule_count = u64::MAX;
        assert!(matches!(f.push_schedule(), Err(VestingError::MathOverflow)));
        assert_eq!(f.schedule_count, u64::MAX);
    }
}
