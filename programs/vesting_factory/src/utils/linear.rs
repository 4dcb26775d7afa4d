//! Linear release math.
//! - vested(now) = 0 before `start`
//! - vested(now) = floor(amount * elapsed / duration) while elapsed < duration
//! - vested(now) = amount once elapsed >= duration (the last claim absorbs the dust)

use crate::error::VestingError;

/// Seconds elapsed since `start`, zero before it.
pub fn elapsed_seconds(start: i64, now: i64) -> Result<u64, VestingError> {
    if now <= start {
        return Ok(0);
    }
    let diff = now.checked_sub(start).ok_or(VestingError::MathOverflow)?;
    u64::try_from(diff).map_err(|_| VestingError::MathOverflow)
}

/// Total amount released by the schedule at `now`, claimed or not.
pub fn vested_amount(amount: u64, start: i64, duration: u64, now: i64) -> Result<u64, VestingError> {
    if now < start {
        return Ok(0);
    }
    let elapsed = elapsed_seconds(start, now)?;
    if elapsed >= duration {
        return Ok(amount);
    }
    let v = (amount as u128)
        .checked_mul(elapsed as u128)
        .ok_or(VestingError::MathOverflow)?
        .checked_div(duration as u128)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}

/// Vested but not yet claimed amount at `now`.
pub fn claimable_amount(
    amount: u64,
    claimed: u64,
    start: i64,
    duration: u64,
    now: i64,
) -> Result<u64, VestingError> {
    let vested = vested_amount(amount, start, duration, now)?;
    Ok(vested.saturating_sub(claimed))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEK: i64 = 7 * 86_400;

    #[test]
    fn nothing_vests_before_or_at_start() {
        let start = 1_800_000_000;
        assert_eq!(vested_amount(1_000, start, 100, start - 1).unwrap(), 0);
        assert_eq!(vested_amount(1_000, start, 100, start).unwrap(), 0);
        assert_eq!(elapsed_seconds(start, start - 50).unwrap(), 0);
    }

    #[test]
    fn linear_release_floors() {
        let start = 1_000;
        // 1000 * 4 / 52 = 76.9..
        assert_eq!(
            vested_amount(1_000, start, (52 * WEEK) as u64, start + 4 * WEEK).unwrap(),
            76
        );
        assert_eq!(vested_amount(10, start, 3, start + 1).unwrap(), 3);
        assert_eq!(vested_amount(10, start, 3, start + 2).unwrap(), 6);
    }

    #[test]
    fn full_amount_at_and_after_end() {
        let start = 1_000;
        assert_eq!(vested_amount(10, start, 3, start + 3).unwrap(), 10);
        assert_eq!(vested_amount(10, start, 3, i64::MAX).unwrap(), 10);
    }

    #[test]
    fn zero_duration_unlocks_at_start() {
        assert_eq!(vested_amount(500, 100, 0, 99).unwrap(), 0);
        assert_eq!(vested_amount(500, 100, 0, 100).unwrap(), 500);
    }

    #[test]
    fn monotonic_and_capped() {
        let start = 50;
        let duration = 997;
        let mut last = 0;
        for now in (start - 10)..(start + duration as i64 + 10) {
            let v = vested_amount(123_456_789, start, duration, now).unwrap();
            assert!(v >= last);
            assert!(v <= 123_456_789);
            last = v;
        }
        assert_eq!(last, 123_456_789);
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        let v = vested_amount(u64::MAX, 0, u64::MAX, i64::MAX).unwrap();
        assert!(v < u64::MAX);
        assert_eq!(vested_amount(u64::MAX, 0, 2, 1).unwrap(), u64::MAX / 2);
    }

    #[test]
    fn claimable_subtracts_claimed() {
        assert_eq!(claimable_amount(10, 3, 0, 3, 2).unwrap(), 3);
        assert_eq!(claimable_amount(10, 6, 0, 3, 2).unwrap(), 0);
        assert_eq!(claimable_amount(10, 6, 0, 3, 3).unwrap(), 4);
    }
}
