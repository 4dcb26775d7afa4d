use anchor_lang::prelude::*;

use crate::constants::{FACTORY_SEED, SCHEDULE_SEED};
use crate::error::VestingError;
use crate::state::{Factory, Schedule};

pub fn quote_claimable(ctx: Context<QuoteClaimable>) -> Result<()> {
    let schedule = &ctx.accounts.schedule;
    let now = Clock::get()?.unix_timestamp;

    let vested = schedule.vested_amount(now)?;
    let claimable = if schedule.cancelled {
        0
    } else {
        schedule.claimable_amount(now)?
    };

    emit!(ClaimableQuote {
        schedule: schedule.key(),
        recipient: schedule.recipient,
        now,
        vested_amount: vested,
        total_claimed: schedule.total_claimed_amount,
        claimable,
        cancelled: schedule.cancelled,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct QuoteClaimable<'info> {
    #[account(seeds = [FACTORY_SEED, factory.mint.as_ref()], bump = factory.bump)]
    pub factory: Account<'info, Factory>,

    #[account(
        seeds = [SCHEDULE_SEED, factory.key().as_ref(), &schedule.index.to_le_bytes()],
        bump = schedule.bump,
        has_one = factory @ VestingError::InvalidScheduleAccount,
    )]
    pub schedule: Account<'info, Schedule>,
}

#[event]
pub struct ClaimableQuote {
    pub schedule: Pubkey,
    pub recipient: Pubkey,
    pub now: i64,
    pub vested_amount: u64,
    pub total_claimed: u64,
    pub claimable: u64,
    pub cancelled: bool,
}
