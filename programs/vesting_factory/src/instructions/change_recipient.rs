use anchor_lang::prelude::*;

use crate::constants::{FACTORY_SEED, RECIPIENT_SEED, SCHEDULE_SEED};
use crate::error::VestingError;
use crate::state::{Factory, RecipientVesting, Schedule};

/// Hands a schedule to `new_recipient`. The schedule first passes its own access
/// rules, then asks the factory's recipient index to move the mapping.
pub fn change_recipient(ctx: Context<ChangeRecipient>, new_recipient: Pubkey) -> Result<()> {
    let treasury = ctx.accounts.factory.treasury;
    let schedule_key = ctx.accounts.schedule.key();
    let caller = ctx.accounts.caller.key();

    let schedule = &mut ctx.accounts.schedule;
    schedule.authorize_recipient_change(&caller, &treasury, &new_recipient)?;

    RecipientVesting::reassign(
        &mut ctx.accounts.old_recipient_vesting,
        &mut ctx.accounts.new_recipient_vesting,
        &schedule_key,
        new_recipient,
        ctx.bumps.new_recipient_vesting,
    )?;

    let old_recipient = schedule.set_recipient(new_recipient);

    emit!(RecipientChanged {
        schedule: schedule_key,
        old_recipient,
        new_recipient,
        caller,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(new_recipient: Pubkey)]
pub struct ChangeRecipient<'info> {
    #[account(seeds = [FACTORY_SEED, factory.mint.as_ref()], bump = factory.bump)]
    pub factory: Box<Account<'info, Factory>>,

    #[account(
        mut,
        seeds = [SCHEDULE_SEED, factory.key().as_ref(), &schedule.index.to_le_bytes()],
        bump = schedule.bump,
        has_one = factory @ VestingError::InvalidScheduleAccount,
    )]
    pub schedule: Box<Account<'info, Schedule>>,

    #[account(
        mut,
        seeds = [RECIPIENT_SEED, factory.key().as_ref(), schedule.recipient.as_ref()],
        bump = old_recipient_vesting.bump,
    )]
    pub old_recipient_vesting: Box<Account<'info, RecipientVesting>>,

    #[account(
        init_if_needed,
        payer = caller,
        space = RecipientVesting::space(),
        seeds = [RECIPIENT_SEED, factory.key().as_ref(), new_recipient.as_ref()],
        bump
    )]
    pub new_recipient_vesting: Box<Account<'info, RecipientVesting>>,

    #[account(mut)]
    pub caller: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct RecipientChanged {
    pub schedule: Pubkey,
    pub old_recipient: Pubkey,
    pub new_recipient: Pubkey,
    pub caller: Pubkey,
}
