use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{FACTORY_SEED, SCHEDULE_SEED, SCHEDULE_VAULT_SEED};
use crate::error::VestingError;
use crate::state::{Factory, Schedule};
use crate::utils::token::transfer_from_schedule;

/// Releases whatever has vested since the last claim to the recipient. Anyone
/// may trigger it; tokens only ever go to the recipient's token account.
pub fn claim(ctx: Context<Claim>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let schedule_ai = ctx.accounts.schedule.to_account_info();
    let schedule_key = ctx.accounts.schedule.key();

    let schedule = &mut ctx.accounts.schedule;
    require_keys_eq!(
        ctx.accounts.recipient_token_account.owner,
        schedule.recipient,
        VestingError::InvalidTokenAccount
    );
    require_keys_eq!(
        ctx.accounts.recipient_token_account.mint,
        ctx.accounts.factory.mint,
        VestingError::InvalidTokenMint
    );

    let amount = schedule.claim(now)?;
    if amount == 0 {
        return Ok(());
    }

    transfer_from_schedule(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.schedule_vault.to_account_info(),
        ctx.accounts.recipient_token_account.to_account_info(),
        schedule_ai,
        &schedule.factory,
        schedule.index,
        schedule.bump,
        amount,
    )?;

    emit!(VestingClaimed {
        schedule: schedule_key,
        recipient: schedule.recipient,
        amount,
        total_claimed: schedule.total_claimed_amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(seeds = [FACTORY_SEED, factory.mint.as_ref()], bump = factory.bump)]
    pub factory: Account<'info, Factory>,

    #[account(
        mut,
        seeds = [SCHEDULE_SEED, factory.key().as_ref(), &schedule.index.to_le_bytes()],
        bump = schedule.bump,
        has_one = factory @ VestingError::InvalidScheduleAccount,
    )]
    pub schedule: Account<'info, Schedule>,

    #[account(
        mut,
        seeds = [SCHEDULE_VAULT_SEED, schedule.key().as_ref()],
        bump = schedule.vault_bump,
    )]
    pub schedule_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingClaimed {
    pub schedule: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub total_claimed: u64,
}
