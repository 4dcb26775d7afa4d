use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{FACTORY_SEED, SCHEDULE_SEED, SCHEDULE_VAULT_SEED};
use crate::error::VestingError;
use crate::state::{Factory, Schedule};
use crate::utils::token::transfer_from_schedule;

pub fn cancel_vest(ctx: Context<CancelVest>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let schedule_ai = ctx.accounts.schedule.to_account_info();
    let schedule_key = ctx.accounts.schedule.key();
    let treasury = ctx.accounts.factory.treasury;
    let mint = ctx.accounts.factory.mint;

    let schedule = &mut ctx.accounts.schedule;
    let settled = schedule.cancel(&ctx.accounts.treasury.key(), &treasury, now)?;

    // Token accounts are only checked for the legs that actually move tokens.
    if settled.to_recipient > 0 {
        require_keys_eq!(
            ctx.accounts.recipient_token_account.owner,
            schedule.recipient,
            VestingError::InvalidTokenAccount
        );
        require_keys_eq!(
            ctx.accounts.recipient_token_account.mint,
            mint,
            VestingError::InvalidTokenMint
        );
        transfer_from_schedule(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.schedule_vault.to_account_info(),
            ctx.accounts.recipient_token_account.to_account_info(),
            schedule_ai.clone(),
            &schedule.factory,
            schedule.index,
            schedule.bump,
            settled.to_recipient,
        )?;
    }
    if settled.to_treasury > 0 {
        require_keys_eq!(
            ctx.accounts.treasury_token_account.owner,
            treasury,
            VestingError::InvalidTokenAccount
        );
        require_keys_eq!(
            ctx.accounts.treasury_token_account.mint,
            mint,
            VestingError::InvalidTokenMint
        );
        transfer_from_schedule(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.schedule_vault.to_account_info(),
            ctx.accounts.treasury_token_account.to_account_info(),
            schedule_ai,
            &schedule.factory,
            schedule.index,
            schedule.bump,
            settled.to_treasury,
        )?;
    }

    emit!(VestingCancelled {
        schedule: schedule_key,
        recipient: schedule.recipient,
        released_to_recipient: settled.to_recipient,
        returned_to_treasury: settled.to_treasury,
        total_claimed: schedule.total_claimed_amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct CancelVest<'info> {
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

    #[account(mut)]
    pub treasury_token_account: Account<'info, TokenAccount>,

    pub treasury: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingCancelled {
    pub schedule: Pubkey,
    pub recipient: Pubkey,
    pub released_to_recipient: u64,
    pub returned_to_treasury: u64,
    pub total_claimed: u64,
}
