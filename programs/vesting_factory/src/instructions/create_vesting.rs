use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{
    FACTORY_SEED, FACTORY_VAULT_SEED, RECIPIENT_SEED, SCHEDULE_SEED, SCHEDULE_VAULT_SEED,
};
use crate::error::VestingError;
use crate::state::{validate_start, Factory, RecipientVesting, Schedule};
use crate::utils::token::transfer_from_factory;

/// Creates a schedule vesting from the current time. Returns the schedule address.
pub fn create_vesting_from_now(
    ctx: Context<CreateVesting>,
    recipient: Pubkey,
    duration: u64,
    amount: u64,
    is_cancellable: bool,
) -> Result<Pubkey> {
    let now = Clock::get()?.unix_timestamp;
    create_vesting(ctx, recipient, now, duration, amount, is_cancellable)
}

/// Creates a schedule vesting from `start`, which must not be in the past.
pub fn create_vesting_starting_from(
    ctx: Context<CreateVesting>,
    recipient: Pubkey,
    start: i64,
    duration: u64,
    amount: u64,
    is_cancellable: bool,
) -> Result<Pubkey> {
    let now = Clock::get()?.unix_timestamp;
    validate_start(start, now)?;
    create_vesting(ctx, recipient, start, duration, amount, is_cancellable)
}

fn create_vesting(
    ctx: Context<CreateVesting>,
    recipient: Pubkey,
    start: i64,
    duration: u64,
    amount: u64,
    is_cancellable: bool,
) -> Result<Pubkey> {
    let factory_key = ctx.accounts.factory.key();
    let schedule_key = ctx.accounts.schedule.key();
    let factory_ai = ctx.accounts.factory.to_account_info();

    let factory = &mut ctx.accounts.factory;
    factory.validate_new_vesting(
        &ctx.accounts.treasury.key(),
        &recipient,
        amount,
        ctx.accounts.factory_vault.amount,
    )?;

    ctx.accounts.recipient_vesting.register(
        factory_key,
        recipient,
        schedule_key,
        ctx.bumps.recipient_vesting,
    )?;

    let index = factory.push_schedule()?;
    ctx.accounts.schedule.initialise(
        factory_key,
        index,
        recipient,
        start,
        duration,
        amount,
        is_cancellable,
        ctx.bumps.schedule,
        ctx.bumps.schedule_vault,
    )?;

    transfer_from_factory(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.factory_vault.to_account_info(),
        ctx.accounts.schedule_vault.to_account_info(),
        factory_ai,
        &factory.mint,
        factory.bump,
        amount,
    )?;

    emit!(VestingCreated {
        factory: factory_key,
        schedule: schedule_key,
        index,
        recipient,
        start,
        duration,
        amount,
        is_cancellable,
    });

    Ok(schedule_key)
}

#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct CreateVesting<'info> {
    #[account(mut, seeds = [FACTORY_SEED, factory.mint.as_ref()], bump = factory.bump)]
    pub factory: Box<Account<'info, Factory>>,

    #[account(
        mut,
        seeds = [FACTORY_VAULT_SEED, factory.key().as_ref()],
        bump = factory.vault_bump,
    )]
    pub factory_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = treasury,
        space = Schedule::space(),
        seeds = [SCHEDULE_SEED, factory.key().as_ref(), &factory.schedule_count.to_le_bytes()],
        bump
    )]
    pub schedule: Box<Account<'info, Schedule>>,

    #[account(
        init,
        payer = treasury,
        token::mint = mint,
        token::authority = schedule,
        seeds = [SCHEDULE_VAULT_SEED, schedule.key().as_ref()],
        bump
    )]
    pub schedule_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = treasury,
        space = RecipientVesting::space(),
        seeds = [RECIPIENT_SEED, factory.key().as_ref(), recipient.as_ref()],
        bump
    )]
    pub recipient_vesting: Box<Account<'info, RecipientVesting>>,

    #[account(address = factory.mint @ VestingError::InvalidTokenMint)]
    pub mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub treasury: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingCreated {
    pub factory: Pubkey,
    pub schedule: Pubkey,
    pub index: u64,
    pub recipient: Pubkey,
    pub start: i64,
    pub duration: u64,
    pub amount: u64,
    pub is_cancellable: bool,
}
