use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;


pub use instructions::*;

use crate::constants::{CLAIM_ALL_ACCOUNTS_PER_ITEM, SCHEDULE_SEED, SCHEDULE_VAULT_SEED};
use crate::error::VestingError;
use crate::state::Schedule;
use crate::utils::batch;
use crate::utils::token::transfer_from_schedule;

declare_id!("2afjXBCnRecL6Fxj4gbHjoeLgggmKrBNtDW67yzoZRwG");

#[program]
pub mod vesting_factory {
    use super::*;

    pub fn initialize_factory(ctx: Context<InitializeFactory>, treasury: Pubkey) -> Result<()> {
        instructions::initialize_factory::initialize_factory(ctx, treasury)
    }

    pub fn fund_factory(ctx: Context<FundFactory>, amount: u64) -> Result<()> {
        instructions::fund_factory::fund_factory(ctx, amount)
    }

    pub fn create_vesting_from_now(
        ctx: Context<CreateVesting>,
        recipient: Pubkey,
        duration: u64,
        amount: u64,
        is_cancellable: bool,
    ) -> Result<Pubkey> {
        instructions::create_vesting::create_vesting_from_now(
            ctx,
            recipient,
            duration,
            amount,
            is_cancellable,
        )
    }

    pub fn create_vesting_starting_from(
        ctx: Context<CreateVesting>,
        recipient: Pubkey,
        start: i64,
        duration: u64,
        amount: u64,
        is_cancellable: bool,
    ) -> Result<Pubkey> {
        instructions::create_vesting::create_vesting_starting_from(
            ctx,
            recipient,
            start,
            duration,
            amount,
            is_cancellable,
        )
    }

    pub fn change_treasury(ctx: Context<ChangeTreasury>, new_treasury: Pubkey) -> Result<()> {
        instructions::change_treasury::change_treasury(ctx, new_treasury)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::withdraw(ctx)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::claim(ctx)
    }

    /// Claims for a contiguous window of schedules in creation order.
    ///
    /// Cancelled and fully claimed schedules are skipped. Malformed accounts or a
    /// failed transfer abort the whole call.
    pub fn claim_all<'info>(
        ctx: Context<'_, '_, 'info, 'info, ClaimAll<'info>>,
        first_index: u64,
    ) -> Result<()> {
        let remaining = ctx.remaining_accounts;
        let items = batch::window_items(remaining.len())?;

        let factory_key = ctx.accounts.factory.key();
        let mint = ctx.accounts.factory.mint;
        let now = Clock::get()?.unix_timestamp;

        let mut claimed_count: u8 = 0;
        let mut claimed_total: u64 = 0;

        for (offset, chunk) in remaining.chunks(CLAIM_ALL_ACCOUNTS_PER_ITEM).enumerate() {
            let schedule_ai = &chunk[0];
            let vault_ai = &chunk[1];
            let recipient_ai = &chunk[2];

            let mut schedule: Account<'info, Schedule> = Account::try_from(schedule_ai)?;
            require_keys_eq!(schedule.factory, factory_key, VestingError::InvalidScheduleAccount);
            batch::check_position(first_index, offset, schedule.index)?;
            let index_bytes = schedule.index.to_le_bytes();
            let expected_schedule = Pubkey::create_program_address(
                &[
                    SCHEDULE_SEED,
                    factory_key.as_ref(),
                    &index_bytes,
                    &[schedule.bump],
                ],
                &crate::ID,
            )
            .map_err(|_| VestingError::InvalidScheduleAccount)?;
            require_keys_eq!(
                schedule_ai.key(),
                expected_schedule,
                VestingError::InvalidScheduleAccount
            );

            if !schedule.is_claim_eligible() {
                msg!("claim_all: skipping schedule {}", schedule.index);
                continue;
            }

            let expected_vault = Pubkey::create_program_address(
                &[
                    SCHEDULE_VAULT_SEED,
                    expected_schedule.as_ref(),
                    &[schedule.vault_bump],
                ],
                &crate::ID,
            )
            .map_err(|_| VestingError::InvalidTokenAccount)?;
            require_keys_eq!(vault_ai.key(), expected_vault, VestingError::InvalidTokenAccount);

            let recipient_ta: Account<'info, TokenAccount> = Account::try_from(recipient_ai)?;
            require_keys_eq!(
                recipient_ta.owner,
                schedule.recipient,
                VestingError::InvalidTokenAccount
            );
            require_keys_eq!(recipient_ta.mint, mint, VestingError::InvalidTokenMint);

            let amount = schedule.claim(now)?;
            if amount == 0 {
                continue;
            }

            transfer_from_schedule(
                ctx.accounts.token_program.to_account_info(),
                vault_ai.clone(),
                recipient_ai.clone(),
                schedule_ai.clone(),
                &factory_key,
                schedule.index,
                schedule.bump,
                amount,
            )?;
            schedule.exit(&crate::ID)?;

            claimed_count = claimed_count
                .checked_add(1)
                .ok_or(VestingError::MathOverflow)?;
            claimed_total = claimed_total
                .checked_add(amount)
                .ok_or(VestingError::MathOverflow)?;

            emit!(VestingClaimed {
                schedule: expected_schedule,
                recipient: schedule.recipient,
                amount,
                total_claimed: schedule.total_claimed_amount,
            });
        }

        emit!(ClaimAllProcessed {
            factory: factory_key,
            first_index,
            visited: items as u8,
            claimed_count,
            claimed_total,
        });

        Ok(())
    }

    pub fn cancel_vest(ctx: Context<CancelVest>) -> Result<()> {
        instructions::cancel_vest::cancel_vest(ctx)
    }

    pub fn change_recipient(ctx: Context<ChangeRecipient>, new_recipient: Pubkey) -> Result<()> {
        instructions::change_recipient::change_recipient(ctx, new_recipient)
    }

    pub fn quote_claimable(ctx: Context<QuoteClaimable>) -> Result<()> {
        instructions::quote_claimable::quote_claimable(ctx)
    }
}
