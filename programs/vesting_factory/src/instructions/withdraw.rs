use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::FACTORY_SEED;
use crate::error::VestingError;
use crate::state::Factory;
use crate::utils::token::transfer_from_factory;

/// Sweeps the factory's whole balance of `source.mint` to the treasury. Works for
/// any mint, including tokens sent to the factory by mistake.
pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let factory = &ctx.accounts.factory;
    factory.require_treasury(&ctx.accounts.treasury.key())?;

    require_keys_eq!(
        ctx.accounts.source.owner,
        factory.key(),
        VestingError::InvalidTokenAccount
    );
    require_keys_eq!(
        ctx.accounts.treasury_destination.mint,
        ctx.accounts.source.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.treasury_destination.owner,
        factory.treasury,
        VestingError::InvalidTokenAccount
    );

    let amount = ctx.accounts.source.amount;
    if amount > 0 {
        transfer_from_factory(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.source.to_account_info(),
            ctx.accounts.treasury_destination.to_account_info(),
            factory.to_account_info(),
            &factory.mint,
            factory.bump,
            amount,
        )?;
    }

    emit!(FactoryWithdrawn {
        factory: factory.key(),
        treasury: factory.treasury,
        token: ctx.accounts.source.mint,
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(seeds = [FACTORY_SEED, factory.mint.as_ref()], bump = factory.bump)]
    pub factory: Account<'info, Factory>,

    /// Any token account whose authority is the factory.
    #[account(mut)]
    pub source: Account<'info, TokenAccount>,

    #[account(mut)]
    pub treasury_destination: Account<'info, TokenAccount>,

    pub treasury: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct FactoryWithdrawn {
    pub factory: Pubkey,
    pub treasury: Pubkey,
    pub token: Pubkey,
    pub amount: u64,
}
