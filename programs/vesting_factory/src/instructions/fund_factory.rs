use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{FACTORY_SEED, FACTORY_VAULT_SEED};
use crate::error::VestingError;
use crate::state::Factory;

pub fn fund_factory(ctx: Context<FundFactory>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::ZeroAmount);

    let factory = &ctx.accounts.factory;
    require_keys_eq!(
        ctx.accounts.funder_token_account.mint,
        factory.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.funder_token_account.owner,
        ctx.accounts.funder.key(),
        VestingError::InvalidTokenAccount
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_token_account.to_account_info(),
                to: ctx.accounts.factory_vault.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.factory_vault.reload()?;

    emit!(FactoryFunded {
        funder: ctx.accounts.funder.key(),
        amount,
        vault_balance: ctx.accounts.factory_vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FundFactory<'info> {
    #[account(seeds = [FACTORY_SEED, factory.mint.as_ref()], bump = factory.bump)]
    pub factory: Account<'info, Factory>,

    #[account(
        mut,
        seeds = [FACTORY_VAULT_SEED, factory.key().as_ref()],
        bump = factory.vault_bump,
    )]
    pub factory_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub funder_token_account: Account<'info, TokenAccount>,

    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct FactoryFunded {
    pub funder: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
