use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{FACTORY_SEED, FACTORY_VAULT_SEED};
use crate::state::Factory;

pub fn initialize_factory(ctx: Context<InitializeFactory>, treasury: Pubkey) -> Result<()> {
    let mint = ctx.accounts.mint.key();
    let bump = ctx.bumps.factory;
    let vault_bump = ctx.bumps.factory_vault;

    let factory = &mut ctx.accounts.factory;
    factory.initialise(treasury, mint, bump, vault_bump)?;

    emit!(FactoryInitialized {
        factory: factory.key(),
        mint,
        treasury,
        vault: ctx.accounts.factory_vault.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    #[account(
        init,
        payer = payer,
        space = Factory::space(),
        seeds = [FACTORY_SEED, mint.key().as_ref()],
        bump
    )]
    pub factory: Account<'info, Factory>,

    #[account(
        init,
        payer = payer,
        token::mint = mint,
        token::authority = factory,
        seeds = [FACTORY_VAULT_SEED, factory.key().as_ref()],
        bump
    )]
    pub factory_vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct FactoryInitialized {
    pub factory: Pubkey,
    pub mint: Pubkey,
    pub treasury: Pubkey,
    pub vault: Pubkey,
}
