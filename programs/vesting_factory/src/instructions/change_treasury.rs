use anchor_lang::prelude::*;

use crate::constants::FACTORY_SEED;
use crate::state::Factory;

pub fn change_treasury(ctx: Context<ChangeTreasury>, new_treasury: Pubkey) -> Result<()> {
    let factory = &mut ctx.accounts.factory;
    let old_treasury = factory.change_treasury(&ctx.accounts.treasury.key(), new_treasury)?;

    emit!(TreasuryChanged {
        factory: factory.key(),
        old_treasury,
        new_treasury,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ChangeTreasury<'info> {
    #[account(mut, seeds = [FACTORY_SEED, factory.mint.as_ref()], bump = factory.bump)]
    pub factory: Account<'info, Factory>,

    pub treasury: Signer<'info>,
}

#[event]
pub struct TreasuryChanged {
    pub factory: Pubkey,
    pub old_treasury: Pubkey,
    pub new_treasury: Pubkey,
}
