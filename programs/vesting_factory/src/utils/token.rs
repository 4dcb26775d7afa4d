//! SPL token transfers signed by program PDAs.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

use crate::constants::{FACTORY_SEED, SCHEDULE_SEED};

/// Moves `amount` out of a token account whose authority is the factory PDA.
pub fn transfer_from_factory<'info>(
    token_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    factory: AccountInfo<'info>,
    mint: &Pubkey,
    factory_bump: u8,
    amount: u64,
) -> Result<()> {
    let signer_seeds: &[&[&[u8]]] = &[&[FACTORY_SEED, mint.as_ref(), &[factory_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            token_program,
            Transfer {
                from,
                to,
                authority: factory,
            },
            signer_seeds,
        ),
        amount,
    )
}

/// Moves `amount` out of a schedule vault, signed by the schedule PDA.
#[allow(clippy::too_many_arguments)]
pub fn transfer_from_schedule<'info>(
    token_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    schedule: AccountInfo<'info>,
    factory: &Pubkey,
    index: u64,
    schedule_bump: u8,
    amount: u64,
) -> Result<()> {
    let index_bytes = index.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[
        SCHEDULE_SEED,
        factory.as_ref(),
        &index_bytes,
        &[schedule_bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            token_program,
            Transfer {
                from,
                to,
                authority: schedule,
            },
            signer_seeds,
        ),
        amount,
    )
}
